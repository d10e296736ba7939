//! Reviewer prompt shared by every model.

/// Fixed instructions placed before the paper text.
pub const REVIEWER_TEMPLATE: &str = "
Sei un revisore scientifico.
Analizza il seguente testo e valuta se è accettabile dal punto di vista logico, concettuale e scientifico, ignorando completamente gli errori tipografici (spazi mancanti, accenti, simboli troncati, note †/‡/§ disallineate, ecc.).
Concentrati esclusivamente su eventuali inconsistenze logiche, errori metodologici, affermazioni non supportate, imprecisioni scientifiche o contraddizioni interne.

Rispondi esclusivamente nel seguente formato:

VERDETTO: ACCEPTED oppure REJECTED
MOTIVO: breve spiegazione (massimo 2 righe) centrata sugli aspetti logici/scientifici del testo analizzato.

Testo:
";

/// Reviewer prompt with `text` appended verbatim after the `Testo:` marker.
pub fn build_prompt(text: &str) -> String {
    format!("{REVIEWER_TEMPLATE}{text}\n")
}
