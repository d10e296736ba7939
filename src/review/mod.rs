//! Review loop: every paper goes through every model, in order.

use std::fmt;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::error::{Result, ReviewError};
use crate::llm::ModelClient;
use crate::prompt::build_prompt;
use crate::utils::{list_documents, Document, DocumentKind};
use crate::verdict::{parse_reply, Verdict};

/// One report row: a single (paper, model) verdict.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRecord {
    pub paper: String,
    pub llm: String,
    pub verdict: Verdict,
    pub reason: String,
}

pub struct Reviewer {
    clients: Vec<Box<dyn ModelClient>>,
    keep_going: bool,
}

impl Reviewer {
    pub fn new(clients: Vec<Box<dyn ModelClient>>) -> Self {
        Self { clients, keep_going: false }
    }

    /// Skip a failing paper instead of aborting the run.
    pub fn keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Review every recognized paper in `dir`, writing progress lines to `out`.
    ///
    /// Records come back paper by paper, one per client in client order.
    /// The first error aborts the run unless `keep_going` is set.
    pub async fn run(&self, dir: &Path, out: &mut dyn Write) -> Result<Vec<ResultRecord>> {
        let documents = list_documents(dir)?;
        info!(dir = %dir.display(), papers = documents.len(), "starting review");

        let mut records = Vec::with_capacity(documents.len() * self.clients.len());
        for doc in &documents {
            match self.review_document(doc, out).await {
                Ok(rows) => records.extend(rows),
                Err(e) if self.keep_going => {
                    warn!(paper = %doc.name, error = %e, "skipping paper");
                    progress(out, format_args!("Errore su {}: {}", doc.name, e))?;
                }
                Err(e) => return Err(e),
            }
        }
        Ok(records)
    }

    async fn review_document(&self, doc: &Document, out: &mut dyn Write) -> Result<Vec<ResultRecord>> {
        if doc.kind == DocumentKind::Pdf {
            progress(out, format_args!("Estraggo testo da PDF: {}...", doc.name))?;
        }
        let text = doc.extract_text()?;

        let mut rows = Vec::with_capacity(self.clients.len());
        for client in &self.clients {
            progress(out, format_args!("Analizzo {} con {}...", doc.name, client.label()))?;
            let reply = client.analyze(&build_prompt(&text)).await?;
            let parsed = parse_reply(&reply);
            rows.push(ResultRecord {
                paper: doc.name.clone(),
                llm: client.label().to_string(),
                verdict: parsed.verdict,
                reason: parsed.reason,
            });
        }
        Ok(rows)
    }
}

/// A console that cannot take progress lines stops the run.
fn progress(out: &mut dyn Write, line: fmt::Arguments<'_>) -> Result<()> {
    writeln!(out, "{line}").map_err(|e| ReviewError::io("<progress output>", e))
}
