//! Turns a model's free-text answer into a verdict and a reason.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Accepted,
    Rejected,
    Unknown,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Accepted => "ACCEPTED",
            Verdict::Rejected => "REJECTED",
            Verdict::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub verdict: Verdict,
    pub reason: String,
}

/// Scan `raw` line by line; the last matching line wins for each field.
///
/// Per line only the first matching branch fires: `ACCEPTED`, then
/// `REJECTED` (both case-insensitive substrings), then a `motivo` prefix.
/// When no `motivo` line was seen at all, the reason is every line after
/// the first joined with spaces.
pub fn parse_reply(raw: &str) -> ParsedReply {
    let lines: Vec<&str> = raw.lines().collect();

    let (verdict, reason) = lines.iter().fold(
        (Verdict::Unknown, None::<String>),
        |(verdict, reason), line| {
            let upper = line.to_uppercase();
            if upper.contains("ACCEPTED") {
                (Verdict::Accepted, reason)
            } else if upper.contains("REJECTED") {
                (Verdict::Rejected, reason)
            } else if line.trim().to_lowercase().starts_with("motivo") {
                let after = line.split_once(':').map_or(*line, |(_, rest)| rest);
                (verdict, Some(after.trim().to_string()))
            } else {
                (verdict, reason)
            }
        },
    );

    let reason = reason.unwrap_or_else(|| {
        let rest = lines.get(1..).unwrap_or_default();
        rest.join(" ").trim().to_string()
    });

    ParsedReply { verdict, reason }
}
