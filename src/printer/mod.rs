//! Printers: coloured status lines and the markdown summary (termimad).

use std::collections::BTreeMap;

use owo_colors::OwoColorize;
use termimad::MadSkin;

use crate::review::ResultRecord;
use crate::verdict::Verdict;

pub struct TextPrinter {
    pub color: Option<&'static str>,
}

impl TextPrinter {
    pub fn print(&self, text: &str) {
        match self.color {
            Some("green") => println!("{}", text.green()),
            _ => println!("{}", text),
        }
    }
}

pub struct MarkdownPrinter {
    pub skin: MadSkin,
}

impl Default for MarkdownPrinter {
    fn default() -> Self {
        Self { skin: MadSkin::default() }
    }
}

impl MarkdownPrinter {
    pub fn print(&self, text: &str) {
        self.skin.print_text(text);
        println!();
    }
}

/// Markdown table of the records followed by verdict counts per model.
pub fn summary_markdown(records: &[ResultRecord]) -> String {
    let mut md = String::from("|paper|LLM|Verdetto|Motivo|\n|:-|:-|:-:|:-|\n");
    for r in records {
        md.push_str(&format!(
            "|{}|{}|{}|{}|\n",
            cell(&r.paper),
            cell(&r.llm),
            r.verdict,
            cell(&r.reason)
        ));
    }

    // label -> (accepted, rejected, unknown), in first-seen order
    let mut order: Vec<&str> = Vec::new();
    let mut counts: BTreeMap<&str, [usize; 3]> = BTreeMap::new();
    for r in records {
        if !counts.contains_key(r.llm.as_str()) {
            order.push(&r.llm);
        }
        let slot = counts.entry(&r.llm).or_default();
        match r.verdict {
            Verdict::Accepted => slot[0] += 1,
            Verdict::Rejected => slot[1] += 1,
            Verdict::Unknown => slot[2] += 1,
        }
    }
    if !order.is_empty() {
        md.push('\n');
    }
    for label in order {
        let [a, rj, u] = counts[label];
        md.push_str(&format!("* **{label}**: {a} ACCEPTED, {rj} REJECTED, {u} UNKNOWN\n"));
    }
    md
}

fn cell(text: &str) -> String {
    text.replace('|', "/").replace('\n', " ")
}
