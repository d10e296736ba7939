//! Report writer: one row per (paper, model) record.
//!
//! The format follows the output extension: `.csv` writes CSV, anything else
//! an XLSX workbook with a single `Sheet1`.

use std::io;
use std::path::Path;

use rust_xlsxwriter::{Format, FormatBorder, Workbook, XlsxError};
use tracing::{info, warn};

use crate::error::{Result, ReviewError};
use crate::review::ResultRecord;

pub const COLUMNS: [&str; 4] = ["paper", "LLM", "Verdetto", "Motivo"];

/// Excel's per-cell limit, in characters.
const MAX_CELL_CHARS: usize = 32_767;

/// Write `records` to `path`, replacing any existing file.
pub fn write_report(records: &[ResultRecord], path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        write_csv(records, path)?;
    } else {
        write_xlsx(records, path)?;
    }
    info!(path = %path.display(), rows = records.len(), "report written");
    Ok(())
}

fn row(record: &ResultRecord) -> [&str; 4] {
    [
        record.paper.as_str(),
        record.llm.as_str(),
        record.verdict.as_str(),
        record.reason.as_str(),
    ]
}

/// `value` cut to what an XLSX cell can hold.
fn cell_text(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((end, _)) => {
            warn!(chars = value.chars().count(), "cell truncated to {MAX_CELL_CHARS} characters");
            &value[..end]
        }
        None => value,
    }
}

fn write_csv(records: &[ResultRecord], path: &Path) -> Result<()> {
    let to_err = |e: csv::Error| ReviewError::io(path, io::Error::from(e));

    let mut wtr = csv::Writer::from_path(path).map_err(to_err)?;
    wtr.write_record(COLUMNS).map_err(to_err)?;
    for record in records {
        wtr.write_record(row(record)).map_err(to_err)?;
    }
    wtr.flush().map_err(|e| ReviewError::io(path, e))
}

fn write_xlsx(records: &[ResultRecord], path: &Path) -> Result<()> {
    let to_err = |e: XlsxError| ReviewError::io(path, io::Error::other(e.to_string()));

    let mut workbook = Workbook::new();
    let header = Format::new().set_bold().set_border(FormatBorder::Thin);
    let sheet = workbook.add_worksheet();

    for (col, name) in COLUMNS.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *name, &header)
            .map_err(to_err)?;
    }
    for (i, record) in records.iter().enumerate() {
        let line = i as u32 + 1;
        for (col, value) in row(record).into_iter().enumerate() {
            sheet
                .write_string(line, col as u16, cell_text(value))
                .map_err(to_err)?;
        }
    }

    workbook.save(path).map_err(to_err)
}
