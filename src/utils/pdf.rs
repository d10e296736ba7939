//! PDF text extraction.
//!
//! Pages are extracted one by one with `lopdf` and joined with a single
//! newline. A page that yields no text contributes an empty string instead
//! of failing the whole document.

use std::fs;
use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::error::{Result, ReviewError};

/// Extract text content from a PDF file.
///
/// # Errors
///
/// * [`ReviewError::Io`] when the file cannot be read
/// * [`ReviewError::Format`] when the bytes are not a loadable PDF
pub fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| ReviewError::io(path, e))?;
    let doc = Document::load_mem(&bytes).map_err(|e| ReviewError::format(path, e.to_string()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .keys()
        .map(|&page| {
            let mut text = doc.extract_text(&[page]).unwrap_or_else(|e| {
                debug!(page, error = %e, "no extractable text on page");
                String::new()
            });
            // lopdf closes every text object with a newline
            if text.ends_with('\n') {
                text.pop();
            }
            text
        })
        .collect();

    Ok(pages.join("\n"))
}
