//! Paper discovery and text extraction.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ReviewError};

/// How a paper's text is obtained, inferred from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
}

impl DocumentKind {
    /// Recognizes `.txt` and `.pdf` (any case); everything else is `None`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "txt" => Some(Self::PlainText),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }
}

/// A paper found in the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name, used as the `paper` column of the report.
    pub name: String,
    pub path: PathBuf,
    pub kind: DocumentKind,
}

impl Document {
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = DocumentKind::from_path(&path)?;
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { name, path, kind })
    }

    /// Read the paper's text: verbatim for plain text, page by page for PDFs.
    pub fn extract_text(&self) -> Result<String> {
        match self.kind {
            DocumentKind::PlainText => {
                fs::read_to_string(&self.path).map_err(|e| ReviewError::io(&self.path, e))
            }
            DocumentKind::Pdf => super::pdf::extract_pdf_text(&self.path),
        }
    }
}

/// List the recognized papers in `dir`, sorted by file name.
///
/// Subdirectories and files with other extensions are skipped silently.
pub fn list_documents(dir: &Path) -> Result<Vec<Document>> {
    let mut documents = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| ReviewError::io(dir, e))? {
        let entry = entry.map_err(|e| ReviewError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(doc) = Document::from_path(path) {
            documents.push(doc);
        }
    }
    documents.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(documents)
}
