//! Utilities (paper discovery, text extraction).

pub mod document;
pub mod pdf;

pub use document::{list_documents, Document, DocumentKind};
