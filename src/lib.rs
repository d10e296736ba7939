//! Batch scientific review of papers with two language models.
//!
//! Each `.txt`/`.pdf` paper in a directory is sent to Gemini and ChatGPT
//! with the same reviewer prompt; the replies are parsed into a verdict and
//! a reason and collected into a spreadsheet report.

pub mod config;
pub mod error;
pub mod llm;
pub mod printer;
pub mod prompt;
pub mod report;
pub mod review;
pub mod utils;
pub mod verdict;

pub use error::{Result, ReviewError};
pub use review::{ResultRecord, Reviewer};
pub use verdict::{parse_reply, ParsedReply, Verdict};
