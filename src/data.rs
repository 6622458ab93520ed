//! Rate sheet documents: text extraction, retrieval and storage

pub mod pdf;
pub mod sources;

use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub use pdf::{parse_pdf_content, parse_with, PdfTextExtractor, TextExtractor};

/// Write raw rate sheet bytes to `path`, replacing any existing file
///
/// Returns the number of bytes written.
pub fn save_rate_sheet(path: impl AsRef<Path>, content: &[u8]) -> Result<u64> {
    let mut file = File::create(path.as_ref())?;
    file.write_all(content)?;
    file.flush()?;
    Ok(content.len() as u64)
}
