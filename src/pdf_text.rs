//! PDF text extraction module

use std::fs;
use std::io;
use std::path::Path;

use crate::error::AppResult;

/// Extract the full text transcript from a PDF file.
///
/// The text layer is read one page at a time, in page order; pages are
/// joined with a newline as the page break. Scanned (image-only) PDFs
/// yield an empty or near-empty transcript — there is no OCR here.
pub fn extract_transcript(file_path: &Path) -> AppResult<String> {
    if !file_path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", file_path.display()),
        )
        .into());
    }

    let bytes = fs::read(file_path)?;
    let pages = pdf_extract::extract_text_from_mem_by_pages(&bytes)?;
    Ok(pages.join("\n"))
}

/// Get basic info about a PDF file
pub fn pdf_info(file_path: &Path) -> AppResult<PdfInfo> {
    let metadata = fs::metadata(file_path)?;

    let file_name = file_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(PdfInfo {
        file_name,
        size_bytes: metadata.len(),
    })
}

#[derive(Debug)]
pub struct PdfInfo {
    pub file_name: String,
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = extract_transcript(Path::new("/nonexistent/arquivo.pdf"));
        assert!(err.is_err());
    }

    #[test]
    fn pdf_info_reports_name_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orcamento.pdf");
        fs::write(&path, b"%PDF-1.4 stub").unwrap();

        let info = pdf_info(&path).unwrap();
        assert_eq!(info.file_name, "orcamento.pdf");
        assert_eq!(info.size_bytes, 13);
    }
}
