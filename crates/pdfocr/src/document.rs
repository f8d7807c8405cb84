use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ExtractError, PageError};

/// An opened document exposing the two per-page views the extraction
/// pipeline needs: embedded text and a raster image.
///
/// Page numbers are 1-based throughout, matching lopdf's numbering and the
/// page labels users see in the output.
pub trait DocumentHandle {
    fn page_count(&self) -> usize;

    /// Embedded text for one page. A failure here is treated as handle
    /// corruption and aborts the whole run.
    fn embedded_text(&self, page: u32) -> Result<String, ExtractError>;

    /// PNG-encoded raster of one page. Failures are recoverable; the caller
    /// skips the page and continues.
    fn rasterize(&self, page: u32, dpi: u32) -> Result<Vec<u8>, PageError>;
}

/// A PDF opened with lopdf. Text comes straight from the content streams;
/// rasterization shells out to pdftoppm (poppler-utils).
pub struct PdfDocument {
    path: PathBuf,
    doc: lopdf::Document,
    page_count: usize,
}

impl PdfDocument {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ExtractError> {
        let path = path.as_ref();

        let pdf_bytes = std::fs::read(path).map_err(|e| ExtractError::ReadDocument {
            path: path.to_path_buf(),
            source: e,
        })?;

        let doc =
            lopdf::Document::load_mem(&pdf_bytes).map_err(|e| ExtractError::OpenDocument {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let page_count = doc.get_pages().len();

        Ok(Self {
            path: path.to_path_buf(),
            doc,
            page_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentHandle for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn embedded_text(&self, page: u32) -> Result<String, ExtractError> {
        self.doc
            .extract_text(&[page])
            .map_err(|e| ExtractError::PageText {
                page,
                message: e.to_string(),
            })
    }

    fn rasterize(&self, page: u32, dpi: u32) -> Result<Vec<u8>, PageError> {
        render_page_with_pdftoppm(&self.path, page, dpi)
    }
}

/// Render a single page to PNG bytes with pdftoppm. The rendered file lands
/// in a scratch directory that is removed when this function returns.
fn render_page_with_pdftoppm(pdf_path: &Path, page: u32, dpi: u32) -> Result<Vec<u8>, PageError> {
    let scratch = tempfile::tempdir()
        .map_err(|e| PageError::Rasterize(format!("failed to create scratch directory: {}", e)))?;
    let prefix = scratch.path().join("page");

    let output = Command::new("pdftoppm")
        .args([
            "-png",
            "-r",
            &dpi.to_string(),
            "-f",
            &page.to_string(),
            "-l",
            &page.to_string(),
        ])
        .arg(pdf_path)
        .arg(&prefix)
        .output()
        .map_err(|e| {
            PageError::Rasterize(format!(
                "failed to run pdftoppm: {}. Make sure poppler-utils is installed.",
                e
            ))
        })?;

    if !output.status.success() {
        return Err(PageError::Rasterize(format!(
            "pdftoppm failed: {}",
            String::from_utf8_lossy(&output.stderr)
        )));
    }

    // pdftoppm zero-pads the page suffix depending on the document's total
    // page count, so probe the naming variants.
    let candidates = [
        format!("page-{}.png", page),
        format!("page-{:02}.png", page),
        format!("page-{:03}.png", page),
    ];
    let image_path = candidates
        .iter()
        .map(|name| scratch.path().join(name))
        .find(|p| p.exists())
        .ok_or_else(|| PageError::Rasterize("rendered page image not found".to_string()))?;

    std::fs::read(&image_path)
        .map_err(|e| PageError::Rasterize(format!("failed to read rendered image: {}", e)))
}
