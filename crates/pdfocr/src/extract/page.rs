use std::io::Write;

use crate::config::ExtractionConfig;
use crate::document::DocumentHandle;
use crate::error::{ExtractError, PageError};
use crate::ocr::RecognitionEngine;

use super::classifier::{classify, Verdict};

/// Outcome of processing one page.
#[derive(Debug)]
pub enum PageResult {
    /// Embedded text was substantial and is used directly.
    DirectText(String),
    /// Embedded text was sparse; the text was recovered by OCR.
    OcrText(String),
    /// Rasterization or recognition failed; the page is skipped.
    Failed(PageError),
}

/// Extracts one page's text. Exactly one of the direct or OCR paths runs,
/// decided once from the embedded text; there is no retry.
///
/// Embedded-text retrieval failure aborts the whole run (the document handle
/// is presumed unusable). Rasterization and recognition failures are
/// per-page and come back as [`PageResult::Failed`].
pub fn extract_page(
    doc: &dyn DocumentHandle,
    engine: &dyn RecognitionEngine,
    page: u32,
    config: &ExtractionConfig,
) -> Result<PageResult, ExtractError> {
    let text = doc.embedded_text(page)?;
    let trimmed = text.trim();

    match classify(trimmed, config.min_text_chars) {
        Verdict::UseDirectText => Ok(PageResult::DirectText(trimmed.to_string())),
        Verdict::NeedsOcr => Ok(ocr_page(doc, engine, page, config)),
    }
}

fn ocr_page(
    doc: &dyn DocumentHandle,
    engine: &dyn RecognitionEngine,
    page: u32,
    config: &ExtractionConfig,
) -> PageResult {
    let _span = tracing::info_span!("extract.ocr", page = page).entered();

    let png = match doc.rasterize(page, config.dpi) {
        Ok(bytes) => bytes,
        Err(e) => return PageResult::Failed(e),
    };

    // The scratch file lives exactly as long as this OCR attempt; dropping
    // it deletes the file on every return path.
    let scratch = match stage_scratch_image(&png) {
        Ok(file) => file,
        Err(e) => return PageResult::Failed(e),
    };

    match engine.recognize(scratch.path(), &config.language, config.preserve_layout) {
        Ok(text) => PageResult::OcrText(text),
        Err(e) => PageResult::Failed(e),
    }
}

fn stage_scratch_image(png: &[u8]) -> Result<tempfile::NamedTempFile, PageError> {
    let mut file = tempfile::Builder::new()
        .prefix("pdfocr_page_")
        .suffix(".png")
        .tempfile()
        .map_err(PageError::ScratchImage)?;
    file.write_all(png).map_err(PageError::ScratchImage)?;
    file.flush().map_err(PageError::ScratchImage)?;
    Ok(file)
}
