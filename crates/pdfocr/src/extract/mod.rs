pub mod classifier;
pub mod page;
#[cfg(test)]
pub mod testing;

pub use classifier::{classify, Verdict};
pub use page::{extract_page, PageResult};

use std::fmt::Write;

use tracing::{debug, info_span, warn};

use crate::config::ExtractionConfig;
use crate::document::DocumentHandle;
use crate::error::Result;
use crate::ocr::RecognitionEngine;

/// A page omitted from the output, with the failure that caused the skip.
#[derive(Debug)]
pub struct SkippedPage {
    pub page: u32,
    pub cause: String,
}

/// The assembled full-document text, plus the pages that were skipped over
/// recoverable failures. Page blocks appear in document order.
#[derive(Debug)]
pub struct DocumentText {
    pub text: String,
    pub skipped: Vec<SkippedPage>,
}

/// Extracts text from every page in index order. Each page contributes a
/// labeled block — `--- Page N ---` for embedded text, `--- Page N (OCR) ---`
/// for recognized text — followed by a blank line. Pages that fail
/// recoverably are warned about and omitted; a fatal error aborts the run
/// with no partial output.
pub fn extract_document(
    doc: &dyn DocumentHandle,
    engine: &dyn RecognitionEngine,
    config: &ExtractionConfig,
) -> Result<DocumentText> {
    let _span = info_span!("extract.document").entered();

    let page_count = doc.page_count();
    let mut text = String::new();
    let mut skipped = Vec::new();

    for page in 1..=page_count as u32 {
        debug!("Processing page {}/{}", page, page_count);

        match extract_page(doc, engine, page, config)? {
            PageResult::DirectText(page_text) => {
                let _ = writeln!(text, "--- Page {} ---", page);
                text.push_str(&page_text);
                text.push_str("\n\n");
            }
            PageResult::OcrText(page_text) => {
                let _ = writeln!(text, "--- Page {} (OCR) ---", page);
                text.push_str(&page_text);
                text.push_str("\n\n");
            }
            PageResult::Failed(e) => {
                warn!("Skipping page {}: {}", page, e);
                skipped.push(SkippedPage {
                    page,
                    cause: e.to_string(),
                });
            }
        }
    }

    Ok(DocumentText { text, skipped })
}
