//! PDF text extraction with OCR fallback for scanned pages.
//!
//! Embedded text is used directly when a page carries enough of it;
//! otherwise the page is rasterized and handed to Tesseract. A separate
//! export path writes every page out as a JPEG image.

pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod extract;
pub mod ocr;

#[cfg(test)]
mod test_pdf;

pub use config::ExtractionConfig;
pub use document::{DocumentHandle, PdfDocument};
pub use error::{ExtractError, PageError, Result};
pub use export::export_images;
pub use extract::{extract_document, DocumentText, PageResult, SkippedPage};
pub use ocr::{RecognitionEngine, TesseractEngine};
