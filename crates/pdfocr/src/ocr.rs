use std::path::Path;

use crate::error::PageError;

/// Optical character recognition over a single raster image on disk.
pub trait RecognitionEngine {
    fn recognize(
        &self,
        image: &Path,
        language: &str,
        preserve_layout: bool,
    ) -> Result<String, PageError>;
}

/// Tesseract-backed recognition via leptess. A fresh Tesseract instance is
/// created per image; state never leaks between pages.
pub struct TesseractEngine;

impl TesseractEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecognitionEngine for TesseractEngine {
    fn recognize(
        &self,
        image: &Path,
        language: &str,
        preserve_layout: bool,
    ) -> Result<String, PageError> {
        let _span = tracing::info_span!("ocr.tesseract").entered();

        let mut lt = leptess::LepTess::new(None, language)
            .map_err(|e| PageError::Recognition(format!("failed to initialize Tesseract: {}", e)))?;

        if preserve_layout {
            // Automatic page segmentation keeps multi-column layout intact.
            lt.set_variable(leptess::Variable::TesseditPagesegMode, "3")
                .map_err(|e| {
                    PageError::Recognition(format!("failed to set segmentation mode: {}", e))
                })?;
        }

        lt.set_image(image)
            .map_err(|e| PageError::Recognition(format!("failed to set image for OCR: {}", e)))?;

        lt.get_utf8_text()
            .map_err(|e| PageError::Recognition(format!("OCR failed: {}", e)))
    }
}
