use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Immutable configuration for one extraction run. Supplied once at the
/// start of a run and never mutated while it is in progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Tesseract language tag, e.g. "eng" or "deu".
    #[serde(default = "default_language")]
    pub language: String,

    /// Rasterization resolution for pages sent to OCR.
    #[serde(default = "default_dpi")]
    pub dpi: u32,

    /// Run OCR with automatic page segmentation to keep multi-column
    /// layout intact.
    #[serde(default)]
    pub preserve_layout: bool,

    /// Trimmed embedded-text length (in characters) above which a page is
    /// taken as text-bearing and OCR is skipped. The default of 50 is a
    /// heuristic: a mostly-blank page with a short real caption will still
    /// be routed to OCR.
    #[serde(default = "default_min_text_chars")]
    pub min_text_chars: usize,

    /// Where to write the extracted text. `None` means stdout.
    #[serde(default)]
    pub output_file: Option<PathBuf>,
}

fn default_language() -> String {
    "eng".to_string()
}

fn default_dpi() -> u32 {
    300
}

fn default_min_text_chars() -> usize {
    50
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            dpi: default_dpi(),
            preserve_layout: false,
            min_text_chars: default_min_text_chars(),
            output_file: None,
        }
    }
}
