use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures that abort the whole run. No partial output is produced
/// once one of these surfaces.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Failed to read document '{path}': {source}")]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open PDF '{path}': {message}")]
    OpenDocument { path: PathBuf, message: String },

    #[error("Failed to extract text from page {page}: {message}")]
    PageText { page: u32, message: String },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output '{path}': {source}")]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Recoverable per-page failures. The affected page is logged and skipped;
/// processing continues with the next page. These never escalate to
/// [`ExtractError`].
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Rasterization failed: {0}")]
    Rasterize(String),

    #[error("OCR failed: {0}")]
    Recognition(String),

    #[error("Failed to stage raster image for OCR: {0}")]
    ScratchImage(#[source] std::io::Error),

    #[error("Failed to encode image: {0}")]
    ImageEncoding(String),

    #[error("Failed to write image '{path}': {source}")]
    WriteImage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
