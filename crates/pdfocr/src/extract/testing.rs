//! Stub collaborators for exercising the extraction pipeline without a real
//! PDF renderer or Tesseract install. Tests are single-threaded, so plain
//! `Cell`/`RefCell` counters are enough.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::document::DocumentHandle;
use crate::error::{ExtractError, PageError};
use crate::ocr::RecognitionEngine;

pub struct StubDocument {
    pages: Vec<String>,
    failing_raster: HashSet<u32>,
    failing_text: HashSet<u32>,
    rasterize_calls: Cell<usize>,
}

impl StubDocument {
    pub fn with_pages(pages: Vec<String>) -> Self {
        Self {
            pages,
            failing_raster: HashSet::new(),
            failing_text: HashSet::new(),
            rasterize_calls: Cell::new(0),
        }
    }

    /// Make rasterization fail for the given 1-based page.
    pub fn failing_raster_on(mut self, page: u32) -> Self {
        self.failing_raster.insert(page);
        self
    }

    /// Make embedded-text retrieval fail for the given 1-based page.
    pub fn failing_text_on(mut self, page: u32) -> Self {
        self.failing_text.insert(page);
        self
    }

    pub fn rasterize_calls(&self) -> usize {
        self.rasterize_calls.get()
    }

    /// The PNG bytes every successful `rasterize` call returns: a valid
    /// 1x1 white image.
    pub fn raster_bytes() -> Vec<u8> {
        let img = image::RgbImage::from_pixel(1, 1, image::Rgb([255, 255, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }
}

impl DocumentHandle for StubDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn embedded_text(&self, page: u32) -> Result<String, ExtractError> {
        if self.failing_text.contains(&page) {
            return Err(ExtractError::PageText {
                page,
                message: "stub embedded-text failure".to_string(),
            });
        }
        Ok(self.pages[(page - 1) as usize].clone())
    }

    fn rasterize(&self, page: u32, _dpi: u32) -> Result<Vec<u8>, PageError> {
        self.rasterize_calls.set(self.rasterize_calls.get() + 1);
        if self.failing_raster.contains(&page) {
            return Err(PageError::Rasterize(
                "stub rasterization failure".to_string(),
            ));
        }
        Ok(Self::raster_bytes())
    }
}

pub struct StubEngine {
    response: Option<String>,
    invocations: Cell<usize>,
    last_image_path: RefCell<Option<PathBuf>>,
    last_image_bytes: RefCell<Option<Vec<u8>>>,
    last_language: RefCell<Option<String>>,
    last_layout: Cell<Option<bool>>,
}

impl StubEngine {
    /// Deterministic engine that recognizes every image as `text`.
    pub fn returning(text: &str) -> Self {
        Self::build(Some(text.to_string()))
    }

    /// Engine whose every recognition attempt fails.
    pub fn failing() -> Self {
        Self::build(None)
    }

    fn build(response: Option<String>) -> Self {
        Self {
            response,
            invocations: Cell::new(0),
            last_image_path: RefCell::new(None),
            last_image_bytes: RefCell::new(None),
            last_language: RefCell::new(None),
            last_layout: Cell::new(None),
        }
    }

    pub fn invocations(&self) -> usize {
        self.invocations.get()
    }

    pub fn last_image_path(&self) -> Option<PathBuf> {
        self.last_image_path.borrow().clone()
    }

    pub fn last_image_bytes(&self) -> Option<Vec<u8>> {
        self.last_image_bytes.borrow().clone()
    }

    pub fn last_language(&self) -> Option<String> {
        self.last_language.borrow().clone()
    }

    pub fn last_layout(&self) -> Option<bool> {
        self.last_layout.get()
    }
}

impl RecognitionEngine for StubEngine {
    fn recognize(
        &self,
        image: &Path,
        language: &str,
        preserve_layout: bool,
    ) -> Result<String, PageError> {
        self.invocations.set(self.invocations.get() + 1);
        *self.last_image_path.borrow_mut() = Some(image.to_path_buf());
        // Read the staged file while it still exists so callers can check
        // both its content and its later removal.
        *self.last_image_bytes.borrow_mut() = std::fs::read(image).ok();
        *self.last_language.borrow_mut() = Some(language.to_string());
        self.last_layout.set(Some(preserve_layout));

        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(PageError::Recognition(
                "stub recognition failure".to_string(),
            )),
        }
    }
}
