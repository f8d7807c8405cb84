use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::{info, info_span, warn};

use crate::document::DocumentHandle;
use crate::error::{ExtractError, PageError, Result};

/// Rasterizes every page of the document and writes it as `page_<n>.jpg`
/// (JPEG quality 95) into `output_dir`, creating the directory if needed.
///
/// This path bypasses classification and OCR entirely. Per-page failures
/// are logged and skipped; the operation never aborts early on a single
/// page. Returns the number of images written.
pub fn export_images(doc: &dyn DocumentHandle, output_dir: &Path, dpi: u32) -> Result<usize> {
    let _span = info_span!("export.images").entered();

    std::fs::create_dir_all(output_dir).map_err(|e| ExtractError::CreateDirectory {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let mut written = 0usize;
    for page in 1..=doc.page_count() as u32 {
        match export_page(doc, output_dir, page, dpi) {
            Ok(path) => {
                written += 1;
                info!("Extracted image from page {} to {}", page, path.display());
            }
            Err(e) => warn!("Skipping page {}: {}", page, e),
        }
    }

    Ok(written)
}

fn export_page(
    doc: &dyn DocumentHandle,
    output_dir: &Path,
    page: u32,
    dpi: u32,
) -> std::result::Result<PathBuf, PageError> {
    let png = doc.rasterize(page, dpi)?;

    let img = image::load_from_memory(&png)
        .map_err(|e| PageError::ImageEncoding(format!("failed to decode rendered page: {}", e)))?;
    let rgb = img.to_rgb8();

    let path = output_dir.join(format!("page_{}.jpg", page));
    let file = std::fs::File::create(&path).map_err(|e| PageError::WriteImage {
        path: path.clone(),
        source: e,
    })?;
    let mut writer = BufWriter::new(file);

    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut writer, 95);
    if let Err(e) = rgb.write_with_encoder(encoder) {
        // Don't leave a truncated page_<n>.jpg behind; a skipped page
        // contributes no file, so the reported count always matches disk.
        drop(writer);
        let _ = std::fs::remove_file(&path);
        return Err(PageError::ImageEncoding(format!(
            "failed to encode JPEG: {}",
            e
        )));
    }

    match writer.into_inner() {
        Ok(_) => Ok(path),
        Err(e) => {
            let _ = std::fs::remove_file(&path);
            Err(PageError::WriteImage {
                path,
                source: e.into_error(),
            })
        }
    }
}
