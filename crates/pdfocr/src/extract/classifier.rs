/// Verdict for one page: use the embedded text as-is, or rasterize and OCR.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    UseDirectText,
    NeedsOcr,
}

/// Decides whether a page's embedded text is substantial enough to use
/// directly. Pages whose trimmed text is at or below `min_chars` characters
/// (scanned pages, image-only pages, sparse captions) fall back to OCR.
///
/// Counting is Unicode-aware (characters, not bytes), so non-ASCII text is
/// not penalized. Pure function of its inputs; no side effects.
pub fn classify(embedded_text: &str, min_chars: usize) -> Verdict {
    let trimmed = embedded_text.trim();
    if trimmed.chars().count() > min_chars {
        Verdict::UseDirectText
    } else {
        Verdict::NeedsOcr
    }
}
