#![forbid(unsafe_code)]

//! Font-agnostic width approximation.
//!
//! Hosts without real font metrics can back
//! [`PdfSurface::measure_width`](crate::surface::PdfSurface::measure_width)
//! with [`CharWidthMetric`]: every grapheme costs its display width in
//! columns times `em_ratio × size`. Hebrew points and other combining marks
//! are zero-width and therefore free.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Approximate advance width from display columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharWidthMetric {
    /// Average advance of one column, as a fraction of the font size.
    pub em_ratio: f32,
}

impl CharWidthMetric {
    /// Roughly the average advance of Helvetica lowercase text.
    pub const DEFAULT_EM_RATIO: f32 = 0.5;

    #[must_use]
    pub const fn new(em_ratio: f32) -> Self {
        Self { em_ratio }
    }

    /// Display columns of `text`, counted per grapheme cluster.
    #[must_use]
    pub fn columns(text: &str) -> usize {
        text.graphemes(true).map(|g| g.width()).sum()
    }

    /// Approximate width of `text` at `size`.
    #[must_use]
    pub fn width(&self, text: &str, size: f32) -> f32 {
        Self::columns(text) as f32 * self.em_ratio * size
    }
}

impl Default for CharWidthMetric {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EM_RATIO)
    }
}
