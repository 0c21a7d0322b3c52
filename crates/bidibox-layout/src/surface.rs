#![forbid(unsafe_code)]

//! The host renderer boundary.
//!
//! The host owns the page, the font registry and the actual left-to-right
//! layout primitive. bidibox only ever hands it plain text or pre-ordered
//! [`Fragment`]s together with a [`BoxFrame`].
//!
//! Trial operations ([`PdfSurface::measure_width`] and
//! [`PdfSurface::dry_run_overflows`]) take `&self` and so cannot change
//! page state; only the commit operations take `&mut self`.

use bidibox_text::{Fragment, StyleSet};

use crate::options::Overflow;

/// Position and size of a text box, plus layout settings the host needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxFrame {
    /// Top-left corner.
    pub at: (f32, f32),
    pub width: f32,
    pub height: Option<f32>,
    /// Extra space between lines.
    pub leading: f32,
    pub overflow: Overflow,
    /// Only meaningful with [`Overflow::ShrinkToFit`] on the plain path.
    pub min_font_size: Option<f32>,
}

/// Decorations applied around a committed render.
///
/// Never passed to trial operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Degrees, counter-clockwise.
    pub rotation: f32,
    pub origin: (f32, f32),
    pub character_spacing: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        origin: (0.0, 0.0),
        character_spacing: 0.0,
    };

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.character_spacing == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Font settings for the host's own single-direction text box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlainTextBox<'a> {
    pub font: &'a str,
    pub size: f32,
    pub styles: &'a StyleSet,
}

/// A PDF document/page that can measure and draw text.
pub trait PdfSurface {
    /// Host failure, e.g. an unregistered font. Propagated untouched.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Advance width of `text` in `font` at `size`.
    fn measure_width(&self, text: &str, font: &str, size: f32) -> Result<f32, Self::Error>;

    /// Lay out `fragments` in `frame` without drawing and report whether
    /// they overflow it.
    ///
    /// Returns `None` when the host has no trial-layout capability; the fit
    /// engine then falls back to width approximation.
    fn dry_run_overflows(
        &self,
        fragments: &[Fragment],
        frame: &BoxFrame,
    ) -> Option<Result<bool, Self::Error>> {
        let _ = (fragments, frame);
        None
    }

    /// Draw `fragments` left to right in emission order.
    fn draw_fragments(
        &mut self,
        fragments: &[Fragment],
        frame: &BoxFrame,
        transform: &Transform,
    ) -> Result<(), Self::Error>;

    /// Draw single-direction text with the host's native text box,
    /// including its native shrink-to-fit when `frame.overflow` asks for it.
    fn draw_plain_text_box(
        &mut self,
        text: &str,
        request: &PlainTextBox<'_>,
        frame: &BoxFrame,
        transform: &Transform,
    ) -> Result<(), Self::Error>;
}
