#![forbid(unsafe_code)]

//! Directional text box rendering.
//!
//! [`render_directional_box`] picks one of two paths:
//!
//! - **Plain**: the text has no Hebrew and resolves to LTR. The host's own
//!   text box draws it, including its native shrink-to-fit.
//! - **Segmented**: everything else. The text is segmented into visually
//!   ordered fragments (after a shrink-to-fit search if requested) and
//!   drawn with a single `draw_fragments` call.
//!
//! Either way exactly one commit call reaches the host. Rotation and
//! character spacing wrap only that call.

use bidibox_text::{contains_rtl, sanitize, segment_to_fragments};

use crate::error::RenderError;
use crate::fit::{FitEngine, FitOutcome};
use crate::options::{BoxOptions, Direction, Overflow};
use crate::surface::{BoxFrame, PdfSurface, PlainTextBox};

/// Which rendering path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderPath {
    /// Host-native single-direction text box.
    Plain,
    /// Segmented fragments.
    Segmented,
}

/// Summary of a completed render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderReport {
    pub path: RenderPath,
    /// Size passed to the committed render. On the plain path with
    /// shrink-to-fit this is the starting size; the host picks the final one.
    pub font_size: f32,
    /// Fragments drawn; zero on the plain path.
    pub fragment_count: usize,
    /// Present when a shrink-to-fit search ran.
    pub fit: Option<FitOutcome>,
}

/// Sanitize, segment, size and draw `text` into the box described by
/// `options`.
///
/// Options are validated before the host is touched. Host errors are
/// returned as [`RenderError::Surface`].
pub fn render_directional_box<S>(
    surface: &mut S,
    text: &str,
    options: &BoxOptions,
) -> Result<RenderReport, RenderError<S::Error>>
where
    S: PdfSurface + ?Sized,
{
    options.validate()?;

    let text = sanitize(text);
    let has_rtl = contains_rtl(&text);
    let direction = options.direction.resolve(has_rtl);
    let transform = options.transform();

    if !has_rtl && direction == Direction::Ltr {
        let request = PlainTextBox {
            font: &options.fonts.ltr,
            size: options.size,
            styles: &options.styles,
        };
        surface
            .draw_plain_text_box(&text, &request, &options.frame(), &transform)
            .map_err(RenderError::Surface)?;
        tracing::debug!(
            size = options.size,
            overflow = ?options.overflow,
            transformed = !transform.is_identity(),
            "rendered plain text box"
        );
        return Ok(RenderReport {
            path: RenderPath::Plain,
            font_size: options.size,
            fragment_count: 0,
            fit: None,
        });
    }

    // Shrinking is done here, so the host sees a fixed-size layout.
    let frame = BoxFrame {
        overflow: match options.overflow {
            Overflow::ShrinkToFit => Overflow::None,
            other => other,
        },
        min_font_size: None,
        ..options.frame()
    };

    let fit = match (options.overflow, options.height) {
        (Overflow::ShrinkToFit, Some(height)) => {
            let outcome = FitEngine::new(&options.tuning, options.strategy)
                .fit(
                    &*surface,
                    &text,
                    &options.segment_options(options.size),
                    &frame,
                    &options.fit_request(height),
                )
                .map_err(RenderError::Surface)?;
            Some(outcome)
        }
        (Overflow::ShrinkToFit, None) => {
            tracing::debug!("shrink-to-fit without a box height; rendering at initial size");
            None
        }
        _ => None,
    };

    let size = fit.map_or(options.size, |outcome| outcome.size);
    let fragments = segment_to_fragments(&text, &options.segment_options(size));
    surface
        .draw_fragments(&fragments, &frame, &transform)
        .map_err(RenderError::Surface)?;

    tracing::debug!(
        size,
        fragments = fragments.len(),
        direction = %direction,
        transformed = !transform.is_identity(),
        "rendered segmented text box"
    );
    Ok(RenderReport {
        path: RenderPath::Segmented,
        font_size: size,
        fragment_count: fragments.len(),
        fit,
    })
}
