#![forbid(unsafe_code)]

//! Shrink-to-fit font size search.
//!
//! Candidate sizes run from the initial size down to the minimum in fixed
//! steps. Each candidate is segmented afresh and measured; the first one
//! that fits wins. Nothing is drawn here: the caller commits exactly one
//! render at the chosen size.
//!
//! # Measurement
//!
//! - **Dry run**: the host lays the fragments out without drawing and
//!   reports overflow. Exact, because it is the real layout engine.
//! - **Approximate**: the fragment widths are summed with the host's
//!   `measure_width` and compared, together with an estimated height of
//!   `line_height_factor × size × lines + leading × (lines − 1)`, against
//!   `fill_ratio` of the box.
//!
//! With [`FitStrategy::Auto`] the dry run is used whenever the host offers
//! one. The search is bounded by
//! `⌊(initial − min) / step⌋ + 1` candidates.

use std::fmt;

use bidibox_text::{Fragment, SegmentOptions, line_count, segment_to_fragments};

use crate::options::{FitStrategy, FitTuning};
use crate::surface::{BoxFrame, PdfSurface};

// =========================================================================
// FitRequest
// =========================================================================

/// Bounds of one shrink-to-fit search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitRequest {
    pub initial_size: f32,
    pub min_size: f32,
    pub step: f32,
    pub width: f32,
    pub height: f32,
}

impl FitRequest {
    /// Candidate sizes, largest first.
    #[must_use]
    pub fn candidates(&self) -> Candidates {
        Candidates {
            initial: self.initial_size,
            min: self.min_size,
            step: self.step,
            index: 0,
        }
    }
}

/// Iterator over candidate sizes.
///
/// Sizes are computed as `initial - index * step` so that repeated
/// subtraction cannot drift past the minimum. Sizes never exceed the
/// initial size. Empty if the step is not positive or the minimum exceeds
/// the initial size by more than the snap tolerance.
#[derive(Debug, Clone)]
pub struct Candidates {
    initial: f32,
    min: f32,
    step: f32,
    index: u32,
}

impl Candidates {
    /// Tolerance, as a fraction of the step, for landing exactly on `min`.
    const SNAP: f32 = 1e-3;
}

impl Iterator for Candidates {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if !(self.step > 0.0 && self.step.is_finite()) {
            return None;
        }
        let size = self.initial - self.step * self.index as f32;
        if size + self.step * Self::SNAP < self.min || !size.is_finite() {
            return None;
        }
        self.index = self.index.checked_add(1)?;
        Some(size.max(self.min).min(self.initial))
    }
}

// =========================================================================
// FitOutcome
// =========================================================================

/// How a candidate was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasuredBy {
    DryRun,
    Approximate,
}

impl fmt::Display for MeasuredBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DryRun => write!(f, "dry-run"),
            Self::Approximate => write!(f, "approximate"),
        }
    }
}

/// Result of a shrink-to-fit search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOutcome {
    /// Size to render at.
    pub size: f32,
    /// Whether `size` was measured to fit. `false` means no candidate fit
    /// and `size` is the minimum.
    pub fitted: bool,
    pub measured_by: MeasuredBy,
    pub candidates_tried: usize,
}

// =========================================================================
// FitEngine
// =========================================================================

/// Drives segmentation and measurement over the candidate sizes.
#[derive(Debug, Clone, Copy)]
pub struct FitEngine<'a> {
    tuning: &'a FitTuning,
    strategy: FitStrategy,
}

impl<'a> FitEngine<'a> {
    #[must_use]
    pub fn new(tuning: &'a FitTuning, strategy: FitStrategy) -> Self {
        Self { tuning, strategy }
    }

    /// Find the largest candidate size at which `text` fits.
    ///
    /// `base` supplies fonts and styles; its size is replaced by each
    /// candidate. `frame` is what the dry run lays out into. Host errors
    /// abort the search and are returned as is.
    pub fn fit<S>(
        &self,
        surface: &S,
        text: &str,
        base: &SegmentOptions,
        frame: &BoxFrame,
        request: &FitRequest,
    ) -> Result<FitOutcome, S::Error>
    where
        S: PdfSurface + ?Sized,
    {
        let mut measured_by = match self.strategy {
            FitStrategy::Approximate => MeasuredBy::Approximate,
            FitStrategy::Auto | FitStrategy::DryRun => MeasuredBy::DryRun,
        };
        let mut opts = base.clone();
        let mut tried = 0;

        for size in request.candidates() {
            tried += 1;
            opts.size = size;
            let fragments = segment_to_fragments(text, &opts);

            let fits = match measured_by {
                MeasuredBy::DryRun => match surface.dry_run_overflows(&fragments, frame) {
                    Some(overflows) => !overflows?,
                    None => {
                        if self.strategy == FitStrategy::DryRun {
                            tracing::warn!(
                                "dry-run layout requested but unsupported by host; approximating"
                            );
                        } else {
                            tracing::debug!("host has no dry-run layout; approximating");
                        }
                        measured_by = MeasuredBy::Approximate;
                        self.approximately_fits(surface, &fragments, size, frame.leading, request)?
                    }
                },
                MeasuredBy::Approximate => {
                    self.approximately_fits(surface, &fragments, size, frame.leading, request)?
                }
            };

            tracing::debug!(size, fits, measured_by = %measured_by, "shrink-to-fit candidate");
            if fits {
                return Ok(FitOutcome {
                    size,
                    fitted: true,
                    measured_by,
                    candidates_tried: tried,
                });
            }
        }

        tracing::warn!(
            min_size = request.min_size,
            candidates = tried,
            "no candidate font size fits; using minimum"
        );
        Ok(FitOutcome {
            size: request.min_size,
            fitted: false,
            measured_by,
            candidates_tried: tried,
        })
    }

    /// Width-sum and line-height estimate against `fill_ratio` of the box.
    fn approximately_fits<S>(
        &self,
        surface: &S,
        fragments: &[Fragment],
        size: f32,
        leading: f32,
        request: &FitRequest,
    ) -> Result<bool, S::Error>
    where
        S: PdfSurface + ?Sized,
    {
        let (width, height) = estimate_extent(surface, fragments, size, leading, self.tuning)?;
        let fill = self.tuning.fill_ratio;
        Ok(width <= request.width * fill && height <= request.height * fill)
    }
}

/// Estimated `(width, height)` of `fragments` laid out at `size`.
///
/// Width is the sum of all non-line-break fragment widths, i.e. the text as
/// if set on a single line.
pub fn estimate_extent<S>(
    surface: &S,
    fragments: &[Fragment],
    size: f32,
    leading: f32,
    tuning: &FitTuning,
) -> Result<(f32, f32), S::Error>
where
    S: PdfSurface + ?Sized,
{
    let mut width = 0.0;
    for fragment in fragments.iter().filter(|f| !f.is_line_break()) {
        width += surface.measure_width(&fragment.text, &fragment.font, size)?;
    }
    let lines = line_count(fragments).max(1) as f32;
    let height = tuning.line_height_factor * size * lines + leading * (lines - 1.0);
    Ok((width, height))
}
