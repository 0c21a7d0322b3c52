#![forbid(unsafe_code)]

//! Box rendering configuration.
//!
//! [`BoxOptions`] is the explicit replacement for free-form keyword options:
//! every knob has a documented default and is validated up front by
//! [`BoxOptions::validate`], before the host is touched.
//!
//! # Example
//! ```
//! use bidibox_layout::options::{BoxOptions, Overflow};
//! use bidibox_text::StyleTag;
//!
//! let opts = BoxOptions::new((50.0, 700.0), 200.0)
//!     .height(50.0)
//!     .size(14.0)
//!     .styles(StyleTag::Bold)
//!     .overflow(Overflow::ShrinkToFit)
//!     .min_font_size(6.0);
//! assert!(opts.validate().is_ok());
//! assert_eq!(opts.effective_min_font_size(), 6.0);
//! ```

use std::fmt;

use bidibox_text::{DEFAULT_FONT_SIZE, FontPair, SegmentOptions, StyleSet};

use crate::error::OptionsError;
use crate::fit::FitRequest;
use crate::surface::{BoxFrame, Transform};

// =========================================================================
// Direction
// =========================================================================

/// Requested base direction of a text box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    /// RTL when the text contains Hebrew, LTR otherwise.
    #[default]
    Auto,
    Ltr,
    Rtl,
}

impl Direction {
    /// Resolve `Auto` against the content. Never returns `Auto`.
    #[must_use]
    pub const fn resolve(self, contains_rtl: bool) -> Self {
        match self {
            Self::Auto if contains_rtl => Self::Rtl,
            Self::Auto => Self::Ltr,
            other => other,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Ltr => write!(f, "ltr"),
            Self::Rtl => write!(f, "rtl"),
        }
    }
}

// =========================================================================
// Overflow
// =========================================================================

/// What to do when text does not fit the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Overflow {
    /// Leave it to the host's default behavior.
    #[default]
    None,
    /// Drop whatever does not fit.
    Truncate,
    /// Reduce the font size until the text fits, down to a minimum.
    ShrinkToFit,
}

// =========================================================================
// FitStrategy / FitTuning
// =========================================================================

/// How shrink-to-fit measures each candidate size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitStrategy {
    /// Dry-run layout when the host supports it, approximation otherwise.
    #[default]
    Auto,
    /// Insist on dry-run layout; approximation is used, with a warning, only
    /// if the host cannot do it.
    DryRun,
    /// Always estimate from summed fragment widths.
    Approximate,
}

/// Numeric constants of the shrink-to-fit search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FitTuning {
    /// Decrement between candidate sizes.
    pub step: f32,
    /// Line height as a multiple of font size (approximate strategy).
    pub line_height_factor: f32,
    /// Fraction of the box the estimate may fill (approximate strategy).
    pub fill_ratio: f32,
    /// Floor used when no `min_font_size` is given.
    pub default_min_font_size: f32,
}

impl Default for FitTuning {
    fn default() -> Self {
        Self {
            step: 0.5,
            line_height_factor: 1.2,
            fill_ratio: 0.95,
            default_min_font_size: 5.0,
        }
    }
}

impl FitTuning {
    pub fn validate(&self) -> Result<(), OptionsError> {
        OptionsError::check_positive("step", self.step)?;
        OptionsError::check_positive("line_height_factor", self.line_height_factor)?;
        OptionsError::check_positive("fill_ratio", self.fill_ratio)?;
        OptionsError::check_positive("default_min_font_size", self.default_min_font_size)
    }
}

// =========================================================================
// BoxOptions
// =========================================================================

/// Everything `render_directional_box` needs to know about a text box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxOptions {
    /// Top-left corner in page coordinates.
    pub at: (f32, f32),
    /// Box width.
    pub width: f32,
    /// Box height. Without it there is nothing to shrink against.
    #[cfg_attr(feature = "serde", serde(default))]
    pub height: Option<f32>,
    /// Font size, or the starting size when shrinking. Default 12.
    #[cfg_attr(feature = "serde", serde(default = "default_size"))]
    pub size: f32,
    /// Styles applied to every fragment. Default: none.
    #[cfg_attr(feature = "serde", serde(default))]
    pub styles: StyleSet,
    /// RTL and LTR fonts.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fonts: FontPair,
    /// Base direction. Default `Auto`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub direction: Direction,
    /// Rotation in degrees around `at`, applied to the committed render only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: f32,
    /// Extra space between characters, applied to the committed render only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub character_spacing: f32,
    /// Extra space between lines.
    #[cfg_attr(feature = "serde", serde(default))]
    pub leading: f32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub overflow: Overflow,
    /// Smallest size shrink-to-fit may choose.
    #[cfg_attr(feature = "serde", serde(default))]
    pub min_font_size: Option<f32>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub strategy: FitStrategy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub tuning: FitTuning,
}

#[cfg(feature = "serde")]
fn default_size() -> f32 {
    DEFAULT_FONT_SIZE
}

impl BoxOptions {
    /// Options for a box at `at` with the given width; everything else
    /// defaulted.
    #[must_use]
    pub fn new(at: (f32, f32), width: f32) -> Self {
        Self {
            at,
            width,
            height: None,
            size: DEFAULT_FONT_SIZE,
            styles: StyleSet::normal(),
            fonts: FontPair::default(),
            direction: Direction::Auto,
            rotation: 0.0,
            character_spacing: 0.0,
            leading: 0.0,
            overflow: Overflow::None,
            min_font_size: None,
            strategy: FitStrategy::Auto,
            tuning: FitTuning::default(),
        }
    }

    #[must_use]
    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn styles(mut self, styles: impl Into<StyleSet>) -> Self {
        self.styles = styles.into();
        self
    }

    #[must_use]
    pub fn fonts(mut self, fonts: FontPair) -> Self {
        self.fonts = fonts;
        self
    }

    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    #[must_use]
    pub fn character_spacing(mut self, spacing: f32) -> Self {
        self.character_spacing = spacing;
        self
    }

    #[must_use]
    pub fn leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    #[must_use]
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    #[must_use]
    pub fn min_font_size(mut self, size: f32) -> Self {
        self.min_font_size = Some(size);
        self
    }

    #[must_use]
    pub fn strategy(mut self, strategy: FitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn tuning(mut self, tuning: FitTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Check geometry and sizes.
    pub fn validate(&self) -> Result<(), OptionsError> {
        OptionsError::check_finite("x", self.at.0)?;
        OptionsError::check_finite("y", self.at.1)?;
        OptionsError::check_positive("width", self.width)?;
        if let Some(height) = self.height {
            OptionsError::check_positive("height", height)?;
        }
        OptionsError::check_positive("size", self.size)?;
        if let Some(min) = self.min_font_size {
            OptionsError::check_positive("min_font_size", min)?;
        }
        OptionsError::check_finite("rotation", self.rotation)?;
        OptionsError::check_finite("character_spacing", self.character_spacing)?;
        OptionsError::check_finite("leading", self.leading)?;
        self.tuning.validate()
    }

    /// `min_font_size`, or the tuning's default floor.
    #[must_use]
    pub fn effective_min_font_size(&self) -> f32 {
        self.min_font_size
            .unwrap_or(self.tuning.default_min_font_size)
    }

    /// Segmentation settings at `size`.
    #[must_use]
    pub fn segment_options(&self, size: f32) -> SegmentOptions {
        SegmentOptions::new(size)
            .styles(self.styles.clone())
            .fonts(self.fonts.clone())
    }

    /// Shrink search bounds for a box of the given height.
    #[must_use]
    pub fn fit_request(&self, height: f32) -> FitRequest {
        FitRequest {
            initial_size: self.size,
            min_size: self.effective_min_font_size(),
            step: self.tuning.step,
            width: self.width,
            height,
        }
    }

    /// Box geometry as handed to the host.
    #[must_use]
    pub fn frame(&self) -> BoxFrame {
        BoxFrame {
            at: self.at,
            width: self.width,
            height: self.height,
            leading: self.leading,
            overflow: self.overflow,
            min_font_size: self.min_font_size,
        }
    }

    /// Transform wrapped around the committed render.
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform {
            rotation: self.rotation,
            origin: self.at,
            character_spacing: self.character_spacing,
        }
    }
}
