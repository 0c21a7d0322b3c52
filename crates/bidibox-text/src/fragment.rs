#![forbid(unsafe_code)]

//! Fragments: the styled text units handed to the host renderer.
//!
//! A fragment list is already in final left-to-right placement order. The
//! host never reorders anything; it places fragment after fragment and
//! starts a new visual line at each [`LINE_BREAK`] fragment.

use crate::style::StyleSet;

/// Text of the fragment that terminates a visual line.
pub const LINE_BREAK: &str = "\n";

/// Default font for Hebrew runs.
pub const DEFAULT_RTL_FONT: &str = "GveretLevinHebrew";

/// Default font for everything else.
pub const DEFAULT_LTR_FONT: &str = "Helvetica";

/// Direction hint attached to a fragment for the host's shaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FragmentDirection {
    /// Use whatever direction the host defaults to.
    #[default]
    Inherited,
    /// Shape the fragment's glyphs right-to-left.
    Rtl,
}

/// Font identifiers for the two scripts.
///
/// Identifiers are passed through to the host untouched; resolving them to
/// font files is the host's business.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FontPair {
    /// Font used for Hebrew words.
    pub rtl: String,
    /// Font used for Latin words, punctuation, whitespace and line breaks.
    pub ltr: String,
}

impl FontPair {
    #[must_use]
    pub fn new(rtl: impl Into<String>, ltr: impl Into<String>) -> Self {
        Self {
            rtl: rtl.into(),
            ltr: ltr.into(),
        }
    }
}

impl Default for FontPair {
    fn default() -> Self {
        Self::new(DEFAULT_RTL_FONT, DEFAULT_LTR_FONT)
    }
}

/// One styled piece of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    pub text: String,
    pub font: String,
    pub size: f32,
    pub direction: FragmentDirection,
    pub styles: StyleSet,
}

impl Fragment {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        font: impl Into<String>,
        size: f32,
        styles: StyleSet,
    ) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            size,
            direction: FragmentDirection::Inherited,
            styles,
        }
    }

    /// Tag the fragment for right-to-left shaping.
    #[must_use]
    pub fn rtl(mut self) -> Self {
        self.direction = FragmentDirection::Rtl;
        self
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.direction == FragmentDirection::Rtl
    }

    #[must_use]
    pub fn is_line_break(&self) -> bool {
        self.text == LINE_BREAK
    }
}

/// Concatenate fragment texts in placement order.
#[must_use]
pub fn joined_text(fragments: &[Fragment]) -> String {
    fragments.iter().map(|f| f.text.as_str()).collect()
}

/// Number of visual lines a fragment list spans.
///
/// An empty list spans zero lines.
#[must_use]
pub fn line_count(fragments: &[Fragment]) -> usize {
    if fragments.is_empty() {
        return 0;
    }
    1 + fragments.iter().filter(|f| f.is_line_break()).count()
}
