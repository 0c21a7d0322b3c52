#![forbid(unsafe_code)]

//! Mixed Hebrew/Latin text preparation for bidi-unaware PDF renderers.
//!
//! # Role in bidibox
//! `bidibox-text` is the pure half of the library: it takes raw text and
//! produces a flat, visually ordered [`Fragment`] list that a
//! left-to-right-only layout primitive can place without knowing anything
//! about text direction. It never talks to a host renderer.
//!
//! # This crate provides
//! - [`sanitize()`] for stripping and normalizing code points PDF font
//!   subsetting chokes on.
//! - [`script`] for the Hebrew predicate and token classification.
//! - [`segment_to_fragments`] for RTL run detection, reversal and
//!   punctuation placement.
//! - [`Fragment`], [`FontPair`] and [`StyleSet`], the vocabulary shared with
//!   `bidibox-layout`.

pub mod fragment;
pub mod sanitize;
pub mod script;
pub mod segment;
pub mod style;

pub use fragment::{
    DEFAULT_LTR_FONT, DEFAULT_RTL_FONT, FontPair, Fragment, FragmentDirection, LINE_BREAK,
    joined_text, line_count,
};
#[cfg(feature = "normalization")]
pub use sanitize::sanitize_nfc;
pub use sanitize::{is_sanitized, sanitize};
pub use script::{TokenClass, classify_token, contains_rtl, is_hebrew_char, is_rtl_word};
pub use segment::{DEFAULT_FONT_SIZE, GlyphRun, SegmentOptions, segment_to_fragments};
pub use style::{StyleSet, StyleTag};
