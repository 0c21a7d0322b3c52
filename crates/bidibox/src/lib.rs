#![forbid(unsafe_code)]

//! bidibox public facade.
//!
//! Renders mixed Hebrew/English text through PDF hosts that lay glyphs out
//! strictly left to right. Re-exports the segmentation layer
//! (`bidibox-text`) and the box/fit layer (`bidibox-layout`), and offers a
//! prelude for day-to-day use.
//!
//! ```
//! use bidibox::prelude::*;
//!
//! let fragments = segment_to_fragments("Hello שלום World", &SegmentOptions::default());
//! assert_eq!(joined_text(&fragments), "Hello שלום World ");
//! ```

// --- Text re-exports -------------------------------------------------------

pub use bidibox_text::{
    DEFAULT_FONT_SIZE, DEFAULT_LTR_FONT, DEFAULT_RTL_FONT, FontPair, Fragment, FragmentDirection,
    GlyphRun, LINE_BREAK, SegmentOptions, StyleSet, StyleTag, TokenClass, classify_token,
    contains_rtl, is_hebrew_char, is_rtl_word, is_sanitized, joined_text, line_count, sanitize,
    segment_to_fragments,
};
#[cfg(feature = "normalization")]
pub use bidibox_text::sanitize_nfc;

// --- Layout re-exports -----------------------------------------------------

pub use bidibox_layout::{
    BoxFrame, BoxOptions, CellSpec, CharWidthMetric, Direction, FitEngine, FitOutcome, FitRequest,
    FitStrategy, FitTuning, MeasuredBy, OptionsError, Overflow, PdfSurface, PlainTextBox,
    RenderError, RenderPath, RenderReport, TableCell, TableOptions, Transform, prepare_table,
    render_directional_box, table_cell_spec,
};

/// Result of rendering a box through host surface `S`.
pub type Result<T, S> = std::result::Result<T, RenderError<<S as PdfSurface>::Error>>;

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoxOptions, Direction, FontPair, Fragment, Overflow, PdfSurface, RenderError,
        RenderReport, SegmentOptions, StyleSet, StyleTag, joined_text, prepare_table,
        render_directional_box, sanitize, segment_to_fragments,
    };

    pub use crate::{layout, text};
}

pub use bidibox_layout as layout;
pub use bidibox_text as text;
