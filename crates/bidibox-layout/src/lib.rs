#![forbid(unsafe_code)]

//! Directional text boxes and shrink-to-fit sizing for bidi-unaware PDF
//! hosts.
//!
//! # Role in bidibox
//! `bidibox-layout` connects the pure segmentation in `bidibox-text` to a
//! host renderer through the [`PdfSurface`] trait. It decides between the
//! host's plain text box and segmented fragments, runs the font size search
//! when asked to shrink, and commits exactly one render.
//!
//! # This crate provides
//! - [`BoxOptions`] and friends: explicit, validated configuration.
//! - [`PdfSurface`]: what the host must be able to do.
//! - [`FitEngine`]: dry-run or approximate shrink-to-fit search.
//! - [`render_directional_box`]: the box rendering entry point.
//! - [`prepare_table`] and [`table_cell_spec`]: per-cell font selection.
//! - [`CharWidthMetric`]: an approximate `measure_width` for hosts without
//!   font metrics.

pub mod error;
pub mod fit;
pub mod metrics;
pub mod options;
pub mod render;
pub mod surface;
pub mod table;

pub use error::{OptionsError, RenderError};
pub use fit::{Candidates, FitEngine, FitOutcome, FitRequest, MeasuredBy, estimate_extent};
pub use metrics::CharWidthMetric;
pub use options::{BoxOptions, Direction, FitStrategy, FitTuning, Overflow};
pub use render::{RenderPath, RenderReport, render_directional_box};
pub use surface::{BoxFrame, PdfSurface, PlainTextBox, Transform};
pub use table::{CellSpec, TableCell, TableOptions, prepare_table, table_cell_spec};
