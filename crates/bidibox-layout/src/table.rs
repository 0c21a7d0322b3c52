#![forbid(unsafe_code)]

//! Table cell preparation.
//!
//! Host table primitives usually take one font per cell. [`prepare_table`]
//! sanitizes every cell and picks the RTL font for cells that contain
//! Hebrew and the LTR font for the rest. Hosts that draw cells with the
//! fragment primitive can ask a cell for its [`TableCell::fragments`].

use bidibox_text::{
    DEFAULT_FONT_SIZE, FontPair, Fragment, SegmentOptions, StyleSet, contains_rtl, sanitize,
    segment_to_fragments,
};

/// Font settings shared by all cells of a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableOptions {
    pub size: f32,
    pub styles: StyleSet,
    pub fonts: FontPair,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_FONT_SIZE,
            styles: StyleSet::normal(),
            fonts: FontPair::default(),
        }
    }
}

impl TableOptions {
    fn segment_options(&self) -> SegmentOptions {
        SegmentOptions::new(self.size)
            .styles(self.styles.clone())
            .fonts(self.fonts.clone())
    }
}

/// A sanitized cell with its font chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    pub content: String,
    pub font: String,
    pub size: f32,
    pub styles: StyleSet,
    pub rtl: bool,
}

impl TableCell {
    fn new(raw: &str, options: &TableOptions) -> Self {
        let content = sanitize(raw).into_owned();
        let rtl = contains_rtl(&content);
        let font = if rtl {
            &options.fonts.rtl
        } else {
            &options.fonts.ltr
        };
        Self {
            font: font.clone(),
            size: options.size,
            styles: options.styles.clone(),
            rtl,
            content,
        }
    }

    /// Visually ordered fragments for this cell.
    #[must_use]
    pub fn fragments(&self, options: &TableOptions) -> Vec<Fragment> {
        segment_to_fragments(&self.content, &options.segment_options())
    }
}

/// Prepare every cell of `rows`.
pub fn prepare_table<R, C>(rows: R, options: &TableOptions) -> Vec<Vec<TableCell>>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    rows.into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| TableCell::new(cell.as_ref(), options))
                .collect()
        })
        .collect()
}

/// Per-cell content description for hosts that build tables from specs.
#[derive(Debug, Clone, PartialEq)]
pub enum CellSpec {
    /// No Hebrew; the host's defaults apply.
    Plain { content: String },
    /// Hebrew content with the fonts and size to render it with.
    Hebrew {
        content: String,
        size: f32,
        styles: StyleSet,
        fonts: FontPair,
    },
}

/// Describe one cell.
#[must_use]
pub fn table_cell_spec(text: &str, options: &TableOptions) -> CellSpec {
    let content = sanitize(text).into_owned();
    if contains_rtl(&content) {
        CellSpec::Hebrew {
            content,
            size: options.size,
            styles: options.styles.clone(),
            fonts: options.fonts.clone(),
        }
    } else {
        CellSpec::Plain { content }
    }
}
