#![forbid(unsafe_code)]

//! RTL run segmentation.
//!
//! Turns mixed Hebrew/Latin text into a flat [`Fragment`] list whose order
//! is already the final visual order, so that a renderer with no bidi
//! support can lay it out strictly left to right.
//!
//! # Algorithm
//!
//! 1. Sanitize the input.
//! 2. Split into lines on `'\n'`. Each line is segmented on its own and a
//!    [`LINE_BREAK`] fragment separates consecutive lines.
//! 3. Split each line into alternating whitespace and word tokens.
//! 4. Consecutive Hebrew-bearing words accumulate into a [`GlyphRun`]. A
//!    Latin word, or the end of the line, flushes the run.
//! 5. A flushed run emits its leading punctuation, then its words in reverse
//!    order separated by RTL spaces, then its trailing punctuation.
//!
//! Under RTL reading the run's leading punctuation belongs at its visual
//! right edge and the trailing punctuation at its visual left edge. Because
//! the words are emitted reversed, emitting the leading cluster first and
//! the trailing cluster last lands both where a reader expects them.
//!
//! # Example
//!
//! ```
//! use bidibox_text::fragment::joined_text;
//! use bidibox_text::segment::{SegmentOptions, segment_to_fragments};
//!
//! let frags = segment_to_fragments("שלום עולם.", &SegmentOptions::default());
//! assert_eq!(joined_text(&frags), "עולם שלום.");
//! ```

use crate::fragment::{FontPair, Fragment, LINE_BREAK};
use crate::sanitize::sanitize;
use crate::script::{TokenClass, classify_token};
use crate::style::StyleSet;

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Per-call segmentation settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SegmentOptions {
    /// Font size stamped on every fragment.
    pub size: f32,
    /// Styles stamped on every fragment.
    pub styles: StyleSet,
    /// Fonts for RTL and LTR fragments.
    pub fonts: FontPair,
}

impl SegmentOptions {
    #[must_use]
    pub fn new(size: f32) -> Self {
        Self {
            size,
            styles: StyleSet::normal(),
            fonts: FontPair::default(),
        }
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

    fn ltr(&self, text: impl Into<String>) -> Fragment {
        Fragment::new(text, self.fonts.ltr.as_str(), self.size, self.styles.clone())
    }

    fn rtl(&self, text: impl Into<String>) -> Fragment {
        Fragment::new(text, self.fonts.rtl.as_str(), self.size, self.styles.clone()).rtl()
    }
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self::new(DEFAULT_FONT_SIZE)
    }
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Punctuation that may trail a Hebrew run (includes maqaf and sof pasuq).
#[inline]
pub const fn is_trailing_punct(c: char) -> bool {
    matches!(
        c,
        '.' | ',' | ':' | ';' | '!' | '?' | '-' | '\u{05BE}' | '\u{05C3}'
    )
}

/// Punctuation that may lead a Hebrew run: the trailing set plus brackets.
#[inline]
pub const fn is_leading_punct(c: char) -> bool {
    is_trailing_punct(c) || matches!(c, '(' | ')' | '[' | ']' | '{' | '}')
}

/// Split `word` into `(rest, suffix)` where `suffix` is its trailing
/// punctuation. Returns `None` if there is none, or if removing it would
/// leave nothing behind.
fn split_trailing(word: &str) -> Option<(&str, &str)> {
    let rest = word.trim_end_matches(is_trailing_punct);
    if rest.is_empty() || rest.len() == word.len() {
        return None;
    }
    Some(word.split_at(rest.len()))
}

/// Split `word` into `(prefix, rest)`, same rules as [`split_trailing`].
fn split_leading(word: &str) -> Option<(&str, &str)> {
    let rest = word.trim_start_matches(is_leading_punct);
    if rest.is_empty() || rest.len() == word.len() {
        return None;
    }
    Some(word.split_at(word.len() - rest.len()))
}

// ---------------------------------------------------------------------------
// GlyphRun
// ---------------------------------------------------------------------------

/// A maximal sequence of Hebrew-bearing words on one line.
///
/// Words are stored in logical (reading) order with punctuation already
/// detached from the run's edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRun<'a> {
    words: Vec<&'a str>,
    leading: Option<&'a str>,
    trailing: Option<&'a str>,
}

impl<'a> GlyphRun<'a> {
    /// Build a run from its words, detaching edge punctuation.
    ///
    /// Trailing punctuation is taken from the last word first, then leading
    /// punctuation from the first word. Returns `None` for an empty run.
    #[must_use]
    pub fn new(mut words: Vec<&'a str>) -> Option<Self> {
        let last = words.len().checked_sub(1)?;
        let trailing = split_trailing(words[last]).map(|(rest, punct)| {
            words[last] = rest;
            punct
        });
        let leading = split_leading(words[0]).map(|(punct, rest)| {
            words[0] = rest;
            punct
        });
        Some(Self {
            words,
            leading,
            trailing,
        })
    }

    /// Words in logical order.
    #[must_use]
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    #[must_use]
    pub fn leading(&self) -> Option<&'a str> {
        self.leading
    }

    #[must_use]
    pub fn trailing(&self) -> Option<&'a str> {
        self.trailing
    }

    /// Append this run's fragments in visual order.
    pub fn emit(&self, opts: &SegmentOptions, out: &mut Vec<Fragment>) {
        tracing::trace!(
            words = self.words.len(),
            leading = self.leading.is_some(),
            trailing = self.trailing.is_some(),
            "flushing glyph run"
        );
        if let Some(punct) = self.leading {
            out.push(opts.ltr(punct));
        }
        for (i, word) in self.words.iter().rev().enumerate() {
            if i > 0 {
                out.push(opts.rtl(" "));
            }
            out.push(opts.rtl(*word));
        }
        if let Some(punct) = self.trailing {
            out.push(opts.ltr(punct));
        }
    }
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Iterator over alternating whitespace and non-whitespace tokens.
///
/// Separators are preserved, so concatenating the tokens gives back the
/// line unchanged.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    #[must_use]
    pub fn new(line: &'a str) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let first = self.rest.chars().next()?;
        let blank = first.is_whitespace();
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != blank)
            .map_or(self.rest.len(), |(i, _)| i);
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}

/// Split sanitized text into logical lines.
///
/// Lines end at `'\n'` or `"\r\n"`. Empty lines between other lines are
/// kept; empty lines at the end are dropped, so `"a\n"` is one line and
/// `"\n\n"` is none.
pub fn logical_lines(text: &str) -> impl Iterator<Item = &str> {
    let body = text.trim_end_matches(['\n', '\r']);
    (!body.is_empty())
        .then(|| body.split('\n'))
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

// ---------------------------------------------------------------------------
// Segmentation
// ---------------------------------------------------------------------------

/// Segment one line into `out`.
fn segment_line(line: &str, opts: &SegmentOptions, out: &mut Vec<Fragment>) {
    let mut run: Vec<&str> = Vec::new();

    for token in Tokens::new(line) {
        match classify_token(token) {
            TokenClass::Whitespace => {
                // Single spaces are implied by the trailing space of every
                // LTR word and the RTL spaces inside runs.
                if token != " " {
                    out.push(opts.ltr(token));
                }
            }
            TokenClass::Rtl => run.push(token),
            TokenClass::Ltr => {
                if let Some(glyph_run) = GlyphRun::new(std::mem::take(&mut run)) {
                    glyph_run.emit(opts, out);
                    out.push(opts.ltr(" "));
                }
                out.push(opts.ltr(format!("{token} ")));
            }
        }
    }

    if let Some(glyph_run) = GlyphRun::new(run) {
        glyph_run.emit(opts, out);
    }
}

/// Segment `text` into fragments in visual order.
///
/// Never fails; empty input produces an empty list.
#[must_use]
pub fn segment_to_fragments(text: &str, opts: &SegmentOptions) -> Vec<Fragment> {
    let text = sanitize(text);
    let mut out = Vec::new();

    for (idx, line) in logical_lines(&text).enumerate() {
        if idx > 0 {
            out.push(opts.ltr(LINE_BREAK));
        }
        segment_line(line, opts, &mut out);
    }

    tracing::trace!(
        input_len = text.len(),
        fragments = out.len(),
        "segmented text"
    );
    out
}
