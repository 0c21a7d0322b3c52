//! Recording host surface shared by the integration tests.
//!
//! Layout model: greedy line filling with [`CharWidthMetric`] widths, line
//! height `1.2 × size`, plus leading between lines. The same model backs
//! the dry run and the native plain-text shrink, so both paths agree.

#![allow(dead_code)]

use std::cell::Cell;

use bidibox_layout::{BoxFrame, CharWidthMetric, Overflow, PdfSurface, PlainTextBox, Transform};
use bidibox_text::Fragment;

pub const LINE_HEIGHT_FACTOR: f32 = 1.2;
pub const NATIVE_STEP: f32 = 0.5;
pub const NATIVE_MIN_FONT_SIZE: f32 = 5.0;

#[derive(Debug, thiserror::Error)]
#[error("font {0:?} is not registered")]
pub struct UnknownFont(pub String);

#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Fragments {
        fragments: Vec<Fragment>,
        frame: BoxFrame,
        transform: Transform,
    },
    Plain {
        text: String,
        font: String,
        requested_size: f32,
        /// Size after the host's native shrink-to-fit.
        size: f32,
        frame: BoxFrame,
        transform: Transform,
    },
}

/// A piece of laid-out text: `None` is a forced line break.
type Piece<'a> = Option<(&'a str, f32)>;

pub struct RecordingSurface {
    pub metric: CharWidthMetric,
    pub dry_run: bool,
    pub missing_font: Option<String>,
    pub dry_runs: Cell<usize>,
    pub measures: Cell<usize>,
    pub draws: Vec<Draw>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            metric: CharWidthMetric::default(),
            dry_run: true,
            missing_font: None,
            dry_runs: Cell::new(0),
            measures: Cell::new(0),
            draws: Vec::new(),
        }
    }

    pub fn without_dry_run() -> Self {
        Self {
            dry_run: false,
            ..Self::new()
        }
    }

    pub fn missing_font(font: &str) -> Self {
        Self {
            missing_font: Some(font.to_owned()),
            ..Self::new()
        }
    }

    fn check_font(&self, font: &str) -> Result<(), UnknownFont> {
        match &self.missing_font {
            Some(missing) if missing == font => Err(UnknownFont(font.to_owned())),
            _ => Ok(()),
        }
    }

    /// Greedy layout; true if the pieces do not fit `frame`.
    pub fn overflows<'a>(&self, pieces: impl IntoIterator<Item = Piece<'a>>, frame: &BoxFrame) -> bool {
        let mut lines = 1usize;
        let mut line_width = 0.0f32;
        let mut tallest = 0.0f32;
        let mut any = false;

        for piece in pieces {
            any = true;
            let Some((text, size)) = piece else {
                lines += 1;
                line_width = 0.0;
                continue;
            };
            tallest = tallest.max(size);
            let width = self.metric.width(text, size);
            if width > frame.width {
                return true;
            }
            if line_width > 0.0 && line_width + width > frame.width {
                lines += 1;
                line_width = width;
            } else {
                line_width += width;
            }
        }

        if !any {
            return false;
        }
        let lines = lines as f32;
        let height = LINE_HEIGHT_FACTOR * tallest * lines + frame.leading * (lines - 1.0);
        frame.height.is_some_and(|h| height > h)
    }

    fn fragment_pieces(fragments: &[Fragment]) -> impl Iterator<Item = Piece<'_>> {
        fragments.iter().map(|f| {
            if f.is_line_break() {
                None
            } else {
                Some((f.text.as_str(), f.size))
            }
        })
    }

    /// Plain text split the way the host's own text box would see words.
    fn plain_pieces(text: &str, size: f32) -> Vec<Option<(String, f32)>> {
        let mut pieces = Vec::new();
        for (idx, line) in text.split('\n').enumerate() {
            if idx > 0 {
                pieces.push(None);
            }
            for word in line.split_whitespace() {
                pieces.push(Some((format!("{word} "), size)));
            }
        }
        pieces
    }

    fn plain_overflows(&self, text: &str, size: f32, frame: &BoxFrame) -> bool {
        let pieces = Self::plain_pieces(text, size);
        self.overflows(
            pieces
                .iter()
                .map(|p| p.as_ref().map(|(t, s)| (t.as_str(), *s))),
            frame,
        )
    }

    /// Native shrink-to-fit of the plain text box.
    pub fn native_shrink(&self, text: &str, size: f32, frame: &BoxFrame) -> f32 {
        let min = frame.min_font_size.unwrap_or(NATIVE_MIN_FONT_SIZE);
        let mut index = 0u32;
        loop {
            let candidate = size - NATIVE_STEP * index as f32;
            if candidate < min {
                return min;
            }
            if !self.plain_overflows(text, candidate, frame) {
                return candidate;
            }
            index += 1;
        }
    }

    /// Whether `fragments` overflow `frame`, without touching counters.
    pub fn check(&self, fragments: &[Fragment], frame: &BoxFrame) -> bool {
        self.overflows(Self::fragment_pieces(fragments), frame)
    }

    pub fn only_fragments(&self) -> (&[Fragment], &BoxFrame, &Transform) {
        assert_eq!(self.draws.len(), 1, "expected exactly one draw");
        match &self.draws[0] {
            Draw::Fragments {
                fragments,
                frame,
                transform,
            } => (fragments, frame, transform),
            other => panic!("expected a fragment draw, got {other:?}"),
        }
    }
}

impl PdfSurface for RecordingSurface {
    type Error = UnknownFont;

    fn measure_width(&self, text: &str, font: &str, size: f32) -> Result<f32, UnknownFont> {
        self.check_font(font)?;
        self.measures.set(self.measures.get() + 1);
        Ok(self.metric.width(text, size))
    }

    fn dry_run_overflows(
        &self,
        fragments: &[Fragment],
        frame: &BoxFrame,
    ) -> Option<Result<bool, UnknownFont>> {
        if !self.dry_run {
            return None;
        }
        self.dry_runs.set(self.dry_runs.get() + 1);
        if let Some(err) = fragments.iter().find_map(|f| self.check_font(&f.font).err()) {
            return Some(Err(err));
        }
        Some(Ok(self.check(fragments, frame)))
    }

    fn draw_fragments(
        &mut self,
        fragments: &[Fragment],
        frame: &BoxFrame,
        transform: &Transform,
    ) -> Result<(), UnknownFont> {
        for fragment in fragments {
            self.check_font(&fragment.font)?;
        }
        self.draws.push(Draw::Fragments {
            fragments: fragments.to_vec(),
            frame: *frame,
            transform: *transform,
        });
        Ok(())
    }

    fn draw_plain_text_box(
        &mut self,
        text: &str,
        request: &PlainTextBox<'_>,
        frame: &BoxFrame,
        transform: &Transform,
    ) -> Result<(), UnknownFont> {
        self.check_font(request.font)?;
        let size = if frame.overflow == Overflow::ShrinkToFit {
            self.native_shrink(text, request.size, frame)
        } else {
            request.size
        };
        self.draws.push(Draw::Plain {
            text: text.to_owned(),
            font: request.font.to_owned(),
            requested_size: request.size,
            size,
            frame: *frame,
            transform: *transform,
        });
        Ok(())
    }
}
