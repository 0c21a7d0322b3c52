#![forbid(unsafe_code)]

//! Style tags carried by every fragment.

use std::fmt;

use smallvec::SmallVec;

/// A single font style tag understood by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StyleTag {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Subscript,
    Superscript,
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::Strikethrough => "strikethrough",
            Self::Subscript => "subscript",
            Self::Superscript => "superscript",
        };
        f.write_str(name)
    }
}

/// Ordered, duplicate-free set of [`StyleTag`]s.
///
/// Insertion order is preserved because some hosts resolve font faces from
/// the first matching tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleSet(SmallVec<[StyleTag; 2]>);

impl StyleSet {
    /// The empty set: plain, upright, regular weight.
    #[must_use]
    pub fn normal() -> Self {
        Self::default()
    }

    /// Add a tag unless already present.
    pub fn insert(&mut self, tag: StyleTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Builder form of [`StyleSet::insert`].
    #[must_use]
    pub fn with(mut self, tag: StyleTag) -> Self {
        self.insert(tag);
        self
    }

    #[must_use]
    pub fn contains(&self, tag: StyleTag) -> bool {
        self.0.contains(&tag)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleTag> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[StyleTag] {
        &self.0
    }
}

impl From<StyleTag> for StyleSet {
    fn from(tag: StyleTag) -> Self {
        Self::normal().with(tag)
    }
}

impl From<Option<StyleTag>> for StyleSet {
    fn from(tag: Option<StyleTag>) -> Self {
        tag.map(Self::from).unwrap_or_default()
    }
}

impl From<&[StyleTag]> for StyleSet {
    fn from(tags: &[StyleTag]) -> Self {
        tags.iter().copied().collect()
    }
}

impl<const N: usize> From<[StyleTag; N]> for StyleSet {
    fn from(tags: [StyleTag; N]) -> Self {
        tags.into_iter().collect()
    }
}

impl FromIterator<StyleTag> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleTag>>(iter: I) -> Self {
        let mut set = Self::normal();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}
