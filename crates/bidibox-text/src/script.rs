#![forbid(unsafe_code)]

//! Hebrew detection and token classification.
//!
//! Classification is done per token rather than per character: a token is
//! right-to-left as soon as it contains a single Hebrew code point. Mixed
//! tokens such as `"A1ב"` are therefore treated as wholly RTL. That is a
//! coarse rule, but it keeps alphanumeric codes inside Hebrew sentences in
//! one piece instead of splitting them mid-token.
//!
//! The Hebrew test is an explicit block-range predicate rather than a
//! Unicode property lookup, so behavior is pinned to the ranges below.
//!
//! # Example
//!
//! ```
//! use bidibox_text::script::{is_hebrew_char, is_rtl_word};
//!
//! assert!(is_hebrew_char('ש'));
//! assert!(is_rtl_word("שלום,"));
//! assert!(!is_rtl_word("hello"));
//! ```

// ---------------------------------------------------------------------------
// Character predicates
// ---------------------------------------------------------------------------

/// Whether `c` lies in the Hebrew block or the Hebrew presentation forms.
#[inline]
pub const fn is_hebrew_char(c: char) -> bool {
    matches!(c as u32, 0x0590..=0x05FF | 0xFB1D..=0xFB4F)
}

/// Whether `text` contains any right-to-left character.
#[must_use]
pub fn contains_rtl(text: &str) -> bool {
    text.chars().any(is_hebrew_char)
}

/// Whether a whitespace-delimited token belongs in an RTL run.
#[must_use]
pub fn is_rtl_word(token: &str) -> bool {
    contains_rtl(token)
}

// ---------------------------------------------------------------------------
// Token classification
// ---------------------------------------------------------------------------

/// Role of a token inside a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Whitespace only.
    Whitespace,
    /// Contains at least one Hebrew character.
    Rtl,
    /// Anything else.
    Ltr,
}

/// Classify a token. Empty tokens count as whitespace.
#[must_use]
pub fn classify_token(token: &str) -> TokenClass {
    if token.chars().all(char::is_whitespace) {
        TokenClass::Whitespace
    } else if is_rtl_word(token) {
        TokenClass::Rtl
    } else {
        TokenClass::Ltr
    }
}
