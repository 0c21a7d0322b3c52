#![forbid(unsafe_code)]

//! Input sanitizing for PDF text layout.
//!
//! Font subsetting in PDF writers tends to reject or silently mangle a
//! family of code points: zero-width and bidi controls, exotic spaces,
//! typographic dashes and quotes, arrows, bullets and separator controls.
//! [`sanitize`] maps all of them onto a small, safe repertoire before any
//! segmentation happens.
//!
//! # Rules
//!
//! Applied in this order, each rule seeing the output of the previous ones:
//!
//! 1. Zero-width, bidi-control and invisible operator code points are dropped.
//! 2. Non-breaking and fixed-width spaces become `' '`.
//! 3. Dash and minus variants become `'-'`.
//! 4. Curly/angled double quotes become `'"'`, single quotes become `'\''`.
//! 5. `…` becomes `"..."`.
//! 6. Arrows become `->`, `<-`, `^` or `v`.
//! 7. Bullets and list markers become `'*'`.
//! 8. Line/paragraph separators and replacement characters are dropped.
//!
//! Every replacement produces ASCII, so no rule can re-introduce a code
//! point an earlier rule handled. That makes the rules safe to evaluate in
//! a single pass and makes [`sanitize`] idempotent. `'\n'` is never touched:
//! it is the line delimiter the segmenter depends on.
//!
//! # Example
//! ```
//! use bidibox_text::sanitize::sanitize;
//!
//! assert_eq!(sanitize("a\u{200B}b \u{2014} \u{201C}c\u{201D}\u{2026}"), "ab - \"c\"...");
//! ```

use std::borrow::Cow;

/// What the sanitizer does with a single code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharAction {
    /// Keep the character as is.
    Keep,
    /// Remove the character.
    Drop,
    /// Replace the character with an ASCII string.
    Replace(&'static str),
}

/// Classify a code point against the sanitizer rules.
#[must_use]
pub const fn char_action(c: char) -> CharAction {
    match c {
        // 1. zero-width, bidi controls, soft hyphen, word joiner, invisible
        //    math operators, deprecated format controls, BOM
        '\u{00AD}'
        | '\u{061C}'
        | '\u{200B}'..='\u{200F}'
        | '\u{202A}'..='\u{202E}'
        | '\u{2060}'..='\u{2064}'
        | '\u{2066}'..='\u{206F}'
        | '\u{FEFF}' => CharAction::Drop,

        // 2. non-breaking and fixed-width spaces
        '\u{00A0}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => {
            CharAction::Replace(" ")
        }

        // 3. dashes, minus, small-form and fullwidth hyphens
        '\u{2010}'..='\u{2015}' | '\u{2212}' | '\u{FE58}' | '\u{FE63}' | '\u{FF0D}' => {
            CharAction::Replace("-")
        }

        // 4. quotation marks
        '\u{201C}'..='\u{201F}' | '\u{00AB}' | '\u{00BB}' | '\u{301D}'..='\u{301F}' => {
            CharAction::Replace("\"")
        }
        '\u{2018}'..='\u{201B}' | '\u{2039}' | '\u{203A}' => CharAction::Replace("'"),

        // 5. ellipsis
        '\u{2026}' => CharAction::Replace("..."),

        // 6. arrows
        '\u{2192}' => CharAction::Replace("->"),
        '\u{2190}' => CharAction::Replace("<-"),
        '\u{2191}' => CharAction::Replace("^"),
        '\u{2193}' => CharAction::Replace("v"),

        // 7. bullets
        '\u{2022}' | '\u{2023}' | '\u{2043}' | '\u{204C}' | '\u{204D}' | '\u{2219}'
        | '\u{25AA}' | '\u{25AB}' | '\u{25CB}' | '\u{25CF}' | '\u{25E6}' => {
            CharAction::Replace("*")
        }

        // 8. separators, object replacement, replacement char, noncharacter
        '\u{2028}' | '\u{2029}' | '\u{FFFC}' | '\u{FFFD}' | '\u{FFFF}' => CharAction::Drop,

        _ => CharAction::Keep,
    }
}

/// Whether `text` is already sanitized.
#[must_use]
pub fn is_sanitized(text: &str) -> bool {
    text.chars().all(|c| matches!(char_action(c), CharAction::Keep))
}

/// Sanitize text for the PDF text layer.
///
/// Borrows the input when nothing needs to change.
#[must_use]
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let Some(first_dirty) = text
        .char_indices()
        .find(|&(_, c)| !matches!(char_action(c), CharAction::Keep))
        .map(|(i, _)| i)
    else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first_dirty]);
    for c in text[first_dirty..].chars() {
        match char_action(c) {
            CharAction::Keep => out.push(c),
            CharAction::Drop => {}
            CharAction::Replace(s) => out.push_str(s),
        }
    }
    Cow::Owned(out)
}

/// Sanitize, then compose to Unicode NFC.
///
/// Composition only ever produces letters and combining forms, never one
/// of the code points the sanitizer rewrites, so the result is still a
/// fixed point of [`sanitize`].
#[cfg(feature = "normalization")]
#[must_use]
pub fn sanitize_nfc(text: &str) -> String {
    use unicode_normalization::UnicodeNormalization;

    sanitize(text).nfc().collect()
}
