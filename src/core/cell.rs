//! A single grid cell.

use crate::core::attrs::TextAttributes;
use smallstr::SmallString;
use unicode_segmentation::UnicodeSegmentation;

/// A cell's glyph: base character plus zero or more combining marks, stored
/// inline for the common case (almost always 1-2 chars).
pub type Glyph = SmallString<[u8; 8]>;

/// One cell in the screen grid.
///
/// Invariant: a wide cell at column `c` occupies `(c, c+1)`; the cell at
/// `c+1` is a [`Cell::spacer`] placeholder and must never become the
/// cursor's resting location after a write without explicit user motion.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub glyph: Glyph,
    pub width: u8,
    pub attrs: TextAttributes,
}

impl Default for Cell {
    fn default() -> Self { Self::blank(TextAttributes::default()) }
}

impl Cell {
    #[must_use]
    pub fn blank(attrs: TextAttributes) -> Self {
        Self { glyph: Glyph::from(" "), width: 1, attrs }
    }

    #[must_use]
    pub fn new(glyph: impl Into<Glyph>, width: u8, attrs: TextAttributes) -> Self {
        Self { glyph: glyph.into(), width, attrs }
    }

    /// The placeholder occupying the second column of a wide cell.
    #[must_use]
    pub fn spacer(attrs: TextAttributes) -> Self {
        Self { glyph: Glyph::new(), width: 0, attrs }
    }

    #[must_use]
    pub fn is_spacer(&self) -> bool { self.width == 0 }

    #[must_use]
    pub fn is_wide(&self) -> bool { self.width == 2 }

    /// Append a combining mark to this cell's glyph in place.
    pub fn push_combining(&mut self, mark: char) { self.glyph.push(mark); }
}

/// A contiguous run of text tagged with the column width its glyphs
/// occupy. Mirrors spec.md 4.A's `splitWidecharString`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphFragment {
    pub text: String,
    pub wide: bool,
}

/// Split `s` into fragments where each fragment is either a run of
/// width-1 ("narrow") glyphs or a single width-2 ("wide") glyph, using the
/// same `unicode_width` rule [`crate::core::screen::Screen::print_char`]
/// applies per character. Mirrors spec.md 4.A's `splitWidecharString`.
///
/// Iterates extended grapheme clusters (via `unicode-segmentation`) rather
/// than `chars()`, so a base character plus its combining marks is always
/// kept together and measured by the base character's width.
#[must_use]
pub fn split_widechar_string(s: &str) -> Vec<GlyphFragment> {
    let mut out: Vec<GlyphFragment> = Vec::new();
    for grapheme in s.graphemes(true) {
        let base = grapheme.chars().next().unwrap_or(' ');
        let wide = unicode_width::UnicodeWidthChar::width(base).unwrap_or(1) == 2;
        if wide {
            out.push(GlyphFragment { text: grapheme.to_string(), wide: true });
        } else if let Some(last) = out.last_mut().filter(|f| !f.wide) {
            last.text.push_str(grapheme);
        } else {
            out.push(GlyphFragment { text: grapheme.to_string(), wide: false });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_narrow_run_and_wide_glyph() {
        let frags = split_widechar_string("hi\u{4e2d}bye");
        assert_eq!(frags.len(), 3);
        assert_eq!(frags[0], GlyphFragment { text: "hi".into(), wide: false });
        assert_eq!(frags[1], GlyphFragment { text: "\u{4e2d}".into(), wide: true });
        assert_eq!(frags[2], GlyphFragment { text: "bye".into(), wide: false });
    }

    #[test]
    fn combining_mark_stays_attached() {
        let frags = split_widechar_string("e\u{301}");
        assert_eq!(frags.len(), 1);
        assert_eq!(frags[0].text, "e\u{301}");
    }
}
