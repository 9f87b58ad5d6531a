//! Text attributes: the immutable-by-copy style descriptor attached to every
//! [`crate::core::cell::Cell`], and the SGR (Select Graphic Rendition)
//! parameter-folding algorithm that mutates it.

use crate::core::color::Color;
use crate::parser::protocols::params_ext::ParamsExt;

/// Underline rendering style, selected by the SGR 4 subparameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineStyle {
    #[default]
    None,
    Solid,
    Double,
    Wavy,
    Dotted,
    Dashed,
}

/// A complete, `Copy`-able set of character rendering attributes.
///
/// Hyperlinks are stored as an index into a per-screen interner
/// (`Screen::hyperlinks`) rather than an inline `String`, so that this type
/// stays small and `Copy` - see DESIGN.md for the rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextAttributes {
    pub foreground: Color,
    pub background: Color,
    pub underline_color: Color,
    pub bold: bool,
    pub italic: bool,
    pub faint: bool,
    pub underline: UnderlineStyle,
    pub blink: bool,
    pub inverse: bool,
    pub invisible: bool,
    pub strikethrough: bool,
    pub wide_char: bool,
    pub hyperlink_id: Option<u32>,
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self {
            foreground: Color::Default,
            background: Color::Default,
            underline_color: Color::Default,
            bold: false,
            italic: false,
            faint: false,
            underline: UnderlineStyle::None,
            blink: false,
            inverse: false,
            invisible: false,
            strikethrough: false,
            wide_char: false,
            hyperlink_id: None,
        }
    }
}

impl TextAttributes {
    #[must_use]
    pub fn is_default(&self) -> bool { *self == Self::default() }

    pub fn reset(&mut self) { *self = Self::default(); }

    pub fn set_foreground(&mut self, color: Color) { self.foreground = color; }

    pub fn set_background(&mut self, color: Color) { self.background = color; }

    /// Apply one SGR numeric parameter in isolation (no sub-parameters, no
    /// extended-color lookahead - that is handled by [`apply_sgr`]).
    pub fn apply_sgr_single(&mut self, code: u16) {
        match code {
            0 => self.reset(),
            1 => self.bold = true,
            2 => self.faint = true,
            3 => self.italic = true,
            4 => self.underline = UnderlineStyle::Solid,
            5 | 6 => self.blink = true,
            7 => self.inverse = true,
            8 => self.invisible = true,
            9 => self.strikethrough = true,
            21 => self.underline = UnderlineStyle::Double,
            22 => { self.bold = false; self.faint = false; }
            23 => self.italic = false,
            24 => self.underline = UnderlineStyle::None,
            25 => self.blink = false,
            27 => self.inverse = false,
            28 => self.invisible = false,
            29 => self.strikethrough = false,
            30..=37 => self.foreground = Color::Palette((code - 30) as u8),
            39 => self.foreground = Color::Default,
            40..=47 => self.background = Color::Palette((code - 40) as u8),
            49 => self.background = Color::Default,
            59 => self.underline_color = Color::Default,
            90..=97 => self.foreground = Color::Palette((code - 90 + 8) as u8),
            100..=107 => self.background = Color::Palette((code - 100 + 8) as u8),
            _ => {} // Unknown parameters are ignored per spec.
        }
    }

    /// Apply the subparameter carried by `CSI 4:n m` (underline style).
    pub fn apply_underline_subparam(&mut self, sub: u16) {
        self.underline = match sub {
            0 => UnderlineStyle::None,
            1 => UnderlineStyle::Solid,
            2 => UnderlineStyle::Double,
            3 => UnderlineStyle::Wavy,
            4 => UnderlineStyle::Dotted,
            5 => UnderlineStyle::Dashed,
            _ => return, // Other subargs leave it unset, per spec.
        };
    }

    /// Run the full SGR algorithm (spec.md 4.A) over a `vte::Params` list,
    /// handling plain codes, the SGR-4 underline-style subparam, and the
    /// extended-color selectors 38/48/58 in both colon and semicolon form.
    pub fn apply_sgr(&mut self, params: &vte::Params) {
        if params.is_empty() {
            self.reset();
            return;
        }

        let mut iter = params.iter().enumerate().peekable();
        while let Some((idx, slice)) = iter.next() {
            let Some(&first) = slice.first() else { continue };

            if (first == 38 || first == 48 || first == 58) && slice.len() > 1 {
                // Colon form: the whole selector arrived as one parameter's
                // sub-parameters, e.g. `38:2::171:181:191` -> [38,2,0,171,181,191].
                self.apply_extended_color_slice(slice);
                continue;
            }

            if first == 38 || first == 48 || first == 58 {
                // Semicolon form: selector, mode, and components each arrive
                // as their own single-value parameter. Collect the run.
                if let Some(values) = params.extract_semicolon_color_run(idx) {
                    self.apply_extended_color_values(first, &values);
                    // Skip past the parameters the run consumed.
                    for _ in 0..values.len() {
                        iter.next();
                    }
                    continue;
                }
            }

            if first == 4 && slice.len() > 1 {
                self.apply_underline_subparam(slice[1]);
                continue;
            }

            self.apply_sgr_single(first);
        }
    }

    fn apply_extended_color_slice(&mut self, slice: &[u16]) {
        self.apply_extended_color_values(slice[0], &slice[1..]);
    }

    fn apply_extended_color_values(&mut self, selector: u16, rest: &[u16]) {
        let color = match rest {
            [5, index, ..] if *index <= 255 => Some(Color::Palette(*index as u8)),
            // Colon form sometimes carries a color-space id as rest[0] (often
            // 0, meaning "unspecified") before r;g;b, e.g. `2:0:r:g:b`.
            [2, r, g, b] if *r <= 255 && *g <= 255 && *b <= 255 => {
                Some(Color::Rgb(*r as u8, *g as u8, *b as u8))
            }
            [2, _space, r, g, b, ..] if *r <= 255 && *g <= 255 && *b <= 255 => {
                Some(Color::Rgb(*r as u8, *g as u8, *b as u8))
            }
            _ => None,
        };
        let Some(color) = color else { return };
        match selector {
            38 => self.foreground = color,
            48 => self.background = color,
            58 => self.underline_color = color,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn default_is_default() {
        assert!(TextAttributes::default().is_default());
    }

    #[test]
    fn bold_round_trip() {
        let mut a = TextAttributes::default();
        a.apply_sgr_single(1);
        assert!(a.bold);
        a.apply_sgr_single(22);
        assert!(!a.bold);
    }

    #[test]
    fn underline_style_subparam() {
        let mut a = TextAttributes::default();
        a.apply_underline_subparam(3);
        assert_eq!(a.underline, UnderlineStyle::Wavy);
    }

    #[test_case(30, Color::Palette(0); "black fg")]
    #[test_case(31, Color::Palette(1); "red fg")]
    #[test_case(37, Color::Palette(7); "white fg")]
    #[test_case(90, Color::Palette(8); "bright black fg")]
    #[test_case(97, Color::Palette(15); "bright white fg")]
    fn palette_foreground_codes(code: u16, expected: Color) {
        let mut a = TextAttributes::default();
        a.apply_sgr_single(code);
        pretty_assertions::assert_eq!(a.foreground, expected);
    }

    #[test_case(40, Color::Palette(0); "black bg")]
    #[test_case(47, Color::Palette(7); "white bg")]
    #[test_case(100, Color::Palette(8); "bright black bg")]
    #[test_case(107, Color::Palette(15); "bright white bg")]
    fn palette_background_codes(code: u16, expected: Color) {
        let mut a = TextAttributes::default();
        a.apply_sgr_single(code);
        pretty_assertions::assert_eq!(a.background, expected);
    }
}
