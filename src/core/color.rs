//! Color values used by [`crate::core::attrs::TextAttributes`].

/// A terminal color: either the theme default, a palette index (0-255,
/// encompassing the basic 16, the 6x6x6 cube, and the grayscale ramp), or a
/// true-color RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    #[default]
    Default,
    Palette(u8),
    Rgb(u8, u8, u8),
}

impl Color {
    /// Convert a 256-color palette index. Indices 0-15 are the basic/bright
    /// ANSI colors, 16-231 the 6x6x6 RGB cube, 232-255 the grayscale ramp -
    /// the palette layout itself is a renderer concern; this crate only
    /// carries the index.
    #[must_use]
    pub fn from_palette(index: u8) -> Self { Color::Palette(index) }

    #[must_use]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self { Color::Rgb(r, g, b) }

    #[must_use]
    pub fn is_default(self) -> bool { matches!(self, Color::Default) }
}
