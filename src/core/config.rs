//! The configuration object the core reads tunables from (spec.md §6).
//! No file or environment parsing happens here - that belongs to an
//! embedder; this is a plain, `Default`-able struct.

use crate::core::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminalEncoding {
    #[default]
    Utf8,
    Iso2022,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TerminalConfig {
    pub default_foreground: Color,
    pub default_background: Color,
    pub default_cursor_color: Color,
    /// Cap, in bytes, on OSC/DCS/PM/APC string payloads before the parser
    /// abandons the sequence (`ParserAbandonedSequence`).
    pub max_string_sequence: usize,
    /// Read by `Terminal::feed` (spec.md §4.E's 8-bit C1 handling rule):
    /// when false, a standalone byte 0x80-0x9F in GROUND state is printed
    /// as its literal codepoint (U+0080-U+009F); when true, it is mapped to
    /// its 7-bit escape equivalent before reaching the parser (0x9B -> CSI,
    /// 0x9D -> OSC, ...).
    pub enable_8bit_control: bool,
    pub enable_dec12: bool,
    pub enable_csi_j_3: bool,
    pub enable_bold: bool,
    pub enable_bold_as_bright: bool,
    pub enable_blink: bool,
    pub terminal_encoding: TerminalEncoding,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            default_foreground: Color::Default,
            default_background: Color::Default,
            default_cursor_color: Color::Default,
            max_string_sequence: 100_000,
            enable_8bit_control: false,
            enable_dec12: false,
            enable_csi_j_3: false,
            enable_bold: true,
            enable_bold_as_bright: true,
            enable_blink: true,
            terminal_encoding: TerminalEncoding::Utf8,
        }
    }
}
