//! Terminal-level mode flags: the DEC private modes and ANSI modes that
//! shape input encoding and renderer hints rather than grid math directly
//! (grid-affecting flags - auto-wrap, origin mode, reverse-wraparound,
//! insert mode - live on [`crate::core::screen::Screen`] instead).

use crate::core::config::TerminalEncoding;

/// DEC private / ANSI mode flags owned by the [`crate::terminal::Terminal`]
/// facade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeFlags {
    /// DECCKM (1): application cursor keys.
    pub application_cursor_keys: bool,
    /// DECCOLM (3): 132-column mode.
    pub column_132: bool,
    /// DECSCNM (5): reverse video.
    pub reverse_video: bool,
    /// DECTCEM (25): cursor visibility (mirrored onto the active screen).
    pub cursor_visible: bool,
    /// Mode 12: text blink, gated by `enable_dec12` in [`crate::TerminalConfig`].
    pub blink: bool,
    /// Mode 1004: focus in/out reporting.
    pub focus_report: bool,
    /// Mode 1036: meta key sends escape.
    pub meta_sends_escape: bool,
    /// Mode 1039: alt key sends escape.
    pub alt_sends_escape: bool,
    /// Mode 2004: bracketed paste.
    pub bracketed_paste: bool,
    /// Mode 20 (LNM, non-private): auto-CR-on-LF.
    pub auto_carriage_return: bool,
    /// Current coding system, toggled at runtime by `ESC % G|@|/G|/H|/I`
    /// (spec.md §4.E); seeded from `TerminalConfig::terminal_encoding`.
    pub encoding: TerminalEncoding,
}

impl Default for ModeFlags {
    fn default() -> Self {
        Self {
            application_cursor_keys: false,
            column_132: false,
            reverse_video: false,
            cursor_visible: true,
            blink: false,
            focus_report: false,
            meta_sends_escape: false,
            alt_sends_escape: false,
            bracketed_paste: false,
            auto_carriage_return: false,
            encoding: TerminalEncoding::default(),
        }
    }
}

/// Which of the two screens is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Primary,
    Alternate,
}
