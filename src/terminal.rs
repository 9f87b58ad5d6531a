//! The Terminal Facade (component G): orchestrates the Screen Model,
//! Parser, and Command Dispatcher, owning mode flags and the
//! alternate-screen swap. Grounded on the teacher's top-level PTY-mux
//! terminal-emulator struct, which wires a `vte::Parser` to a `Perform`
//! impl that borrows the rest of its state for the duration of one
//! `advance` call - the same shape used here for `feed`.

use crate::core::attrs::TextAttributes;
use crate::core::cell::Cell;
use crate::core::config::TerminalConfig;
use crate::core::error::GridError;
use crate::core::events::TerminalEvent;
use crate::core::modes::{ModeFlags, ScreenId};
use crate::core::row::Row;
use crate::core::screen::{CursorShape, CursorState, Screen};
use crate::core::scrollback::Scrollback;
use crate::parser::perform::{AnsiPerformer, DcsCapture};
use vte::Perform;

/// Owns both screens, the scrollback buffer, parser state, and mode flags;
/// the single entry point an embedder (PTY host, renderer) talks to.
#[derive(Debug)]
pub struct Terminal {
    primary: Screen,
    alternate: Screen,
    active: ScreenId,
    scrollback: Scrollback,
    parser: vte::Parser,
    mode: ModeFlags,
    config: TerminalConfig,
    response: Vec<u8>,
    dcs: DcsCapture,
    /// Remaining UTF-8 continuation bytes expected after the last lead byte
    /// fed through `feed`, tracked independently of `vte`'s own decoder so a
    /// standalone C1 byte (0x80-0x9F) can be told apart from a continuation
    /// byte of a legitimately encoded scalar when `enable_8bit_control` is
    /// off (spec.md §4.E).
    utf8_continuation_remaining: u8,
}

/// Length, in trailing continuation bytes, of the UTF-8 scalar a lead byte
/// starts; 0 for single-byte (including non-lead, non-ASCII) bytes.
fn utf8_continuation_len(byte: u8) -> u8 {
    match byte {
        0xC2..=0xDF => 1,
        0xE0..=0xEF => 2,
        0xF0..=0xF4 => 3,
        _ => 0,
    }
}

impl Terminal {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(width, height, TerminalConfig::default())
    }

    #[must_use]
    pub fn with_config(width: usize, height: usize, config: TerminalConfig) -> Self {
        let mode = ModeFlags { encoding: config.terminal_encoding, ..ModeFlags::default() };
        Self {
            primary: Screen::new(width, height),
            alternate: Screen::new(width, height),
            active: ScreenId::Primary,
            scrollback: Scrollback::default(),
            parser: vte::Parser::new(),
            mode,
            config,
            response: Vec::new(),
            dcs: DcsCapture::default(),
            utf8_continuation_remaining: 0,
        }
    }

    /// Feed a chunk of host bytes through the parser, applying every
    /// resulting command before returning. Chunk boundaries may split any
    /// multi-byte construct (a UTF-8 scalar, an ESC sequence, an OSC
    /// payload); the parser resumes correctly on the next call regardless
    /// of how the caller partitions the stream (spec.md §8).
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<TerminalEvent> {
        let mut events = Vec::new();
        {
            let mut performer = AnsiPerformer {
                primary: &mut self.primary,
                alternate: &mut self.alternate,
                active: &mut self.active,
                scrollback: &mut self.scrollback,
                mode: &mut self.mode,
                config: &self.config,
                response: &mut self.response,
                events: &mut events,
                dcs: &mut self.dcs,
            };
            for &byte in bytes {
                // spec.md §4.E: with 8-bit control disabled, a standalone
                // 0x80-0x9F byte is a printable codepoint, not a C1
                // introducer - vte itself always treats it as the latter, so
                // that branch is intercepted here before it ever reaches the
                // parser. A byte in that range that is instead a UTF-8
                // continuation byte of a properly encoded scalar is left
                // alone and falls through to the parser as usual.
                if !self.config.enable_8bit_control
                    && self.utf8_continuation_remaining == 0
                    && (0x80..=0x9F).contains(&byte)
                {
                    performer.print(char::from_u32(u32::from(byte)).unwrap_or('\u{FFFD}'));
                    continue;
                }
                if self.utf8_continuation_remaining > 0 && (0x80..=0xBF).contains(&byte) {
                    self.utf8_continuation_remaining -= 1;
                } else {
                    self.utf8_continuation_remaining = utf8_continuation_len(byte);
                }
                self.parser.advance(&mut performer, byte);
            }
        }
        events
    }

    /// Drain and return any response bytes (device status, cursor-position
    /// report, OSC query replies, focus reports) queued since the last
    /// call, for the embedder to forward upstream.
    pub fn take_response(&mut self) -> Vec<u8> { std::mem::take(&mut self.response) }

    #[must_use]
    pub fn width(&self) -> usize { self.active_screen().width() }

    #[must_use]
    pub fn height(&self) -> usize { self.active_screen().height() }

    #[must_use]
    pub fn config(&self) -> &TerminalConfig { &self.config }

    #[must_use]
    pub fn active_screen_id(&self) -> ScreenId { self.active }

    fn active_screen(&self) -> &Screen {
        match self.active {
            ScreenId::Primary => &self.primary,
            ScreenId::Alternate => &self.alternate,
        }
    }

    /// Resize both screens. Per spec.md §4.C, width changes never re-flow
    /// historical content; only the primary screen's shrinkage feeds
    /// scrollback (the alternate screen discards, preserving the
    /// primary-only-scrollback invariant). Returns the corresponding
    /// [`TerminalEvent::Resize`] for an embedder that threads facade calls
    /// through the same event channel `feed` uses.
    pub fn resize(&mut self, width: usize, height: usize) -> TerminalEvent {
        self.primary.resize(width, height, Some(&mut self.scrollback));
        self.alternate.resize(width, height, None);
        TerminalEvent::Resize(width, height)
    }

    /// Explicit alternate-screen swap (mirrors CSI `?1049h`/`l`): saves and
    /// restores the cursor around the swap and simply repoints the active
    /// screen - no content is copied.
    pub fn set_alternate_screen(&mut self, enable: bool) {
        let currently_alt = matches!(self.active, ScreenId::Alternate);
        if enable == currently_alt { return; }
        if enable {
            self.primary.save_cursor();
            self.active = ScreenId::Alternate;
            self.alternate.erase_all();
        } else {
            self.active = ScreenId::Primary;
            self.primary.restore_cursor();
        }
    }

    /// `ESC c` (RIS): full reset. Recreates both screens at their current
    /// dimensions, drops mode flags and scrollback, and clears any
    /// buffered response bytes.
    pub fn reset(&mut self) {
        let (w, h) = (self.primary.width(), self.primary.height());
        self.primary = Screen::new(w, h);
        self.alternate = Screen::new(w, h);
        self.active = ScreenId::Primary;
        self.mode = ModeFlags { encoding: self.config.terminal_encoding, ..ModeFlags::default() };
        self.scrollback.clear();
        self.response.clear();
        self.dcs = DcsCapture::default();
        self.utf8_continuation_remaining = 0;
    }

    /// `CSI ! p` (DECSTR): resets modes and the scroll region to defaults
    /// on the active screen; palette and cursor visibility are left intact
    /// (the documented exceptions, per spec.md §4.G).
    pub fn soft_reset(&mut self) {
        let cursor_visible = self.mode.cursor_visible;
        {
            let screen = match self.active {
                ScreenId::Primary => &mut self.primary,
                ScreenId::Alternate => &mut self.alternate,
            };
            screen.reset_scroll_region();
            screen.origin_mode = false;
            screen.auto_wrap = true;
            screen.reverse_wraparound = false;
            screen.insert_mode = false;
            screen.attrs = TextAttributes::default();
            screen.set_cursor_position(0, 0);
        }
        self.mode.application_cursor_keys = false;
        self.mode.column_132 = false;
        self.mode.reverse_video = false;
        self.mode.cursor_visible = cursor_visible;
    }

    #[must_use]
    pub fn get_cursor(&self) -> CursorState { self.active_screen().cursor }

    #[must_use]
    pub fn cursor_shape(&self) -> CursorShape { self.active_screen().cursor_shape }

    #[must_use]
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> { self.active_screen().cell(row, col) }

    pub fn try_get_cell(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        self.active_screen().try_cell(row, col)
    }

    /// Iterate the visible rows of the active screen, top to bottom, for a
    /// renderer.
    pub fn rows(&self) -> impl Iterator<Item = &Row> { self.active_screen().rows().iter() }

    #[must_use]
    pub fn scrollback_len(&self) -> usize { self.scrollback.len() }

    #[must_use]
    pub fn scrollback_row(&self, i: usize) -> Option<&Row> { self.scrollback.get(i) }

    #[must_use]
    pub fn mode_flags(&self) -> &ModeFlags { &self.mode }

    /// Current coding system, mutable at runtime via `ESC %` (spec.md §4.E).
    #[must_use]
    pub fn encoding(&self) -> crate::core::config::TerminalEncoding { self.mode.encoding }

    /// Notify the terminal of an embedder-side focus change. When mode 1004
    /// (focus-report) is enabled, queues the bit-exact response bytes
    /// (`ESC [ I` / `ESC [ O`, spec.md §6) and returns the corresponding
    /// event; a no-op response (but still an event) when the mode is off,
    /// since the focus change itself still happened.
    pub fn report_focus(&mut self, focused: bool) -> TerminalEvent {
        if self.mode.focus_report {
            self.response.extend_from_slice(if focused { b"\x1b[I" } else { b"\x1b[O" });
        }
        TerminalEvent::FocusChanged(focused)
    }

    /// Wrap an embedder-supplied paste payload in the bracketed-paste
    /// markers (`ESC [ 200 ~ ... ESC [ 201 ~`, spec.md §6) when mode 2004 is
    /// enabled; returns the payload unwrapped otherwise. The input-side
    /// encoding of the payload itself (keyboard/paste -> host bytes) is out
    /// of scope - this only applies the wrapping an embedder forwards
    /// upstream.
    #[must_use]
    pub fn encode_paste(&self, payload: &[u8]) -> Vec<u8> {
        if !self.mode.bracketed_paste {
            return payload.to_vec();
        }
        let mut out = Vec::with_capacity(payload.len() + 12);
        out.extend_from_slice(b"\x1b[200~");
        out.extend_from_slice(payload);
        out.extend_from_slice(b"\x1b[201~");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(term: &Terminal, row: usize) -> String {
        term.rows().nth(row).map_or_else(String::new, |r| r.cells().iter().map(|c| c.glyph.as_str()).collect())
    }

    #[test]
    fn feed_across_chunk_boundary_reassembles_utf8() {
        let mut term = Terminal::new(10, 3);
        let bytes = "h\u{e9}llo".as_bytes();
        for chunk in [&bytes[0..1], &bytes[1..2], &bytes[2..]] {
            term.feed(chunk);
        }
        assert_eq!(row_text(&term, 0).trim_end(), "h\u{e9}llo");
    }

    #[test]
    fn device_attributes_response_is_bit_exact() {
        let mut term = Terminal::new(10, 3);
        term.feed(b"\x1b[c");
        assert_eq!(term.take_response(), b"\x1b[?1;2c");
    }

    #[test]
    fn cursor_position_report_is_one_based() {
        let mut term = Terminal::new(10, 3);
        term.feed(b"\x1b[2;3H");
        term.feed(b"\x1b[6n");
        assert_eq!(term.take_response(), b"\x1b[2;3R");
    }

    #[test]
    fn alternate_screen_does_not_feed_scrollback() {
        let mut term = Terminal::new(5, 2);
        term.feed(b"\x1b[?1049h");
        for _ in 0..10 {
            term.feed(b"\r\nx");
        }
        assert_eq!(term.scrollback_len(), 0);
        term.feed(b"\x1b[?1049l");
    }

    #[test]
    fn resize_returns_matching_event() {
        let mut term = Terminal::new(10, 3);
        assert_eq!(term.resize(20, 6), TerminalEvent::Resize(20, 6));
        assert_eq!((term.width(), term.height()), (20, 6));
    }

    #[test]
    fn focus_report_emits_bit_exact_response_when_mode_enabled() {
        let mut term = Terminal::new(10, 3);
        term.feed(b"\x1b[?1004h");
        assert_eq!(term.report_focus(true), TerminalEvent::FocusChanged(true));
        assert_eq!(term.take_response(), b"\x1b[I");
        assert_eq!(term.report_focus(false), TerminalEvent::FocusChanged(false));
        assert_eq!(term.take_response(), b"\x1b[O");
    }

    #[test]
    fn focus_report_is_silent_when_mode_disabled() {
        let mut term = Terminal::new(10, 3);
        term.report_focus(true);
        assert!(term.take_response().is_empty());
    }

    #[test]
    fn bracketed_paste_wraps_only_when_mode_enabled() {
        let mut term = Terminal::new(10, 3);
        assert_eq!(term.encode_paste(b"hi"), b"hi");
        term.feed(b"\x1b[?2004h");
        assert_eq!(term.encode_paste(b"hi"), b"\x1b[200~hi\x1b[201~");
    }

    #[test]
    fn standalone_c1_byte_prints_literally_when_8bit_control_disabled() {
        let mut term = Terminal::new(10, 2);
        assert!(!term.config().enable_8bit_control);
        term.feed(&[0x41, 0x9B, 0x42]); // 'A', raw CSI-introducer byte, 'B'
        assert_eq!(row_text(&term, 0).trim_end(), "A\u{9b}B");
    }

    #[test]
    fn c1_byte_as_utf8_continuation_is_not_misread_as_standalone() {
        let mut term = Terminal::new(10, 2);
        // U+0090 encoded as UTF-8 (0xC2 0x90): the second byte falls in the
        // 0x80-0x9F range but must not be intercepted as a standalone C1.
        term.feed(&[0xC2, 0x90]);
        assert_eq!(row_text(&term, 0).trim_end(), "\u{90}");
    }

    #[test]
    fn esc_percent_toggles_tracked_encoding() {
        let mut term = Terminal::new(10, 2);
        assert_eq!(term.encoding(), crate::core::config::TerminalEncoding::Utf8);
        term.feed(b"\x1b%@");
        assert_eq!(term.encoding(), crate::core::config::TerminalEncoding::Iso2022);
        term.feed(b"\x1b%G");
        assert_eq!(term.encoding(), crate::core::config::TerminalEncoding::Utf8);
        term.feed(b"\x1b%@\x1b%/G");
        assert_eq!(term.encoding(), crate::core::config::TerminalEncoding::Utf8);
    }

    #[test]
    fn reset_clears_scrollback_and_screen() {
        let mut term = Terminal::new(5, 2);
        for _ in 0..10 {
            term.feed(b"\r\nx");
        }
        assert!(term.scrollback_len() > 0);
        term.feed(b"\x1bc");
        assert_eq!(term.scrollback_len(), 0);
        assert_eq!(row_text(&term, 0).trim_end(), "");
    }
}
