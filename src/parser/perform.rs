//! The `vte::Perform` implementation: Component F, the Command Dispatcher.
//!
//! Grounded on the teacher's `AnsiToOfsBufPerformer` / `perform.rs`: a thin
//! `match` on the dispatch byte, one line per case, delegating into
//! `operations/*` shims. Unlike the teacher - which intentionally skips
//! ED/EL, tab control, device-attributes, cursor-shape, and most of the DEC
//! private mode set ("the 80% of VT100 features that 99% of modern
//! applications use") - every one of those is wired up here, because
//! SPEC_FULL.md requires the complete set.

use crate::core::config::{TerminalConfig, TerminalEncoding};
use crate::core::events::TerminalEvent;
use crate::core::modes::{ModeFlags, ScreenId};
use crate::core::screen::Screen;
use crate::core::scrollback::Scrollback;
use crate::parser::operations::{
    char_ops, control_ops, cursor_ops, dsr_ops, line_ops, margin_ops, mode_ops, osc_ops,
    scroll_ops, sgr_ops, tab_ops, terminal_ops,
};
use crate::parser::protocols::constants::*;

/// Bookkeeping for an in-progress DCS string, used only to honor the
/// `max_string_sequence` cap; the payload itself is never interpreted (see
/// SPEC_FULL.md §9 - DCS stays semantically inert).
#[derive(Debug, Default)]
pub(crate) struct DcsCapture {
    pub byte_count: usize,
    pub abandoned: bool,
}

/// Borrows every piece of [`crate::terminal::Terminal`] state the
/// dispatcher needs except the `vte::Parser` itself (which stays a
/// sibling field on `Terminal`, avoiding a self-referential struct).
pub struct AnsiPerformer<'a> {
    pub primary: &'a mut Screen,
    pub alternate: &'a mut Screen,
    pub active: &'a mut ScreenId,
    pub scrollback: &'a mut Scrollback,
    pub mode: &'a mut ModeFlags,
    pub config: &'a TerminalConfig,
    pub response: &'a mut Vec<u8>,
    pub events: &'a mut Vec<TerminalEvent>,
    pub dcs: &'a mut DcsCapture,
}

impl<'a> AnsiPerformer<'a> {
    pub fn screen(&mut self) -> &mut Screen {
        match self.active {
            ScreenId::Primary => self.primary,
            ScreenId::Alternate => self.alternate,
        }
    }

    pub fn drain_pending_scrollback(&mut self) {
        if matches!(self.active, ScreenId::Alternate) {
            // Invariant: the alternate screen never evicts rows to
            // scrollback. Any rows it staged are discarded.
            self.alternate.take_pending_scrollback();
            return;
        }
        for row in self.primary.take_pending_scrollback() {
            self.scrollback.push(row);
        }
    }
}

impl vte::Perform for AnsiPerformer<'_> {
    fn print(&mut self, ch: char) {
        char_ops::print_char(self, ch);
        self.drain_pending_scrollback();
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            0x08 => control_ops::handle_backspace(self),
            0x09 => control_ops::handle_tab(self),
            0x0A | 0x0B | 0x0C => control_ops::handle_line_feed(self),
            0x0D => control_ops::handle_carriage_return(self),
            ESC_SHIFT_OUT => self.screen().charset.shift_out(),
            ESC_SHIFT_IN => self.screen().charset.shift_in(),
            _ => tracing::trace!(byte, "ignoring unhandled C0/C1 control"),
        }
        self.drain_pending_scrollback();
    }

    fn hook(&mut self, _params: &vte::Params, _intermediates: &[u8], _ignore: bool, _action: char) {
        self.dcs.byte_count = 0;
        self.dcs.abandoned = false;
    }

    fn put(&mut self, _byte: u8) {
        self.dcs.byte_count += 1;
        if self.dcs.byte_count > self.config.max_string_sequence {
            self.dcs.abandoned = true;
        }
    }

    fn unhook(&mut self) {
        // DCS payloads are intentionally inert (see SPEC_FULL.md §9); only
        // the cap bookkeeping above has any observable effect.
        self.dcs.abandoned = false;
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        let total: usize = params.iter().map(|p| p.len()).sum();
        if total > self.config.max_string_sequence {
            tracing::debug!(total, "OSC payload exceeded max_string_sequence, dropping");
            return;
        }
        osc_ops::dispatch_osc(self, params, bell_terminated);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        match (intermediates, byte) {
            ([], ESC_DECSC_SAVE_CURSOR) => cursor_ops::save_cursor(self),
            ([], ESC_DECRC_RESTORE_CURSOR) => cursor_ops::restore_cursor(self),
            ([], ESC_IND_INDEX_DOWN) => scroll_ops::index_down(self),
            ([], ESC_NEL_NEXT_LINE) => { self.screen().newline(); }
            ([], ESC_RI_REVERSE_INDEX) => scroll_ops::reverse_index_up(self),
            ([], ESC_RIS_RESET) => terminal_ops::reset_terminal(self),
            ([], ESC_HTS_SET_TAB_STOP) => tab_ops::set_tab_stop_at_cursor(self),
            ([], ESC_SS2) => self.screen().charset.single_shift_g2(),
            ([], ESC_SS3) => self.screen().charset.single_shift_g3(),
            ([], ESC_DECKPAM | ESC_DECKPNM) => {} // Keypad mode: input-side concern, out of scope.
            ([ESC_DESIGNATE_G0], c) => terminal_ops::designate_charset_g0(self, c as char),
            ([ESC_DESIGNATE_G1], c) => terminal_ops::designate_charset_g1(self, c as char),
            ([ESC_DESIGNATE_G2], c) => terminal_ops::designate_charset_g2(self, c as char),
            ([ESC_DESIGNATE_G3], c) => terminal_ops::designate_charset_g3(self, c as char),
            ([ESC_DECALN_INTERMEDIATE], ESC_DECALN_FINAL) => terminal_ops::decaln_fill(self),
            ([ESC_CODING_SYSTEM_PERCENT], ESC_CODING_SYSTEM_UTF8) => {
                self.mode.encoding = TerminalEncoding::Utf8;
            }
            ([ESC_CODING_SYSTEM_PERCENT], ESC_CODING_SYSTEM_ISO2022) => {
                self.mode.encoding = TerminalEncoding::Iso2022;
            }
            ([ESC_CODING_SYSTEM_PERCENT, ESC_CODING_SYSTEM_SLASH], b'G' | b'H' | b'I') => {
                // UTF-8 Level 1/2/3 locks (no return to ISO 2022 is defined):
                // all three only affect which scalars are considered valid,
                // which this crate does not enforce, so they collapse to
                // plain UTF-8 mode.
                self.mode.encoding = TerminalEncoding::Utf8;
            }
            _ => tracing::trace!(?intermediates, byte, "ignoring unhandled ESC sequence"),
        }
        self.drain_pending_scrollback();
    }

    #[allow(clippy::too_many_lines)]
    fn csi_dispatch(&mut self, params: &vte::Params, intermediates: &[u8], _ignore: bool, c: char) {
        let private = intermediates.first() == Some(&CSI_PRIVATE_MODE_PREFIX);
        match c {
            'A' => cursor_ops::cursor_up(self, params),
            'B' => cursor_ops::cursor_down(self, params),
            'C' => cursor_ops::cursor_forward(self, params),
            'D' => cursor_ops::cursor_backward(self, params),
            'E' => cursor_ops::cursor_next_line(self, params),
            'F' => cursor_ops::cursor_prev_line(self, params),
            'G' | '`' => cursor_ops::cursor_horizontal_absolute(self, params),
            'H' | 'f' => cursor_ops::cursor_position(self, params),
            'd' => cursor_ops::vertical_position_absolute(self, params),
            'J' => char_ops::erase_display(self, params),
            'K' => char_ops::erase_line_csi(self, params),
            'L' => line_ops::insert_lines(self, params),
            'M' => line_ops::delete_lines(self, params),
            'P' => char_ops::delete_chars(self, params),
            '@' => char_ops::insert_chars(self, params),
            'X' => char_ops::erase_chars(self, params),
            'S' => scroll_ops::scroll_up(self, params),
            'T' => scroll_ops::scroll_down(self, params),
            'r' => margin_ops::set_margins(self, params),
            'n' => dsr_ops::status_report(self, params, private),
            's' if !private => cursor_ops::save_cursor(self),
            'u' if !private => cursor_ops::restore_cursor(self),
            'm' => sgr_ops::set_graphics_rendition(self, params),
            'h' => mode_ops::set_mode(self, params, private),
            'l' => mode_ops::reset_mode(self, params, private),
            'g' => tab_ops::clear_tab(self, params),
            'I' => tab_ops::forward_tab(self, params),
            'Z' => tab_ops::backward_tab(self, params),
            'c' if !private => terminal_ops::send_device_attributes(self),
            'q' if intermediates == [CSI_SPACE_INTERMEDIATE] => {
                terminal_ops::set_cursor_shape(self, params);
            }
            'p' if intermediates == [CSI_BANG_INTERMEDIATE] => terminal_ops::soft_reset(self),
            _ => tracing::trace!(final_byte = c, private, "ignoring unhandled CSI sequence"),
        }
        self.drain_pending_scrollback();
    }
}
