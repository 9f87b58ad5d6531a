//! ESC-sequence terminal-state shims: G-set designation, DECALN, full reset
//! (RIS), device attributes, and DECSCUSR cursor shape. Grounded on the
//! teacher's `terminal_ops.rs`, generalized to the commands SPEC_FULL.md
//! requires that the teacher's reduced command table leaves out (DA,
//! DECSCUSR).

use crate::core::attrs::TextAttributes;
use crate::core::charset::GSet;
use crate::core::modes::{ModeFlags, ScreenId};
use crate::core::screen::{CursorShape, Screen};
use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn designate_charset_g0(performer: &mut AnsiPerformer, id: char) {
    performer.screen().charset.designate(GSet::G0, id);
}

pub fn designate_charset_g1(performer: &mut AnsiPerformer, id: char) {
    performer.screen().charset.designate(GSet::G1, id);
}

pub fn designate_charset_g2(performer: &mut AnsiPerformer, id: char) {
    performer.screen().charset.designate(GSet::G2, id);
}

pub fn designate_charset_g3(performer: &mut AnsiPerformer, id: char) {
    performer.screen().charset.designate(GSet::G3, id);
}

/// `ESC # 8` (DECALN): fill the whole screen with `'E'`, used to check
/// screen alignment.
pub fn decaln_fill(performer: &mut AnsiPerformer) {
    performer.screen().fill_with_test_pattern();
}

/// `ESC c` (RIS): full terminal reset. Recreates both screens at their
/// current dimensions, drops mode flags and scrollback, and clears any
/// buffered response bytes and in-flight DCS capture state.
pub fn reset_terminal(performer: &mut AnsiPerformer) {
    let (pw, ph) = (performer.primary.width(), performer.primary.height());
    let (aw, ah) = (performer.alternate.width(), performer.alternate.height());
    *performer.primary = Screen::new(pw, ph);
    *performer.alternate = Screen::new(aw, ah);
    *performer.active = ScreenId::Primary;
    *performer.mode = ModeFlags::default();
    performer.scrollback.clear();
    performer.response.clear();
    performer.dcs.byte_count = 0;
    performer.dcs.abandoned = false;
}

/// `CSI c` (DA, Device Attributes), bit-exact per spec.md §6.
pub fn send_device_attributes(performer: &mut AnsiPerformer) {
    performer.response.extend_from_slice(b"\x1b[?1;2c");
}

/// `CSI ! p` (DECSTR): soft reset. Unlike RIS, modes and the scroll region
/// reset to defaults but palette and cursor visibility are left intact.
pub fn soft_reset(performer: &mut AnsiPerformer) {
    let cursor_visible = performer.mode.cursor_visible;
    {
        let screen = performer.screen();
        screen.reset_scroll_region();
        screen.origin_mode = false;
        screen.auto_wrap = true;
        screen.reverse_wraparound = false;
        screen.insert_mode = false;
        screen.attrs = TextAttributes::default();
        screen.set_cursor_position(0, 0);
    }
    performer.mode.application_cursor_keys = false;
    performer.mode.column_132 = false;
    performer.mode.reverse_video = false;
    performer.mode.cursor_visible = cursor_visible;
}

/// `CSI Ps SP q` (DECSCUSR): cursor shape. Unknown `Ps` is ignored.
pub fn set_cursor_shape(performer: &mut AnsiPerformer, params: &vte::Params) {
    let shape = match params.extract_nth_single_opt_raw(0).unwrap_or(0) {
        0 | 1 => CursorShape::BlinkBlock,
        2 => CursorShape::SteadyBlock,
        3 => CursorShape::BlinkUnderline,
        4 => CursorShape::SteadyUnderline,
        5 => CursorShape::BlinkBar,
        6 => CursorShape::SteadyBar,
        _ => return,
    };
    performer.screen().cursor_shape = shape;
}
