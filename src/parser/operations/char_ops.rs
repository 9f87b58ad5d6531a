//! Print and single-row erase/insert/delete shims. Grounded on the
//! teacher's `char_ops.rs`.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

/// Translate one decoded glyph through the active G-set and write it.
/// Wide-char splitting happens per-character inside
/// [`crate::core::screen::Screen::print_char`] (see
/// [`crate::core::cell::split_widechar_string`] for the bulk-string
/// equivalent spec.md's Text Attributes component names).
pub fn print_char(performer: &mut AnsiPerformer, ch: char) {
    let translated = performer.screen().charset.translate(ch);
    performer.screen().print_char(translated);
}

pub fn erase_display(performer: &mut AnsiPerformer, params: &vte::Params) {
    match params.extract_nth_single_opt_raw(0).unwrap_or(0) {
        0 => performer.screen().erase_below(),
        1 => performer.screen().erase_above(),
        2 => performer.screen().erase_all(),
        3 => {
            if performer.config.enable_csi_j_3 {
                performer.scrollback.clear();
            }
        }
        _ => {}
    }
}

pub fn erase_line_csi(performer: &mut AnsiPerformer, params: &vte::Params) {
    match params.extract_nth_single_opt_raw(0).unwrap_or(0) {
        0 => performer.screen().erase_to_right(),
        1 => performer.screen().erase_to_left(),
        2 => performer.screen().erase_line(),
        _ => {}
    }
}

pub fn insert_chars(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().insert_chars(n);
}

pub fn delete_chars(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().delete_chars(n);
}

pub fn erase_chars(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().erase_chars(n);
}
