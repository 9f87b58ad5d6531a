//! Cursor-movement CSI/ESC shims: pure parameter translation, no business
//! logic (the logic lives on [`crate::core::screen::Screen`]). Grounded on
//! the teacher's `vt_100_shim_cursor_ops.rs`.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::{parse_cursor_position, ParamsExt};

pub fn cursor_up(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_up(n);
}

pub fn cursor_down(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_down(n);
}

pub fn cursor_forward(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_right(n);
}

pub fn cursor_backward(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_left(n);
}

pub fn cursor_next_line(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_next_line(n);
}

pub fn cursor_prev_line(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().cursor_prev_line(n);
}

pub fn cursor_horizontal_absolute(performer: &mut AnsiPerformer, params: &vte::Params) {
    let col = params.extract_nth_single_non_zero(0).get() as usize - 1;
    performer.screen().set_cursor_column(col);
}

pub fn vertical_position_absolute(performer: &mut AnsiPerformer, params: &vte::Params) {
    let row = params.extract_nth_single_non_zero(0).get() as usize - 1;
    performer.screen().set_cursor_row(row);
}

pub fn cursor_position(performer: &mut AnsiPerformer, params: &vte::Params) {
    let (row, col) = parse_cursor_position(params);
    performer.screen().set_cursor_position(row.as_usize(), col.as_usize());
}

pub fn save_cursor(performer: &mut AnsiPerformer) {
    performer.screen().save_cursor();
}

pub fn restore_cursor(performer: &mut AnsiPerformer) {
    performer.screen().restore_cursor();
}
