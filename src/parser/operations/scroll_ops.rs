//! `CSI S`/`T` (scroll up/down) and `ESC D`/`M` (IND/RI) shims. Grounded on
//! the teacher's `scroll_ops.rs`.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn scroll_up(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().vt_scroll_up(n);
}

pub fn scroll_down(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().vt_scroll_down(n);
}

pub fn index_down(performer: &mut AnsiPerformer) {
    performer.screen().index_down();
}

pub fn reverse_index_up(performer: &mut AnsiPerformer) {
    performer.screen().reverse_index_up();
}
