//! Tab-stop shims: `CSI g` (TBC), `CSI I`/`Z` (CHT/CBT), and `ESC H` (HTS).
//! Grounded on the teacher's `vt_100_shim_cursor_ops.rs` tab handling,
//! generalized to the full tab-stop command set spec.md's Screen Model
//! requires but the teacher's reduced command table omits.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn clear_tab(performer: &mut AnsiPerformer, params: &vte::Params) {
    match params.extract_nth_single_opt_raw(0).unwrap_or(0) {
        0 => {
            let col = performer.screen().cursor.col;
            performer.screen().clear_tab_stop(col);
        }
        3 => performer.screen().clear_all_tab_stops(),
        _ => {}
    }
}

pub fn set_tab_stop_at_cursor(performer: &mut AnsiPerformer) {
    let col = performer.screen().cursor.col;
    performer.screen().set_tab_stop(col);
}

pub fn forward_tab(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().forward_tab(n);
}

pub fn backward_tab(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().backward_tab(n);
}
