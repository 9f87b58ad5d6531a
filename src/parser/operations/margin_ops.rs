//! `CSI r` (DECSTBM) scroll-region shim. Grounded on the teacher's
//! `margin_ops.rs`.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn set_margins(performer: &mut AnsiPerformer, params: &vte::Params) {
    let top = params.extract_nth_single_opt_raw(0).map(|v| v.max(1) as usize - 1);
    let bottom = params.extract_nth_single_opt_raw(1).map(|v| v.max(1) as usize - 1);
    performer.screen().set_scroll_region(top, bottom);
}
