//! `CSI L`/`M` (IL/DL) whole-line insert/delete shims. Grounded on the
//! teacher's `line_ops.rs`.

use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn insert_lines(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().insert_lines(n);
}

pub fn delete_lines(performer: &mut AnsiPerformer, params: &vte::Params) {
    let n = params.extract_nth_single_non_zero(0).get() as usize;
    performer.screen().delete_lines(n);
}
