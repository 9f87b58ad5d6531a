//! `CSI m` (SGR) shim: the whole parameter stream is delegated to
//! [`crate::core::attrs::TextAttributes::apply_sgr`]. Grounded on the
//! teacher's `vt_100_shim_sgr_ops::set_graphics_rendition`.

use crate::parser::perform::AnsiPerformer;

pub fn set_graphics_rendition(performer: &mut AnsiPerformer, params: &vte::Params) {
    performer.screen().attrs.apply_sgr(params);
}
