//! Helpers for pulling typed values out of `vte::Params`.
//!
//! `vte` hands parameters back as an iterator of `&[u16]` slices, one slice
//! per parameter, where a slice has more than one element only when the
//! client used colon-separated sub-parameters (`38:2:171:181:191`). The
//! legacy semicolon form (`38;2;171;181;191`) arrives as several
//! single-element slices in a row instead, which is why
//! [`ParamsExt::extract_semicolon_color_run`] exists: it re-groups that run
//! back into one logical value the way the colon form already is.

use std::num::NonZeroU16;

pub trait ParamsExt {
    /// The first value of the nth parameter, defaulting to 1 and never 0
    /// (most CSI finals treat both "absent" and "0" as "1").
    fn extract_nth_single_non_zero(&self, n: usize) -> NonZeroU16;

    /// The first value of the nth parameter, or `None` if there is no such
    /// parameter.
    fn extract_nth_single_opt_raw(&self, n: usize) -> Option<u16>;

    /// Given the index of a `38`/`48`/`58` selector parameter that was
    /// *not* followed by sub-parameters (i.e. the semicolon form), collect
    /// the mode parameter plus its 1 (256-color) or 3 (RGB) component
    /// parameters that follow as independent single-value parameters.
    /// Returns `[mode, components...]`, mirroring the shape a colon-form
    /// slice would already have past its selector.
    fn extract_semicolon_color_run(&self, selector_idx: usize) -> Option<Vec<u16>>;
}

impl ParamsExt for vte::Params {
    fn extract_nth_single_non_zero(&self, n: usize) -> NonZeroU16 {
        let raw = self.extract_nth_single_opt_raw(n).unwrap_or(0);
        NonZeroU16::new(raw).unwrap_or(NonZeroU16::new(1).unwrap())
    }

    fn extract_nth_single_opt_raw(&self, n: usize) -> Option<u16> {
        self.iter().nth(n).and_then(|slice| slice.first().copied())
    }

    fn extract_semicolon_color_run(&self, selector_idx: usize) -> Option<Vec<u16>> {
        let mut rest = self.iter().skip(selector_idx + 1);
        let mode = *rest.next()?.first()?;
        match mode {
            5 => {
                let index = *rest.next()?.first()?;
                Some(vec![5, index])
            }
            2 => {
                let r = *rest.next()?.first()?;
                let g = *rest.next()?.first()?;
                let b = *rest.next()?.first()?;
                Some(vec![2, r, g, b])
            }
            _ => None,
        }
    }
}

/// Parse a `CSI row;col H`/`f` cursor-position pair (1-based, defaulting to
/// 1 for either/both), returning zero-based grid coordinates.
#[must_use]
pub fn parse_cursor_position(params: &vte::Params) -> (crate::core::units::RowIndex, crate::core::units::ColIndex) {
    use crate::core::units::{term_col, term_row};
    let row = term_row(params.extract_nth_single_non_zero(0).get());
    let col = term_col(params.extract_nth_single_non_zero(1).get());
    (row.to_zero_based(), col.to_zero_based())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal harness to build a `vte::Params` from test code: feed a CSI
    /// sequence through a throwaway `vte::Parser` and capture the params at
    /// dispatch time via a `Perform` impl.
    struct Capture(Option<Vec<Vec<u16>>>);
    impl vte::Perform for Capture {
        fn csi_dispatch(&mut self, params: &vte::Params, _i: &[u8], _ignore: bool, _c: char) {
            self.0 = Some(params.iter().map(<[u16]>::to_vec).collect());
        }
    }

    fn capture(seq: &str) -> Vec<Vec<u16>> {
        let mut performer = Capture(None);
        let mut parser = vte::Parser::new();
        for byte in seq.bytes() {
            parser.advance(&mut performer, byte);
        }
        performer.0.expect("csi_dispatch was not called")
    }

    #[test]
    fn missing_param_is_none() {
        let raw = capture("\x1b[m");
        assert!(raw.is_empty() || raw[0].first() == Some(&0));
    }

    #[test]
    fn colon_form_groups_subparams() {
        let raw = capture("\x1b[38:2::171:181:191m");
        assert_eq!(raw[0], vec![38, 2, 0, 171, 181, 191]);
    }

    #[test]
    fn semicolon_form_is_flat() {
        let raw = capture("\x1b[38;2;171;181;191m");
        assert_eq!(raw, vec![vec![38], vec![2], vec![171], vec![181], vec![191]]);
    }
}
