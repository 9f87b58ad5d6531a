//! `CSI h`/`l` (SM/RM) mode-toggle shims, covering both the DEC private
//! mode set (`CSI ? ... h/l`) and the small non-private set spec.md names.
//! Grounded on the teacher's `mode_ops.rs`, generalized from its reduced
//! mode table (which only tracks a handful of renderer hints) to the full
//! set SPEC_FULL.md requires, including the alternate-screen swap.

use crate::core::modes::ScreenId;
use crate::parser::perform::AnsiPerformer;
use crate::parser::protocols::constants::*;
use crate::parser::protocols::params_ext::ParamsExt;

pub fn set_mode(performer: &mut AnsiPerformer, params: &vte::Params, private: bool) {
    for value in raw_values(params) {
        apply_mode(performer, value, private, true);
    }
}

pub fn reset_mode(performer: &mut AnsiPerformer, params: &vte::Params, private: bool) {
    for value in raw_values(params) {
        apply_mode(performer, value, private, false);
    }
}

fn raw_values(params: &vte::Params) -> impl Iterator<Item = u16> + '_ {
    params.iter().filter_map(|slice| slice.first().copied())
}

fn apply_mode(performer: &mut AnsiPerformer, value: u16, private: bool, enable: bool) {
    if private {
        apply_dec_private_mode(performer, value, enable);
    } else {
        apply_ansi_mode(performer, value, enable);
    }
}

fn apply_dec_private_mode(performer: &mut AnsiPerformer, value: u16, enable: bool) {
    match value {
        DEC_APPLICATION_CURSOR_KEYS => performer.mode.application_cursor_keys = enable,
        DEC_COLUMN_132 => performer.mode.column_132 = enable,
        DEC_REVERSE_VIDEO => performer.mode.reverse_video = enable,
        DEC_ORIGIN_MODE => performer.screen().origin_mode = enable,
        DEC_AUTO_WRAP => performer.screen().auto_wrap = enable,
        DEC_BLINK => {
            if performer.config.enable_dec12 {
                performer.mode.blink = enable;
            }
        }
        DEC_CURSOR_VISIBLE => {
            performer.mode.cursor_visible = enable;
            performer.screen().cursor_visible = enable;
        }
        DEC_REVERSE_WRAPAROUND => performer.screen().reverse_wraparound = enable,
        DEC_ALT_SCREEN_47 | DEC_ALT_SCREEN_1047 => set_alternate_screen(performer, enable, false),
        DEC_SAVE_CURSOR => {
            if enable {
                performer.screen().save_cursor();
            } else {
                performer.screen().restore_cursor();
            }
        }
        DEC_ALT_SCREEN_1049 => set_alternate_screen(performer, enable, true),
        DEC_FOCUS_REPORT => performer.mode.focus_report = enable,
        DEC_META_SENDS_ESCAPE => performer.mode.meta_sends_escape = enable,
        DEC_ALT_SENDS_ESCAPE => performer.mode.alt_sends_escape = enable,
        DEC_BRACKETED_PASTE => performer.mode.bracketed_paste = enable,
        _ => tracing::trace!(value, enable, "ignoring unhandled DEC private mode"),
    }
}

fn apply_ansi_mode(performer: &mut AnsiPerformer, value: u16, enable: bool) {
    match value {
        ANSI_INSERT_MODE => performer.screen().insert_mode = enable,
        ANSI_AUTO_CR_ON_LF => performer.mode.auto_carriage_return = enable,
        _ => tracing::trace!(value, enable, "ignoring unhandled ANSI mode"),
    }
}

/// Mode 1049 saves/restores the cursor around the swap (per spec.md §4.G);
/// 47 and 1047 swap the screen only. Re-entering the already-active screen
/// (or leaving an inactive one) is a no-op, matching xterm.
fn set_alternate_screen(performer: &mut AnsiPerformer, enable: bool, save_cursor: bool) {
    let currently_alt = matches!(performer.active, ScreenId::Alternate);
    if enable == currently_alt {
        return;
    }
    if enable {
        if save_cursor {
            performer.primary.save_cursor();
        }
        *performer.active = ScreenId::Alternate;
        performer.alternate.erase_all();
    } else {
        *performer.active = ScreenId::Primary;
        if save_cursor {
            performer.primary.restore_cursor();
        }
    }
}
