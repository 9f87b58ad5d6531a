//! C0 control-code shims. Grounded on the teacher's `control_ops.rs`.

use crate::parser::perform::AnsiPerformer;

pub fn handle_backspace(performer: &mut AnsiPerformer) {
    performer.screen().cursor_left(1);
}

pub fn handle_tab(performer: &mut AnsiPerformer) {
    performer.screen().forward_tab(1);
}

pub fn handle_line_feed(performer: &mut AnsiPerformer) {
    let auto_cr = performer.mode.auto_carriage_return;
    performer.screen().form_feed(auto_cr);
}

pub fn handle_carriage_return(performer: &mut AnsiPerformer) {
    performer.screen().cursor.col = 0;
    performer.screen().cursor.overflow = false;
}
