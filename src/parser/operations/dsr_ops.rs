//! `CSI n` (DSR, Device Status Report) shim: enqueues bit-exact response
//! bytes per spec.md §6. Grounded on the teacher's `dsr_ops.rs` /
//! `dsr_codes.rs`.

use crate::core::events::DsrRequestType;
use crate::parser::perform::AnsiPerformer;

pub fn status_report(performer: &mut AnsiPerformer, params: &vte::Params, private: bool) {
    if private {
        // DEC-private status reports (e.g. printer status) are not modeled.
        return;
    }
    match DsrRequestType::from(params) {
        DsrRequestType::RequestStatus => performer.response.extend_from_slice(b"\x1b0n"),
        DsrRequestType::RequestCursorPosition => {
            let screen = performer.screen();
            let row = screen.cursor.row + 1;
            let col = screen.cursor.col + 1;
            performer.response.extend_from_slice(format!("\x1b[{row};{col}R").as_bytes());
        }
        DsrRequestType::Other(_) => {}
    }
}
