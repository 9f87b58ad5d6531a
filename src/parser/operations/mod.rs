//! Operation shims: one module per family of CSI/ESC/OSC commands, each a
//! thin parameter-translation layer over [`crate::core::screen::Screen`] /
//! [`crate::terminal::Terminal`] state. Grounded on the teacher's
//! `vt_100_ansi_parser::operations` shim-layer split (`char_ops`,
//! `cursor_ops`, `scroll_ops`, ...), generalized to the full command set
//! SPEC_FULL.md requires.

pub mod char_ops;
pub mod control_ops;
pub mod cursor_ops;
pub mod dsr_ops;
pub mod line_ops;
pub mod margin_ops;
pub mod mode_ops;
pub mod osc_ops;
pub mod scroll_ops;
pub mod sgr_ops;
pub mod tab_ops;
pub mod terminal_ops;
