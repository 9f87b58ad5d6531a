//! The Parser State Machine and Command Dispatcher (components E and F):
//! a `vte::Parser` driving the [`perform::AnsiPerformer`] `Perform` impl,
//! which delegates each dispatch to one `operations::*` shim per command.

pub mod operations;
pub mod perform;
pub mod protocols;
