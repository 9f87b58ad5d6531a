//! `vt100_core`: a VT100/xterm-compatible terminal emulator core.
//!
//! This crate implements the byte-stream parser and in-memory screen model
//! described in SPEC_FULL.md: a resumable, chunk-safe ANSI/VT100 parser
//! (component E, built on `vte`) driving a two-dimensional character grid
//! (component C) with scrollback (D), text attributes (A), character-set
//! translation (B), and a command dispatcher (F) - all orchestrated by the
//! [`Terminal`] facade (G). The renderer, input-encoding, host transport,
//! and preference storage are out of scope; this crate only maintains the
//! grid and emits response bytes / events for an embedder to act on.

pub mod core;
pub mod parser;
mod terminal;

pub use core::attrs::{TextAttributes, UnderlineStyle};
pub use core::cell::{split_widechar_string, Cell, Glyph, GlyphFragment};
pub use core::charset::{CharMap, CharsetState, GSet};
pub use core::color::Color;
pub use core::config::{TerminalConfig, TerminalEncoding};
pub use core::error::GridError;
pub use core::events::{DsrRequestType, OscEvent, TerminalEvent};
pub use core::modes::{ModeFlags, ScreenId};
pub use core::row::Row;
pub use core::screen::{CursorShape, CursorState, Screen};
pub use core::scrollback::Scrollback;
pub use terminal::Terminal;
