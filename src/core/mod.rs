//! The Screen Model and its supporting data types (components A-D of the
//! terminal core): attributes, character maps, cells, rows, the grid
//! itself, and scrollback.

pub mod attrs;
pub mod cell;
pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod events;
pub mod modes;
pub mod row;
pub mod screen;
pub mod scrollback;
pub mod units;
