//! The crate's one fallible surface.
//!
//! Per spec.md §7, the parser and screen model are infallible to the
//! caller - every anomaly a byte stream can produce is absorbed locally.
//! [`GridError`] exists only for the direct accessor methods
//! ([`crate::core::screen::Screen`]'s `try_*` variants) meant for callers
//! reaching into the grid from outside the normal `feed` path; the parser
//! and dispatcher never construct or propagate it.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("out of bounds cell access: row={row}, col={col}")]
    OutOfBounds { row: usize, col: usize },
}
