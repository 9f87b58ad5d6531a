//! Protocol-level constants and parameter-extraction helpers shared by the
//! `Perform` dispatch tables and the operation shims.

pub mod constants;
pub mod params_ext;
