//! Generic membership checks over integer and floating-point sequences.
//!
//! This crate re-exports [`memberscan_core`] and adds the logging setup used
//! by the `memberscan` binary.

pub use memberscan_core::*;

pub mod logging;
