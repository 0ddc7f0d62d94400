//! Core types and operations for membership checks.

pub mod error;
pub mod membership;
pub mod sequence;
pub mod types;

// Re-export core types
pub use error::*;
pub use membership::*;
pub use sequence::*;
pub use types::*;
