//! Generic membership checks over immutable ordered sequences.
//!
//! This crate answers one question: does a value occur in a sequence? The
//! check is written once, generically over any `PartialEq` element type, and
//! applied to integers and floating-point numbers alike.
//!
//! # Key Concepts
//!
//! - **Sequence**: an ordered, finite, immutable list of values of one type
//! - **Membership check**: a first-to-last scan that stops at the first match
//! - **Value equality**: the element type's `==` (IEEE-754 for floats, no tolerance)
//!
//! # Modules
//!
//! - [`membership`]: `contains`, `index` and their predicate variants
//! - [`sequence`]: the immutable [`Sequence`] container
//! - [`types`]: numeric element trait
//! - [`error`]: error types for literal conversion and report output
//! - [`demo`]: the integer/float demonstration run by the binary

pub mod core;
pub mod demo;

pub use crate::core::{error, membership, sequence, types};

// Re-export commonly used items at the crate root
pub use crate::core::error::{MembershipError, Result};
pub use crate::core::membership::{contains, contains_by, index, index_by, Contains};
pub use crate::core::sequence::Sequence;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use memberscan_core::prelude::*;
///
/// let seq = Sequence::from([1_i64, 2, 3]);
/// assert!(contains(seq.as_slice(), &2));
/// ```
pub mod prelude {
    pub use crate::core::error::{MembershipError, Result};
    pub use crate::core::membership::{contains, contains_by, index, index_by, Contains};
    pub use crate::core::sequence::Sequence;
    pub use crate::core::types::Numeric;
}
