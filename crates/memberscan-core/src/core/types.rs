//! Element type traits used by membership scans.
//!
//! Membership itself only needs `PartialEq`. The [`Numeric`] trait collects
//! what the library needs to build numeric sequences from integer literals
//! and to report them.

use num_traits::NumCast;
use std::fmt::{Debug, Display};

/// Trait for numeric element types (integers and floating point).
///
/// This trait is blanket-implemented for every type that satisfies its
/// bounds, so `i64`, `f64`, `u8`, `f32` and friends are all `Numeric`.
pub trait Numeric:
    NumCast + PartialEq + Copy + Debug + Display + Send + Sync + 'static
{
    /// Try to convert from an integer literal.
    ///
    /// Returns None if the literal is out of range for this type.
    fn try_from_i64(v: i64) -> Option<Self> {
        <Self as NumCast>::from(v)
    }

    /// Short name of the type, for logs and reports.
    fn type_label() -> &'static str {
        type_label::<Self>()
    }
}

impl<T> Numeric for T where T: NumCast + PartialEq + Copy + Debug + Display + Send + Sync + 'static {}

/// Short name of `T` without its module path.
pub fn type_label<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    match full.rfind("::") {
        Some(idx) if !full.contains('<') => &full[idx + 2..],
        _ => full,
    }
}
