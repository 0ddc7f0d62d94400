//! Linear membership checks over ordered sequences.
//!
//! Every scan runs from the first element to the last and stops at the
//! first match. Equality is the element type's `PartialEq`, so floating
//! point follows IEEE-754 `==`: `NaN` is never found and `-0.0` matches
//! `0.0`.

/// Returns the position of the first element equal to `target`.
pub fn index<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    index_by(sequence, |element| element == target)
}

/// Returns the position of the first element satisfying `predicate`.
pub fn index_by<T, F>(sequence: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, element) in sequence.iter().enumerate() {
        if predicate(element) {
            return Some(i);
        }
    }
    None
}

/// Reports whether `target` occurs anywhere in `sequence`.
///
/// An empty sequence never contains anything. Duplicates do not matter.
///
/// # Example
/// ```
/// use memberscan_core::membership::contains;
///
/// assert!(contains(&[1_i64, 2, 3], &1));
/// assert!(!contains(&[1_i64, 2, 3], &4));
/// assert!(!contains::<i64>(&[], &5));
/// ```
pub fn contains<T: PartialEq>(sequence: &[T], target: &T) -> bool {
    index(sequence, target).is_some()
}

/// Reports whether any element satisfies `predicate`.
pub fn contains_by<T, F>(sequence: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    index_by(sequence, predicate).is_some()
}

/// Containers that answer membership queries by value equality.
pub trait Contains<T: PartialEq> {
    /// Reports whether `target` is one of the container's elements.
    fn contains_value(&self, target: &T) -> bool;
}

impl<T: PartialEq> Contains<T> for [T] {
    fn contains_value(&self, target: &T) -> bool {
        contains(self, target)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    fn contains_value(&self, target: &T) -> bool {
        contains(self, target)
    }
}

impl<T: PartialEq, const N: usize> Contains<T> for [T; N] {
    fn contains_value(&self, target: &T) -> bool {
        contains(self, target)
    }
}
