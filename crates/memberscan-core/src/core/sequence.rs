//! Immutable ordered sequences.
//!
//! A [`Sequence`] owns its elements and exposes no way to change them after
//! construction. Iteration order is the construction order.

use crate::core::error::{MembershipError, Result};
use crate::core::membership::{self, Contains};
use crate::core::types::Numeric;
use std::fmt;
use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered, finite, immutable list of values of one type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    elements: Box<[T]>,
}

impl<T> Sequence<T> {
    /// Create a sequence that takes ownership of `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements: elements.into_boxed_slice(),
        }
    }

    /// Create a sequence with no elements.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Borrow the elements in order.
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Reports whether `target` occurs in the sequence.
    pub fn contains(&self, target: &T) -> bool {
        membership::contains(&self.elements, target)
    }

    /// Position of the first element equal to `target`.
    pub fn position(&self, target: &T) -> Option<usize> {
        membership::index(&self.elements, target)
    }
}

impl<T: Numeric> Sequence<T> {
    /// Build a numeric sequence from integer literals.
    ///
    /// Each literal is converted to `T`. A literal that `T` cannot represent
    /// produces a [`MembershipError::Conversion`].
    ///
    /// # Example
    /// ```
    /// use memberscan_core::sequence::Sequence;
    ///
    /// let floats = Sequence::<f64>::from_literals(&[1, 2, 3]).unwrap();
    /// assert_eq!(floats.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_literals(literals: &[i64]) -> Result<Self> {
        literals
            .iter()
            .map(|&literal| {
                T::try_from_i64(literal)
                    .ok_or_else(|| MembershipError::conversion(literal, T::type_label()))
            })
            .collect::<Result<Vec<T>>>()
            .map(Self::new)
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Deref for Sequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self::new(Vec::from(elements))
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq> Contains<T> for Sequence<T> {
    fn contains_value(&self, target: &T) -> bool {
        self.contains(target)
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, "]")
    }
}
