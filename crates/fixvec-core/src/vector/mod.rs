//! Fixed-length numeric vector with compile-time dimension.
//!
//! [`FixedVector`] is the fundamental type in fixvec: an ordered sequence of
//! exactly `N` elements of one [`Scalar`] type, with the length carried in
//! the type itself. All operations produce new vectors; nothing ever changes
//! a vector's length in place.

mod create;
mod display;
mod ops;
mod reshape;

pub use reshape::concat;

use core::ops::{Index, IndexMut};

use crate::counters;
use crate::error::{Result, VectorError};
use crate::Scalar;

/// A fixed-length vector of `N` elements of type `T`.
///
/// Backed by a `[T; N]` array, so the dimension is checked at compile time
/// wherever possible. Two vectors with equal element type, length, and
/// element sequence are interchangeable; there is no identity beyond value.
///
/// Construction and destruction are counted by the process-wide
/// [`counters`](crate::counters), which is why the type is [`Clone`] but not
/// `Copy`.
#[derive(Debug)]
pub struct FixedVector<T: Scalar, const N: usize> {
    data: [T; N],
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// The single counted constructor; every other construction path and
    /// every operation result goes through here.
    pub(crate) fn from_parts(data: [T; N]) -> Self {
        counters::record_created();
        Self { data }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The number of elements, always exactly `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the vector has zero elements (only for `N == 0`).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// All elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Get the element at `index`, or `IndexOutOfBounds` if `index >= N`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= N {
            return Err(VectorError::IndexOutOfBounds { index, len: N });
        }
        Ok(self.data[index])
    }

    /// Set the element at `index`, or `IndexOutOfBounds` if `index >= N`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        if index >= N {
            return Err(VectorError::IndexOutOfBounds { index, len: N });
        }
        self.data[index] = value;
        Ok(())
    }
}

impl<T: Scalar, const N: usize> Index<usize> for FixedVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T: Scalar, const N: usize> Clone for FixedVector<T, N> {
    fn clone(&self) -> Self {
        Self::from_parts(self.data)
    }
}

impl<T: Scalar, const N: usize> Drop for FixedVector<T, N> {
    fn drop(&mut self) {
        counters::record_dropped();
    }
}

impl<T: Scalar, const N: usize> PartialEq for FixedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}
