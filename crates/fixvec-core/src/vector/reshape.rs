//! Shape and type changes: resize, convert, slice, and concatenation.
//!
//! None of these mutate in place; every operation builds a fresh vector of a
//! possibly different length or element type.

use crate::error::{Result, VectorError};
use crate::scalar::{Cast, Promote, Promoted};
use crate::Scalar;

use super::FixedVector;

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// Copy into a vector of length `M`.
    ///
    /// The first `min(N, M)` elements are preserved; when growing, the new
    /// tail is zero-filled, and when shrinking, the old tail is dropped.
    /// Never fails.
    ///
    /// ```
    /// # use fixvec_core::FixedVector;
    /// let v = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
    /// assert_eq!(v.resize::<5>().as_slice(), &[1, 2, 3, 0, 0]);
    /// assert_eq!(v.resize::<2>().as_slice(), &[1, 2]);
    /// ```
    pub fn resize<const M: usize>(&self) -> FixedVector<T, M> {
        FixedVector::from_parts(core::array::from_fn(|i| {
            if i < N {
                self.data[i]
            } else {
                T::zero()
            }
        }))
    }

    /// Convert every element to `R` with `as`-cast semantics: truncation for
    /// float-to-int, possible precision loss for int-to-float or narrowing.
    pub fn convert<R>(&self) -> FixedVector<R, N>
    where
        R: Scalar,
        T: Cast<R>,
    {
        FixedVector::from_parts(core::array::from_fn(|i| self.data[i].cast()))
    }

    /// Extract `M` consecutive elements starting at `start`.
    ///
    /// `M` must be positive (checked at compile time) and the window must
    /// fit: `start + M > N` fails with [`VectorError::SliceOutOfRange`].
    pub fn slice<const M: usize>(&self, start: usize) -> Result<FixedVector<T, M>> {
        const { assert!(M > 0, "slice length must be positive") }
        if start + M > N {
            return Err(VectorError::SliceOutOfRange {
                start,
                len: M,
                size: N,
            });
        }
        Ok(FixedVector::from_parts(core::array::from_fn(|i| {
            self.data[start + i]
        })))
    }
}

/// Concatenate two vectors, promoting both element types to their common
/// promoted type.
///
/// Stable Rust cannot name `N1 + N2` in a return type, so the output length
/// `M` is a const parameter supplied by the caller (usually inferred from
/// the binding) and verified at runtime: anything other than `N1 + N2` fails
/// with [`VectorError::DimensionMismatch`]. Concatenating more than two
/// vectors chains pairwise, left to right; the one-vector case is the
/// identity (a plain clone).
///
/// ```
/// # use fixvec_core::{concat, FixedVector};
/// let a = FixedVector::<i32, 2>::from_values(&[1, 2]);
/// let b = FixedVector::<f32, 2>::from_values(&[3.0, 4.0]);
/// let c: FixedVector<f32, 4> = concat(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn concat<T, U, const N1: usize, const N2: usize, const M: usize>(
    a: &FixedVector<T, N1>,
    b: &FixedVector<U, N2>,
) -> Result<FixedVector<Promoted<T, U>, M>>
where
    T: Scalar + Promote<U> + Cast<Promoted<T, U>>,
    U: Scalar + Cast<Promoted<T, U>>,
{
    if N1 + N2 != M {
        return Err(VectorError::DimensionMismatch {
            expected: N1 + N2,
            got: M,
        });
    }
    Ok(FixedVector::from_parts(core::array::from_fn(|i| {
        if i < N1 {
            a.data[i].cast()
        } else {
            b.data[i - N1].cast()
        }
    })))
}
