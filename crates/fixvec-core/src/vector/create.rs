//! Vector construction: zero, filled, and from explicit values.

use crate::Scalar;

use super::FixedVector;

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    /// Create a vector with every element set to `T`'s additive identity.
    ///
    /// ```
    /// # use fixvec_core::FixedVector;
    /// let v = FixedVector::<f64, 3>::zero();
    /// assert!(v.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zero() -> Self {
        Self::from_parts([T::zero(); N])
    }

    /// Create a vector with every element set to `value`.
    ///
    /// ```
    /// # use fixvec_core::FixedVector;
    /// let v = FixedVector::<i32, 4>::filled(7);
    /// assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
    /// ```
    pub fn filled(value: T) -> Self {
        Self::from_parts([value; N])
    }

    /// Create a vector from a slice of values.
    ///
    /// Element `i` is `values[i]` for `i < min(N, values.len())`. If fewer
    /// than `N` values are given the remaining slots are zero-filled; extra
    /// values beyond `N` are discarded.
    ///
    /// ```
    /// # use fixvec_core::FixedVector;
    /// let v = FixedVector::<i32, 4>::from_values(&[1, 2]);
    /// assert_eq!(v.as_slice(), &[1, 2, 0, 0]);
    /// ```
    pub fn from_values(values: &[T]) -> Self {
        Self::from_parts(core::array::from_fn(|i| {
            values.get(i).copied().unwrap_or_else(T::zero)
        }))
    }

    /// Create a vector from an exact-length array.
    pub fn from_array(data: [T; N]) -> Self {
        Self::from_parts(data)
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let v = FixedVector::<i32, 5>::zero();
        assert_eq!(v.as_slice(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_filled() {
        let v = FixedVector::<f32, 3>::filled(1.5);
        assert!(v.iter().all(|&x| x == 1.5));
    }

    #[test]
    fn test_from_values_exact() {
        let v = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_values_short_zero_fills() {
        let v = FixedVector::<i32, 5>::from_values(&[1, 2]);
        assert_eq!(v.as_slice(), &[1, 2, 0, 0, 0]);
    }

    #[test]
    fn test_from_values_extra_discarded() {
        let v = FixedVector::<i32, 2>::from_values(&[1, 2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_from_array() {
        let v = FixedVector::from_array([1.0_f64, 2.0, 3.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_from_impl() {
        let v: FixedVector<i32, 3> = [7, 8, 9].into();
        assert_eq!(v.as_slice(), &[7, 8, 9]);
    }
}
