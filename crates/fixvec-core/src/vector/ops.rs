//! Scalar and element-wise arithmetic.
//!
//! Three layers, mirroring how the type is meant to be used:
//!
//! - named scalar methods (`add_scalar`, ..., `div_scalar`) that keep the
//!   element type,
//! - named element-wise methods (`add`, ..., `div`) between vectors of the
//!   same length whose element types go through [`Promote`],
//! - `std::ops` operator impls for `+ - *` delegating to the named methods.
//!
//! Division is the odd one out: it can fail for integer element types, so it
//! stays a `Result`-returning named method and gets no operator.

use core::ops::{Add, Mul, Sub};

use crate::error::{Result, VectorError};
use crate::scalar::{Cast, Promote, Promoted};
use crate::Scalar;

use super::FixedVector;

// ======================================================================
// Scalar arithmetic (element type preserved)
// ======================================================================

macro_rules! impl_scalar_method {
    ($method:ident, $op:tt, $what:literal) => {
        #[doc = concat!("Return a new vector computing `self[i] ", $what, " rhs` for every element.")]
        pub fn $method(&self, rhs: T) -> Self {
            Self::from_parts(core::array::from_fn(|i| self.data[i] $op rhs))
        }
    };
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    impl_scalar_method!(add_scalar, +, "+");
    impl_scalar_method!(sub_scalar, -, "-");
    impl_scalar_method!(mul_scalar, *, "*");

    /// Return a new vector computing `self[i] / rhs` for every element.
    ///
    /// Fails with [`VectorError::DivisionByZero`] for integer element types
    /// when `rhs` is zero. Floating-point element types never fail here:
    /// division by zero follows IEEE-754 and yields an infinity or NaN,
    /// matching the underlying scalar semantics.
    pub fn div_scalar(&self, rhs: T) -> Result<Self> {
        let mut data = [T::zero(); N];
        for i in 0..N {
            data[i] = self.data[i]
                .checked_div(rhs)
                .ok_or(VectorError::DivisionByZero)?;
        }
        Ok(Self::from_parts(data))
    }
}

// ======================================================================
// Element-wise arithmetic with type promotion
// ======================================================================

macro_rules! impl_elementwise_method {
    ($method:ident, $op:tt, $what:literal) => {
        #[doc = concat!(
            "Element-wise `self[i] ", $what, " rhs[i]`, with both sides cast ",
            "to the promoted element type first."
        )]
        pub fn $method<U>(&self, rhs: &FixedVector<U, N>) -> FixedVector<Promoted<T, U>, N>
        where
            U: Scalar + Cast<Promoted<T, U>>,
            T: Promote<U> + Cast<Promoted<T, U>>,
        {
            FixedVector::from_parts(core::array::from_fn(|i| {
                let a: Promoted<T, U> = self.data[i].cast();
                let b: Promoted<T, U> = rhs.data[i].cast();
                a $op b
            }))
        }
    };
}

impl<T: Scalar, const N: usize> FixedVector<T, N> {
    impl_elementwise_method!(add, +, "+");
    impl_elementwise_method!(sub, -, "-");
    impl_elementwise_method!(mul, *, "*");

    /// Element-wise `self[i] / rhs[i]` in the promoted element type.
    ///
    /// Fails with [`VectorError::DivisionByZero`] when the promoted type is
    /// an integer and the corresponding `rhs` element is zero; floating
    /// promoted types follow IEEE-754 instead.
    pub fn div<U>(&self, rhs: &FixedVector<U, N>) -> Result<FixedVector<Promoted<T, U>, N>>
    where
        U: Scalar + Cast<Promoted<T, U>>,
        T: Promote<U> + Cast<Promoted<T, U>>,
    {
        let mut data = [<Promoted<T, U>>::zero(); N];
        for i in 0..N {
            let a: Promoted<T, U> = self.data[i].cast();
            let b: Promoted<T, U> = rhs.data[i].cast();
            data[i] = a.checked_div(b).ok_or(VectorError::DivisionByZero)?;
        }
        Ok(FixedVector::from_parts(data))
    }

    /// Weighted element-wise sum: `w1 * self[i] + w2 * rhs[i]`.
    ///
    /// Each product is computed in the type its operands promote to, and the
    /// final sum in the promotion of the two product types. Generalizes
    /// [`add`](Self::add) with an independent scalar weight per operand.
    pub fn weighted_sum<S, U>(
        &self,
        w1: S,
        rhs: &FixedVector<U, N>,
        w2: S,
    ) -> FixedVector<Promoted<Promoted<S, T>, Promoted<S, U>>, N>
    where
        U: Scalar,
        S: Scalar + Promote<T> + Promote<U>,
        S: Cast<Promoted<S, T>> + Cast<Promoted<S, U>>,
        T: Cast<Promoted<S, T>>,
        U: Cast<Promoted<S, U>>,
        Promoted<S, T>: Promote<Promoted<S, U>>,
        Promoted<S, T>: Cast<Promoted<Promoted<S, T>, Promoted<S, U>>>,
        Promoted<S, U>: Cast<Promoted<Promoted<S, T>, Promoted<S, U>>>,
    {
        FixedVector::from_parts(core::array::from_fn(|i| {
            let lw: Promoted<S, T> = w1.cast();
            let lx: Promoted<S, T> = self.data[i].cast();
            let rw: Promoted<S, U> = w2.cast();
            let rx: Promoted<S, U> = rhs.data[i].cast();
            let left: Promoted<Promoted<S, T>, Promoted<S, U>> = (lw * lx).cast();
            let right: Promoted<Promoted<S, T>, Promoted<S, U>> = (rw * rx).cast();
            left + right
        }))
    }
}

// ======================================================================
// Operator impls (owned and by-ref), delegating to the named methods
// ======================================================================

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident) => {
        impl<T, U, const N: usize> $trait<FixedVector<U, N>> for FixedVector<T, N>
        where
            T: Scalar + Promote<U> + Cast<Promoted<T, U>>,
            U: Scalar + Cast<Promoted<T, U>>,
        {
            type Output = FixedVector<Promoted<T, U>, N>;

            fn $method(self, rhs: FixedVector<U, N>) -> Self::Output {
                FixedVector::$method(&self, &rhs)
            }
        }

        impl<T, U, const N: usize> $trait<&FixedVector<U, N>> for &FixedVector<T, N>
        where
            T: Scalar + Promote<U> + Cast<Promoted<T, U>>,
            U: Scalar + Cast<Promoted<T, U>>,
        {
            type Output = FixedVector<Promoted<T, U>, N>;

            fn $method(self, rhs: &FixedVector<U, N>) -> Self::Output {
                FixedVector::$method(self, rhs)
            }
        }
    };
}

impl_vector_binop!(Add, add);
impl_vector_binop!(Sub, sub);
impl_vector_binop!(Mul, mul);

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $scalar_method:ident) => {
        impl<T: Scalar, const N: usize> $trait<T> for FixedVector<T, N> {
            type Output = FixedVector<T, N>;

            fn $method(self, rhs: T) -> FixedVector<T, N> {
                self.$scalar_method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $trait<T> for &FixedVector<T, N> {
            type Output = FixedVector<T, N>;

            fn $method(self, rhs: T) -> FixedVector<T, N> {
                self.$scalar_method(rhs)
            }
        }
    };
}

impl_scalar_binop!(Add, add, add_scalar);
impl_scalar_binop!(Sub, sub, sub_scalar);
impl_scalar_binop!(Mul, mul, mul_scalar);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use approx::assert_relative_eq;

    // Deliberately not `use super::*`: glob-importing would bring the
    // `core::ops` traits into scope and make `a.add(&b)` resolve to the
    // by-value operator impls instead of the inherent `&self` methods.
    use super::{FixedVector, VectorError};

    #[test]
    fn test_add_scalar_scenario() {
        let v = FixedVector::<i32, 5>::from_values(&[1, 2, 3, 4, 5]);
        let r = v.add_scalar(10);
        assert_eq!(r.as_slice(), &[11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_scalar_round_trip_integer() {
        let v = FixedVector::<i32, 4>::from_values(&[-3, 0, 7, 100]);
        assert_eq!(v.add_scalar(42).sub_scalar(42), v);
    }

    #[test]
    fn test_scalar_round_trip_float() {
        let v = FixedVector::<f64, 3>::from_values(&[0.1, 2.5, -7.25]);
        let r = v.add_scalar(0.3).sub_scalar(0.3);
        for (got, want) in r.iter().zip(v.iter()) {
            assert_relative_eq!(*got, *want, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_sub_mul_scalar() {
        let v = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        assert_eq!(v.sub_scalar(5).as_slice(), &[5, 15, 25]);
        assert_eq!(v.mul_scalar(2).as_slice(), &[20, 40, 60]);
    }

    #[test]
    fn test_div_scalar() {
        let v = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        assert_eq!(v.div_scalar(10).unwrap().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_div_scalar_integer_zero_fails() {
        let v = FixedVector::<i32, 5>::zero();
        assert_eq!(v.div_scalar(0), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn test_div_scalar_float_zero_is_ieee() {
        let v = FixedVector::<f64, 2>::from_values(&[1.0, -1.0]);
        let r = v.div_scalar(0.0).unwrap();
        assert_eq!(r.as_slice(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn test_elementwise_add_same_type() {
        let a = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        let b = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        assert_eq!(a.add(&b).as_slice(), &[11, 22, 33]);
    }

    #[test]
    fn test_elementwise_add_commutes() {
        let a = FixedVector::<i32, 4>::from_values(&[1, -2, 3, -4]);
        let b = FixedVector::<i32, 4>::from_values(&[5, 6, -7, 8]);
        assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn test_elementwise_add_promotes() {
        let a = FixedVector::<i32, 2>::from_values(&[1, 2]);
        let b = FixedVector::<f64, 2>::from_values(&[0.5, 0.25]);
        let c: FixedVector<f64, 2> = a.add(&b);
        assert_eq!(c.as_slice(), &[1.5, 2.25]);
    }

    #[test]
    fn test_elementwise_sub_mul() {
        let a = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        let b = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        assert_eq!(a.sub(&b).as_slice(), &[9, 18, 27]);
        assert_eq!(a.mul(&b).as_slice(), &[10, 40, 90]);
    }

    #[test]
    fn test_elementwise_div() {
        let a = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        let b = FixedVector::<i32, 3>::from_values(&[2, 4, 5]);
        assert_eq!(a.div(&b).unwrap().as_slice(), &[5, 5, 6]);
    }

    #[test]
    fn test_elementwise_div_integer_zero_fails() {
        let a = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        let b = FixedVector::<i32, 3>::from_values(&[1, 0, 3]);
        assert_eq!(a.div(&b), Err(VectorError::DivisionByZero));
    }

    #[test]
    fn test_elementwise_div_float_promotion_is_ieee() {
        // i32 / f32 promotes to f32, so the zero goes through IEEE rules.
        let a = FixedVector::<i32, 2>::from_values(&[1, 2]);
        let b = FixedVector::<f32, 2>::from_values(&[0.0, 2.0]);
        let r = a.div(&b).unwrap();
        assert_eq!(r.as_slice(), &[f32::INFINITY, 1.0]);
    }

    #[test]
    fn test_weighted_sum_integer() {
        let a = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        let b = FixedVector::<i32, 3>::from_values(&[10, 20, 30]);
        let r = a.weighted_sum(2, &b, 3);
        assert_eq!(r.as_slice(), &[32, 64, 96]);
    }

    #[test]
    fn test_weighted_sum_mixed_promotes() {
        let a = FixedVector::<i32, 2>::from_values(&[1, 2]);
        let b = FixedVector::<f64, 2>::from_values(&[0.5, 1.5]);
        let r: FixedVector<f64, 2> = a.weighted_sum(2, &b, 4);
        assert_eq!(r.as_slice(), &[4.0, 10.0]);
    }

    #[test]
    fn test_operator_vector_vector() {
        let a = FixedVector::<i32, 2>::from_values(&[1, 2]);
        let b = FixedVector::<f64, 2>::from_values(&[0.5, 0.5]);
        let sum: FixedVector<f64, 2> = &a + &b;
        assert_eq!(sum.as_slice(), &[1.5, 2.5]);
        let product = a * b;
        assert_eq!(product.as_slice(), &[0.5, 1.0]);
    }

    #[test]
    fn test_operator_vector_scalar() {
        let v = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        assert_eq!((&v + 10).as_slice(), &[11, 12, 13]);
        assert_eq!((&v - 1).as_slice(), &[0, 1, 2]);
        assert_eq!((v * 3).as_slice(), &[3, 6, 9]);
    }
}
