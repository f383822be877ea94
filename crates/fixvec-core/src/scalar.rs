//! Numeric element traits for generic vector math.
//!
//! Three traits cooperate here:
//!
//! - [`Scalar`] — the base requirement for anything stored in a
//!   [`FixedVector`](crate::FixedVector).
//! - [`Cast`] — explicit numeric conversion between element types,
//!   with `as`-cast semantics.
//! - [`Promote`] — the result type of mixed-type arithmetic, so that
//!   e.g. adding an `i32` vector to an `f64` vector yields `f64`.
//!
//! Rust performs no implicit arithmetic conversions, so the promotion
//! rules live in an explicit pairwise table over the ten supported
//! element types: `i8 i16 i32 i64 u8 u16 u32 u64 f32 f64`.

use core::fmt;
use core::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every numeric element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a vector.
///
/// This intentionally requires nothing floating-point-specific so that
/// integer vectors remain first-class citizens.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Division that refuses undefined cases.
    ///
    /// Integer types return `None` for a zero divisor (and for the
    /// overflowing `MIN / -1` case). Floating-point types never refuse:
    /// division by zero follows IEEE-754 and produces an infinity or NaN.
    fn checked_div(self, rhs: Self) -> Option<Self>;
}

// ---------------------------------------------------------------------------
// Cast — explicit numeric conversion
// ---------------------------------------------------------------------------

/// Numeric conversion from `Self` to `R` with `as`-cast semantics:
/// truncation for float-to-int, possible precision loss for int-to-float
/// or narrowing conversions.
pub trait Cast<R: Scalar>: Scalar {
    /// Convert `self` to the target element type.
    fn cast(self) -> R;
}

// ---------------------------------------------------------------------------
// Promote — mixed-type arithmetic result types
// ---------------------------------------------------------------------------

/// The arithmetic promotion rule for a pair of element types.
///
/// `<T as Promote<U>>::Output` is the element type produced when a `T`
/// and a `U` meet in an arithmetic operation. The table is symmetric and
/// reflexive:
///
/// - identical types promote to themselves,
/// - floating-point beats integer, and `f64` beats `f32`,
/// - among integers the wider type wins,
/// - at equal width the unsigned type wins.
pub trait Promote<U: Scalar>: Scalar {
    /// The promoted element type.
    type Output: Scalar;
}

/// Shorthand for the promoted type of a `T`/`U` pair.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_int {
    ($($ty:ty),+ $(,)?) => { $(
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                <$ty>::checked_div(self, rhs)
            }
        }
    )+ };
}

macro_rules! impl_scalar_float {
    ($($ty:ty),+ $(,)?) => { $(
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn checked_div(self, rhs: Self) -> Option<Self> {
                // IEEE-754 passthrough: x / 0.0 is inf or NaN, not an error.
                Some(self / rhs)
            }
        }
    )+ };
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar_float!(f32, f64);

macro_rules! impl_cast {
    ($src:ty => $($dst:ty),+ $(,)?) => { $(
        impl Cast<$dst> for $src {
            #[inline]
            #[allow(clippy::cast_lossless, clippy::unnecessary_cast)]
            fn cast(self) -> $dst {
                self as $dst
            }
        }
    )+ };
}

impl_cast!(i8 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(i16 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(i32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(i64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(u8 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(u16 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(u32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(u64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(f32 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_cast!(f64 => i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_promote_self {
    ($($ty:ty),+ $(,)?) => { $(
        impl Promote<$ty> for $ty {
            type Output = $ty;
        }
    )+ };
}

macro_rules! impl_promote_pair {
    ($(($a:ty, $b:ty) => $r:ty),+ $(,)?) => { $(
        impl Promote<$b> for $a {
            type Output = $r;
        }
        impl Promote<$a> for $b {
            type Output = $r;
        }
    )+ };
}

impl_promote_self!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl_promote_pair!(
    // i8 against everything wider or floating
    (i8, i16) => i16,
    (i8, i32) => i32,
    (i8, i64) => i64,
    (i8, u8) => u8,
    (i8, u16) => u16,
    (i8, u32) => u32,
    (i8, u64) => u64,
    (i8, f32) => f32,
    (i8, f64) => f64,
    // i16
    (i16, i32) => i32,
    (i16, i64) => i64,
    (i16, u8) => i16,
    (i16, u16) => u16,
    (i16, u32) => u32,
    (i16, u64) => u64,
    (i16, f32) => f32,
    (i16, f64) => f64,
    // i32
    (i32, i64) => i64,
    (i32, u8) => i32,
    (i32, u16) => i32,
    (i32, u32) => u32,
    (i32, u64) => u64,
    (i32, f32) => f32,
    (i32, f64) => f64,
    // i64
    (i64, u8) => i64,
    (i64, u16) => i64,
    (i64, u32) => i64,
    (i64, u64) => u64,
    (i64, f32) => f32,
    (i64, f64) => f64,
    // u8
    (u8, u16) => u16,
    (u8, u32) => u32,
    (u8, u64) => u64,
    (u8, f32) => f32,
    (u8, f64) => f64,
    // u16
    (u16, u32) => u32,
    (u16, u64) => u64,
    (u16, f32) => f32,
    (u16, f64) => f64,
    // u32
    (u32, u64) => u64,
    (u32, f32) => f32,
    (u32, f64) => f64,
    // u64
    (u64, f32) => f32,
    (u64, f64) => f64,
    // f32
    (f32, f64) => f64,
);
