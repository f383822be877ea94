//! `Display` formatting for [`FixedVector`].

use core::fmt;

use crate::Scalar;

use super::FixedVector;

/// Renders as `[ e0 e1 ... eN-1 ]`: bracketed, space-separated, with a
/// trailing space after every element. Diagnostics output only, not part of
/// the logical contract.
impl<T: Scalar, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for v in &self.data {
            write!(f, "{v} ")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integers() {
        let v = FixedVector::<i32, 3>::from_values(&[1, 2, 3]);
        assert_eq!(format!("{v}"), "[ 1 2 3 ]");
    }

    #[test]
    fn test_display_floats() {
        let v = FixedVector::<f64, 2>::from_values(&[1.5, -2.0]);
        assert_eq!(format!("{v}"), "[ 1.5 -2 ]");
    }

    #[test]
    fn test_display_empty() {
        let v = FixedVector::<i32, 0>::zero();
        assert_eq!(format!("{v}"), "[ ]");
    }
}
