//! # Polar Form
//!
//! Conversions between Cartesian and polar form, integer powers and n-th roots.
//!
//! All operations go through `(r, θ) = (abs, arg)` and back via cosine/sine,
//! so results carry ordinary floating-point rounding.
//!
//! ## Degenerate Input
//!
//! - `pow(0)` is `1` for every base, including zero
//! - `pow(negative)` of zero is undefined (infinite/NaN components); see [`Complex::try_pow`]
//! - `nth_roots(0)` is empty, while `nth_root(0, k)` is the zero value

use std::f64::consts::PI;

use crate::complex::Complex;
use crate::error::{ComplexError, ComplexResult};

impl Complex {
    /// Creates a value from magnitude and angle.
    #[inline]
    #[must_use]
    pub fn from_polar(r: f64, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(r * cos, r * sin)
    }

    /// Returns `(abs, arg)`.
    #[inline]
    #[must_use]
    pub fn to_polar(self) -> (f64, f64) {
        (self.abs(), self.arg())
    }

    /// Integer power.
    ///
    /// The magnitude is raised to `|degree|` and the angle multiplied by it;
    /// a negative degree inverts the magnitude and negates the angle.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let z = Complex::new(3.0, 4.0).pow(2); // ≈ -7 + 24i
    /// ```
    #[must_use]
    pub fn pow(self, degree: i32) -> Self {
        if degree == 0 {
            return Self::ONE;
        }

        let (r, theta) = self.to_polar();
        let d = f64::from(degree.unsigned_abs());
        let mut magnitude = r.powf(d);
        let mut angle = theta * d;
        if degree < 0 {
            if self == Self::ZERO {
                tracing::debug!(degree, "zero raised to a negative power");
            }
            magnitude = magnitude.recip();
            angle = -angle;
        }
        Self::from_polar(magnitude, angle)
    }

    /// Integer power that rejects a zero base with a negative degree.
    ///
    /// # Errors
    ///
    /// Returns `ComplexError::ZeroToNegativePower` if `self` is the zero value
    /// and `degree < 0`.
    ///
    /// A non-zero base whose magnitude underflows to zero is not an error:
    /// `Complex::new(1e-200, 0.0).try_pow(-2)` is `Ok` with infinite (and
    /// possibly NaN) components, the same value `pow` returns.
    pub fn try_pow(self, degree: i32) -> ComplexResult<Self> {
        if degree < 0 && self == Self::ZERO {
            return Err(ComplexError::ZeroToNegativePower { degree });
        }
        Ok(self.pow(degree))
    }

    /// All `n` n-th roots, ordered by root index `k = 0..n`.
    ///
    /// Root `k` has magnitude `abs^(1/n)` and angle `(arg + 2πk) / n`.
    /// Returns an empty list for `n = 0`.
    #[must_use]
    pub fn nth_roots(self, n: u32) -> Vec<Self> {
        if n == 0 {
            return Vec::new();
        }
        let (r, theta) = self.to_polar();
        let degree = f64::from(n);
        let magnitude = r.powf(degree.recip());
        (0..n)
            .map(|k| Self::from_polar(magnitude, root_angle(theta, degree, k)))
            .collect()
    }

    /// The `k`-th of the `n` n-th roots.
    ///
    /// `k` is not checked against `n`; indices past `n - 1` wrap around the
    /// circle. Returns the zero value for `n = 0`.
    #[must_use]
    pub fn nth_root(self, n: u32, k: u32) -> Self {
        if n == 0 {
            return Self::ZERO;
        }
        let (r, theta) = self.to_polar();
        let degree = f64::from(n);
        Self::from_polar(r.powf(degree.recip()), root_angle(theta, degree, k))
    }
}

/// Angle of root `k` of the given degree for a base at angle `theta`.
#[inline]
fn root_angle(theta: f64, degree: f64, k: u32) -> f64 {
    (theta + 2.0 * PI * f64::from(k)) / degree
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn test_polar_round_trip() {
        let z = Complex::new(3.0, 4.0);
        let (r, theta) = z.to_polar();
        assert_eq!(r, 5.0);
        assert!(Complex::from_polar(r, theta).approx_eq(z, TOLERANCE));
    }

    #[test]
    fn test_pow_zero_degree() {
        assert_eq!(Complex::new(3.0, 4.0).pow(0), Complex::ONE);
        assert_eq!(Complex::ZERO.pow(0), Complex::ONE);
        assert_eq!(Complex::DIVISION_SENTINEL.pow(0), Complex::ONE);
    }

    #[test]
    fn test_pow_square() {
        let z = Complex::new(3.0, 4.0).pow(2);
        assert!(z.approx_eq(Complex::new(-7.0, 24.0), TOLERANCE));
    }

    #[test]
    fn test_pow_negative() {
        let z = Complex::new(3.0, 4.0);
        let inverse = z.pow(-1);
        assert!(inverse.approx_eq(Complex::ONE / z, TOLERANCE));
        assert!((z.pow(-2) * z.pow(2)).approx_eq(Complex::ONE, TOLERANCE));
    }

    #[test]
    fn test_pow_extreme_degree() {
        // |i32::MIN| does not fit in i32
        let z = Complex::ONE.pow(i32::MIN);
        assert!(z.approx_eq(Complex::ONE, TOLERANCE));
    }

    #[test]
    fn test_pow_zero_base_negative_degree() {
        let undefined = Complex::ZERO.pow(-1);
        assert!(!undefined.is_finite());
        assert!(undefined.is_infinite());
        assert!(undefined.is_nan());
        assert_eq!(
            Complex::ZERO.try_pow(-2),
            Err(ComplexError::ZeroToNegativePower { degree: -2 })
        );
        assert_eq!(Complex::ZERO.try_pow(3), Ok(Complex::ZERO));
    }

    #[test]
    fn test_pow_underflow_is_not_zero_base() {
        let tiny = Complex::new(1e-200, 0.0);
        assert!(tiny.pow(-2).is_infinite());
        let result = tiny.try_pow(-2);
        assert!(result.is_ok_and(|z| z.is_infinite()));
    }

    #[test]
    fn test_nth_roots_count_and_order() {
        let z = Complex::new(3.0, 4.0);
        let roots = z.nth_roots(3);
        assert_eq!(roots.len(), 3);
        for (k, root) in roots.iter().enumerate() {
            let k = u32::try_from(k).unwrap();
            assert_eq!(*root, z.nth_root(3, k));
            assert!(root.pow(3).approx_eq(z, TOLERANCE));
        }
        // Principal root comes first
        assert!(roots[0].approx_eq(Complex::new(1.628_937, 0.520_175), 1e-5));
    }

    #[test]
    fn test_nth_roots_of_unity() {
        let roots = Complex::ONE.nth_roots(4);
        let expected = [
            Complex::ONE,
            Complex::I,
            Complex::new(-1.0, 0.0),
            Complex::new(0.0, -1.0),
        ];
        for (root, expected) in roots.iter().zip(expected) {
            assert!(root.approx_eq(expected, TOLERANCE));
        }
    }

    #[test]
    fn test_zero_roots_conventions() {
        let z = Complex::new(3.0, 4.0);
        assert!(z.nth_roots(0).is_empty());
        assert_eq!(z.nth_root(0, 0), Complex::ZERO);
        assert_eq!(z.nth_root(0, 5), Complex::ZERO);
    }

    #[test]
    fn test_nth_root_index_wraps() {
        let z = Complex::new(-8.0, 0.0);
        assert!(z.nth_root(3, 4).approx_eq(z.nth_root(3, 1), TOLERANCE));
    }

    #[test]
    fn test_roots_of_zero() {
        assert!(Complex::ZERO.nth_roots(5).iter().all(|root| *root == Complex::ZERO));
    }
}
