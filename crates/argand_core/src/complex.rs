//! # Complex Value Type
//!
//! A complex number stored as its Cartesian components.
//!
//! ## Value Semantics
//!
//! - `Complex` is `Copy`; operators take their operands by value
//! - Compound assignment replaces the whole value, never a single field
//! - Equality is exact component comparison with no tolerance
//!
//! ## Division by Zero
//!
//! Dividing by the zero value returns [`Complex::DIVISION_SENTINEL`]
//! (both components `+inf`). Use [`Complex::checked_div`] or
//! [`Complex::try_div`] to get an explicit failure instead.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Not, Sub, SubAssign};

use bytemuck::{Pod, Zeroable};

use crate::error::{ComplexError, ComplexResult};

/// Complex number in Cartesian form.
///
/// Layout is `#[repr(C)]` `[re, im]`, so slices can be viewed as
/// interleaved `f64` buffers with [`Complex::as_interleaved`].
///
/// # Example
///
/// ```rust,ignore
/// let z = Complex::new(3.0, 4.0);
/// assert_eq!(z.abs(), 5.0);
/// assert_eq!(!z, Complex::new(3.0, -4.0));
/// ```
#[derive(Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// The zero value.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Multiplicative identity.
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Imaginary unit.
    pub const I: Self = Self::new(0.0, 1.0);

    /// Result of dividing by the zero value.
    pub const DIVISION_SENTINEL: Self = Self::new(f64::INFINITY, f64::INFINITY);

    /// Creates a value from its real and imaginary parts.
    #[inline]
    #[must_use]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Real part.
    #[inline]
    #[must_use]
    pub const fn re(self) -> f64 {
        self.re
    }

    /// Imaginary part.
    #[inline]
    #[must_use]
    pub const fn im(self) -> f64 {
        self.im
    }

    /// Squared magnitude, `re² + im²`.
    ///
    /// This avoids the sqrt call when only a zero test or comparison is needed.
    #[inline]
    #[must_use]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Euclidean magnitude. Never negative; zero only for the zero value.
    #[inline]
    #[must_use]
    pub fn abs(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Principal angle in `(-π, π]`, with `arg(0) = 0`.
    #[inline]
    #[must_use]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Complex conjugate. Also available as `!z`.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Returns true if both components are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Returns true if either component is infinite.
    #[inline]
    #[must_use]
    pub fn is_infinite(self) -> bool {
        self.re.is_infinite() || self.im.is_infinite()
    }

    /// Returns true if either component is NaN.
    #[inline]
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Returns true if this is the value produced by dividing by zero.
    #[inline]
    #[must_use]
    pub fn is_division_sentinel(self) -> bool {
        self == Self::DIVISION_SENTINEL
    }

    /// Returns true if `self` and `other` are within `tolerance` of each other.
    ///
    /// The distance is the magnitude of the difference. Exact equality is `==`.
    #[inline]
    #[must_use]
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self - other).abs() <= tolerance
    }

    /// Checked division. Returns `None` if `rhs` is the zero value.
    #[inline]
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.norm_sqr() == 0.0 {
            None
        } else {
            Some(self / rhs)
        }
    }

    /// Division with an error instead of the infinity sentinel.
    ///
    /// # Errors
    ///
    /// Returns `ComplexError::DivisionByZero` if `rhs` is the zero value.
    #[inline]
    pub fn try_div(self, rhs: Self) -> ComplexResult<Self> {
        self.checked_div(rhs).ok_or(ComplexError::DivisionByZero)
    }

    /// Views a slice of values as interleaved `[re, im, re, im, ...]` components.
    #[inline]
    #[must_use]
    pub fn as_interleaved(values: &[Self]) -> &[f64] {
        bytemuck::cast_slice(values)
    }

    /// Views an interleaved component buffer as values.
    ///
    /// Returns `None` if the buffer has an odd length.
    #[inline]
    #[must_use]
    pub fn from_interleaved(components: &[f64]) -> Option<&[Self]> {
        bytemuck::try_cast_slice(components).ok()
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

impl Not for Complex {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        self.conjugate()
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);
        Self::new(a * c - b * d, a * d + b * c)
    }
}

impl Div for Complex {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        let (a, b) = (self.re, self.im);
        let (c, d) = (rhs.re, rhs.im);
        let denominator = rhs.norm_sqr();
        if denominator == 0.0 {
            tracing::debug!(dividend = ?self, "division by the zero value, returning sentinel");
            return Self::DIVISION_SENTINEL;
        }
        Self::new((a * c + b * d) / denominator, (b * c - a * d) / denominator)
    }
}

impl AddAssign for Complex {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Complex {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Complex {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Complex {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Complex({:?}, {:?})", self.re, self.im)
    }
}
