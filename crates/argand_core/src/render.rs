//! # Text Rendering
//!
//! Human-readable forms:
//!
//! | Value        | Rendered        |
//! |--------------|-----------------|
//! | zero         | `0`             |
//! | pure real    | `3`             |
//! | pure imag    | `4i`            |
//! | `im > 0`     | `3 + 4i`        |
//! | `im < 0`     | `1 - 1i`        |
//! | list         | `{0, 4i, 1 - 1i}` |
//!
//! Without a precision, components are written in general form with six
//! significant digits (`1.62894`, `1e+20`, `1.22465e-16`), trailing zeros
//! stripped. A formatter precision (`{:.3}`) applies fixed notation to every
//! rendered component instead.

use std::fmt;

use crate::complex::Complex;

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re(), self.im());
        if re == 0.0 && im == 0.0 {
            return f.write_str("0");
        }
        if re == 0.0 {
            write_part(f, im)?;
            return f.write_str("i");
        }
        write_part(f, re)?;
        if im == 0.0 {
            return Ok(());
        }
        // NaN imaginary parts fall through to the minus branch
        if im > 0.0 {
            f.write_str(" + ")?;
            write_part(f, im)?;
        } else {
            f.write_str(" - ")?;
            write_part(f, -im)?;
        }
        f.write_str("i")
    }
}

/// Digits after the point in the scientific mantissa (six significant digits).
const MANTISSA_DECIMALS: usize = 5;

/// Decimal exponents in `-4..6` are written in fixed notation.
const FIXED_EXPONENT_RANGE: std::ops::Range<i32> = -4..6;

/// Writes one component, honouring the caller's precision.
fn write_part(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    match f.precision() {
        Some(precision) => write!(f, "{value:.precision$}"),
        None => write_general(f, value),
    }
}

/// Writes `value` in general form: six significant digits, fixed or
/// scientific depending on the rounded decimal exponent.
fn write_general(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == 0.0 || !value.is_finite() {
        return write!(f, "{value}");
    }

    let scientific = format!("{:.*e}", MANTISSA_DECIMALS, value);
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if FIXED_EXPONENT_RANGE.contains(&exponent) {
        let last_fixed = FIXED_EXPONENT_RANGE.end - 1;
        let decimals = usize::try_from(last_fixed - exponent).map_err(|_| fmt::Error)?;
        let fixed = format!("{value:.decimals$}");
        f.write_str(trim_fraction(&fixed))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(
            f,
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

/// Strips trailing zeros, and a bare trailing point, from a decimal string.
fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

/// Display adapter for a list of values: `{v0, v1, v2}`.
///
/// # Example
///
/// ```rust,ignore
/// let roots = Complex::ONE.nth_roots(2);
/// println!("{:.2}", ComplexList::new(&roots)); // {1.00, -1.00}
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ComplexList<'a>(&'a [Complex]);

impl<'a> ComplexList<'a> {
    /// Wraps a slice for rendering.
    #[inline]
    #[must_use]
    pub const fn new(values: &'a [Complex]) -> Self {
        Self(values)
    }

    /// The wrapped values.
    #[inline]
    #[must_use]
    pub const fn values(self) -> &'a [Complex] {
        self.0
    }
}

impl fmt::Display for ComplexList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("}")
    }
}
