//! # Argand Core
//!
//! Complex numbers in Cartesian form.
//!
//! ## Design Principles
//!
//! 1. **Value semantics** - `Complex` is `Copy`; every operation returns a fresh value
//! 2. **Total operators** - division by zero yields `(+inf, +inf)` instead of panicking
//! 3. **Exact equality** - `==` compares components bit-for-bit under IEEE 754 rules
//! 4. **Opt-in checks** - `checked_div`, `try_div` and `try_pow` report degenerate input
//!
//! ## Example
//!
//! ```rust,ignore
//! use argand_core::{Complex, ComplexList};
//!
//! let z1 = Complex::new(3.0, 4.0);
//! let z2 = Complex::new(1.0, -1.0);
//!
//! assert_eq!(z1 * z2, Complex::new(7.0, 1.0));
//! assert_eq!(z1.to_string(), "3 + 4i");
//!
//! let roots = z1.nth_roots(3);
//! println!("{:.5}", ComplexList::new(&roots));
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
// Exact component comparison is the equality contract
#![allow(clippy::float_cmp)]

pub mod complex;
pub mod error;
pub mod polar;
pub mod render;

pub use complex::Complex;
pub use error::{ComplexError, ComplexResult};
pub use render::ComplexList;
