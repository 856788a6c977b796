//! Polynomial evaluation with Horner's method.
//! Coefficients are ordered from the highest power down to the constant term, and the value
//! is computed by nested multiplication instead of computing each power separately.
//!
//! # Example
//! ```
//! use horner::{evaluate, Polynomial};
//! use assert_approx_eq::assert_approx_eq;
//!
//! // 2x^3 - 6x^2 + 2x - 1
//! let coefficients: Vec<f64> = vec![2.0, -6.0, 2.0, -1.0];
//! assert_approx_eq!(5.0, evaluate(&coefficients, 3.0).unwrap(), 1e-12);
//!
//! let polynomial = Polynomial::new(coefficients).unwrap();
//! assert_eq!(3, polynomial.degree());
//! assert_approx_eq!(-1.0, polynomial.evaluate(0.0), 1e-12);
//! ```

mod error;
mod parse;
mod polynomial;
mod session;

pub use error::InvalidInputError;
pub use parse::{parse_coefficients, parse_point};
pub use polynomial::{evaluate, Polynomial};
pub use session::{Session, COEFFICIENTS_PROMPT, POINT_PROMPT};
