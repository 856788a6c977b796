use std::str::FromStr;

use nalgebra::DVector;
use num_traits::Float;

use crate::{error::InvalidInputError, parse::parse_coefficients};

/// Evaluates polynomial with `coefficients` ordered from the highest power down to the constant term
/// at point `x`, using Horner's nested multiplication.
/// # Example
/// ```
/// use horner::evaluate;
///
/// // x^2 - 3x + 2
/// assert_eq!(Ok(12.0), evaluate(&[1.0_f64, -3.0, 2.0], 5.0));
/// assert_eq!(Ok(12.0), evaluate(&[1.0_f32, -3.0, 2.0], 5.0));
/// ```
/// # Errors
/// [InvalidInputError::EmptyCoefficients] is returned when `coefficients` is empty.
/// ```
/// use horner::{evaluate, InvalidInputError};
///
/// assert_eq!(Err(InvalidInputError::EmptyCoefficients), evaluate::<f64>(&[], 1.0));
/// ```
pub fn evaluate<T: Float>(coefficients: &[T], x: T) -> Result<T, InvalidInputError> {
    let (leading, rest) = coefficients
        .split_first()
        .ok_or(InvalidInputError::EmptyCoefficients)?;
    Ok(nested(*leading, rest, x))
}

// Strictly left to right, one multiplication then one addition per term.
fn nested<T: Float>(leading: T, rest: &[T], x: T) -> T {
    rest.iter().fold(leading, |accumulator, &c| accumulator * x + c)
}

/// Polynomial holding at least one coefficient, ordered from the highest power to the constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T> {
    coefficients: Vec<T>,
}

impl<T: Float> Polynomial<T> {
    /// Creates [Polynomial] of degree `coefficients.len() - 1`.
    /// # Errors
    /// Error is returned when `coefficients` is empty.
    /// ```
    /// use horner::Polynomial;
    ///
    /// assert!(Polynomial::<f64>::new(vec![]).is_err());
    /// assert!(Polynomial::new(vec![4.0_f64]).is_ok());
    /// ```
    pub fn new(coefficients: Vec<T>) -> Result<Self, InvalidInputError> {
        if coefficients.is_empty() {
            return Err(InvalidInputError::EmptyCoefficients);
        }
        Ok(Polynomial { coefficients })
    }

    /// Evaluates polynomial at `x`.
    pub fn evaluate(&self, x: T) -> T {
        nested(self.coefficients[0], &self.coefficients[1..], x)
    }

    /// Degree of polynomial, one less than the number of coefficients.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Coefficients from the highest power to the constant term.
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }
}

impl Polynomial<f64> {
    /// Evaluates polynomial at every point of `x_vector`.
    /// # Example
    /// ```
    /// use horner::Polynomial;
    /// use nalgebra::DVector;
    ///
    /// let polynomial = Polynomial::<f64>::new(vec![1.0, 0.0, -1.0]).unwrap();
    /// let results = polynomial.batch_evaluate(&DVector::from_vec(vec![-1.0, 0.0, 2.0]));
    ///
    /// assert_eq!(DVector::from_vec(vec![0.0, -1.0, 3.0]), results);
    /// ```
    pub fn batch_evaluate(&self, x_vector: &DVector<f64>) -> DVector<f64> {
        x_vector.map(|x| self.evaluate(x))
    }
}

impl FromStr for Polynomial<f64> {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Polynomial::new(parse_coefficients(s)?)
    }
}
