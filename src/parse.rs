use crate::error::InvalidInputError;

/// Parses whitespace separated coefficients, ordered from the highest power to the constant term.
/// Every token is converted before anything is returned, so the first invalid token is reported.
/// # Example
/// ```
/// use horner::{parse_coefficients, InvalidInputError};
///
/// assert_eq!(Ok(vec![1.0, -3.0, 2.0]), parse_coefficients("1 -3 2"));
/// assert_eq!(
///     Err(InvalidInputError::NotANumber { position: 1, token: "two".to_string() }),
///     parse_coefficients("1 two 3")
/// );
/// ```
pub fn parse_coefficients(line: &str) -> Result<Vec<f64>, InvalidInputError> {
    let coefficients = line.split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(position, token))
        .collect::<Result<Vec<f64>, InvalidInputError>>()?;

    if coefficients.is_empty() {
        return Err(InvalidInputError::EmptyCoefficients);
    }
    Ok(coefficients)
}

/// Parses evaluation point. Line must hold exactly one numeric token.
pub fn parse_point(line: &str) -> Result<f64, InvalidInputError> {
    let mut tokens = line.split_whitespace();

    let x = match tokens.next() {
        Some(token) => parse_token(0, token)?,
        None => return Err(InvalidInputError::MissingPoint),
    };
    if let Some(extra) = tokens.next() {
        return Err(InvalidInputError::NotANumber { position: 1, token: extra.to_string() });
    }
    Ok(x)
}

fn parse_token(position: usize, token: &str) -> Result<f64, InvalidInputError> {
    token.parse::<f64>()
        .map_err(|_| InvalidInputError::NotANumber { position, token: token.to_string() })
}
