use std::{error::Error, fmt::Display};

/// Raised when input cannot be turned into a polynomial or an evaluation point.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// Coefficient sequence has no terms, so the degree is undefined.
    EmptyCoefficients,
    /// No evaluation point was given.
    MissingPoint,
    /// Token at `position` (0-based) is not a number.
    NotANumber { position: usize, token: String },
}

impl Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::EmptyCoefficients => {
                write!(f, "Error in input: polynomial must have at least one coefficient")
            }
            InvalidInputError::MissingPoint => {
                write!(f, "Error in input: evaluation point is missing")
            }
            InvalidInputError::NotANumber { position, token } => {
                write!(f, "Error in input: token {} ({:?}) is not a number", position, token)
            }
        }
    }
}

impl Error for InvalidInputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_offending_token() {
        let error = InvalidInputError::NotANumber { position: 2, token: "abc".to_string() };

        assert_eq!("Error in input: token 2 (\"abc\") is not a number", error.to_string());
    }

    #[test]
    fn boxes_as_dyn_error() {
        let error: Box<dyn Error> = Box::new(InvalidInputError::EmptyCoefficients);

        assert!(error.to_string().starts_with("Error in input"));
        assert!(error.downcast_ref::<InvalidInputError>().is_some());
    }
}
