// ============================================================================
// Numeric Errors
// Error types for fixed-point money arithmetic, rounding and text conversion
// ============================================================================

use std::fmt;
use std::num::ParseIntError;

/// Errors that can occur while building, combining or printing amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// Result does not fit the backing i64
    Overflow,
    /// Rounding was required but the mode forbids it
    ForbiddenRounding,
    /// Input text does not match `digit+ ('.' digit*)?` or is too large once scaled
    Parse,
    /// Raw digit sequence could not be converted to an integer
    Conversion(ParseIntError),
    /// Attempted division by zero
    DivisionByZero,
    /// Floating-point input is NaN or infinite
    InvalidInput,
    /// Unrecognized format request
    Format,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result outside the representable range")
            },
            NumericError::ForbiddenRounding => {
                write!(f, "forbidden rounding: value is not exact at the target precision")
            },
            NumericError::Parse => write!(f, "parse error: not a valid decimal amount"),
            NumericError::Conversion(err) => write!(f, "integer conversion failed: {}", err),
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: value is not finite"),
            NumericError::Format => write!(f, "unrecognized format specifier"),
        }
    }
}

impl std::error::Error for NumericError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NumericError::Conversion(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ParseIntError> for NumericError {
    fn from(err: ParseIntError) -> Self {
        NumericError::Conversion(err)
    }
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
