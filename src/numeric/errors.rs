// ============================================================================
// Numeric Errors
// Error types for Q32.32 fixed-point operations
// ============================================================================

use std::fmt;

/// Errors that can occur during fixed-point operations.
///
/// Saturating operators never produce these; they are reserved for the cases
/// where no representable result exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result has no representable value (e.g. `abs(MIN)`)
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Square root of a negative value
    NegativeSqrt,
    /// Input value is not a finite number
    InvalidInput,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result is not representable")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::NegativeSqrt => {
                write!(f, "invalid argument: square root of a negative value")
            },
            NumericError::InvalidInput => write!(f, "invalid input: value is not finite"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
