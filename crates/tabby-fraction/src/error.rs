//! Errors raised by fraction construction, mutation and arithmetic.

use thiserror::Error;

/// Errors that can occur while building or combining fractions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A zero denominator was supplied to a constructor or setter.
    #[error("denominator cannot be zero")]
    InvalidDenominator,

    /// The divisor has a zero numerator.
    #[error("cannot divide by zero")]
    DivisionByZero,

    /// The reduced result does not fit in 64 bits.
    #[error("fraction result does not fit in 64 bits")]
    Overflow,

    /// Text could not be read as a fraction.
    #[error("cannot parse fraction: {0}")]
    Parse(String),
}

/// Result alias for fraction operations.
pub type Result<T> = std::result::Result<T, FractionError>;
