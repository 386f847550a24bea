//! Math error types

use std::fmt;

/// Error type for vector operations that divide by a scalar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Division by a zero scalar (includes normalizing a zero-length vector)
    DivisionByZero,
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let msg = format!("{}", MathError::DivisionByZero);
        assert!(msg.contains("division by zero"));
    }
}
