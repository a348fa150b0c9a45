//! Errors reported by the runtime literal parser.

use thiserror::Error;

/// Reasons a memory size literal is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// A character that is not a digit of the literal's base
    #[error("invalid digit {found:?} in base {base} memory size literal")]
    InvalidDigit { found: char, base: u32 },

    /// The accumulated value does not fit in 64 bits
    #[error("memory size literal does not fit in 64 bits")]
    Overflow,

    #[error("literal value {value} cannot be represented by memory size type")]
    OutOfRange { value: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let invalid = LiteralError::InvalidDigit {
            found: '9',
            base: 8,
        };
        assert_eq!(
            invalid.to_string(),
            "invalid digit '9' in base 8 memory size literal"
        );
        assert_eq!(
            LiteralError::Overflow.to_string(),
            "memory size literal does not fit in 64 bits"
        );
        assert_eq!(
            LiteralError::OutOfRange { value: 300 }.to_string(),
            "literal value 300 cannot be represented by memory size type"
        );
    }
}
