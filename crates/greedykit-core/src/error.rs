//! Error types for the greedy kernels.
//!
//! Every failure in this crate is a violation of an input contract. The
//! variants below only differ in how much context they carry; callers that do
//! not care can test [`GreedyError::is_invalid_input`].

use thiserror::Error;

/// Errors raised when an input does not satisfy an operation's contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreedyError {
    /// The input collection was empty.
    ///
    /// Both a road and a battery collection must contain at least one element.
    #[error("Invalid input: {what} must not be empty")]
    EmptyInput {
        /// Name of the empty input
        what: &'static str,
    },

    /// A road description contained a character outside `L`, `R`, `S`.
    #[error("Invalid input: unexpected symbol {symbol:?} at position {position}, expected one of 'L', 'R', 'S'")]
    InvalidSymbol {
        /// The offending character
        symbol: char,
        /// Zero-based character position in the text
        position: usize,
    },

    /// The number of computers is zero or exceeds the number of batteries.
    #[error("Invalid input: {computers} computers cannot be powered by {batteries} batteries (need 1 <= n <= {batteries})")]
    InvalidComputerCount {
        /// Requested number of computers
        computers: usize,
        /// Number of batteries supplied
        batteries: usize,
    },

    /// A battery capacity was not strictly positive.
    #[error("Invalid input: battery {index} has capacity {value}, capacities must be positive")]
    InvalidCapacity {
        /// Index of the battery in the input slice
        index: usize,
        /// The rejected capacity
        value: u64,
    },

    /// The total battery capacity does not fit in a `u64`.
    #[error("Invalid input: total battery capacity overflows u64")]
    CapacityOverflow,
}

impl GreedyError {
    /// Create an EmptyInput error for the named input.
    pub fn empty(what: &'static str) -> Self {
        Self::EmptyInput { what }
    }

    /// Create an InvalidSymbol error.
    pub fn invalid_symbol(symbol: char, position: usize) -> Self {
        Self::InvalidSymbol { symbol, position }
    }

    /// Create an InvalidComputerCount error.
    pub fn invalid_computer_count(computers: usize, batteries: usize) -> Self {
        Self::InvalidComputerCount {
            computers,
            batteries,
        }
    }

    /// Create an InvalidCapacity error.
    pub fn invalid_capacity(index: usize, value: u64) -> Self {
        Self::InvalidCapacity { index, value }
    }

    /// Every variant is an input-validation failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::InvalidSymbol { .. }
                | Self::InvalidComputerCount { .. }
                | Self::InvalidCapacity { .. }
                | Self::CapacityOverflow
        )
    }
}

/// Result type alias for operations that can produce [`GreedyError`].
pub type Result<T> = std::result::Result<T, GreedyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GreedyError::invalid_symbol('X', 3);
        assert!(matches!(err, GreedyError::InvalidSymbol { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid input: unexpected symbol 'X' at position 3, expected one of 'L', 'R', 'S'"
        );

        let err = GreedyError::invalid_computer_count(5, 3);
        assert!(matches!(err, GreedyError::InvalidComputerCount { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid input: 5 computers cannot be powered by 3 batteries (need 1 <= n <= 3)"
        );
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            GreedyError::empty("road"),
            GreedyError::invalid_symbol('x', 0),
            GreedyError::invalid_computer_count(0, 4),
            GreedyError::invalid_capacity(2, 0),
            GreedyError::CapacityOverflow,
        ];

        for err in errors {
            assert!(err.is_invalid_input());
            assert!(err.to_string().starts_with("Invalid input"));
        }
    }

    #[test]
    fn test_capacity_context() {
        let err = GreedyError::invalid_capacity(7, 0);

        if let GreedyError::InvalidCapacity { index, value } = err {
            assert_eq!(index, 7);
            assert_eq!(value, 0);
        } else {
            panic!("Expected InvalidCapacity variant");
        }
    }
}
