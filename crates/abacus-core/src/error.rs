//! Error types for the calculator

use thiserror::Error;

use crate::number::format_number;
use crate::operation::OperationKind;

/// Result type used throughout abacus-core
pub type Result<T> = std::result::Result<T, CalculatorError>;

/// Errors that can occur while building or running commands
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Undo requested with no commands recorded
    #[error("Nothing to undo: command history is empty")]
    EmptyHistory,

    /// The command's undo would not restore the previous value
    #[error("{kind} by {} cannot be undone exactly", number(.operand))]
    NonInvertibleOperand {
        /// Operation that was requested
        kind: OperationKind,
        /// Operand that was refused
        operand: f64,
    },

    /// The command's result overflows or underflows, so undo cannot recover the value
    #[error(
        "{kind} by {} gives {}, which cannot be undone exactly",
        number(.operand),
        number(.value)
    )]
    LossyResult {
        /// Operation that was requested
        kind: OperationKind,
        /// Operand that was refused
        operand: f64,
        /// Value the command would have produced
        value: f64,
    },

    /// Operand is NaN or infinite
    #[error("Operand must be finite, got {0}")]
    NonFiniteOperand(f64),

    /// Operation name did not match any known kind
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    /// Command text could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CalculatorError {
    /// Create a new UnknownOperation error with context
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new InvalidCommand error with context
    pub fn invalid_command(msg: impl Into<String>) -> Self {
        Self::InvalidCommand(msg.into())
    }

    /// Whether this error came from an undo on an empty history
    pub fn is_empty_history(&self) -> bool {
        matches!(self, Self::EmptyHistory)
    }
}

fn number(value: &f64) -> String {
    format_number(*value)
}
