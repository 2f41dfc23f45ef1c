// CLI error handling

use abacus_config::ConfigError;
use abacus_core::CalculatorError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Calculator(#[from] CalculatorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid step '{step}': {source}")]
    InvalidStep {
        step: String,
        #[source]
        source: CalculatorError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::Calculator(CalculatorError::EmptyHistory) => {
                "Nothing left to undo.".to_string()
            }
            CliError::Calculator(e @ CalculatorError::NonInvertibleOperand { .. })
            | CliError::Calculator(e @ CalculatorError::LossyResult { .. }) => {
                format!(
                    "{}\n\nSet calculator.strict_operands = false to allow it anyway.",
                    e
                )
            }
            CliError::Calculator(e) => e.to_string(),
            CliError::Config(e) => {
                format!("{}\n\nCheck the file passed with --config and ABACUS_* variables.", e)
            }
            CliError::InvalidStep { step, source } => {
                format!(
                    "Cannot understand step '{}': {}\n\nSteps look like add:100, div:2 or undo.",
                    step, source
                )
            }
            CliError::Io(e) => format!("Output failed: {}", e),
            CliError::Serialization(e) => format!("Could not encode output: {}", e),
        }
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::OperationKind;

    #[test]
    fn test_user_message_for_empty_history() {
        let err = CliError::from(CalculatorError::EmptyHistory);
        assert_eq!(err.user_message(), "Nothing left to undo.");
    }

    #[test]
    fn test_user_message_suggests_relaxing_strict_mode() {
        let err = CliError::from(CalculatorError::NonInvertibleOperand {
            kind: OperationKind::Divide,
            operand: 0.0,
        });
        assert!(err.user_message().contains("strict_operands"));
    }

    #[test]
    fn test_user_message_for_overflowing_result() {
        let err = CliError::from(CalculatorError::LossyResult {
            kind: OperationKind::Multiply,
            operand: 1e300,
            value: f64::INFINITY,
        });
        let message = err.user_message();
        assert!(message.starts_with("Mul by 1e+300 gives inf"));
        assert!(message.contains("strict_operands"));
    }

    #[test]
    fn test_invalid_step_message() {
        let err = CliError::InvalidStep {
            step: "pow:2".to_string(),
            source: CalculatorError::unknown_operation("pow"),
        };
        assert_eq!(err.to_string(), "Invalid step 'pow:2': Unknown operation: pow");
        assert!(err.user_message().contains("add:100"));
    }
}
