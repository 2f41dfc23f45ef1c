//! Reversible commands
//!
//! A [`Command`] binds an [`OperationKind`] to the operand it is applied with. The same
//! operand drives both directions: `execute` applies the operation, `undo` applies its
//! paired inverse.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, Result};
use crate::number::format_number;
use crate::operation::OperationKind;

/// An immutable arithmetic command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Command {
    kind: OperationKind,
    #[serde(with = "crate::number")]
    operand: f64,
}

impl Command {
    /// Create a command for `kind` applied with `operand`
    ///
    /// The operand is not validated. See [`Command::checked`] for a constructor that
    /// refuses commands whose undo is not an exact inverse.
    pub fn new(kind: OperationKind, operand: f64) -> Self {
        Command { kind, operand }
    }

    /// Create a command, refusing operands that make undo lossy
    ///
    /// Zero is refused for multiply and divide since one direction would divide by zero.
    /// NaN and infinities are refused for every kind.
    pub fn checked(kind: OperationKind, operand: f64) -> Result<Self> {
        if !operand.is_finite() {
            return Err(CalculatorError::NonFiniteOperand(operand));
        }
        if kind.is_lossy_with(operand) {
            return Err(CalculatorError::NonInvertibleOperand { kind, operand });
        }
        Ok(Command::new(kind, operand))
    }

    /// Add `operand`
    pub fn add(operand: f64) -> Self {
        Command::new(OperationKind::Add, operand)
    }

    /// Subtract `operand`
    pub fn subtract(operand: f64) -> Self {
        Command::new(OperationKind::Subtract, operand)
    }

    /// Multiply by `operand`
    pub fn multiply(operand: f64) -> Self {
        Command::new(OperationKind::Multiply, operand)
    }

    /// Divide by `operand`
    pub fn divide(operand: f64) -> Self {
        Command::new(OperationKind::Divide, operand)
    }

    /// Operation this command performs
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Operand used in both directions
    pub fn operand(&self) -> f64 {
        self.operand
    }

    /// Display name of the operation
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Forward action applied to `current`
    pub fn execute(&self, current: f64) -> f64 {
        self.kind.apply(current, self.operand)
    }

    /// Inverse action applied to `current`
    pub fn undo(&self, current: f64) -> f64 {
        self.kind.inverse().apply(current, self.operand)
    }

    /// Compute the result of executing against `current`, refusing results undo cannot
    /// recover
    ///
    /// A non-finite result, or one that underflows a non-zero value to zero, is refused
    /// with [`CalculatorError::LossyResult`].
    pub fn checked_execute(&self, current: f64) -> Result<f64> {
        let value = self.execute(current);
        let overflowed = !value.is_finite();
        // Sums only reach zero by exact cancellation; products reach it by underflow
        let underflowed = value == 0.0
            && current != 0.0
            && matches!(self.kind, OperationKind::Multiply | OperationKind::Divide);
        if overflowed || underflowed {
            return Err(CalculatorError::LossyResult {
                kind: self.kind,
                operand: self.operand,
                value,
            });
        }
        Ok(value)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, format_number(self.operand))
    }
}

impl FromStr for Command {
    type Err = CalculatorError;

    /// Parse `kind:operand` or `kind operand`, e.g. `add:100` or `div 2`
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (kind, operand) = s
            .split_once(':')
            .or_else(|| s.split_once(char::is_whitespace))
            .ok_or_else(|| {
                CalculatorError::invalid_command(format!("expected <op>:<operand>, got '{}'", s))
            })?;

        let kind: OperationKind = kind.parse()?;
        let operand: f64 = operand.trim().parse().map_err(|_| {
            CalculatorError::invalid_command(format!("'{}' is not a number", operand.trim()))
        })?;

        Ok(Command::new(kind, operand))
    }
}
