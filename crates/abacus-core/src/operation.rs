//! Arithmetic operations and their inverse pairing

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalculatorError;

/// Add two numbers
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Subtract `b` from `a`
pub fn sub(a: f64, b: f64) -> f64 {
    a - b
}

/// Multiply two numbers
pub fn mul(a: f64, b: f64) -> f64 {
    a * b
}

/// Divide `a` by `b`
///
/// No check is made on `b`: a zero divisor yields infinity or NaN.
pub fn div(a: f64, b: f64) -> f64 {
    a / b
}

/// The four arithmetic operations a command can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    /// Addition, undone by subtraction
    Add,
    /// Subtraction, undone by addition
    #[serde(rename = "Sub", alias = "Subtract")]
    Subtract,
    /// Multiplication, undone by division
    #[serde(rename = "Mul", alias = "Multiply")]
    Multiply,
    /// Division, undone by multiplication
    #[serde(rename = "Div", alias = "Divide")]
    Divide,
}

impl OperationKind {
    /// All operation kinds in declaration order
    pub const ALL: [OperationKind; 4] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
    ];

    /// Apply the forward function to `a` and `b`
    pub fn apply(self, a: f64, b: f64) -> f64 {
        let f: fn(f64, f64) -> f64 = match self {
            OperationKind::Add => add,
            OperationKind::Subtract => sub,
            OperationKind::Multiply => mul,
            OperationKind::Divide => div,
        };
        f(a, b)
    }

    /// The paired inverse operation
    pub fn inverse(self) -> OperationKind {
        match self {
            OperationKind::Add => OperationKind::Subtract,
            OperationKind::Subtract => OperationKind::Add,
            OperationKind::Multiply => OperationKind::Divide,
            OperationKind::Divide => OperationKind::Multiply,
        }
    }

    /// Display name used in notifications
    pub fn name(self) -> &'static str {
        match self {
            OperationKind::Add => "Add",
            OperationKind::Subtract => "Sub",
            OperationKind::Multiply => "Mul",
            OperationKind::Divide => "Div",
        }
    }

    /// Arithmetic symbol
    pub fn symbol(self) -> char {
        match self {
            OperationKind::Add => '+',
            OperationKind::Subtract => '-',
            OperationKind::Multiply => '*',
            OperationKind::Divide => '/',
        }
    }

    /// Whether undoing this operation with `operand` divides by zero
    pub(crate) fn is_lossy_with(self, operand: f64) -> bool {
        matches!(self, OperationKind::Multiply | OperationKind::Divide) && operand == 0.0
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(OperationKind::Add),
            "sub" | "subtract" | "-" => Ok(OperationKind::Subtract),
            "mul" | "multiply" | "*" | "x" => Ok(OperationKind::Multiply),
            "div" | "divide" | "/" => Ok(OperationKind::Divide),
            other => Err(CalculatorError::unknown_operation(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_functions() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(sub(2.0, 3.0), -1.0);
        assert_eq!(mul(2.0, 3.0), 6.0);
        assert_eq!(div(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_apply_dispatch() {
        assert_eq!(OperationKind::Add.apply(100.0, 24.0), 124.0);
        assert_eq!(OperationKind::Subtract.apply(100.0, 24.0), 76.0);
        assert_eq!(OperationKind::Multiply.apply(76.0, 6.0), 456.0);
        assert_eq!(OperationKind::Divide.apply(456.0, 2.0), 228.0);
    }

    #[test]
    fn test_inverse_pairing() {
        assert_eq!(OperationKind::Add.inverse(), OperationKind::Subtract);
        assert_eq!(OperationKind::Subtract.inverse(), OperationKind::Add);
        assert_eq!(OperationKind::Multiply.inverse(), OperationKind::Divide);
        assert_eq!(OperationKind::Divide.inverse(), OperationKind::Multiply);

        for kind in OperationKind::ALL {
            assert_eq!(kind.inverse().inverse(), kind);
        }
    }

    #[test]
    fn test_divide_by_zero_follows_ieee() {
        assert_eq!(OperationKind::Divide.apply(1.0, 0.0), f64::INFINITY);
        assert_eq!(OperationKind::Divide.apply(-1.0, 0.0), f64::NEG_INFINITY);
        assert!(OperationKind::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_names_and_symbols() {
        let names: Vec<_> = OperationKind::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, vec!["Add", "Sub", "Mul", "Div"]);
        let symbols: String = OperationKind::ALL.iter().map(|k| k.symbol()).collect();
        assert_eq!(symbols, "+-*/");
    }

    #[test]
    fn test_parse_operation_kind() {
        assert_eq!("add".parse::<OperationKind>().unwrap(), OperationKind::Add);
        assert_eq!("SUB".parse::<OperationKind>().unwrap(), OperationKind::Subtract);
        assert_eq!("Multiply".parse::<OperationKind>().unwrap(), OperationKind::Multiply);
        assert_eq!("/".parse::<OperationKind>().unwrap(), OperationKind::Divide);

        let err = "pow".parse::<OperationKind>().unwrap_err();
        assert!(matches!(err, CalculatorError::UnknownOperation(ref s) if s == "pow"));
    }

    #[test]
    fn test_lossy_operands() {
        assert!(OperationKind::Divide.is_lossy_with(0.0));
        assert!(OperationKind::Multiply.is_lossy_with(-0.0));
        assert!(!OperationKind::Add.is_lossy_with(0.0));
        assert!(!OperationKind::Divide.is_lossy_with(2.0));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&OperationKind::Subtract).unwrap();
        assert_eq!(json, "\"Sub\"");
        let kind: OperationKind = serde_json::from_str("\"Divide\"").unwrap();
        assert_eq!(kind, OperationKind::Divide);
    }
}
