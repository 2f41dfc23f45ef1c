#![warn(missing_docs)]

//! Reversible arithmetic for abacus
//!
//! Each arithmetic step is wrapped in a [`Command`] carrying its operation and operand.
//! An [`Accumulator`] executes commands against a running value and keeps them on a
//! stack so the most recent one can be undone with its paired inverse.

pub mod accumulator;
pub mod command;
pub mod error;
pub mod event;
pub mod number;
pub mod operation;

// Re-export public API
pub use accumulator::Accumulator;
pub use command::Command;
pub use error::{CalculatorError, Result};
pub use event::{CommandEvent, CommandObserver, EventKind, EventLog};
pub use number::format_number;
pub use operation::OperationKind;
