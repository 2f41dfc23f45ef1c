//! Accumulator with an undo stack

use std::fmt;

use tracing::{debug, info, warn};

use crate::command::Command;
use crate::error::{CalculatorError, Result};
use crate::event::{CommandEvent, CommandObserver, EventKind};

/// Holds a running value and the commands applied to it
///
/// The current value always equals the history folded onto the initial value with each
/// command's forward action. Undo restores the previous value by applying the popped
/// command's inverse, never by replaying the history.
pub struct Accumulator {
    initial: f64,
    current: f64,
    history: Vec<Command>,
    observers: Vec<Box<dyn CommandObserver>>,
}

impl Accumulator {
    /// Create an accumulator starting at zero
    pub fn new() -> Self {
        Self::with_initial(0.0)
    }

    /// Create an accumulator starting at `initial`
    pub fn with_initial(initial: f64) -> Self {
        Accumulator {
            initial,
            current: initial,
            history: Vec::new(),
            observers: Vec::new(),
        }
    }

    /// Register an observer for execute and undo events
    pub fn subscribe(&mut self, observer: Box<dyn CommandObserver>) {
        self.observers.push(observer);
    }

    /// Apply `command` and record it
    ///
    /// Returns the new current value.
    pub fn execute(&mut self, command: Command) -> f64 {
        let previous = self.current;
        self.current = command.execute(previous);
        self.history.push(command);

        if !self.current.is_finite() && previous.is_finite() {
            warn!(
                operation = command.name(),
                operand = command.operand(),
                value = self.current,
                "Value is no longer finite; undo will not restore it"
            );
        }

        self.notify(EventKind::Execute, &command);
        self.current
    }

    /// Apply `command` only if undo can restore the current value afterwards
    ///
    /// The operand is checked as in [`Command::checked`] and the result as in
    /// [`Command::checked_execute`]. A refused command leaves the value and history
    /// untouched and emits no event.
    pub fn try_execute(&mut self, command: Command) -> Result<f64> {
        let command = Command::checked(command.kind(), command.operand())?;
        if let Err(e) = command.checked_execute(self.current) {
            debug!(
                operation = command.name(),
                operand = command.operand(),
                value = self.current,
                "Refusing command: {}",
                e
            );
            return Err(e);
        }
        Ok(self.execute(command))
    }

    /// Reverse the most recent command
    ///
    /// Returns the command that was undone. Fails with
    /// [`CalculatorError::EmptyHistory`] and leaves the value untouched when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> Result<Command> {
        let command = self.history.pop().ok_or_else(|| {
            debug!(value = self.current, "Undo requested with empty history");
            CalculatorError::EmptyHistory
        })?;

        self.current = command.undo(self.current);
        self.notify(EventKind::Undo, &command);
        Ok(command)
    }

    /// Current value
    pub fn current_value(&self) -> f64 {
        self.current
    }

    /// Value the accumulator started from
    pub fn initial_value(&self) -> f64 {
        self.initial
    }

    /// Executed commands, oldest first
    pub fn history(&self) -> &[Command] {
        &self.history
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of commands that can be undone
    pub fn undoable_count(&self) -> usize {
        self.history.len()
    }

    /// Fold the history onto the initial value
    ///
    /// Matches [`current_value`](Self::current_value) up to floating point rounding.
    pub fn replay(&self) -> f64 {
        self.history
            .iter()
            .fold(self.initial, |value, command| command.execute(value))
    }

    fn notify(&mut self, kind: EventKind, command: &Command) {
        let event = CommandEvent::new(kind, command, self.current);
        info!(
            kind = ?event.kind,
            operation = command.name(),
            operand = command.operand(),
            value = self.current,
            "{}",
            event
        );
        for observer in &mut self.observers {
            observer.on_event(&event);
        }
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("history", &self.history)
            .field("observers", &self.observers.len())
            .finish()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating commands that stay exactly representable
    ///
    /// Scaling uses powers of two so no rounding creeps into the comparison.
    fn command_strategy() -> impl Strategy<Value = Command> {
        prop_oneof![
            (-100i32..=100).prop_map(|n| Command::add(n as f64)),
            (-100i32..=100).prop_map(|n| Command::subtract(n as f64)),
            prop::sample::select(vec![-8.0, -2.0, 2.0, 4.0, 8.0]).prop_map(Command::multiply),
            prop::sample::select(vec![-8.0, -2.0, 2.0, 4.0, 8.0]).prop_map(Command::divide),
        ]
    }

    proptest! {
        /// Undoing k of n commands leaves the value the first n - k commands produce
        #[test]
        fn prop_stack_order(
            commands in prop::collection::vec(command_strategy(), 1..10),
            undo_fraction in 0.0f64..=1.0,
        ) {
            let k = ((commands.len() as f64) * undo_fraction) as usize;
            let mut acc = Accumulator::new();
            for command in &commands {
                acc.execute(*command);
            }
            for _ in 0..k {
                acc.undo().unwrap();
            }

            let mut expected = Accumulator::new();
            for command in &commands[..commands.len() - k] {
                expected.execute(*command);
            }

            let actual = acc.current_value();
            let wanted = expected.current_value();
            let tolerance = 1e-9 * wanted.abs().max(1.0);
            prop_assert!(
                (actual - wanted).abs() <= tolerance,
                "after {} undos: {} != {}", k, actual, wanted
            );
            prop_assert_eq!(acc.history(), &commands[..commands.len() - k]);
        }

        /// Undo on an empty history never changes the value
        #[test]
        fn prop_empty_undo_guard(initial in -1.0e6f64..1.0e6) {
            let mut acc = Accumulator::with_initial(initial);
            prop_assert!(acc.undo().is_err());
            prop_assert_eq!(acc.current_value(), initial);
        }
    }
}
