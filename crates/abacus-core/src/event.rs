//! Notifications emitted by the accumulator

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::command::Command;
use crate::error::Result;
use crate::number::format_number;
use crate::operation::OperationKind;

/// What the accumulator did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A command was executed
    Execute,
    /// A command was undone
    Undo,
}

/// A single execute or undo notification
///
/// In JSON, an operand or value that is not finite is written as `"inf"`, `"-inf"` or
/// `"NaN"` so the event reads back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandEvent {
    /// Execute or undo
    pub kind: EventKind,
    /// Operation of the command involved
    pub operation: OperationKind,
    /// Operand of the command involved
    #[serde(with = "crate::number")]
    pub operand: f64,
    /// Accumulator value after the event
    #[serde(with = "crate::number")]
    pub value: f64,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl CommandEvent {
    /// Create an event for `command` leaving the accumulator at `value`
    pub fn new(kind: EventKind, command: &Command, value: f64) -> Self {
        CommandEvent {
            kind,
            operation: command.kind(),
            operand: command.operand(),
            value,
            timestamp: Utc::now(),
        }
    }

    /// Serialize to a single-line JSON object
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for CommandEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EventKind::Execute => {
                write!(f, "{}: {}", self.operation, format_number(self.operand))
            }
            EventKind::Undo => {
                write!(f, "Undo {}: {}", self.operation, format_number(self.operand))
            }
        }
    }
}

/// Receives accumulator events as they happen
pub trait CommandObserver {
    /// Called once per execute or undo, after the value has changed
    fn on_event(&mut self, event: &CommandEvent);
}

impl<F> CommandObserver for F
where
    F: FnMut(&CommandEvent),
{
    fn on_event(&mut self, event: &CommandEvent) {
        self(event)
    }
}

/// Observer that records every event it sees
///
/// Clones share the same buffer, so one handle can be subscribed while another is kept
/// for reading.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<CommandEvent>>>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events, oldest first
    pub fn events(&self) -> Vec<CommandEvent> {
        self.events.borrow().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Remove and return all recorded events
    pub fn drain(&self) -> Vec<CommandEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl CommandObserver for EventLog {
    fn on_event(&mut self, event: &CommandEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_display() {
        let command = Command::add(100.0);
        let executed = CommandEvent::new(EventKind::Execute, &command, 100.0);
        let undone = CommandEvent::new(EventKind::Undo, &command, 0.0);
        assert_eq!(executed.to_string(), "Add: 100");
        assert_eq!(undone.to_string(), "Undo Add: 100");
    }

    #[test]
    fn test_event_json() {
        let event = CommandEvent::new(EventKind::Undo, &Command::divide(2.0), 456.0);
        let value: serde_json::Value = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert_eq!(value["kind"], "undo");
        assert_eq!(value["operation"], "Div");
        assert_eq!(value["operand"], 2.0);
        assert_eq!(value["value"], 456.0);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_event_json_round_trips_infinite_value() {
        let event = CommandEvent::new(EventKind::Execute, &Command::divide(0.0), f64::INFINITY);
        let json = event.to_json().unwrap();
        let raw: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(raw["value"], "inf");
        assert_eq!(raw["operand"], 0.0);

        let back: CommandEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_event_json_round_trips_nan_value() {
        let event = CommandEvent::new(EventKind::Undo, &Command::divide(0.0), f64::NAN);
        let back: CommandEvent = serde_json::from_str(&event.to_json().unwrap()).unwrap();
        assert!(back.value.is_nan());
        assert_eq!(back.timestamp, event.timestamp);
    }

    #[test]
    fn test_event_display_uses_exponent_for_large_operands() {
        let event = CommandEvent::new(EventKind::Execute, &Command::add(1e300), 1e300);
        assert_eq!(event.to_string(), "Add: 1e+300");
    }

    #[test]
    fn test_event_log_shares_buffer() {
        let log = EventLog::new();
        let mut handle = log.clone();
        assert!(log.is_empty());

        handle.on_event(&CommandEvent::new(EventKind::Execute, &Command::add(1.0), 1.0));
        assert_eq!(log.len(), 1);
        assert_eq!(log.events()[0].operation, OperationKind::Add);

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(handle.is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &CommandEvent| seen.push(event.kind);
            observer.on_event(&CommandEvent::new(EventKind::Execute, &Command::add(1.0), 1.0));
        }
        assert_eq!(seen, vec![EventKind::Execute]);
    }
}
