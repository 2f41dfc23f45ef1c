//! Step parsing and execution against a single accumulator

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use abacus_config::CalculatorConfig;
use abacus_core::{format_number, Accumulator, Command, CommandEvent, EventLog};
use tracing::debug;

use crate::error::{CliError, CliResult};
use crate::output::Printer;

/// One scripted action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Execute a command
    Execute(Command),
    /// Undo the most recent command
    Undo,
}

impl FromStr for Step {
    type Err = CliError;

    fn from_str(s: &str) -> CliResult<Self> {
        if s.trim().eq_ignore_ascii_case("undo") {
            return Ok(Step::Undo);
        }
        s.parse::<Command>()
            .map(Step::Execute)
            .map_err(|source| CliError::InvalidStep {
                step: s.to_string(),
                source,
            })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Execute(command) => write!(
                f,
                "{} {}",
                command.kind().symbol(),
                format_number(command.operand())
            ),
            Step::Undo => f.write_str("undo"),
        }
    }
}

/// The scripted sequence: four executes then two undos
pub fn demo_steps() -> Vec<Step> {
    vec![
        Step::Execute(Command::add(100.0)),
        Step::Execute(Command::subtract(24.0)),
        Step::Execute(Command::multiply(6.0)),
        Step::Execute(Command::divide(2.0)),
        Step::Undo,
        Step::Undo,
    ]
}

/// Applies steps to an accumulator built from configuration
pub struct Runner {
    accumulator: Accumulator,
    events: EventLog,
    strict: bool,
}

impl Runner {
    /// Create a runner from calculator settings
    pub fn new(config: &CalculatorConfig) -> Self {
        let events = EventLog::new();
        let mut accumulator = Accumulator::with_initial(config.initial_value);
        accumulator.subscribe(Box::new(events.clone()));
        Self {
            accumulator,
            events,
            strict: config.strict_operands,
        }
    }

    /// Apply one step, returning the resulting value
    ///
    /// In strict mode a command is refused before it touches the accumulator when its
    /// operand or its result would keep undo from restoring the current value.
    pub fn apply(&mut self, step: &Step) -> CliResult<f64> {
        debug!(step = %step, strict = self.strict, "Applying step");
        match step {
            Step::Execute(command) if self.strict => Ok(self.accumulator.try_execute(*command)?),
            Step::Execute(command) => Ok(self.accumulator.execute(*command)),
            Step::Undo => {
                self.accumulator.undo()?;
                Ok(self.accumulator.current_value())
            }
        }
    }

    /// Apply steps in order, stopping at the first failure
    pub fn run<'a>(&mut self, steps: impl IntoIterator<Item = &'a Step>) -> CliResult<f64> {
        for step in steps {
            self.apply(step)?;
        }
        Ok(self.accumulator.current_value())
    }

    /// Apply steps one at a time, printing events as they happen
    ///
    /// The value reached so far is printed even when a step fails.
    pub fn run_printed<W: Write>(
        &mut self,
        steps: &[Step],
        printer: &mut Printer<W>,
    ) -> CliResult<f64> {
        for step in steps {
            let applied = self.apply(step);
            for event in self.take_events() {
                printer.event(&event)?;
            }
            if let Err(e) = applied {
                printer.value(self.current_value())?;
                return Err(e);
            }
        }

        printer.value(self.current_value())?;
        Ok(self.current_value())
    }

    /// Events emitted since the last call
    pub fn take_events(&self) -> Vec<CommandEvent> {
        self.events.drain()
    }

    /// Current accumulator value
    pub fn current_value(&self) -> f64 {
        self.accumulator.current_value()
    }

    /// Underlying accumulator
    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }
}

/// Parse every step, failing on the first malformed one
pub fn parse_steps<S: AsRef<str>>(raw: &[S]) -> CliResult<Vec<Step>> {
    raw.iter().map(|s| s.as_ref().parse()).collect()
}
