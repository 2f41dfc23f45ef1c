//! Abacus CLI - demo harness and scripted runner for the undo calculator

pub mod error;
pub mod logging;
pub mod output;
pub mod runner;

pub use error::{CliError, CliResult};
pub use output::{OutputFormat, Printer};
pub use runner::{demo_steps, parse_steps, Runner, Step};
