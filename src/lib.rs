//! Shared helpers for the abacus integration tests

use abacus_cli::{parse_steps, CliResult, OutputFormat, Printer, Runner};
use abacus_config::CalculatorConfig;

/// Run `steps` with `config`, returning everything printed and the outcome
pub fn run_script(
    config: &CalculatorConfig,
    steps: &[&str],
    format: OutputFormat,
) -> (String, CliResult<f64>) {
    let mut printer = Printer::new(Vec::new(), format);
    let result = parse_steps(steps)
        .and_then(|steps| Runner::new(config).run_printed(&steps, &mut printer));
    let output = String::from_utf8_lossy(&printer.into_inner()).into_owned();
    (output, result)
}
