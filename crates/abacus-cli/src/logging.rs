// Logging and verbosity control

use abacus_config::LoggingConfig;
use tracing::Level;

/// Verbosity selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum VerbosityLevel {
    /// Quiet mode - errors only
    Quiet,
    /// Normal mode - level from configuration
    Normal,
    /// Verbose mode - debug output
    Verbose,
}

impl VerbosityLevel {
    /// Pick the verbosity from CLI flags; quiet wins over verbose
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            VerbosityLevel::Quiet
        } else if verbose {
            VerbosityLevel::Verbose
        } else {
            VerbosityLevel::Normal
        }
    }
}

/// Parse a configured level name, falling back to WARN
pub fn parse_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Effective max level for the configured level and CLI verbosity
pub fn resolve_level(config: &LoggingConfig, verbosity: VerbosityLevel) -> Level {
    let configured = parse_level(&config.level);
    match verbosity {
        VerbosityLevel::Quiet => Level::ERROR,
        VerbosityLevel::Normal => configured,
        // tracing orders more verbose levels as greater
        VerbosityLevel::Verbose => configured.max(Level::DEBUG),
    }
}

/// Initialize the tracing subscriber, writing to stderr
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(config: &LoggingConfig, verbosity: VerbosityLevel) {
    let level = resolve_level(config, verbosity);

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(config.show_target)
        .with_writer(std::io::stderr)
        .try_init();
}
