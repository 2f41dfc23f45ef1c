// Abacus CLI Entry Point

use std::io;
use std::path::PathBuf;

use abacus_cli::logging::{init_logging, VerbosityLevel};
use abacus_cli::{demo_steps, parse_steps, OutputFormat, Printer, Runner};
use abacus_config::{AbacusConfig, ConfigManager, ConfigStore};
use clap::{Parser, Subcommand};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "abacus", version)]
#[command(about = "Four-function calculator with an undo stack")]
struct Cli {
    /// Configuration file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Print events and the final value as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted sequence: add 100, sub 24, mul 6, div 2, then undo twice
    Demo,
    /// Run the given steps in order
    Run {
        /// Steps such as add:100, sub:24, mul:6, div:2 or undo
        #[arg(required = true)]
        steps: Vec<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let manager = match &cli.config {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };
    let config: AbacusConfig = manager.load_config()?;

    init_logging(
        &config.logging,
        VerbosityLevel::from_flags(cli.verbose, cli.quiet),
    );
    info!(path = %manager.config_path().display(), "Configuration loaded");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = io::stdout();
    let mut printer = Printer::new(stdout.lock(), format);

    let result = match cli.command {
        Commands::Demo => {
            Runner::new(&config.calculator).run_printed(&demo_steps(), &mut printer)
        }
        Commands::Run { steps } => parse_steps(&steps).and_then(|steps| {
            Runner::new(&config.calculator).run_printed(&steps, &mut printer)
        }),
    };

    if let Err(e) = result {
        error!("{}", e);
        anyhow::bail!(e.user_message());
    }
    Ok(())
}
