use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rainbow_core::RainbowConfig;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "rainbow",
    version,
    about = "Generate Rainbow City identity codes and lay out relationship networks"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// JSON config file (defaults apply to anything it leaves out)
    #[arg(long, global = true, env = "RAINBOW_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RainbowConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load config")?;

    match &cli.command {
        commands::Commands::Id(args) => commands::id::run(args, &config, cli.format),
        commands::Commands::Frequency(args) => commands::frequency::run(args, &config, cli.format),
        commands::Commands::Layout(args) => commands::layout::run(args, &config, cli.format),
    }
}
