use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use chrono::Utc;
use rainbow_core::model::SequenceNumber;
use rainbow_core::{IdentifierCodec, RainbowConfig};

use crate::output::format::{format_generated_identifier, format_identifier};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct IdArgs {
    #[command(subcommand)]
    pub command: IdCommand,
}

#[derive(Subcommand)]
pub enum IdCommand {
    /// Generate a new AI identifier
    Generate(GenerateArgs),
    /// Split an identifier into prefix, visible number and suffix
    Parse(ParseArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Visible number to embed (random seven-digit number if omitted)
    #[arg(long)]
    pub number: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Identifier string, e.g. RC-AI-0001721-53dfc98b
    pub id: String,
}

pub fn run(args: &IdArgs, config: &RainbowConfig, format: OutputFormat) -> Result<()> {
    let codec = IdentifierCodec::new(config.codec.clone()).context("Invalid codec config")?;

    match &args.command {
        IdCommand::Generate(gen) => {
            let visible_number = gen
                .number
                .as_deref()
                .map(SequenceNumber::parse)
                .transpose()
                .context("Invalid visible number")?
                .map(|n| i64::from(n.get()));

            let mut rng = super::make_rng(gen.seed);
            let generated = codec.generate_identifier(&mut rng, visible_number, Utc::now())?;
            println!("{}", format_generated_identifier(&generated, format));
        }
        IdCommand::Parse(parse) => {
            let Some(id) = codec.parse_identifier(&parse.id) else {
                anyhow::bail!("Unparseable identifier: {}", parse.id);
            };
            println!("{}", format_identifier(&id, format));
        }
    }
    Ok(())
}
