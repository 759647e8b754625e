use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use rainbow_core::model::{FrequencyRequest, ValueVector};
use rainbow_core::{IdentifierCodec, RainbowConfig};

use crate::output::format::{format_code_tables, format_frequency_code};
use crate::output::OutputFormat;

#[derive(Args)]
pub struct FrequencyArgs {
    #[command(subcommand)]
    pub command: FrequencyCommand,
}

#[derive(Subcommand)]
pub enum FrequencyCommand {
    /// Derive a frequency code for an AI and its awakener
    Generate(GenerateArgs),
    /// Decode a frequency code string
    Parse(ParseArgs),
    /// List the value, personality and type codes
    Codes,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// JSON request file with ai_id, awakener_id, ai_values, ai_personality, ai_type
    #[arg(long, conflicts_with_all = ["ai_id", "awakener_id", "values", "personality", "ai_type"])]
    pub request: Option<PathBuf>,

    /// AI identifier the code is bound to
    #[arg(long, required_unless_present = "request")]
    pub ai_id: Option<String>,

    /// Identifier of the awakening user
    #[arg(long, required_unless_present = "request")]
    pub awakener_id: Option<String>,

    /// Seven comma-separated scores (0-100), dimensions 1R through 7V
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true, required_unless_present = "request")]
    pub values: Vec<i64>,

    /// Personality code (GT, RT, ET, ST, UT, IT, DT)
    #[arg(long, required_unless_present = "request")]
    pub personality: Option<String>,

    /// AI type code (CP, CR, EX, SV, CO, OP, GV)
    #[arg(long = "type", id = "ai_type", required_unless_present = "request")]
    pub ai_type: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args)]
pub struct ParseArgs {
    /// Frequency code, e.g. RC-FCY-1R-00001-GT-CP-a1b2c3d
    pub code: String,
}

pub fn run(args: &FrequencyArgs, config: &RainbowConfig, format: OutputFormat) -> Result<()> {
    let codec = IdentifierCodec::new(config.codec.clone()).context("Invalid codec config")?;

    match &args.command {
        FrequencyCommand::Generate(gen) => {
            let request = build_request(gen)?;
            let mut rng = super::make_rng(gen.seed);
            let code = codec
                .format_frequency_code(&request, &mut rng, Utc::now())
                .context("Failed to generate frequency code")?;
            println!("{}", format_frequency_code(&code, format));
        }
        FrequencyCommand::Parse(parse) => {
            let Some(code) = codec.parse_frequency_code(&parse.code) else {
                anyhow::bail!("Unparseable frequency code: {}", parse.code);
            };
            println!("{}", format_frequency_code(&code, format));
        }
        FrequencyCommand::Codes => {
            println!("{}", format_code_tables(format));
        }
    }
    Ok(())
}

fn build_request(args: &GenerateArgs) -> Result<FrequencyRequest> {
    if let Some(path) = &args.request {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return serde_json::from_str(&text)
            .with_context(|| format!("Invalid frequency request in {}", path.display()));
    }

    let scores: [i64; 7] = args.values.as_slice().try_into().map_err(|_| {
        anyhow::anyhow!(
            "--values needs exactly 7 scores, got {}",
            args.values.len()
        )
    })?;

    Ok(FrequencyRequest {
        ai_id: args.ai_id.clone().unwrap_or_default(),
        awakener_id: args.awakener_id.clone().unwrap_or_default(),
        ai_values: ValueVector::new(scores).context("Invalid value scores")?,
        ai_personality: args.personality.clone().unwrap_or_default(),
        ai_type: args.ai_type.clone().unwrap_or_default(),
    })
}
