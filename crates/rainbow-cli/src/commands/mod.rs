pub mod frequency;
pub mod id;
pub mod layout;

use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate or parse AI identifiers
    Id(id::IdArgs),
    /// Generate, parse or list frequency codes
    Frequency(frequency::FrequencyArgs),
    /// Run the force layout over a relationship list
    Layout(layout::LayoutArgs),
}

/// Seeded when asked, so runs can be reproduced.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
