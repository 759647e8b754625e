use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Top-level configuration, read from a JSON file. Every field has a
/// default, so a partial file only overrides what it names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RainbowConfig {
    pub codec: CodecConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub id_prefix: String,
    pub frequency_prefix: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            id_prefix: "RC-AI".to_string(),
            frequency_prefix: "RC-FCY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub tick_interval_ms: u64,
    /// Edge strength used when a relationship carries no intensity score.
    pub default_strength: f64,
    pub model: LayoutModel,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 50.0,
            tick_interval_ms: 30,
            default_strength: 5.0,
            model: LayoutModel::Attraction,
        }
    }
}

/// Which force model the layout simulator applies each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutModel {
    /// Endpoints pulled together in proportion to edge strength. Never settles.
    #[default]
    Attraction,
    /// Spring toward a rest length plus pairwise repulsion, with damping.
    Spring,
}

impl std::str::FromStr for LayoutModel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attraction" => Ok(Self::Attraction),
            "spring" => Ok(Self::Spring),
            other => Err(CoreError::Config(format!("unknown layout model: {other}"))),
        }
    }
}

impl RainbowConfig {
    /// Read config from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Read config from `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, CoreError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), CoreError> {
        let l = &self.layout;
        if !(l.width.is_finite() && l.height.is_finite() && l.margin.is_finite()) {
            return Err(CoreError::Config("layout dimensions must be finite".into()));
        }
        if l.width <= 0.0 || l.height <= 0.0 || l.margin < 0.0 {
            return Err(CoreError::Config(format!(
                "layout viewport {}x{} with margin {} is not usable",
                l.width, l.height, l.margin
            )));
        }
        if l.tick_interval_ms == 0 {
            return Err(CoreError::Config("tick_interval_ms must be positive".into()));
        }
        if self.codec.id_prefix.is_empty() || self.codec.frequency_prefix.is_empty() {
            return Err(CoreError::Config("codec prefixes must not be empty".into()));
        }
        Ok(())
    }
}
