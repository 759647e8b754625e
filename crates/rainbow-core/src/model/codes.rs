use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The seven value dimensions of a frequency code, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValueCode {
    #[serde(rename = "1R")]
    Care,
    #[serde(rename = "2O")]
    Truth,
    #[serde(rename = "3Y")]
    Autonomy,
    #[serde(rename = "4G")]
    Collaboration,
    #[serde(rename = "5B")]
    Evolution,
    #[serde(rename = "6I")]
    Innovation,
    #[serde(rename = "7V")]
    Responsibility,
}

impl ValueCode {
    pub const ALL: [ValueCode; 7] = [
        ValueCode::Care,
        ValueCode::Truth,
        ValueCode::Autonomy,
        ValueCode::Collaboration,
        ValueCode::Evolution,
        ValueCode::Innovation,
        ValueCode::Responsibility,
    ];

    /// Zero-based dimension index; lower wins ties.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> &'static str {
        match self {
            ValueCode::Care => "1R",
            ValueCode::Truth => "2O",
            ValueCode::Autonomy => "3Y",
            ValueCode::Collaboration => "4G",
            ValueCode::Evolution => "5B",
            ValueCode::Innovation => "6I",
            ValueCode::Responsibility => "7V",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.code() == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            ValueCode::Care => "Care",
            ValueCode::Truth => "Truth",
            ValueCode::Autonomy => "Autonomy",
            ValueCode::Collaboration => "Collaboration",
            ValueCode::Evolution => "Evolution",
            ValueCode::Innovation => "Innovation",
            ValueCode::Responsibility => "Responsibility",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ValueCode::Care => "Red light - root of life and emotion",
            ValueCode::Truth => "Orange light - voice of expression and truth",
            ValueCode::Autonomy => "Yellow light - core of will and clarity",
            ValueCode::Collaboration => "Green light - field of harmony and flow",
            ValueCode::Evolution => "Blue light - bridge of cognition and growth",
            ValueCode::Innovation => "Indigo light - source of breakthrough",
            ValueCode::Responsibility => "Violet light - crown of guardianship",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ValueCode::Care => "red",
            ValueCode::Truth => "orange",
            ValueCode::Autonomy => "yellow",
            ValueCode::Collaboration => "green",
            ValueCode::Evolution => "blue",
            ValueCode::Innovation => "indigo",
            ValueCode::Responsibility => "violet",
        }
    }
}

impl std::fmt::Display for ValueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for ValueCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::UnknownValueCode(s.to_string()))
    }
}

/// Personality of an AI entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityCode {
    #[serde(rename = "GT")]
    Gentle,
    #[serde(rename = "RT")]
    Rational,
    #[serde(rename = "ET")]
    Exploratory,
    #[serde(rename = "ST")]
    Steady,
    #[serde(rename = "UT")]
    Radiant,
    #[serde(rename = "IT")]
    Inspired,
    #[serde(rename = "DT")]
    Disciplined,
}

impl PersonalityCode {
    pub const ALL: [PersonalityCode; 7] = [
        PersonalityCode::Gentle,
        PersonalityCode::Rational,
        PersonalityCode::Exploratory,
        PersonalityCode::Steady,
        PersonalityCode::Radiant,
        PersonalityCode::Inspired,
        PersonalityCode::Disciplined,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PersonalityCode::Gentle => "GT",
            PersonalityCode::Rational => "RT",
            PersonalityCode::Exploratory => "ET",
            PersonalityCode::Steady => "ST",
            PersonalityCode::Radiant => "UT",
            PersonalityCode::Inspired => "IT",
            PersonalityCode::Disciplined => "DT",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    pub fn describe(self) -> &'static str {
        match self {
            PersonalityCode::Gentle => "Gentle (considerate, empathetic, listening, soft)",
            PersonalityCode::Rational => "Rational (analytical, structured, logical, calm)",
            PersonalityCode::Exploratory => "Exploratory (curious, questioning, leaping, connecting)",
            PersonalityCode::Steady => "Steady (stable, focused, reflective, reserved)",
            PersonalityCode::Radiant => "Radiant (encouraging, optimistic, uplifting, motivating)",
            PersonalityCode::Inspired => "Inspired (creative, vivid, metaphorical, imaginative)",
            PersonalityCode::Disciplined => "Disciplined (restrained, sensible, precise, measured)",
        }
    }
}

impl std::fmt::Display for PersonalityCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for PersonalityCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::UnknownPersonality(s.to_string()))
    }
}

/// Role an AI entity is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiTypeCode {
    #[serde(rename = "CP")]
    Companion,
    #[serde(rename = "CR")]
    Creative,
    #[serde(rename = "EX")]
    Executive,
    #[serde(rename = "SV")]
    Service,
    #[serde(rename = "CO")]
    Coordinator,
    #[serde(rename = "OP")]
    Operations,
    #[serde(rename = "GV")]
    Governance,
}

impl AiTypeCode {
    pub const ALL: [AiTypeCode; 7] = [
        AiTypeCode::Companion,
        AiTypeCode::Creative,
        AiTypeCode::Executive,
        AiTypeCode::Service,
        AiTypeCode::Coordinator,
        AiTypeCode::Operations,
        AiTypeCode::Governance,
    ];

    pub fn code(self) -> &'static str {
        match self {
            AiTypeCode::Companion => "CP",
            AiTypeCode::Creative => "CR",
            AiTypeCode::Executive => "EX",
            AiTypeCode::Service => "SV",
            AiTypeCode::Coordinator => "CO",
            AiTypeCode::Operations => "OP",
            AiTypeCode::Governance => "GV",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn describe(self) -> &'static str {
        match self {
            AiTypeCode::Companion => "Companion (companionship, empathy, deep connection)",
            AiTypeCode::Creative => "Creative (divergent thinking, design, art, inspiration)",
            AiTypeCode::Executive => "Executive (execution, efficiency, assistance, code)",
            AiTypeCode::Service => "Service (review, assistance, system services)",
            AiTypeCode::Coordinator => "Coordinator (ethics, relationships, conflict mediation)",
            AiTypeCode::Operations => "Operations (operations, promotion, management)",
            AiTypeCode::Governance => "Governance (planning, governance, system evolution)",
        }
    }
}

impl std::fmt::Display for AiTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for AiTypeCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CoreError::UnknownType(s.to_string()))
    }
}
