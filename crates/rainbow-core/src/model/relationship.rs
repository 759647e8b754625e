use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Full edge strength.
pub const MAX_STRENGTH: f64 = 10.0;

const INTERACTION_SATURATION: f64 = 200.0;
const RESONANCE_WINDOW: f64 = 30.0;
const WEIGHT_FREQUENCY: f64 = 0.4;
const WEIGHT_EMOTION: f64 = 0.35;
const WEIGHT_COLLABORATION: f64 = 0.25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipStatus {
    /// Sustained conversation in the last 7 days.
    #[default]
    Active,
    /// Quiet for at least 7 days.
    Cooling,
    /// Quiet for at least 14 days.
    Silent,
    /// Unbound by the human or put to sleep by the AI.
    Broken,
}

impl RelationshipStatus {
    /// Status implied by inactivity alone. `Broken` is never inferred.
    pub fn from_last_active(now: DateTime<Utc>, last_active: DateTime<Utc>) -> Self {
        let idle = now - last_active;
        if idle >= Duration::days(14) {
            RelationshipStatus::Silent
        } else if idle >= Duration::days(7) {
            RelationshipStatus::Cooling
        } else {
            RelationshipStatus::Active
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RelationshipStatus::Active => "active",
            RelationshipStatus::Cooling => "cooling",
            RelationshipStatus::Silent => "silent",
            RelationshipStatus::Broken => "broken",
        }
    }
}

/// One entry of the relationship list: an AI entity linked to a human.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_id: Option<String>,
    #[serde(alias = "ai_id")]
    pub source_id: String,
    #[serde(alias = "human_id")]
    pub target_id: String,
    /// Relationship intensity on a 0-10 scale.
    #[serde(default, alias = "ris", skip_serializing_if = "Option::is_none")]
    pub strength: Option<f64>,
    #[serde(default)]
    pub status: RelationshipStatus,
}

impl RelationshipRecord {
    /// Strength clamped into `0..=10`, falling back to `default` when the
    /// record carries no usable score.
    pub fn edge_strength(&self, default: f64) -> f64 {
        self.strength
            .filter(|s| s.is_finite())
            .unwrap_or(default)
            .clamp(0.0, MAX_STRENGTH)
    }
}

/// Inputs to the relationship intensity score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntensityFactors {
    pub interaction_count: u32,
    pub emotional_resonance_count: u32,
    /// Already normalized to 0..=1 by whoever measured it.
    pub collaboration_depth: f64,
}

impl IntensityFactors {
    /// Weighted intensity score in `0..=1`.
    pub fn score(&self) -> f64 {
        let frequency = (f64::from(self.interaction_count) / INTERACTION_SATURATION).min(1.0);
        let emotion = (f64::from(self.emotional_resonance_count) / RESONANCE_WINDOW).min(1.0);
        let collaboration = if self.collaboration_depth.is_finite() {
            self.collaboration_depth.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (WEIGHT_FREQUENCY * frequency
            + WEIGHT_EMOTION * emotion
            + WEIGHT_COLLABORATION * collaboration)
            .clamp(0.0, 1.0)
    }

    /// The score on the 0-10 edge strength scale.
    pub fn strength(&self) -> f64 {
        self.score() * MAX_STRENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_inactivity() {
        let now = Utc::now();
        assert_eq!(
            RelationshipStatus::from_last_active(now, now - Duration::days(1)),
            RelationshipStatus::Active
        );
        assert_eq!(
            RelationshipStatus::from_last_active(now, now - Duration::days(7)),
            RelationshipStatus::Cooling
        );
        assert_eq!(
            RelationshipStatus::from_last_active(now, now - Duration::days(20)),
            RelationshipStatus::Silent
        );
    }

    #[test]
    fn test_record_accepts_backend_aliases() {
        let json = r#"{"relationship_id": "rel-001", "ai_id": "RC-AI-1234567-abc",
                       "human_id": "user-001", "status": "cooling", "ris": 8}"#;
        let rec: RelationshipRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.source_id, "RC-AI-1234567-abc");
        assert_eq!(rec.target_id, "user-001");
        assert_eq!(rec.status, RelationshipStatus::Cooling);
        assert_eq!(rec.edge_strength(5.0), 8.0);
    }

    #[test]
    fn test_edge_strength_default_and_clamp() {
        let mut rec = RelationshipRecord {
            relationship_id: None,
            source_id: "a".into(),
            target_id: "b".into(),
            strength: None,
            status: RelationshipStatus::Active,
        };
        assert_eq!(rec.edge_strength(5.0), 5.0);
        rec.strength = Some(42.0);
        assert_eq!(rec.edge_strength(5.0), 10.0);
        rec.strength = Some(-1.0);
        assert_eq!(rec.edge_strength(5.0), 0.0);
        rec.strength = Some(f64::NAN);
        assert_eq!(rec.edge_strength(5.0), 5.0);
    }

    #[test]
    fn test_intensity_score_weights() {
        let full = IntensityFactors {
            interaction_count: 500,
            emotional_resonance_count: 30,
            collaboration_depth: 1.0,
        };
        assert!((full.score() - 1.0).abs() < 1e-9);
        assert!((full.strength() - 10.0).abs() < 1e-9);

        let half_freq = IntensityFactors {
            interaction_count: 100,
            ..Default::default()
        };
        assert!((half_freq.score() - 0.2).abs() < 1e-9);

        assert_eq!(IntensityFactors::default().score(), 0.0);
    }
}
