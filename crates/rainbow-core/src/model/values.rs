use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::codes::ValueCode;
use crate::error::CoreError;

pub const MAX_SCORE: u8 = 100;

/// Scores (0..=100) across the seven value dimensions, indexed in
/// `ValueCode::ALL` order.
///
/// Serializes as the backend's `{"1R": 50, "2O": 70, ...}` map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, i64>", into = "BTreeMap<String, i64>")]
pub struct ValueVector([u8; 7]);

impl ValueVector {
    pub fn new(scores: [i64; 7]) -> Result<Self, CoreError> {
        let mut out = [0u8; 7];
        for (slot, (score, code)) in out.iter_mut().zip(scores.into_iter().zip(ValueCode::ALL)) {
            *slot = check_score(code, score)?;
        }
        Ok(Self(out))
    }

    /// Build from a code-keyed map. Missing dimensions score zero.
    pub fn from_map(scores: &BTreeMap<String, i64>) -> Result<Self, CoreError> {
        let mut out = [0u8; 7];
        for (key, &score) in scores {
            let code: ValueCode = key.parse()?;
            out[code.index()] = check_score(code, score)?;
        }
        Ok(Self(out))
    }

    pub fn get(&self, code: ValueCode) -> u8 {
        self.0[code.index()]
    }

    pub fn scores(&self) -> [u8; 7] {
        self.0
    }

    /// The highest-scoring dimension. Ties go to the earlier dimension.
    pub fn dominant(&self) -> ValueCode {
        let mut best = ValueCode::Care;
        for code in ValueCode::ALL {
            if self.get(code) > self.get(best) {
                best = code;
            }
        }
        best
    }
}

fn check_score(code: ValueCode, score: i64) -> Result<u8, CoreError> {
    if !(0..=i64::from(MAX_SCORE)).contains(&score) {
        return Err(CoreError::InvalidValueScore {
            code: code.code().to_string(),
            score,
        });
    }
    Ok(score as u8)
}

impl TryFrom<BTreeMap<String, i64>> for ValueVector {
    type Error = CoreError;

    fn try_from(map: BTreeMap<String, i64>) -> Result<Self, Self::Error> {
        Self::from_map(&map)
    }
}

impl From<ValueVector> for BTreeMap<String, i64> {
    fn from(v: ValueVector) -> Self {
        ValueCode::ALL
            .into_iter()
            .map(|code| (code.code().to_string(), i64::from(v.get(code))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_maximum_wins_regardless_of_others() {
        for (k, code) in ValueCode::ALL.into_iter().enumerate() {
            for filler in [0, 37, 99] {
                let mut scores = [filler; 7];
                scores[k] = 100;
                let v = ValueVector::new(scores).unwrap();
                assert_eq!(v.dominant(), code);
            }
        }
    }

    #[test]
    fn test_ties_go_to_earlier_dimension() {
        let v = ValueVector::new([10, 80, 20, 80, 80, 0, 5]).unwrap();
        assert_eq!(v.dominant(), ValueCode::Truth);

        let flat = ValueVector::new([50; 7]).unwrap();
        assert_eq!(flat.dominant(), ValueCode::Care);
    }

    #[test]
    fn test_rejects_out_of_range_scores() {
        let err = ValueVector::new([0, 0, 101, 0, 0, 0, 0]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidValueScore { ref code, score: 101 } if code == "3Y"));
        assert!(ValueVector::new([0, 0, 0, 0, 0, 0, -1]).is_err());
    }

    #[test]
    fn test_from_map_fills_missing_with_zero() {
        let mut map = BTreeMap::new();
        map.insert("6I".to_string(), 90);
        map.insert("1R".to_string(), 40);
        let v = ValueVector::from_map(&map).unwrap();
        assert_eq!(v.scores(), [40, 0, 0, 0, 0, 90, 0]);
        assert_eq!(v.dominant(), ValueCode::Innovation);
    }

    #[test]
    fn test_from_map_rejects_unknown_key() {
        let mut map = BTreeMap::new();
        map.insert("9X".to_string(), 10);
        assert!(matches!(
            ValueVector::from_map(&map),
            Err(CoreError::UnknownValueCode(_))
        ));
    }

    #[test]
    fn test_deserializes_backend_map() {
        let json = r#"{"1R": 50, "2O": 60, "3Y": 70, "4G": 80, "5B": 90, "6I": 40, "7V": 30}"#;
        let v: ValueVector = serde_json::from_str(json).unwrap();
        assert_eq!(v.dominant(), ValueCode::Evolution);
        assert!(serde_json::from_str::<ValueVector>(r#"{"1R": 500}"#).is_err());
    }
}
