use serde::{Deserialize, Serialize};

use crate::error::{Result, RouletteError};

/// Nombre minimal de sorties consécutives pour déclencher chaque recommandation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawThresholds")]
pub struct Thresholds {
    #[serde(rename = "basic_threshold")]
    basic: usize,
    #[serde(rename = "dozen_threshold")]
    dozen: usize,
    #[serde(rename = "possibility_threshold")]
    possibility: usize,
}

#[derive(Deserialize)]
struct RawThresholds {
    basic_threshold: i64,
    dozen_threshold: i64,
    possibility_threshold: i64,
}

impl TryFrom<RawThresholds> for Thresholds {
    type Error = RouletteError;

    fn try_from(raw: RawThresholds) -> Result<Self> {
        Thresholds::new(raw.basic_threshold, raw.dozen_threshold, raw.possibility_threshold)
    }
}

impl Thresholds {
    /// Variante 5/9/7, également valide.
    pub const ALTERNATE: Thresholds = Thresholds {
        basic: 5,
        dozen: 9,
        possibility: 7,
    };

    pub fn new(basic: i64, dozen: i64, possibility: i64) -> Result<Self> {
        Ok(Self {
            basic: positive("basic_threshold", basic)?,
            dozen: positive("dozen_threshold", dozen)?,
            possibility: positive("possibility_threshold", possibility)?,
        })
    }

    pub fn basic(&self) -> usize {
        self.basic
    }

    pub fn dozen(&self) -> usize {
        self.dozen
    }

    pub fn possibility(&self) -> usize {
        self.possibility
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            basic: 5,
            dozen: 10,
            possibility: 5,
        }
    }
}

fn positive(name: &'static str, value: i64) -> Result<usize> {
    if value <= 0 {
        return Err(RouletteError::InvalidConfiguration { name, value });
    }
    usize::try_from(value).map_err(|_| RouletteError::InvalidConfiguration { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let t = Thresholds::default();
        assert_eq!(t.basic(), 5);
        assert_eq!(t.dozen(), 10);
        assert_eq!(t.possibility(), 5);
    }

    #[test]
    fn test_alternate_is_valid() {
        let t = Thresholds::new(5, 9, 7).unwrap();
        assert_eq!(t, Thresholds::ALTERNATE);
    }

    #[test]
    fn test_non_positive_rejected() {
        assert_eq!(
            Thresholds::new(0, 10, 5),
            Err(RouletteError::InvalidConfiguration { name: "basic_threshold", value: 0 })
        );
        assert_eq!(
            Thresholds::new(5, -3, 5),
            Err(RouletteError::InvalidConfiguration { name: "dozen_threshold", value: -3 })
        );
        assert!(Thresholds::new(5, 10, 0).is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let json = serde_json::to_string(&Thresholds::ALTERNATE).unwrap();
        assert!(json.contains("\"dozen_threshold\":9"));
        let restored: Thresholds = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, Thresholds::ALTERNATE);
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"basic_threshold": 0, "dozen_threshold": 10, "possibility_threshold": 5}"#;
        assert!(serde_json::from_str::<Thresholds>(json).is_err());
    }
}
