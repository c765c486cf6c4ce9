use serde::{Deserialize, Serialize};

use crate::matching::error::EngineError;

/// Tunable business constants of the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub coverage: f64,
    pub skills: f64,
    pub experience: f64,
    /// Skill match strictly below this fires the override (when skills are required).
    pub override_threshold: f64,
    /// Ceiling on the composite once the override fires.
    pub override_cap: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            coverage: 0.30,
            skills: 0.50,
            experience: 0.20,
            override_threshold: 0.20,
            override_cap: 0.20,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.coverage + self.skills + self.experience
    }

    /// Weights must be finite, non-negative and sum to 1; threshold and cap lie in [0, 1].
    pub fn validate(&self) -> Result<(), EngineError> {
        let weights = [
            ("coverage", self.coverage),
            ("skills", self.skills),
            ("experience", self.experience),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(EngineError::InvalidWeights(format!(
                    "{name} weight must be a non-negative number, got {value}"
                )));
            }
        }
        if (self.sum() - 1.0).abs() > 1e-6 {
            return Err(EngineError::InvalidWeights(format!(
                "weights must sum to 1.0, got {}",
                self.sum()
            )));
        }
        for (name, value) in [
            ("override threshold", self.override_threshold),
            ("override cap", self.override_cap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::InvalidWeights(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Composite score before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposedScore {
    pub composite: f64,
    /// Experience score actually weighted in; 0 when the override fired.
    pub experience_used: f64,
    pub override_applied: bool,
}

/// Weighted sum of the three sub-scores, with the skill-mismatch override.
///
/// Override: when skills are required and `skill_match < override_threshold`,
/// experience contributes nothing and the composite is capped at `override_cap`.
/// A strong text/experience overlap must not mask a fundamental skill gap.
pub fn compose(
    coverage: f64,
    skill_match: f64,
    experience: f64,
    has_required_skills: bool,
    weights: &MatchWeights,
) -> ComposedScore {
    let override_applied = has_required_skills && skill_match < weights.override_threshold;
    let experience_used = if override_applied { 0.0 } else { experience };

    let mut composite = weights.coverage * coverage
        + weights.skills * skill_match
        + weights.experience * experience_used;

    if override_applied {
        composite = composite.min(weights.override_cap);
    }

    ComposedScore {
        composite: composite.clamp(0.0, 1.0),
        experience_used,
        override_applied,
    }
}

/// Rounds half-up to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        assert!((w.sum() - 1.0).abs() < 1e-9);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_weighted_sum_without_override() {
        let w = MatchWeights::default();
        // 0.3*0.5 + 0.5*0.6 + 0.2*1.0 = 0.15 + 0.30 + 0.20 = 0.65
        let score = compose(0.5, 0.6, 1.0, true, &w);
        assert!((score.composite - 0.65).abs() < 1e-9, "Score was {}", score.composite);
        assert!(!score.override_applied);
        assert_eq!(score.experience_used, 1.0);
    }

    #[test]
    fn test_override_zeroes_experience_and_caps() {
        let w = MatchWeights::default();
        let score = compose(1.0, 0.1, 1.0, true, &w);
        assert!(score.override_applied);
        assert_eq!(score.experience_used, 0.0);
        // 0.3*1.0 + 0.5*0.1 = 0.35 → capped
        assert!((score.composite - 0.20).abs() < 1e-9);
    }

    #[test]
    fn test_override_keeps_lower_composite() {
        let w = MatchWeights::default();
        let score = compose(0.1, 0.0, 1.0, true, &w);
        assert!(score.override_applied);
        assert!((score.composite - 0.03).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_strict() {
        let w = MatchWeights::default();
        assert!(!compose(0.0, 0.20, 1.0, true, &w).override_applied);
        assert!(compose(0.0, 0.19, 1.0, true, &w).override_applied);
    }

    #[test]
    fn test_no_override_without_required_skills() {
        let w = MatchWeights::default();
        let score = compose(0.5, 0.0, 1.0, false, &w);
        assert!(!score.override_applied);
        assert!((score.composite - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_round2_half_up() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(1.0), 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let w = MatchWeights {
            coverage: 0.5,
            ..MatchWeights::default()
        };
        assert!(matches!(w.validate(), Err(EngineError::InvalidWeights(_))));
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let w = MatchWeights {
            coverage: -0.1,
            skills: 0.9,
            experience: 0.2,
            ..MatchWeights::default()
        };
        assert!(matches!(w.validate(), Err(EngineError::InvalidWeights(_))));
    }

    #[test]
    fn test_validate_rejects_cap_out_of_range() {
        let w = MatchWeights {
            override_cap: 1.5,
            ..MatchWeights::default()
        };
        assert!(matches!(w.validate(), Err(EngineError::InvalidWeights(_))));
    }
}
