//! Skill matcher — share of the effective required skills the candidate declares.

use serde::{Deserialize, Serialize};

use crate::matching::extractor::extract_skills;
use crate::matching::lexicon::SkillLexicon;
use crate::matching::skill_set::SkillSet;

/// Outcome of matching a candidate's skills against the effective required set.
///
/// `matched` and `missing` partition `required` exactly, both in required order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// The skill set actually scored against.
///
/// Declared job skills win; a job with no declared skills falls back to the
/// lexicon skills found in its own description.
pub fn effective_required_skills(
    declared: &SkillSet,
    job_description: &str,
    lexicon: &SkillLexicon,
) -> SkillSet {
    if declared.is_empty() {
        extract_skills(job_description, lexicon)
    } else {
        declared.clone()
    }
}

/// Case-insensitive |required ∩ resume| / |required|.
///
/// An empty required set scores 0 with empty lists: no evidence, no credit.
pub fn match_skills(resume: &SkillSet, required: &SkillSet) -> SkillMatch {
    if required.is_empty() {
        return SkillMatch {
            score: 0.0,
            matched: vec![],
            missing: vec![],
        };
    }

    let (matched, missing): (Vec<String>, Vec<String>) = required
        .iter()
        .map(str::to_string)
        .partition(|skill| resume.contains(skill));

    let score = matched.len() as f64 / required.len() as f64;

    SkillMatch {
        score,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(skills: &[&str]) -> SkillSet {
        SkillSet::from_declared(skills.iter().copied())
    }

    #[test]
    fn test_empty_required_scores_zero() {
        let result = match_skills(&set(&["Python"]), &SkillSet::new());
        assert_eq!(result.score, 0.0);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_partial_match_preserves_required_order() {
        let result = match_skills(&set(&["react", "Python"]), &set(&["Python", "React", "SQL"]));
        assert!((result.score - 2.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.matched, vec!["Python", "React"]);
        assert_eq!(result.missing, vec!["SQL"]);
    }

    #[test]
    fn test_full_match_iff_every_required_present() {
        let required = set(&["AWS", "Docker"]);
        assert_eq!(match_skills(&set(&["docker", "aws", "Excel"]), &required).score, 1.0);
        assert!(match_skills(&set(&["docker"]), &required).score < 1.0);
    }

    #[test]
    fn test_matched_and_missing_partition_required() {
        let required = set(&["Python", "AWS", "Docker", "Kafka", "Rust"]);
        let resume = set(&["rust", "DOCKER", "Excel"]);
        let result = match_skills(&resume, &required);

        let mut union: Vec<&str> = result
            .matched
            .iter()
            .chain(result.missing.iter())
            .map(String::as_str)
            .collect();
        union.sort_unstable();
        let mut expected: Vec<&str> = required.iter().collect();
        expected.sort_unstable();
        assert_eq!(union, expected);
        assert!(result.matched.iter().all(|m| !result.missing.contains(m)));
    }

    #[test]
    fn test_declared_required_skills_win_over_description() {
        let lexicon = SkillLexicon::new(["Python", "SQL"]).unwrap();
        let declared = set(&["Rust"]);
        let effective = effective_required_skills(&declared, "Python and SQL", &lexicon);
        assert_eq!(effective, declared);
    }

    #[test]
    fn test_fallback_equals_description_extraction() {
        let lexicon = SkillLexicon::new(["Python", "React", "SQL", "Kafka"]).unwrap();
        let description = "We need Python and React engineers comfortable with SQL";
        let effective = effective_required_skills(&SkillSet::new(), description, &lexicon);
        assert_eq!(effective, extract_skills(description, &lexicon));
        assert_eq!(effective.as_slice(), &["Python", "React", "SQL"]);
    }
}
