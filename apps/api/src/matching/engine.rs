//! Match engine — pluggable, trait-based scorer that compares one resume with one job.
//!
//! Default: `KeywordMatchScorer` (lexicon + token overlap, pure and deterministic).
//!
//! `AppState` holds an `Arc<dyn MatchScorer>`, built once at startup.

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::matching::composer::{compose, round2, MatchWeights};
use crate::matching::coverage::{common_keywords, coverage_score, MAX_MATCHED_KEYWORDS};
use crate::matching::experience::experience_score;
use crate::matching::explanation::{build_explanation, ExplanationInput};
use crate::matching::lexicon::SkillLexicon;
use crate::matching::normalizer::normalize;
use crate::matching::skill_match::{effective_required_skills, match_skills};
use crate::matching::skill_set::SkillSet;

// ────────────────────────────────────────────────────────────────────────────
// Input / output contract
// ────────────────────────────────────────────────────────────────────────────

/// One resume/job pair. Every field is optional on the wire and defaults to empty / 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRequest {
    pub resume_text: Option<String>,
    pub job_description_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resume_skills: Vec<String>,
    /// Declared job skills. Empty means "infer from the description".
    #[serde(deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub resume_years_experience: f64,
    /// 0 means unspecified.
    #[serde(deserialize_with = "null_as_default")]
    pub required_years_experience: f64,
}

/// Treats an explicit JSON `null` like an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Explainable compatibility result. All scores are in [0, 1], rounded to 2 decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_score: f64,
    pub text_similarity: f64,
    pub skill_match: f64,
    pub experience_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub matched_keywords: Vec<String>,
    pub override_applied: bool,
    pub explanation: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap scoring backends without
/// touching handlers or the batch ranker.
///
/// Carried in `AppState` as `Arc<dyn MatchScorer>`.
pub trait MatchScorer: Send + Sync {
    fn score(&self, request: &MatchRequest) -> MatchResult;

    /// Canonical skills this scorer recognises, in catalog order.
    fn lexicon(&self) -> &SkillLexicon;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordMatchScorer — default implementation
// ────────────────────────────────────────────────────────────────────────────

/// Lexicon + token-overlap scorer.
///
/// Algorithm:
/// 1. Normalize both texts → coverage (job → resume) and common keywords
/// 2. Effective required skills = declared, or extracted from the JD when none declared
/// 3. Skill match against the candidate's declared skills
/// 4. Banded experience score
/// 5. Weighted composite with the skill-mismatch override, then round
/// 6. Template explanation
pub struct KeywordMatchScorer {
    lexicon: Arc<SkillLexicon>,
    weights: MatchWeights,
}

impl KeywordMatchScorer {
    pub fn new(lexicon: Arc<SkillLexicon>, weights: MatchWeights) -> Self {
        Self { lexicon, weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }
}

impl MatchScorer for KeywordMatchScorer {
    fn score(&self, request: &MatchRequest) -> MatchResult {
        compute_match(request, &self.lexicon, &self.weights)
    }

    fn lexicon(&self) -> &SkillLexicon {
        &self.lexicon
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core pipeline
// ────────────────────────────────────────────────────────────────────────────

fn compute_match(
    request: &MatchRequest,
    lexicon: &SkillLexicon,
    weights: &MatchWeights,
) -> MatchResult {
    let job_description = request.job_description_text.as_deref().unwrap_or_default();

    let resume_doc = normalize(request.resume_text.as_deref());
    let job_doc = normalize(request.job_description_text.as_deref());
    let coverage = coverage_score(&resume_doc, &job_doc);
    let matched_keywords = common_keywords(&resume_doc, &job_doc, MAX_MATCHED_KEYWORDS);

    let declared = SkillSet::from_declared(&request.required_skills);
    let required = effective_required_skills(&declared, job_description, lexicon);
    let resume_skills = SkillSet::from_declared(&request.resume_skills);
    let skills = match_skills(&resume_skills, &required);

    let experience = experience_score(
        request.resume_years_experience,
        request.required_years_experience,
    );

    let composed = compose(
        coverage,
        skills.score,
        experience,
        !required.is_empty(),
        weights,
    );

    let match_score = round2(composed.composite);
    let skill_match = round2(skills.score);
    let experience_score = round2(composed.experience_used);

    debug!(
        coverage,
        skill_match = skills.score,
        experience,
        composite = composed.composite,
        override_applied = composed.override_applied,
        required_from_description = declared.is_empty() && !required.is_empty(),
        "Computed match"
    );

    let explanation = build_explanation(&ExplanationInput {
        match_score,
        skill_match,
        experience_score,
        matched_skills: skills.matched.len(),
        required_skills: required.len(),
        override_applied: composed.override_applied,
    });

    MatchResult {
        match_score,
        text_similarity: round2(coverage),
        skill_match,
        experience_score,
        matched_skills: skills.matched,
        missing_skills: skills.missing,
        matched_keywords,
        override_applied: composed.override_applied,
        explanation,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Batch ranking
// ────────────────────────────────────────────────────────────────────────────

/// A scored request with its position in the input batch.
#[derive(Debug, Clone)]
pub struct RankedMatch {
    pub index: usize,
    pub result: MatchResult,
}

/// Scores every request in parallel and orders by descending `match_score`,
/// ties broken by input order, so repeated runs present identical lists.
pub fn rank_matches(scorer: &dyn MatchScorer, requests: &[MatchRequest]) -> Vec<RankedMatch> {
    let mut ranked: Vec<RankedMatch> = requests
        .par_iter()
        .enumerate()
        .map(|(index, request)| RankedMatch {
            index,
            result: scorer.score(request),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.result
            .match_score
            .partial_cmp(&a.result.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });

    info!("Ranked {} matches", ranked.len());
    ranked
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
