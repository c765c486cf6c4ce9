//! Axum route handlers for the Matching API.

use anyhow::Context;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::engine::{null_as_default, rank_matches, MatchRequest, MatchResult};
use crate::matching::extractor::extract_skills;
use crate::models::candidate::CandidateProfile;
use crate::models::job::JobPosting;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub candidate: CandidateProfile,
    pub jobs: Vec<JobPosting>,
    /// Keep only the top N after sorting.
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedJob {
    pub job_id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 1-based position in the sorted list.
    pub rank: usize,
    pub result: MatchResult,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub results: Vec<RankedJob>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/skills
///
/// Returns the active skill lexicon in catalog order.
pub async fn handle_list_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.scorer.lexicon().entries().to_vec(),
    })
}

/// POST /api/v1/skills/extract
///
/// Returns the lexicon skills found in free text, in order of first mention.
/// Useful for tagging profiles and job postings before matching.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<SkillsResponse>, AppError> {
    let scorer = state.scorer.clone();

    let skills = tokio::task::spawn_blocking(move || {
        Vec::from(extract_skills(&request.text, scorer.lexicon()))
    })
    .await
    .context("Skill extraction worker failed")?;

    Ok(Json(SkillsResponse { skills }))
}

/// POST /api/v1/match
///
/// Scores one resume against one job description.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<MatchResult>, AppError> {
    validate_years("resumeYearsExperience", request.resume_years_experience)?;
    validate_years("requiredYearsExperience", request.required_years_experience)?;

    let scorer = state.scorer.clone();
    let result = tokio::task::spawn_blocking(move || scorer.score(&request))
        .await
        .context("Match worker failed")?;

    Ok(Json(result))
}

/// POST /api/v1/match/rank
///
/// Scores one candidate against many jobs and returns them best-first.
/// Ties keep input order so repeated calls present the same list.
pub async fn handle_rank(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<RankResponse>, AppError> {
    if request.jobs.is_empty() {
        return Err(AppError::Validation("jobs cannot be empty".to_string()));
    }
    if request.jobs.len() > state.config.max_batch_jobs {
        return Err(AppError::Validation(format!(
            "at most {} jobs can be ranked per request, got {}",
            state.config.max_batch_jobs,
            request.jobs.len()
        )));
    }

    validate_years("candidate.yearsExperience", request.candidate.years_experience)?;
    for job in &request.jobs {
        validate_years(
            &format!("jobs[{}].requiredYearsExperience", job.id),
            job.required_years_experience,
        )?;
    }

    let RankRequest {
        candidate,
        jobs,
        limit,
    } = request;
    let scorer = state.scorer.clone();

    let results = tokio::task::spawn_blocking(move || {
        let requests: Vec<MatchRequest> =
            jobs.iter().map(|job| candidate.request_for(job)).collect();

        rank_matches(scorer.as_ref(), &requests)
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .enumerate()
            .map(|(position, ranked)| {
                let job = &jobs[ranked.index];
                RankedJob {
                    job_id: job.id,
                    title: job.title.clone(),
                    rank: position + 1,
                    result: ranked.result,
                }
            })
            .collect::<Vec<_>>()
    })
    .await
    .context("Ranking worker failed")?;

    Ok(Json(RankResponse { results }))
}

fn validate_years(field: &str, years: f64) -> Result<(), AppError> {
    if !years.is_finite() || years < 0.0 {
        return Err(AppError::Validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}
