//! Coverage — how much of what the job talks about the resume also mentions.
//!
//! Deliberately asymmetric: resume tokens absent from the job neither help nor hurt.

use std::collections::HashSet;

use crate::matching::normalizer::NormalizedDocument;

/// Cap on the keyword list reported in a match result.
pub const MAX_MATCHED_KEYWORDS: usize = 10;

/// |distinct job tokens ∩ distinct resume tokens| / |distinct job tokens|.
/// An empty job document scores 0.
pub fn coverage_score(resume: &NormalizedDocument, job: &NormalizedDocument) -> f64 {
    if job.is_empty() {
        return 0.0;
    }

    let job_tokens: HashSet<&str> = job.tokens().iter().map(String::as_str).collect();

    let resume_tokens: HashSet<&str> = resume.tokens().iter().map(String::as_str).collect();
    let covered = job_tokens
        .iter()
        .filter(|t| resume_tokens.contains(*t))
        .count();

    covered as f64 / job_tokens.len() as f64
}

/// Distinct tokens found in both documents, in job first-occurrence order, capped at `limit`.
pub fn common_keywords(
    resume: &NormalizedDocument,
    job: &NormalizedDocument,
    limit: usize,
) -> Vec<String> {
    let resume_tokens: HashSet<&str> = resume.tokens().iter().map(String::as_str).collect();
    let mut seen = HashSet::new();

    job.tokens()
        .iter()
        .filter(|t| resume_tokens.contains(t.as_str()) && seen.insert(t.as_str()))
        .take(limit)
        .cloned()
        .collect()
}
