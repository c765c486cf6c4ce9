use serde::{Deserialize, Serialize};

use crate::matching::engine::{null_as_default, MatchRequest};
use crate::models::job::JobPosting;

/// A candidate's resume text plus declared profile fields.
///
/// `resume_text` comes from the extraction service; the engine never sees the source file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub resume_text: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub years_experience: f64,
}

impl CandidateProfile {
    /// Pairs this candidate with a job into a single match request.
    pub fn request_for(&self, job: &JobPosting) -> MatchRequest {
        MatchRequest {
            resume_text: self.resume_text.clone(),
            job_description_text: job.description.clone(),
            resume_skills: self.skills.clone(),
            required_skills: job.required_skills.clone(),
            resume_years_experience: self.years_experience,
            required_years_experience: job.required_years_experience,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_request_for_copies_both_sides() {
        let candidate = CandidateProfile {
            resume_text: Some("Rust engineer".to_string()),
            skills: vec!["Rust".to_string()],
            years_experience: 4.0,
        };
        let job = JobPosting {
            id: Uuid::new_v4(),
            title: Some("Backend Engineer".to_string()),
            description: Some("Rust and Kafka".to_string()),
            required_skills: vec!["Kafka".to_string()],
            required_years_experience: 3.0,
        };

        let request = candidate.request_for(&job);
        assert_eq!(request.resume_text.as_deref(), Some("Rust engineer"));
        assert_eq!(request.job_description_text.as_deref(), Some("Rust and Kafka"));
        assert_eq!(request.resume_skills, vec!["Rust"]);
        assert_eq!(request.required_skills, vec!["Kafka"]);
        assert_eq!(request.resume_years_experience, 4.0);
        assert_eq!(request.required_years_experience, 3.0);
    }

    #[test]
    fn test_null_fields_default() {
        let candidate: CandidateProfile =
            serde_json::from_str(r#"{"skills": null, "yearsExperience": null}"#).unwrap();
        assert!(candidate.skills.is_empty());
        assert_eq!(candidate.years_experience, 0.0);

        let id = Uuid::new_v4();
        let job: JobPosting = serde_json::from_str(&format!(
            r#"{{"id": "{id}", "requiredSkills": null, "requiredYearsExperience": null}}"#
        ))
        .unwrap();
        assert!(job.required_skills.is_empty());
        assert_eq!(job.required_years_experience, 0.0);
    }

    #[test]
    fn test_job_posting_defaults_optional_fields() {
        let id = Uuid::new_v4();
        let job: JobPosting = serde_json::from_str(&format!(r#"{{"id": "{id}"}}"#)).unwrap();
        assert_eq!(job.id, id);
        assert!(job.description.is_none());
        assert!(job.required_skills.is_empty());
        assert_eq!(job.required_years_experience, 0.0);
    }
}
