use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::matching::engine::null_as_default;

/// A job posting as supplied by the persistence layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Curated skill tags. Empty means the engine infers them from `description`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    /// 0 = unspecified.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_years_experience: f64,
}
