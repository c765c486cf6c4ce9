use std::path::PathBuf;

use thiserror::Error;

/// Construction-time failures of the matching engine.
///
/// Scoring itself never fails; these only surface while building a lexicon
/// or validating weights at startup.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Skill lexicon contains an empty entry")]
    EmptySkill,

    #[error("Skill lexicon contains duplicate entry '{0}' (case-insensitive)")]
    DuplicateSkill(String),

    #[error("Failed to build skill matcher: {0}")]
    Automaton(#[from] aho_corasick::BuildError),

    #[error("Failed to read skill lexicon from {path}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse skill lexicon: {0}")]
    LexiconFormat(#[from] serde_json::Error),

    #[error("Invalid scoring weights: {0}")]
    InvalidWeights(String),
}
