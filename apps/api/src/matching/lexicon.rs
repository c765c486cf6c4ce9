//! Skill lexicon — immutable catalog of canonical skill names plus the
//! precompiled automaton used to find them in free text.
//!
//! Built once at startup and shared read-only behind `Arc`.

use std::collections::HashSet;
use std::path::Path;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::matching::error::EngineError;

/// Canonical skills recognised out of the box. Order is catalog order.
const DEFAULT_SKILLS: &[&str] = &[
    // Languages
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Rust", "Golang", "Ruby", "PHP",
    "Kotlin", "Swift", "Scala", "Objective-C", "Perl", "Haskell", "Elixir", "Dart", "Lua",
    "MATLAB", "Bash", "PowerShell", "SQL", "NoSQL", "GraphQL", "HTML", "CSS", "Sass",
    // Frontend / mobile
    "React", "React Native", "Angular", "Vue.js", "Next.js", "Svelte", "jQuery", "Redux",
    "Tailwind CSS", "Flutter", "Android", "iOS",
    // Backend frameworks
    "Node.js", "Express.js", "Django", "Flask", "FastAPI", "Spring", "Spring Boot",
    "Ruby on Rails", ".NET", "ASP.NET", "Laravel", "gRPC", "REST APIs", "Microservices",
    // Data stores
    "PostgreSQL", "MySQL", "SQLite", "MongoDB", "Redis", "Cassandra", "DynamoDB",
    "Elasticsearch", "Oracle", "Snowflake", "BigQuery",
    // Cloud / infra
    "AWS", "Azure", "Google Cloud", "GCP", "Docker", "Kubernetes", "Terraform", "Ansible",
    "Jenkins", "GitHub Actions", "CI/CD", "Linux", "Nginx", "Kafka", "RabbitMQ", "Git",
    // Data / ML
    "Machine Learning", "Deep Learning", "Data Analysis", "Data Science", "TensorFlow",
    "PyTorch", "scikit-learn", "Pandas", "NumPy", "Spark", "Hadoop", "Airflow", "Tableau",
    "Power BI", "Excel", "NLP", "Computer Vision", "Statistics",
    // Practice / soft
    "Agile", "Scrum", "Jira", "Project Management", "Product Management", "Leadership",
    "Communication", "Figma", "UI/UX", "Unit Testing", "Selenium", "Cybersecurity",
];

/// Read-only catalog of canonical skill names with a precompiled matcher.
///
/// Invariant: no two entries are equal ignoring case, no entry is blank.
#[derive(Debug, Clone)]
pub struct SkillLexicon {
    /// Index-aligned with the automaton's pattern ids.
    entries: Vec<String>,
    automaton: AhoCorasick,
}

impl SkillLexicon {
    /// Builds a lexicon from canonical names, rejecting blanks and case-insensitive duplicates.
    pub fn new<I, S>(entries: I) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut canonical = Vec::new();
        let mut lowered = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            let entry: String = entry.into();
            let entry = entry.trim().to_string();
            if entry.is_empty() {
                return Err(EngineError::EmptySkill);
            }
            let lower = entry.to_lowercase();
            if !seen.insert(lower.clone()) {
                return Err(EngineError::DuplicateSkill(entry));
            }
            canonical.push(entry);
            lowered.push(lower);
        }

        // Standard match kind is required for overlapping search; precedence is
        // resolved by the extractor, not the automaton.
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&lowered)?;

        Ok(Self {
            entries: canonical,
            automaton,
        })
    }

    /// The built-in catalog.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }

    /// Loads a catalog from disk.
    ///
    /// `.json` files hold an array of strings; anything else is one skill per line,
    /// with blank lines and `#` comments ignored.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let raw = std::fs::read_to_string(path).map_err(|source| EngineError::LexiconIo {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            let entries: Vec<String> = serde_json::from_str(&raw)?;
            Self::new(entries)
        } else {
            Self::new(
                raw.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty() && !l.starts_with('#')),
            )
        }
    }

    /// Canonical entries in catalog order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical name for an automaton pattern index.
    pub(crate) fn canonical(&self, index: usize) -> &str {
        &self.entries[index]
    }

    pub(crate) fn automaton(&self) -> &AhoCorasick {
        &self.automaton
    }
}
