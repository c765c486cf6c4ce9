use serde::{Deserialize, Serialize};

/// Set of canonical skill names.
///
/// Keeps first-insertion order so reports are deterministic; membership is
/// case-insensitive and duplicates (ignoring case) are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a declared list: entries are trimmed, blanks dropped,
    /// later case-insensitive duplicates ignored.
    pub fn from_declared<I, S>(declared: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for skill in declared {
            set.insert(skill.as_ref().trim());
        }
        set
    }

    /// Inserts a skill; returns false for blanks and case-insensitive duplicates.
    pub fn insert(&mut self, skill: &str) -> bool {
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        let needle = skill.to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(skills: Vec<String>) -> Self {
        Self::from_declared(skills)
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.skills
    }
}
