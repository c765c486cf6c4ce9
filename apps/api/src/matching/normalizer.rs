//! Text normalizer — turns raw resume / JD text into an ordered token sequence.
//!
//! Tokens are lowercase and keep `.`, `#` and `+` so compound terms such as
//! `c++`, `c#` and `node.js` survive intact.

use serde::Serialize;

/// Tokens at or below this many characters are dropped.
const MIN_TOKEN_CHARS: usize = 3;

/// Function words plus resume boilerplate that carries no matching signal.
const STOP_WORDS: &[&str] = &[
    // prepositions
    "about", "above", "across", "after", "against", "along", "among", "around", "before",
    "behind", "below", "between", "beyond", "during", "for", "from", "into", "like", "near",
    "over", "per", "since", "than", "through", "toward", "towards", "under", "until", "upon",
    "via", "with", "within", "without",
    // conjunctions and determiners
    "and", "also", "because", "both", "but", "either", "etc", "neither", "nor", "not", "only",
    "the", "then", "there", "these", "this", "those", "though", "whether", "while", "yet",
    "all", "any", "each", "every", "few", "more", "most", "other", "some", "such", "very",
    // pronouns
    "her", "hers", "him", "his", "its", "mine", "our", "ours", "she", "their", "theirs",
    "them", "they", "who", "whom", "whose", "what", "which", "you", "your", "yours",
    // auxiliary verbs
    "are", "been", "being", "can", "could", "did", "does", "doing", "had", "has", "have",
    "having", "may", "might", "must", "shall", "should", "was", "were", "will", "would",
    // resume and job-post boilerplate
    "ability", "able", "candidate", "experience", "experienced", "including", "job",
    "knowledge", "plus", "preferred", "project", "projects", "required", "requirements",
    "responsibilities", "responsible", "role", "skills", "skill", "strong", "team", "teams",
    "using", "work", "worked", "working", "year", "years",
];

/// Ordered sequence of normalized tokens derived from one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NormalizedDocument {
    tokens: Vec<String>,
}

impl NormalizedDocument {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Joins the tokens back into text; normalizing the result yields the same document.
    #[cfg(test)]
    pub fn to_text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// Normalizes text into tokens. Absent or blank input yields an empty document.
///
/// Algorithm:
/// 1. Lowercase
/// 2. Replace every char that is not a word char, whitespace, `.`, `#` or `+` with a space
/// 3. Split on whitespace, strip trailing `.` (sentence punctuation)
/// 4. Drop tokens of ≤ 2 chars and stop words
pub fn normalize(text: Option<&str>) -> NormalizedDocument {
    let Some(text) = text else {
        return NormalizedDocument::default();
    };

    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() || matches!(c, '.' | '#' | '+') {
                c
            } else {
                ' '
            }
        })
        .collect();

    let tokens = cleaned
        .split_whitespace()
        .map(|t| t.trim_end_matches('.'))
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !is_stop_word(t))
        .map(str::to_string)
        .collect();

    NormalizedDocument { tokens }
}

/// Word characters are letters, digits and underscore.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}
