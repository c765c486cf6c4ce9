//! Skill extractor — finds lexicon entries that occur in free text as whole phrases.
//!
//! One overlapping pass of the lexicon automaton over the lowercased text, then:
//! 1. keep only hits with a non-word char (or text edge) on both sides
//! 2. longest-first: a hit lying inside another accepted hit's span is not counted
//!    for that span, so "React Native" does not also yield "React"
//! 3. a shorter skill is still detected wherever it stands alone
//!
//! Shadowing is a single sweep in start order, so extraction stays linear in the
//! number of hits apart from one sort.

use crate::matching::lexicon::SkillLexicon;
use crate::matching::normalizer::is_word_char;
use crate::matching::skill_set::SkillSet;

#[derive(Debug, Clone, Copy)]
struct Hit {
    pattern: usize,
    start: usize,
    end: usize,
}

/// Extracts canonical skill names present in `text`, ordered by first occurrence.
pub fn extract_skills(text: &str, lexicon: &SkillLexicon) -> SkillSet {
    let mut skills = SkillSet::new();
    if text.trim().is_empty() || lexicon.is_empty() {
        return skills;
    }

    let haystack = text.to_lowercase();

    let mut hits: Vec<Hit> = lexicon
        .automaton()
        .find_overlapping_iter(&haystack)
        .map(|m| Hit {
            pattern: m.pattern().as_usize(),
            start: m.start(),
            end: m.end(),
        })
        .filter(|hit| on_word_boundaries(&haystack, hit.start, hit.end))
        .collect();

    // Start ascending, longer span first on equal starts: every hit that could
    // cover the current one has already been swept.
    hits.sort_unstable_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut seen = vec![false; lexicon.len()];
    let mut furthest_end = 0;
    let mut swept_any = false;

    for hit in hits {
        // Distinct lexicon entries never share a span, so reaching this end means
        // an earlier, longer hit contains this one.
        let shadowed = swept_any && furthest_end >= hit.end;
        furthest_end = furthest_end.max(hit.end);
        swept_any = true;

        if shadowed || seen[hit.pattern] {
            continue;
        }
        seen[hit.pattern] = true;
        skills.insert(lexicon.canonical(hit.pattern));
    }

    skills
}

/// True when the span is not preceded or followed by a word character.
fn on_word_boundaries(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| !is_word_char(c));
    let after_ok = text[end..].chars().next().map_or(true, |c| !is_word_char(c));
    before_ok && after_ok
}
