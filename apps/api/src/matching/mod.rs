// Resume ↔ job matching engine.
// Pure and stateless: normalization, skill extraction, coverage, skill/experience
// scoring, composite with override, explanation. The only state is the
// read-only lexicon built at startup.

pub mod composer;
pub mod coverage;
pub mod engine;
pub mod error;
pub mod experience;
pub mod explanation;
pub mod extractor;
pub mod handlers;
pub mod lexicon;
pub mod normalizer;
pub mod skill_match;
pub mod skill_set;
