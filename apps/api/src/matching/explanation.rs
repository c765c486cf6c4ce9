/// Inputs to the explanation template, already rounded.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInput {
    pub match_score: f64,
    pub skill_match: f64,
    pub experience_score: f64,
    pub matched_skills: usize,
    pub required_skills: usize,
    pub override_applied: bool,
}

/// Builds the deterministic summary shown alongside a match.
///
/// Shape: `[override notice] Overall match: N%. <skill clause> <experience clause>`
pub fn build_explanation(input: &ExplanationInput) -> String {
    let mut parts = Vec::with_capacity(4);

    if input.override_applied {
        parts.push(format!(
            "Skill match is only {}%, so experience was ignored due to skill mismatch.",
            percent(input.skill_match)
        ));
    }

    parts.push(format!("Overall match: {}%.", percent(input.match_score)));
    parts.push(skill_clause(input));
    parts.push(experience_clause(input.experience_score).to_string());

    parts.join(" ")
}

fn skill_clause(input: &ExplanationInput) -> String {
    let band = if input.skill_match >= 0.8 {
        "strong"
    } else if input.skill_match >= 0.5 {
        "good"
    } else {
        "partial"
    };

    if input.required_skills == 0 {
        return format!("Skill match is {band}: no required skills could be identified.");
    }

    format!(
        "Skill match is {band} ({} of {} required skills).",
        input.matched_skills, input.required_skills
    )
}

fn experience_clause(experience_score: f64) -> &'static str {
    if experience_score >= 0.8 {
        "Experience requirement met."
    } else if experience_score > 0.0 {
        "Experience considered."
    } else {
        "Experience mismatch or ignored."
    }
}

fn percent(score: f64) -> u32 {
    (score * 100.0).round() as u32
}
