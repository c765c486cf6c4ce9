/// Banded experience score.
///
/// A step function on purpose: year counts are noisy, and four bands keep the
/// explanation readable. `required_years <= 0` means "no requirement".
/// Negative or non-finite inputs are treated as 0.
pub fn experience_score(resume_years: f64, required_years: f64) -> f64 {
    let resume_years = sanitize_years(resume_years);
    let required_years = sanitize_years(required_years);

    if required_years <= 0.0 || resume_years >= required_years {
        1.0
    } else if resume_years >= 0.5 * required_years {
        0.8
    } else if resume_years >= 1.0 {
        0.5
    } else {
        0.2
    }
}

fn sanitize_years(years: f64) -> f64 {
    if years.is_finite() {
        years.max(0.0)
    } else {
        0.0
    }
}
