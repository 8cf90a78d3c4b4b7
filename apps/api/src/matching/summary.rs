//! One-line competitiveness summary shown next to a match score.

use crate::matching::scorer::{MatchResult, MatchTier};

/// Builds the summary line from computed facts only.
pub fn competition_summary(result: &MatchResult) -> String {
    let score = result.match_score;
    let owned = result.owned_skills.len();
    let missing = result.missing_skills.len();

    match result.match_level {
        MatchTier::Excellent => format!(
            "Your skills match {score}% of this job. You already cover {owned} core skills, well above the baseline."
        ),
        MatchTier::Good => format!(
            "Your skills match {score}% of this job. You cover {owned} core skills but still need {missing} key skills."
        ),
        MatchTier::Fair => format!(
            "Your skills match {score}% of this job with only {owned} core skills. Start with {}.",
            leading_skills(&result.missing_skills, 2, "the key skills")
        ),
        MatchTier::NeedsImprovement => format!(
            "Your skills match only {score}% of this job. Work systematically through {} and the other core skills.",
            leading_skills(&result.missing_skills, 3, "the core skills")
        ),
    }
}

fn leading_skills(skills: &[String], count: usize, fallback: &str) -> String {
    if skills.is_empty() {
        return fallback.to_string();
    }
    skills
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
