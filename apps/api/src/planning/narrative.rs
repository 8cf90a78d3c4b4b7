//! Path summary text, templated from the sorted missing-skill list.

use crate::planning::phases::{PHASE1_DURATION, PHASE2_DURATION, PHASE3_DURATION};

/// Separator used whenever a skill list is embedded in text.
pub const SKILL_SEPARATOR: &str = ", ";

/// Builds `path_desc` for skills sorted by descending weight.
pub fn describe_path(missing_sorted: &[String]) -> String {
    let n = missing_sorted.len();

    if n == 0 {
        return "You already have every core skill this job requires. You are fully qualified and can apply directly."
            .to_string();
    }

    if n <= 2 {
        return format!(
            "Learn first (foundation layer): {}. Mastering these meets the job's baseline requirements.",
            join(missing_sorted)
        );
    }

    if n <= 4 {
        return format!(
            "Learn in two phases:\n\
             1. Phase 1 ({PHASE1_DURATION}): {} (core weighted skills);\n\
             2. Phase 2 ({PHASE2_DURATION}): {} (supporting skills).",
            join(&missing_sorted[..2]),
            join(&missing_sorted[2..])
        );
    }

    format!(
        "Learn in three phases:\n\
         1. Phase 1 ({PHASE1_DURATION}): {} (core weighted skills);\n\
         2. Phase 2 ({PHASE2_DURATION}): {} (important skills);\n\
         3. Phase 3 ({PHASE3_DURATION}): {} (extension skills).",
        join(&missing_sorted[..2]),
        join(&missing_sorted[2..4]),
        join(&missing_sorted[4..])
    )
}

fn join(skills: &[String]) -> String {
    skills.join(SKILL_SEPARATOR)
}
