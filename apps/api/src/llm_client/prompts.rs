// Prompt text for the narrative match report.

pub const REPORT_SYSTEM: &str = "You are a career skills analysis assistant.";

/// Placeholders: {job_name}, {match_score}, {owned}, {missing}, {recommend}.
pub const REPORT_PROMPT_TEMPLATE: &str = "\
Write a clearly structured analysis report from the job match below.
- Target job: {job_name}
- Match score: {match_score}%
- Skills already held: {owned}
- Missing skills: {missing}
- Learn these first: {recommend}

The report must contain these sections:
1. [Match summary]
2. [Strengths you already have]
3. [Learning priorities]
4. [Resume project wording] (how to present existing skills to fit this job)
5. [Action tips]

Formatting rules:
- start every section with its [title]
- one short sentence per line, no blank lines between lines
- conversational tone, no long paragraphs
- plain text with line breaks only, no Markdown";

/// Rendered in place of an empty skill list.
pub const NONE_PLACEHOLDER: &str = "none";
