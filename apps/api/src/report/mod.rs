//! Narrative match report, a pluggable `MatchResult` → text step.
//!
//! `LlmReportGenerator` asks the chat model for a sectioned report;
//! `TemplateReportGenerator` renders the same sections without a network call
//! and is used whenever no LLM key is configured.

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::prompts::{NONE_PLACEHOLDER, REPORT_PROMPT_TEMPLATE, REPORT_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::matching::scorer::{MatchResult, MatchTier};
use crate::matching::summary::competition_summary;
use crate::planning::narrative::SKILL_SEPARATOR;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Llm(#[from] LlmError),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Carried in `AppState` as `Arc<dyn ReportGenerator>`.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    async fn generate(&self, result: &MatchResult) -> Result<String, ReportError>;

    /// "llm" | "template", surfaced in logs.
    fn backend(&self) -> &'static str;
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        NONE_PLACEHOLDER.to_string()
    } else {
        skills.join(SKILL_SEPARATOR)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LLM backend
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmReportGenerator {
    llm: LlmClient,
}

impl LlmReportGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

pub fn build_report_prompt(result: &MatchResult) -> String {
    REPORT_PROMPT_TEMPLATE
        .replace("{job_name}", &result.job_name)
        .replace("{match_score}", &result.match_score.to_string())
        .replace("{owned}", &join_or_none(&result.owned_skills))
        .replace("{missing}", &join_or_none(&result.missing_skills))
        .replace("{recommend}", &join_or_none(&result.recommend_skills))
}

#[async_trait]
impl ReportGenerator for LlmReportGenerator {
    async fn generate(&self, result: &MatchResult) -> Result<String, ReportError> {
        let prompt = build_report_prompt(result);
        Ok(self.llm.chat(REPORT_SYSTEM, &prompt).await?)
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Template backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateReportGenerator;

impl TemplateReportGenerator {
    pub fn render(&self, result: &MatchResult) -> String {
        let mut lines = vec![
            "[Match summary]".to_string(),
            competition_summary(result),
            "[Strengths you already have]".to_string(),
        ];

        if result.owned_skills.is_empty() {
            lines.push("None of the required skills are on record yet.".to_string());
        } else {
            lines.push(format!(
                "You already cover {}.",
                result.owned_skills.join(SKILL_SEPARATOR)
            ));
        }

        lines.push("[Learning priorities]".to_string());
        if result.recommend_skills.is_empty() {
            lines.push("No gaps left for this role.".to_string());
        } else {
            for (i, skill) in result.recommend_skills.iter().enumerate() {
                lines.push(format!("{}. {skill}", i + 1));
            }
        }

        lines.push("[Resume project wording]".to_string());
        match result.owned_skills.first() {
            Some(skill) => lines.push(format!(
                "Lead with a project where {skill} delivered a measurable result for a {} style role.",
                result.job_name
            )),
            None => lines.push(
                "Add a small project that shows the first priority skill in use.".to_string(),
            ),
        }

        lines.push("[Action tips]".to_string());
        lines.push(
            match result.match_level {
                MatchTier::Excellent => "Apply now and tailor the resume to the job posting.",
                MatchTier::Good => "Close one priority gap, then start applying.",
                MatchTier::Fair => "Work through the priorities before applying widely.",
                MatchTier::NeedsImprovement => {
                    "Build the foundation skills first and revisit this role later."
                }
            }
            .to_string(),
        );

        lines.join("\n")
    }
}

#[async_trait]
impl ReportGenerator for TemplateReportGenerator {
    async fn generate(&self, result: &MatchResult) -> Result<String, ReportError> {
        Ok(self.render(result))
    }

    fn backend(&self) -> &'static str {
        "template"
    }
}
