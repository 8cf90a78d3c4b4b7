//! Match Scorer — weighted coverage of a job's requirements by a person's skills.
//!
//! Algorithm:
//! 1. Partition the required skills into owned / missing (requirement order)
//! 2. score = round(owned_weight / total_weight × 100), 0 on zero total weight
//! 3. tier from inclusive lower bounds 80 / 60 / 40
//! 4. recommend = top 3 missing by weight, ties keep requirement order
//! 5. radar = every required weight scaled against the max weight onto 0–10

use serde::{Deserialize, Serialize};

use crate::matching::types::WeightedRequirement;
use crate::matching::{weighted_rate, MatchError};
use crate::skills::normalizer::SkillSet;

/// How many missing skills are surfaced as "learn these first".
pub const RECOMMEND_COUNT: usize = 3;

/// Upper bound of the radar chart axis.
const RADAR_SCALE: f64 = 10.0;

/// Coarse qualitative label derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchTier {
    #[serde(rename = "excellent")]
    Excellent,
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "needs improvement")]
    NeedsImprovement,
}

impl MatchTier {
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => MatchTier::Excellent,
            s if s >= 60 => MatchTier::Good,
            s if s >= 40 => MatchTier::Fair,
            _ => MatchTier::NeedsImprovement,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchTier::Excellent => "excellent",
            MatchTier::Good => "good",
            MatchTier::Fair => "fair",
            MatchTier::NeedsImprovement => "needs improvement",
        }
    }
}

/// Parallel series for a radar chart. All three vectors share one order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarData {
    pub dimensions: Vec<String>,
    pub job_weights: Vec<f64>,
    pub person_weights: Vec<f64>,
}

/// Result of scoring one person against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub job_id: String,
    pub job_name: String,
    pub match_score: u32, // 0 – 100
    pub match_level: MatchTier,
    pub owned_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub recommend_skills: Vec<String>,
    pub radar_data: Option<RadarData>,
}

/// Scores `person` against `requirements`.
///
/// Fails with `NoRequirements` when the job models no skills at all; a zero
/// score is a valid result, not an error.
pub fn score(
    person: &SkillSet,
    requirements: &WeightedRequirement,
    job_id: &str,
    job_name: &str,
) -> Result<MatchResult, MatchError> {
    if requirements.is_empty() {
        return Err(MatchError::NoRequirements(job_id.to_string()));
    }

    let (owned, missing) = requirements.partition(person);

    let match_score = weighted_rate(requirements.owned_weight(person), requirements.total_weight());

    let recommend_skills = top_missing_by_weight(requirements, person, RECOMMEND_COUNT);

    Ok(MatchResult {
        job_id: job_id.to_string(),
        job_name: job_name.to_string(),
        match_score,
        match_level: MatchTier::from_score(match_score),
        owned_skills: owned.iter().map(|r| r.skill.clone()).collect(),
        missing_skills: missing.iter().map(|r| r.skill.clone()).collect(),
        recommend_skills,
        radar_data: radar_data(person, requirements),
    })
}

/// Missing skills sorted by descending weight. The sort is stable, so equal
/// weights keep requirement order.
pub fn missing_by_weight(requirements: &WeightedRequirement, person: &SkillSet) -> Vec<(String, f64)> {
    let (_, missing) = requirements.partition(person);
    let mut sorted: Vec<(String, f64)> = missing
        .into_iter()
        .map(|r| (r.skill.clone(), r.weight))
        .collect();
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));
    sorted
}

fn top_missing_by_weight(
    requirements: &WeightedRequirement,
    person: &SkillSet,
    count: usize,
) -> Vec<String> {
    missing_by_weight(requirements, person)
        .into_iter()
        .take(count)
        .map(|(skill, _)| skill)
        .collect()
}

/// Builds radar series. `None` only for an empty requirement set.
pub fn radar_data(person: &SkillSet, requirements: &WeightedRequirement) -> Option<RadarData> {
    if requirements.is_empty() {
        return None;
    }

    let max_weight = requirements.max_weight();
    let scaled = |weight: f64| {
        if max_weight > 0.0 {
            round_one_decimal(weight / max_weight * RADAR_SCALE)
        } else {
            0.0
        }
    };

    let mut dimensions = Vec::with_capacity(requirements.len());
    let mut job_weights = Vec::with_capacity(requirements.len());
    let mut person_weights = Vec::with_capacity(requirements.len());

    for req in requirements.iter() {
        let value = scaled(req.weight);
        dimensions.push(req.skill.clone());
        job_weights.push(value);
        person_weights.push(if person.contains(&req.skill) { value } else { 0.0 });
    }

    Some(RadarData {
        dimensions,
        job_weights,
        person_weights,
    })
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
