//! Learning path planner — splits the weight-ranked missing skills of a target
//! job into up to three phases.
//!
//! Split policy by missing count `n`:
//! - `n < 2`      → phase 1 = all
//! - `2 <= n < 4` → phase 1 = first 2, phase 2 = rest
//! - `n >= 4`     → phase 1 = first 2, phase 2 = next 2, phase 3 = rest
//!
//! Durations are fixed display estimates, not derived from skill counts.

use serde::{Deserialize, Serialize};

use crate::matching::scorer::missing_by_weight;
use crate::matching::types::WeightedRequirement;
use crate::matching::MatchError;
use crate::planning::actions::ActionTable;
use crate::planning::graph::{build_path_graph, PathGraph};
use crate::planning::narrative::describe_path;
use crate::skills::normalizer::SkillSet;

pub const PHASE1_DURATION: &str = "1-2 months";
pub const PHASE2_DURATION: &str = "2-3 months";
pub const PHASE3_DURATION: &str = "3-4 months";

const PHASE_DURATIONS: [&str; 3] = [PHASE1_DURATION, PHASE2_DURATION, PHASE3_DURATION];

/// One stage of the learning plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPhase {
    pub phase: u8, // 1 – 3
    pub skills: Vec<String>,
    pub time_range: String,
    pub action: String,
}

/// Full plan toward one target job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPath {
    pub target_job_id: String,
    pub target_job_name: String,
    pub owned_skills: Vec<String>,
    /// Sorted by descending weight.
    pub missing_skills: Vec<String>,
    /// Always three entries, phase 1 first. Later phases may be empty.
    pub phases: Vec<LearningPhase>,
    pub path_desc: String,
    pub graph_data: PathGraph,
}

/// Plans learning paths using a domain → action lookup table.
#[derive(Debug, Clone, Default)]
pub struct PathPlanner {
    actions: ActionTable,
}

impl PathPlanner {
    pub fn new(actions: ActionTable) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &ActionTable {
        &self.actions
    }

    pub fn plan(
        &self,
        person: &SkillSet,
        requirements: &WeightedRequirement,
        job_id: &str,
        job_name: &str,
    ) -> Result<LearningPath, MatchError> {
        if requirements.is_empty() {
            return Err(MatchError::NoRequirements(job_id.to_string()));
        }

        let (owned, _) = requirements.partition(person);
        let owned: Vec<String> = owned.iter().map(|r| r.skill.clone()).collect();

        let missing_sorted: Vec<String> = missing_by_weight(requirements, person)
            .into_iter()
            .map(|(skill, _)| skill)
            .collect();

        let [phase1, phase2, phase3] = split_phases(&missing_sorted);
        let actions = self.actions.actions_for(job_name);

        let graph_data = build_path_graph(&owned, [phase1, phase2, phase3], requirements, job_name);

        let phases = [phase1, phase2, phase3]
            .iter()
            .enumerate()
            .map(|(i, skills)| LearningPhase {
                phase: (i + 1) as u8,
                skills: skills.to_vec(),
                time_range: PHASE_DURATIONS[i].to_string(),
                action: actions[i].clone(),
            })
            .collect();

        Ok(LearningPath {
            target_job_id: job_id.to_string(),
            target_job_name: job_name.to_string(),
            owned_skills: owned,
            path_desc: describe_path(&missing_sorted),
            missing_skills: missing_sorted,
            phases,
            graph_data,
        })
    }
}

/// Splits a sorted missing list into the three phase slices.
pub fn split_phases(missing_sorted: &[String]) -> [&[String]; 3] {
    let n = missing_sorted.len();
    if n < 2 {
        [missing_sorted, &[], &[]]
    } else if n < 4 {
        [&missing_sorted[..2], &missing_sorted[2..], &[]]
    } else {
        [
            &missing_sorted[..2],
            &missing_sorted[2..4],
            &missing_sorted[4..],
        ]
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planning::graph::NodeCategory;

    fn reqs(pairs: &[(&str, f64)]) -> WeightedRequirement {
        WeightedRequirement::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_five_missing_split_two_two_one() {
        let requirements = reqs(&[("A", 2.0), ("B", 4.0), ("C", 6.0), ("D", 8.0), ("E", 10.0)]);
        let path = PathPlanner::default()
            .plan(&SkillSet::new(), &requirements, "j1", "Backend Developer")
            .unwrap();

        assert_eq!(path.missing_skills, vec!["E", "D", "C", "B", "A"]);
        assert_eq!(path.phases[0].skills, vec!["E", "D"]);
        assert_eq!(path.phases[1].skills, vec!["C", "B"]);
        assert_eq!(path.phases[2].skills, vec!["A"]);
    }

    #[test]
    fn test_single_missing_only_phase1() {
        let requirements = reqs(&[("A", 3.0), ("B", 1.0)]);
        let person = SkillSet::from_names(["A"]);
        let path = PathPlanner::default()
            .plan(&person, &requirements, "j1", "Backend Developer")
            .unwrap();

        assert_eq!(path.phases[0].skills, vec!["B"]);
        assert!(path.phases[1].skills.is_empty());
        assert!(path.phases[2].skills.is_empty());

        let to_target: Vec<_> = path
            .graph_data
            .links
            .iter()
            .filter(|l| l.target == "Backend Developer")
            .collect();
        assert_eq!(to_target.len(), 1);
        assert_eq!(to_target[0].source, "B");
    }

    #[test]
    fn test_three_missing_split_two_one() {
        let missing: Vec<String> = ["X", "Y", "Z"].iter().map(|s| s.to_string()).collect();
        let [p1, p2, p3] = split_phases(&missing);
        assert_eq!(p1.len(), 2);
        assert_eq!(p2, &["Z".to_string()]);
        assert!(p3.is_empty());
    }

    #[test]
    fn test_ties_keep_requirement_order() {
        let requirements = reqs(&[("B", 1.0), ("A", 1.0), ("C", 2.0)]);
        let path = PathPlanner::default()
            .plan(&SkillSet::new(), &requirements, "j1", "x")
            .unwrap();
        assert_eq!(path.missing_skills, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_durations_are_fixed() {
        let requirements = reqs(&[("A", 1.0)]);
        let path = PathPlanner::default()
            .plan(&SkillSet::new(), &requirements, "j1", "x")
            .unwrap();
        let ranges: Vec<_> = path.phases.iter().map(|p| p.time_range.as_str()).collect();
        assert_eq!(ranges, vec!["1-2 months", "2-3 months", "3-4 months"]);
    }

    #[test]
    fn test_actions_follow_job_domain() {
        let requirements = reqs(&[("Pandas", 1.0)]);
        let planner = PathPlanner::default();
        let path = planner
            .plan(&SkillSet::new(), &requirements, "j1", "Data Analyst")
            .unwrap();
        let expected = &planner.actions().domain_for("Data Analyst").unwrap().actions;
        assert_eq!(&path.phases[0].action, &expected[0]);
        assert_eq!(&path.phases[2].action, &expected[2]);
    }

    #[test]
    fn test_fully_qualified_path() {
        let requirements = reqs(&[("A", 1.0)]);
        let person = SkillSet::from_names(["A"]);
        let path = PathPlanner::default()
            .plan(&person, &requirements, "j1", "Job")
            .unwrap();
        assert!(path.missing_skills.is_empty());
        assert!(path.path_desc.contains("fully qualified"));
        assert_eq!(path.graph_data.nodes[0].category, NodeCategory::Owned);
    }

    #[test]
    fn test_empty_requirements_is_error() {
        let err = PathPlanner::default()
            .plan(&SkillSet::new(), &WeightedRequirement::new(), "j9", "Job")
            .unwrap_err();
        assert!(matches!(err, MatchError::NoRequirements(_)));
    }
}
