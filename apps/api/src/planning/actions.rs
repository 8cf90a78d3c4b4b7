//! Domain → per-phase action lookup.
//!
//! A static table, consulted in priority order: the first domain whose keyword
//! occurs in the job name wins. Unmatched names get the generic triple.

use serde::{Deserialize, Serialize};

/// Action texts for phases 1, 2 and 3.
pub type PhaseActions = [String; 3];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainActions {
    pub domain: String,
    /// Matched as case-insensitive substrings of the job name.
    pub keywords: Vec<String>,
    pub actions: PhaseActions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTable {
    pub domains: Vec<DomainActions>,
    pub fallback: PhaseActions,
}

impl ActionTable {
    pub fn new(fallback: PhaseActions) -> Self {
        Self {
            domains: Vec::new(),
            fallback,
        }
    }

    /// Appends a domain at the lowest priority.
    pub fn with_domain(mut self, domain: &str, keywords: &[&str], actions: [&str; 3]) -> Self {
        self.domains.push(DomainActions {
            domain: domain.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            actions: actions.map(str::to_string),
        });
        self
    }

    /// Returns the matching domain entry, if any.
    pub fn domain_for(&self, job_name: &str) -> Option<&DomainActions> {
        let name = job_name.to_lowercase();
        self.domains.iter().find(|d| {
            d.keywords
                .iter()
                .any(|k| !k.is_empty() && name.contains(&k.to_lowercase()))
        })
    }

    pub fn actions_for(&self, job_name: &str) -> &PhaseActions {
        self.domain_for(job_name)
            .map(|d| &d.actions)
            .unwrap_or(&self.fallback)
    }
}

impl Default for ActionTable {
    fn default() -> Self {
        ActionTable::new([
            "Build the fundamentals first through video courses and small practice projects".to_string(),
            "Level up with hands-on projects that exercise the new skills".to_string(),
            "Break through on the core skills by joining real business projects".to_string(),
        ])
        .with_domain(
            "development",
            &["开发", "develop"],
            [
                "Learn the core syntax and framework basics from the official docs and a demo project (e.g. a simple REST endpoint)",
                "Study performance tuning and middleware, and consolidate by contributing to a small open-source project",
                "Dig into framework internals and distributed architecture, then build a mid-sized system on your own (e.g. a user management platform)",
            ],
        )
        .with_domain(
            "analysis",
            &["分析", "analy"],
            [
                "Learn data cleaning and visualization tools through beginner Kaggle projects (e.g. the Titanic dataset)",
                "Study statistical models and algorithms on business datasets (e.g. e-commerce user behaviour)",
                "Go deep on machine learning and business modeling inside real analysis projects",
            ],
        )
        .with_domain(
            "research",
            &["研究", "research", "scientist"],
            [
                "Learn the theory and tooling by reproducing papers and running small experiments",
                "Study frontier techniques and experiment design on open research datasets",
                "Push into original research: publish a paper or enter a competition",
            ],
        )
    }
}
