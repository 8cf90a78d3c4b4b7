//! Skill dictionary: the known skill vocabulary, used for autocomplete and
//! dictionary-based resume extraction.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::skills::normalizer::SkillSet;

/// Autocomplete result cap.
pub const SUGGEST_LIMIT: usize = 10;

/// Vocabulary used when the dictionary file is missing.
const BUILTIN_SKILLS: &[&str] = &[
    "Java",
    "Python",
    "MySQL",
    "Redis",
    "Spring Boot",
    "Vue.js",
    "React.js",
    "JavaScript",
    "HTML",
    "CSS",
];

/// Sorted, duplicate-free skill vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillDictionary {
    skills: Vec<String>,
}

impl SkillDictionary {
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // SkillSet iterates in sorted order.
        Self {
            skills: SkillSet::from_names(skills).to_vec(),
        }
    }

    pub fn builtin() -> Self {
        Self::from_skills(BUILTIN_SKILLS)
    }

    /// Loads the first column of a CSV file (header row skipped).
    ///
    /// A missing file falls back to the built-in vocabulary; any other I/O or
    /// parse error is returned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                "Skill dictionary {} not found, using built-in vocabulary",
                path.display()
            );
            return Ok(Self::builtin());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open skill dictionary {}", path.display()))?;

        let mut names = Vec::new();
        for record in reader.records() {
            let record = record
                .with_context(|| format!("Malformed row in skill dictionary {}", path.display()))?;
            if let Some(first) = record.get(0) {
                names.push(first.to_string());
            }
        }

        let dictionary = Self::from_skills(names);
        info!(
            "Loaded {} skills from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Case-insensitive prefix autocomplete, dictionary order, at most
    /// `SUGGEST_LIMIT` entries. A blank prefix suggests nothing.
    pub fn suggest(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.skills
            .iter()
            .filter(|s| s.to_lowercase().starts_with(&prefix))
            .take(SUGGEST_LIMIT)
            .cloned()
            .collect()
    }
}
