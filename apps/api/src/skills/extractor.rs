//! Resume skill extraction: a pluggable text → skill set step.
//!
//! Default: `DictionaryExtractor` (substring match against the skill
//! dictionary). `AppState` holds an `Arc<dyn SkillExtractor>`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::matching::CollaboratorError;
use crate::skills::dictionary::SkillDictionary;
use crate::skills::normalizer::{normalize, SkillSet};

#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Returns the normalized skills recognized in `text`.
    async fn extract(&self, text: &str) -> Result<SkillSet, CollaboratorError>;
}

/// Recognizes every dictionary skill whose lowercase form occurs in the
/// lowercase resume text.
pub struct DictionaryExtractor {
    dictionary: Arc<SkillDictionary>,
}

impl DictionaryExtractor {
    pub fn new(dictionary: Arc<SkillDictionary>) -> Self {
        Self { dictionary }
    }
}

#[async_trait]
impl SkillExtractor for DictionaryExtractor {
    async fn extract(&self, text: &str) -> Result<SkillSet, CollaboratorError> {
        Ok(extract_with_dictionary(&self.dictionary, text))
    }
}

fn extract_with_dictionary(dictionary: &SkillDictionary, text: &str) -> SkillSet {
    let text = text.to_lowercase();
    normalize(
        dictionary
            .iter()
            .filter(|skill| text.contains(&skill.to_lowercase()))
            .map(Some),
    )
}

/// Pulls plain text out of an uploaded PDF resume.
///
/// CPU-bound; runs on the blocking pool.
pub async fn pdf_to_text(bytes: bytes::Bytes) -> Result<String, CollaboratorError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| CollaboratorError::Extraction(format!("PDF worker failed: {e}")))?
        .map_err(|e| CollaboratorError::Extraction(format!("Unreadable PDF: {e}")))
}
