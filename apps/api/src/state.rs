use std::sync::Arc;

use crate::advisor::Advisor;
use crate::planning::phases::PathPlanner;
use crate::report::ReportGenerator;
use crate::skills::dictionary::SkillDictionary;
use crate::skills::extractor::DictionaryExtractor;
use crate::store::SkillGraphStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub advisor: Arc<Advisor>,
    /// Skill vocabulary for autocomplete. The default extractor shares it.
    pub dictionary: Arc<SkillDictionary>,
}

impl AppState {
    /// Wires the default extractor and planner around the given backends.
    pub fn new(
        store: Arc<dyn SkillGraphStore>,
        dictionary: SkillDictionary,
        reporter: Arc<dyn ReportGenerator>,
    ) -> Self {
        let dictionary = Arc::new(dictionary);
        let extractor = Arc::new(DictionaryExtractor::new(dictionary.clone()));
        let advisor = Advisor::new(store, extractor, reporter, PathPlanner::default());
        Self {
            advisor: Arc::new(advisor),
            dictionary,
        }
    }
}
