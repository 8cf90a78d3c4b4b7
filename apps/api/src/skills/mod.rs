// Skill vocabulary, normalization and resume extraction.

pub mod dictionary;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
