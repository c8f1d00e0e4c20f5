use serde::{Deserialize, Serialize};

/// A ranked course-material excerpt surfaced alongside an answer. Built fresh
/// for each question and never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RankedCitation {
    pub title: String,
    pub file_url: Option<String>,
    /// Short window of body text around the first matched question word.
    pub snippet: String,
    pub score: i64,
    /// Longer excerpt injected into the prompt's relevant-materials block.
    pub excerpt: String,
}
