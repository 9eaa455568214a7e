// Trending keyword extraction over batches of panel records.
//
// Pure, infallible, single pass: gather text from each record, tokenize,
// filter, count, rank.

pub mod flatten;
pub mod frequency;
pub mod stopwords;
pub mod traits;

use serde::{Deserialize, Serialize};

pub use frequency::{extract_trending_keywords, FrequencyExtractor, DEFAULT_TOP_K, MAX_RECORDS};

/// One trending keyword and how often it occurred across the scanned records.
///
/// Serialized as `{"text": ..., "value": ...}`, the shape word-cloud widgets expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub text: String,
    pub value: u32,
}
