// Keyword extractor trait.
//
// The frequency counter is the only implementation today; the trait keeps
// the CLI and composition code independent of the ranking approach.

use serde_json::Value;

use super::KeywordCount;

/// Trait for ranking the keywords of a batch of panel records.
pub trait KeywordExtractor {
    /// Rank keywords across `records`, highest first.
    ///
    /// Never fails: records or fields of the wrong shape contribute nothing.
    fn extract(&self, records: &[Value]) -> Vec<KeywordCount>;
}
