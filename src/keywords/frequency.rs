// Frequency-count keyword extractor.
//
// For each record (first MAX_RECORDS only), joins the text-bearing fields into
// one blob, pulls out runs of 2+ Hangul/Latin/digit characters, drops numeric
// tokens and stopwords, and counts the rest. Ties in the final ranking keep
// first-seen order so the output is reproducible.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde_json::Value;

use super::flatten::flatten_leaves;
use super::stopwords::is_stopword;
use super::traits::KeywordExtractor;
use super::KeywordCount;

/// Default number of keywords returned.
pub const DEFAULT_TOP_K: usize = 20;

/// Records past this index are ignored.
pub const MAX_RECORDS: usize = 1000;

/// Free-text fields read from every record alongside `content` and `json_doc`.
pub const AUX_TEXT_FIELDS: &[&str] = &[
    "lifestyle",
    "hobby",
    "hobbies",
    "interests",
    "values",
    "habits",
    "consumption_habits",
    "media_habits",
    "leisure",
    "preference",
];

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣a-zA-Z0-9]{2,}").expect("token pattern is valid"));

/// Frequency-based extractor: the default (and only) keyword ranking.
#[derive(Debug, Clone)]
pub struct FrequencyExtractor {
    /// How many keywords to return
    pub top_k: usize,
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, records: &[Value]) -> Vec<KeywordCount> {
        extract_trending_keywords(records, self.top_k)
    }
}

/// Rank the most frequent meaningful tokens across `records`.
///
/// Output is sorted by descending count; equal counts keep the order in which
/// the tokens were first seen. At most `top_k` entries are returned.
pub fn extract_trending_keywords(records: &[Value], top_k: usize) -> Vec<KeywordCount> {
    // Index into `counts` by token, so ties can keep first-seen order.
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();

    for record in records.iter().take(MAX_RECORDS) {
        let blob = record_text(record);
        if blob.is_empty() {
            continue;
        }
        for m in TOKEN_RE.find_iter(&blob) {
            let Some(token) = normalize_token(m.as_str()) else {
                continue;
            };
            match index.get(&token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token.clone(), counts.len());
                    counts.push((token, 1));
                }
            }
        }
    }

    // Stable sort: equal counts stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(top_k)
        .map(|(text, value)| KeywordCount { text, value })
        .collect()
}

/// Join a record's text-bearing fields with single spaces.
///
/// Non-object records, and fields that are missing or of the wrong type,
/// contribute nothing.
pub fn record_text(record: &Value) -> String {
    let Some(obj) = record.as_object() else {
        return String::new();
    };

    let mut parts: Vec<String> = Vec::new();

    if let Some(Value::String(content)) = obj.get("content") {
        parts.push(content.clone());
    }

    match obj.get("json_doc") {
        Some(Value::String(doc)) => parts.push(doc.clone()),
        Some(doc @ (Value::Object(_) | Value::Array(_))) => parts.extend(flatten_leaves(doc)),
        _ => {}
    }

    for field in AUX_TEXT_FIELDS {
        if let Some(Value::String(text)) = obj.get(*field) {
            parts.push(text.clone());
        }
    }

    parts.join(" ")
}

/// Apply the token filters in order: numeric check, lowercase, stopword check.
fn normalize_token(raw: &str) -> Option<String> {
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let token = raw.to_lowercase();
    if is_stopword(&token) {
        return None;
    }
    Some(token)
}
