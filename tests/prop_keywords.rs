// Property-based tests for trending keyword extraction.
//
// Validates:
// 1. Output length <= top_k and <= distinct qualifying tokens
// 2. Output sorted by non-increasing count
// 3. No stopword, purely numeric, or sub-2-char token is ever emitted
// 4. Running twice yields identical output
// 5. Every count equals an independent recount, and counts sum to at most
//    the number of token matches in the scanned text
// 6. Records past the cap never change the result

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use regex_lite::Regex;
use serde_json::{json, Value};

use panelscope::keywords::stopwords::is_stopword;
use panelscope::keywords::frequency::record_text;
use panelscope::keywords::{extract_trending_keywords, MAX_RECORDS};

// =============================================================================
// Strategies
// =============================================================================

/// Words mixing content words, stopwords, numbers, and single characters.
fn arb_word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("서울".to_string()),
        Just("강남".to_string()),
        Just("캠핑".to_string()),
        Just("Brand".to_string()),
        Just("brand".to_string()),
        Just("브랜드".to_string()),
        Just("제품".to_string()),
        Just("응답".to_string()),
        Just("20대".to_string()),
        Just("2024".to_string()),
        Just("x".to_string()),
        "[a-zA-Z]{1,6}",
        "[가-힣]{1,3}",
        "[0-9]{1,4}",
    ]
}

fn arb_text() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(arb_word(), 0..12),
        prop::sample::select(vec![" ", ", ", "/", ".", "  "]),
    )
        .prop_map(|(words, sep)| words.join(sep))
}

/// A record with any subset of the text-bearing fields, some wrong-typed.
fn arb_record() -> impl Strategy<Value = Value> {
    (
        prop::option::of(arb_text()),
        prop::option::of(arb_text()),
        prop::option::of(arb_text()),
        any::<bool>(),
        any::<i32>(),
    )
        .prop_map(|(content, doc, lifestyle, doc_as_object, n)| {
            let mut record = serde_json::Map::new();
            if let Some(content) = content {
                record.insert("content".to_string(), json!(content));
            }
            if let Some(doc) = doc {
                let value = if doc_as_object {
                    json!({ "text": doc, "n": n, "flags": [true, { "deep": "캠핑" }] })
                } else {
                    json!(doc)
                };
                record.insert("json_doc".to_string(), value);
            }
            match lifestyle {
                Some(text) => record.insert("lifestyle".to_string(), json!(text)),
                None => record.insert("lifestyle".to_string(), json!(n)),
            };
            Value::Object(record)
        })
}

fn arb_records() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(arb_record(), 0..30)
}

/// Qualifying token counts and the raw match total, rebuilt from the record
/// text without going through the extractor.
fn recount(records: &[Value]) -> (HashMap<String, u32>, usize) {
    let re = Regex::new(r"[가-힣a-zA-Z0-9]{2,}").unwrap();
    let mut counts = HashMap::new();
    let mut matches = 0;

    for record in records.iter().take(MAX_RECORDS) {
        let text = record_text(record);
        for m in re.find_iter(&text) {
            matches += 1;
            let raw = m.as_str();
            if raw.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let token = raw.to_lowercase();
            if is_stopword(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0u32) += 1;
        }
    }
    (counts, matches)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn output_bounded_by_top_k_and_distinct_tokens(records in arb_records(), top_k in 0usize..40) {
        let ranked = extract_trending_keywords(&records, top_k);
        prop_assert!(ranked.len() <= top_k);

        let distinct: HashSet<&str> = ranked.iter().map(|k| k.text.as_str()).collect();
        prop_assert_eq!(distinct.len(), ranked.len(), "tokens must be unique");
    }

    #[test]
    fn counts_match_independent_recount(records in arb_records(), top_k in 0usize..40) {
        let ranked = extract_trending_keywords(&records, top_k);
        let (distinct, matches) = recount(&records);

        prop_assert!(ranked.len() <= distinct.len());
        prop_assert_eq!(ranked.len(), top_k.min(distinct.len()));
        for keyword in &ranked {
            prop_assert_eq!(Some(&keyword.value), distinct.get(&keyword.text), "count for {}", keyword.text);
        }
        let total: usize = ranked.iter().map(|k| k.value as usize).sum();
        prop_assert!(total <= matches);
    }

    #[test]
    fn output_sorted_non_increasing(records in arb_records()) {
        let ranked = extract_trending_keywords(&records, 100);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn emitted_tokens_are_qualifying(records in arb_records()) {
        for keyword in extract_trending_keywords(&records, 100) {
            prop_assert!(keyword.text.chars().count() >= 2);
            prop_assert!(!keyword.text.chars().all(|c| c.is_ascii_digit()));
            prop_assert!(!is_stopword(&keyword.text));
            prop_assert_eq!(keyword.text.clone(), keyword.text.to_lowercase());
            prop_assert!(keyword.value >= 1);
        }
    }

    #[test]
    fn extraction_is_idempotent(records in arb_records(), top_k in 0usize..40) {
        let first = extract_trending_keywords(&records, top_k);
        let second = extract_trending_keywords(&records, top_k);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn larger_top_k_extends_smaller(records in arb_records(), k in 0usize..20) {
        let small = extract_trending_keywords(&records, k);
        let large = extract_trending_keywords(&records, k + 10);
        prop_assert_eq!(&large[..small.len()], &small[..]);
    }

    #[test]
    fn records_past_cap_do_not_matter(tail in arb_records()) {
        let base: Vec<Value> = (0..MAX_RECORDS)
            .map(|i| json!({ "content": if i % 2 == 0 { "서울 강남" } else { "캠핑" } }))
            .collect();
        let expected = extract_trending_keywords(&base, 20);

        let mut extended = base.clone();
        extended.extend(tail);
        prop_assert_eq!(extract_trending_keywords(&extended, 20), expected);
    }
}
