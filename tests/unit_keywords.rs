// Unit tests for trending keyword extraction.
//
// Covers the concrete cases the dashboard relies on, the record cap, and
// field-gathering edge cases. Property-style invariants live in prop_keywords.rs.

use serde_json::{json, Value};

use panelscope::keywords::frequency::record_text;
use panelscope::keywords::stopwords::is_stopword;
use panelscope::keywords::traits::KeywordExtractor;
use panelscope::keywords::{
    extract_trending_keywords, FrequencyExtractor, KeywordCount, DEFAULT_TOP_K, MAX_RECORDS,
};

fn kw(text: &str, value: u32) -> KeywordCount {
    KeywordCount {
        text: text.to_string(),
        value,
    }
}

// ============================================================
// Concrete cases
// ============================================================

#[test]
fn repeated_districts_ranked_by_count() {
    let records = vec![json!({ "content": "서울 서울 강남 강남 강남" })];
    assert_eq!(
        extract_trending_keywords(&records, 2),
        vec![kw("강남", 3), kw("서울", 2)]
    );
}

#[test]
fn json_doc_object_lowercased_and_numbers_dropped() {
    let records = vec![json!({ "json_doc": { "a": "Brand brand", "b": 123 } })];
    assert_eq!(
        extract_trending_keywords(&records, DEFAULT_TOP_K),
        vec![kw("brand", 2)]
    );
}

#[test]
fn korean_brand_and_product_are_excluded_even_when_frequent() {
    let records = vec![json!({ "content": "브랜드 브랜드 브랜드 제품 제품 커피" })];
    assert_eq!(
        extract_trending_keywords(&records, DEFAULT_TOP_K),
        vec![kw("커피", 1)]
    );
    assert!(is_stopword("브랜드"));
    assert!(is_stopword("제품"));
}

// ============================================================
// Boundaries
// ============================================================

#[test]
fn empty_input_gives_empty_output() {
    assert!(extract_trending_keywords(&[], DEFAULT_TOP_K).is_empty());
}

#[test]
fn no_qualifying_tokens_gives_empty_output() {
    let records = vec![
        json!({ "content": "a b c 1 22 333 !!" }),
        json!({ "content": "그리고 응답 설문" }),
        json!({}),
    ];
    assert!(extract_trending_keywords(&records, DEFAULT_TOP_K).is_empty());
}

#[test]
fn top_k_zero_gives_empty_output() {
    let records = vec![json!({ "content": "서울 강남" })];
    assert!(extract_trending_keywords(&records, 0).is_empty());
}

#[test]
fn records_past_the_cap_are_ignored() {
    let mut records: Vec<Value> = (0..MAX_RECORDS)
        .map(|_| json!({ "content": "캠핑" }))
        .collect();
    // Everything after index 999 is a different, far more frequent word.
    for _ in 0..50 {
        records.push(json!({ "content": "골프 골프 골프 골프 골프" }));
    }

    let ranked = extract_trending_keywords(&records, DEFAULT_TOP_K);
    assert_eq!(ranked, vec![kw("캠핑", MAX_RECORDS as u32)]);
}

#[test]
fn record_at_last_index_still_counts() {
    let mut records: Vec<Value> = (0..MAX_RECORDS - 1).map(|_| json!({})).collect();
    records.push(json!({ "content": "마지막" }));
    records.push(json!({ "content": "초과" }));

    let ranked = extract_trending_keywords(&records, DEFAULT_TOP_K);
    assert_eq!(ranked, vec![kw("마지막", 1)]);
}

// ============================================================
// Field gathering
// ============================================================

#[test]
fn record_text_joins_fields_in_order() {
    let record = json!({
        "content": "본문",
        "json_doc": { "x": ["하나", 2, false] },
        "lifestyle": "러닝",
        "values": "환경",
        "unrelated": "무시",
    });
    assert_eq!(record_text(&record), "본문 하나 2 false 러닝 환경");
}

#[test]
fn wrong_typed_fields_are_skipped() {
    let record = json!({
        "content": { "nested": "not read as content" },
        "json_doc": 17,
        "lifestyle": null,
        "habits": 3.5,
    });
    assert_eq!(record_text(&record), "");
}

#[test]
fn separators_split_tokens() {
    let records = vec![json!({ "content": "캠핑/등산,여행.캠핑-등산" })];
    assert_eq!(
        extract_trending_keywords(&records, DEFAULT_TOP_K),
        vec![kw("캠핑", 2), kw("등산", 2), kw("여행", 1)]
    );
}

#[test]
fn mixed_case_tokens_merge() {
    let records = vec![json!({ "content": "Netflix NETFLIX netflix 넷플릭스" })];
    assert_eq!(
        extract_trending_keywords(&records, DEFAULT_TOP_K),
        vec![kw("netflix", 3), kw("넷플릭스", 1)]
    );
}

#[test]
fn extractor_trait_matches_free_function() {
    let records = vec![
        json!({ "content": "서울 강남 서울", "lifestyle": "캠핑" }),
        json!({ "json_doc": "캠핑 여행" }),
    ];
    let extractor = FrequencyExtractor { top_k: 3 };
    assert_eq!(
        extractor.extract(&records),
        extract_trending_keywords(&records, 3)
    );
}

#[test]
fn output_serializes_as_text_value_pairs() {
    let json = serde_json::to_value(vec![kw("강남", 3)]).unwrap();
    assert_eq!(json, json!([{ "text": "강남", "value": 3 }]));
}
