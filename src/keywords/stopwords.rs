// Stopword list for trending keyword extraction.
//
// Korean particles and function words, generic survey/demographic nouns that
// appear in nearly every panel record, JSON literal noise from flattened
// documents, and a handful of English function words. All entries are
// lowercase; tokens are lowercased before lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

const STOPWORD_LIST: &[&str] = &[
    // Particles, conjunctions, and auxiliary endings
    "그리고", "그러나", "하지만", "그래서", "또는", "또한", "에서", "으로", "에게",
    "까지", "부터", "보다", "처럼", "하고", "이고", "이며", "에는", "에도",
    "있음", "없음", "있는", "없는", "있다", "없다", "하는", "하다", "한다", "했다",
    "합니다", "입니다", "있습니다", "없습니다", "됩니다", "되는", "된다", "같은",
    "대한", "위한", "통해", "관련", "이런", "저런", "그런", "이상", "이하", "미만",
    // Frequency and degree words common in survey answers
    "매우", "조금", "약간", "전혀", "보통", "주로", "가끔", "자주", "항상", "거의",
    "정도", "편이다", "그렇다", "아니다",
    // Generic survey vocabulary
    "응답", "응답자", "설문", "조사", "문항", "질문", "답변", "해당", "기타", "모름",
    "무응답", "여부", "선택", "항목", "경험", "사용", "이용", "구매", "브랜드", "제품",
    "서비스", "패널", "데이터", "정보",
    // Generic demographic vocabulary
    "남성", "여성", "남자", "여자", "성별", "연령", "나이", "연령대", "지역", "거주",
    "거주지", "직업", "소득", "학력", "결혼", "가구", "가족",
    // Flattened JSON literals
    "true", "false", "null", "none", "nan", "undefined",
    // English function words
    "the", "and", "or", "of", "to", "in", "is", "are", "for", "with", "on", "at",
    "by", "an", "be", "it", "this", "that", "yes", "no", "na",
];

/// Process-wide stopword set, built on first use and never mutated.
pub static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORD_LIST.iter().copied().collect());

/// True if `token` (already lowercased) should be dropped.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
