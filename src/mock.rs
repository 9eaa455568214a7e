// Mock panel data for demos and offline work.
//
// Seeded so the same seed always yields the same records: handy for
// screenshots, tests, and running the keyword view without a backend.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use crate::api::models::{DashboardSummary, Kpi, RecentQuery};

const GENDERS: &[&str] = &["남성", "여성"];
const AGE_GROUPS: &[&str] = &["20대", "30대", "40대", "50대", "60대"];
const REGIONS: &[&str] = &["서울", "경기", "부산", "대구", "인천", "광주", "대전"];
const DISTRICTS: &[&str] = &["강남", "마포", "송파", "분당", "해운대", "수성"];
const LIFESTYLES: &[&str] = &[
    "주말마다 캠핑과 등산을 즐김",
    "퇴근 후 헬스장과 러닝",
    "집에서 넷플릭스와 배달음식",
    "카페 투어와 사진 촬영",
    "재테크 공부와 주식 투자",
];
const VALUES: &[&str] = &["환경 보호", "가성비", "건강 관리", "자기 계발", "가족 중심"];
const PETS: &[&str] = &["강아지", "고양이", "없음"];
const OTT: &[&str] = &["넷플릭스", "티빙", "유튜브", "쿠팡플레이"];

const PROMPTS: &[&str] = &[
    "서울 거주 20대 여성 중 캠핑을 즐기는 사람",
    "반려동물을 키우는 30대 직장인",
    "주식 투자 경험이 있는 40대 남성",
    "넷플릭스를 매일 보는 1인 가구",
];

fn pick<'a>(rng: &mut StdRng, items: &'a [&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Generate `count` panel records.
///
/// Every record carries `mb_sn`, demographic fields, a `content` summary, a
/// nested `json_doc`, and the free-text lifestyle/values fields.
pub fn mock_panels(count: usize, seed: u64) -> Vec<Value> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let gender = pick(&mut rng, GENDERS);
            let age_group = pick(&mut rng, AGE_GROUPS);
            let region = pick(&mut rng, REGIONS);
            let district = pick(&mut rng, DISTRICTS);
            let lifestyle = pick(&mut rng, LIFESTYLES);
            let values = pick(&mut rng, VALUES);
            let pet = pick(&mut rng, PETS);
            let ott = pick(&mut rng, OTT);
            let income: u32 = rng.random_range(200..900) * 10;

            json!({
                "mb_sn": format!("w{:06}", 100_000 + i),
                "gender": gender,
                "age_group": age_group,
                "region": region,
                "content": format!("{region} {district} 거주 {age_group} {gender}. {lifestyle}"),
                "json_doc": {
                    "household": { "pet": pet, "income_monthly": income },
                    "media": [ott, "유튜브"],
                    "owns_car": rng.random_bool(0.5),
                },
                "lifestyle": lifestyle,
                "values": values,
            })
        })
        .collect()
}

/// A plausible dashboard: headline KPIs plus a few recent queries.
pub fn mock_dashboard(seed: u64) -> DashboardSummary {
    let mut rng = StdRng::seed_from_u64(seed);

    let kpis = vec![
        Kpi {
            label: "전체 패널".to_string(),
            value: rng.random_range(30_000..60_000) as f64,
            trend: Some(round1(rng.random_range(-5.0..5.0))),
            unit: Some("명".to_string()),
        },
        Kpi {
            label: "오늘 쿼리".to_string(),
            value: rng.random_range(20..300) as f64,
            trend: Some(round1(rng.random_range(-20.0..20.0))),
            unit: Some("건".to_string()),
        },
        Kpi {
            label: "평균 매칭률".to_string(),
            value: round1(rng.random_range(40.0..95.0)),
            trend: Some(round1(rng.random_range(-3.0..3.0))),
            unit: Some("%".to_string()),
        },
    ];

    let recent_queries = PROMPTS
        .iter()
        .enumerate()
        .map(|(i, prompt)| RecentQuery {
            prompt: (*prompt).to_string(),
            result_count: Some(rng.random_range(10..5_000)),
            created_at: Some(format!("2026-01-{:02}T09:00:00Z", 10 + i)),
        })
        .collect();

    DashboardSummary {
        kpis,
        recent_queries,
    }
}

fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
