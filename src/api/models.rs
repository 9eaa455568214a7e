// Serde types for the backend's `/api` endpoints.
//
// Optional fields are tolerated everywhere: the backend omits them freely
// (e.g. `rows` is absent when the LLM answered without calling the SQL tool).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/llm/sql_search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqlSearchRequest {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Response of `POST /api/llm/sql_search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SqlSearchResponse {
    /// Natural-language answer text
    #[serde(default)]
    pub answer: String,
    /// Result rows when the SQL tool ran
    #[serde(default)]
    pub rows: Option<Vec<Value>>,
    /// Total matching rows, which may exceed `rows.len()`
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub tool_called: Option<bool>,
}

impl SqlSearchResponse {
    /// Rows as a slice, empty when the backend returned none.
    pub fn rows(&self) -> &[Value] {
        self.rows.as_deref().unwrap_or(&[])
    }
}

/// Body of `POST /api/panels/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSearchRequest {
    pub query: String,
}

/// One extracted search condition, rendered as a tag (e.g. "서울", "20대").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    /// Condition category (region, age, gender, ...)
    #[serde(default)]
    pub kind: Option<String>,
}

/// Response of `POST /api/panels/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PanelSearchResponse {
    #[serde(default)]
    pub chips: Vec<Chip>,
    #[serde(default)]
    pub filters: Map<String, Value>,
    #[serde(default)]
    pub estimated_count: Option<u64>,
    #[serde(default)]
    pub panels: Vec<Value>,
}

/// A dashboard summary metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub label: String,
    pub value: f64,
    /// Change versus the previous period, as a percentage
    #[serde(default)]
    pub trend: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

/// A previously run query shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentQuery {
    pub prompt: String,
    #[serde(default)]
    pub result_count: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /api/dashboard`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub kpis: Vec<Kpi>,
    #[serde(default)]
    pub recent_queries: Vec<RecentQuery>,
}
