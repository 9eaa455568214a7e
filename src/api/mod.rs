// Backend API access: request/response shapes and the reqwest-backed client.
//
// The backend owns query translation, matching, and storage. Everything here
// is a typed passthrough to its `/api` surface.

pub mod client;
pub mod models;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use models::{DashboardSummary, PanelSearchResponse, SqlSearchResponse};

/// Operations the views need from the backend.
///
/// `PanelApiClient` is the HTTP implementation; tests substitute in-memory fakes.
#[async_trait]
pub trait PanelApi: Send + Sync {
    /// Natural-language prompt answered by the backend's SQL tool.
    async fn sql_search(&self, prompt: &str, model: Option<&str>) -> Result<SqlSearchResponse>;

    /// Free-text panel search: extracted chips, filters, and an estimated count.
    async fn search_panels(&self, query: &str) -> Result<PanelSearchResponse>;

    /// KPIs and recent queries for the dashboard landing view.
    async fn dashboard(&self) -> Result<DashboardSummary>;

    /// Full record for one panel, keyed by `mb_sn`.
    async fn panel_detail(&self, mb_sn: &str) -> Result<Value>;
}
