// HTTP client for the panel backend's `/api` surface.
//
// A thin reqwest wrapper with generic GET/POST-JSON helpers. No retries: a
// failed call surfaces its error to the view that made it.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::models::{
    DashboardSummary, PanelSearchRequest, PanelSearchResponse, SqlSearchRequest,
    SqlSearchResponse,
};
use super::PanelApi;

/// Default API base when `API_BASE_URL` is unset.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// reqwest-backed implementation of [`PanelApi`].
pub struct PanelApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PanelApiClient {
    /// Create a client rooted at `base_url` (the backend's `/api` prefix).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("panelscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/{path}` and deserialize the JSON response.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(url = %url, "API GET request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("API request failed: GET {path}"))?;

        decode(response, path).await
    }

    /// POST a JSON body to `{base}/{path}` and deserialize the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        debug!(url = %url, "API POST request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("API request failed: POST {path}"))?;

        decode(response, path).await
    }

    /// `{base}/panels/{mb_sn}` with the ID percent-encoded as one segment.
    fn panel_url(&self, mb_sn: &str) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/panels", self.base_url))
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("API base URL cannot hold a path: {}", self.base_url))?
            .push(mb_sn);
        Ok(url)
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response, path: &str) -> Result<T> {
    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("API {path} returned {status}: {body}");
    }

    response
        .json::<T>()
        .await
        .with_context(|| format!("Failed to deserialize {path} response"))
}

#[async_trait]
impl PanelApi for PanelApiClient {
    async fn sql_search(&self, prompt: &str, model: Option<&str>) -> Result<SqlSearchResponse> {
        let body = SqlSearchRequest {
            prompt: prompt.to_string(),
            model: model.map(str::to_string),
        };
        self.post_json("llm/sql_search", &body).await
    }

    async fn search_panels(&self, query: &str) -> Result<PanelSearchResponse> {
        let body = PanelSearchRequest {
            query: query.to_string(),
        };
        self.post_json("panels/search", &body).await
    }

    async fn dashboard(&self) -> Result<DashboardSummary> {
        self.get_json("dashboard").await
    }

    async fn panel_detail(&self, mb_sn: &str) -> Result<Value> {
        let url = self.panel_url(mb_sn)?;
        debug!(url = %url, "API GET request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("API request failed: GET panels/{mb_sn}"))?;

        decode(response, &format!("panels/{mb_sn}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = PanelApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
    }

    #[test]
    fn test_panel_url_encodes_id() {
        let client = PanelApiClient::new("http://localhost:8000/api").unwrap();
        let url = client.panel_url("w 123/4").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/panels/w%20123%2F4");
    }
}
