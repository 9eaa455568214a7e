// Per-view request state: idle -> loading -> success | error.
//
// Each view owns one ViewState. While a request is in flight the trigger is
// disabled (`begin` refuses), so a view never has two overlapping requests.
// Failures are terminal for that request: no retry, no partial results.

use anyhow::Result;
use tracing::warn;

/// The four states a fetch-and-render view moves through.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Enter `Loading`. Returns false (and changes nothing) if a request is
    /// already pending.
    pub fn begin(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        *self = ViewState::Loading;
        true
    }

    /// Settle a pending request with its outcome.
    ///
    /// Ignored unless the view is `Loading`, so a stray completion cannot
    /// overwrite a settled state.
    pub fn finish(&mut self, outcome: Result<T>) {
        if !self.is_loading() {
            warn!("Ignoring completion for a view with no pending request");
            return;
        }
        *self = match outcome {
            Ok(value) => ViewState::Success(value),
            Err(e) => ViewState::Error(format!("{e:#}")),
        };
    }

    /// Back to `Idle`, dropping any result or error.
    pub fn reset(&mut self) {
        *self = ViewState::Idle;
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Consume a settled view: its data, or its error message as an error.
    pub fn into_result(self) -> Result<T> {
        match self {
            ViewState::Success(value) => Ok(value),
            ViewState::Error(message) => Err(anyhow::anyhow!(message)),
            ViewState::Idle | ViewState::Loading => {
                Err(anyhow::anyhow!("request has not completed"))
            }
        }
    }
}

/// Run one request through `state`: begin, await, settle.
///
/// Returns false without calling `fetch` when a request is already pending.
pub async fn run_request<T, F, Fut>(state: &mut ViewState<T>, fetch: F) -> bool
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = Result<T>>,
{
    if !state.begin() {
        return false;
    }
    let outcome = fetch().await;
    state.finish(outcome);
    true
}
