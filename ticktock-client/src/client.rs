use serde::de::DeserializeOwned;

use crate::domain::{WeekData, WeekSummary};
use crate::{ApiUrl, FetchError};

/// HTTP client for the timesheet backend. Read-only: the backend
/// currently exposes no write endpoints, so local add/delete
/// mutations never reach the server.
#[derive(Debug, Clone)]
pub struct TimesheetClient {
    client: reqwest::Client,
    base_url: ApiUrl,
}

impl TimesheetClient {
    pub fn new(base_url: ApiUrl) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: ApiUrl,
        call_name: &str,
    ) -> Result<T, FetchError> {
        tracing::debug!(url = url.as_ref(), "calling {}", call_name);

        let resp = self
            .client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            tracing::error!(%status, "{} failed", call_name);
            return Err(FetchError::Status(status.as_u16()));
        }

        resp.json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// `GET /api/timesheets` — the week list.
    pub async fn fetch_week_summaries(&self) -> Result<Vec<WeekSummary>, FetchError> {
        self.fetch(
            self.base_url.append_path("/api/timesheets"),
            "GET /api/timesheets",
        )
        .await
    }

    /// `GET /api/timesheets/{week}` — one week's timesheet.
    pub async fn fetch_week(&self, week: &str) -> Result<WeekData, FetchError> {
        self.fetch(
            self.base_url
                .append_path(&format!("/api/timesheets/{}", week)),
            "GET /api/timesheets/{week}",
        )
        .await
    }
}
