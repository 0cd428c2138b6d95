use ticktock_client::domain::{WeekData, WeekSummary};
use ticktock_client::{ApiUrl, FetchError, TimesheetClient};

use crate::config::TickConfig;
use crate::dev_backend::DevBackend;

/// The UI's only seam to the outside world. Every read goes through
/// here; if the backend ever grows write endpoints for the local
/// add/delete mutations, they land here without touching the views.
#[derive(Debug, Clone)]
pub struct Api {
    client: TimesheetClient,
    dev_backend: Option<DevBackend>,
}

impl Api {
    pub fn remote(config: &TickConfig) -> Self {
        Self {
            client: TimesheetClient::new(ApiUrl::new(&config.api_url)),
            dev_backend: None,
        }
    }

    pub fn dev() -> Self {
        Self {
            client: TimesheetClient::new(ApiUrl::new("http://localhost")),
            dev_backend: Some(DevBackend::new()),
        }
    }

    pub async fn week_summaries(&self) -> Result<Vec<WeekSummary>, FetchError> {
        if let Some(dev) = &self.dev_backend {
            return Ok(dev.week_summaries());
        }
        self.client.fetch_week_summaries().await
    }

    pub async fn week(&self, week: &str) -> Result<WeekData, FetchError> {
        if let Some(dev) = &self.dev_backend {
            return dev.week(week);
        }
        self.client.fetch_week(week).await
    }
}
