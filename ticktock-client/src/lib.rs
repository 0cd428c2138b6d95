mod api_url;
mod client;
mod error;
pub mod domain;

pub use api_url::ApiUrl;
pub use client::TimesheetClient;
pub use error::FetchError;
