//! Blocking HTTP client for the QuickBase page API.

use crate::config::DeployConfig;
use crate::domain::constants::{ACTION_ADD_REPLACE_PAGE, QUICKBASE_ACTION_HEADER};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

/// One request may hold the run for at most this long before it counts as
/// that file's transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and body of one page call, kept whole for reporting.
#[derive(Debug)]
pub struct PageResponse {
    pub status: StatusCode,
    pub body: String,
}

pub struct QuickbaseClient {
    http: Client,
    endpoint: String,
}

impl QuickbaseClient {
    pub fn new(config: &DeployConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint_url(),
        })
    }

    /// POSTs one add-or-replace payload.
    ///
    /// Transport failures come back as errors; any HTTP status, success or
    /// not, comes back as a [`PageResponse`].
    pub fn add_replace_page(&self, payload: String) -> Result<PageResponse, reqwest::Error> {
        log::debug!("POST {} ({} bytes)", self.endpoint, payload.len());
        let response = self
            .http
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, "application/xml")
            .header(QUICKBASE_ACTION_HEADER, ACTION_ADD_REPLACE_PAGE)
            .body(payload)
            .send()?;
        let status = response.status();
        let body = response.text()?;
        log::debug!("{} answered {} ({} bytes)", self.endpoint, status, body.len());
        Ok(PageResponse { status, body })
    }
}
