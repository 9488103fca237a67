use std::error::Error as StdError;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::QueryWindow;

pub mod features;

pub use features::{parse_features, StructureError};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to build http client: {0}")]
    Client(String),
    #[error("{0}")]
    Transport(String),
    #[error("catalog returned status {0}")]
    HttpStatus(u16),
}

/// Client for the FDSN event query endpoint.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        Self::new(config.api_url.clone(), config.timeout)
    }

    /// Full query URL for a window.
    pub fn query_url(&self, window: &QueryWindow) -> String {
        format!(
            "{}?format=geojson&starttime={}&endtime={}",
            self.base_url,
            window.start_param(),
            window.end_param()
        )
    }

    /// Issue one GET for the window and return the raw body.
    ///
    /// Only a 200 counts as success; nothing is retried.
    pub async fn fetch(&self, window: &QueryWindow) -> Result<String, CatalogError> {
        let url = self.query_url(window);
        info!("Fetching earthquakes from {} to {}", window.start, window.end);

        let resp = self.http.get(&url).send().await.map_err(|e| {
            warn!("Catalog request failed: {}", e);
            CatalogError::Transport(error_chain(&e))
        })?;

        let status = resp.status();
        info!("Received response with status: {}", status);

        if status != StatusCode::OK {
            warn!("Catalog returned error status {}", status);
            return Err(CatalogError::HttpStatus(status.as_u16()));
        }

        resp.text().await.map_err(|e| {
            warn!("Failed to read catalog body: {}", e);
            CatalogError::Transport(error_chain(&e))
        })
    }
}

/// Join an error with all of its sources, outermost first.
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // Some layers repeat their cause's text verbatim.
        if !message.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
