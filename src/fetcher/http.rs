// file: src/fetcher/http.rs
// description: single-page HTTP GET with forced UTF-8 body decoding
// reference: https://docs.rs/reqwest

use crate::config::FetchConfig;
use crate::error::{PipelineError, Result};
use crate::models::RawDocument;
use reqwest::Client;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| PipelineError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// One GET, no retry. The status code is recorded but never rejected.
    pub async fn fetch(&self, url: &str) -> Result<RawDocument> {
        info!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}, analysing body anyway", url, status);
        }

        let bytes = response.bytes().await.map_err(|e| fetch_error(url, e))?;

        debug!("Received {} bytes from {}", bytes.len(), url);

        Ok(RawDocument::from_bytes(url, Some(status.as_u16()), &bytes))
    }

    /// Reads a saved page from disk with the same decoding rules as a fetch.
    pub fn read_file(path: &Path) -> Result<RawDocument> {
        let bytes = std::fs::read(path).map_err(|source| PipelineError::FileOperation {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(RawDocument::from_bytes(path.display().to_string(), None, &bytes))
    }
}

fn fetch_error(url: &str, err: reqwest::Error) -> PipelineError {
    let message = if err.is_timeout() {
        format!("request timed out: {}", err)
    } else {
        err.to_string()
    };

    PipelineError::Fetch {
        url: url.to_string(),
        message,
    }
}
