//! HTTP client for arXiv search pages.

use super::PageSource;
use crate::error::{Result, ScrapeError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, FROM, USER_AGENT};
use reqwest::{Client, StatusCode};
use shared::{ArxivConfig, RequestHeaders};
use std::time::Duration;
use tracing::{debug, warn};

/// arXiv client sending the configured identifying headers
pub struct ArxivClient {
    /// HTTP client
    client: Client,
}

impl ArxivClient {
    /// Create a new client from the arXiv section of the configuration
    pub fn new(config: &ArxivConfig) -> Result<Self> {
        let mut builder = Client::builder().default_headers(identifying_headers(&config.headers)?);

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ScrapeError::connectivity(&config.base_url, e))?;

        Ok(Self { client })
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|_| {
        ScrapeError::InvalidInput(format!("Invalid {} header value: {:?}", name, value))
    })
}

fn identifying_headers(headers: &RequestHeaders) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    map.insert(USER_AGENT, header_value("User-Agent", &headers.user_agent)?);
    map.insert(FROM, header_value("From", &headers.from)?);
    map.insert(
        ACCEPT_LANGUAGE,
        header_value("Accept-Language", &headers.accept_language)?,
    );
    Ok(map)
}

#[async_trait]
impl PageSource for ArxivClient {
    async fn fetch(&self, url: &str) -> Result<String> {
        debug!(url = %url, "Requesting page");

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Request error");
            ScrapeError::connectivity(url, e)
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "Request failed");
            return Err(ScrapeError::connectivity(url, format!("status code {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ScrapeError::connectivity(url, e))?;

        debug!(url = %url, bytes = body.len(), "Page received");
        Ok(body)
    }
}
