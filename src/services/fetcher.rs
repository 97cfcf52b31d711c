// src/services/fetcher.rs

//! Feed fetcher.
//!
//! Performs one GET per call and hands back the body text. Every failure is
//! logged here and returned as an [`AppError`]; nothing panics past this
//! boundary.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::FeedConfig;

/// Anything that can produce raw feed text for a URL.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the body at `url` as text.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP implementation of [`FeedSource`].
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    client: Client,
}

impl FeedFetcher {
    /// Create a fetcher with the configured user agent and timeouts.
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;

        Ok(Self { client })
    }

    /// Parse and check a feed URL.
    pub fn parse_url(raw: &str) -> Result<Url> {
        let url = Url::parse(raw)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(AppError::UnsupportedScheme(other.to_string())),
        }
    }

    async fn get_text(&self, url: Url) -> Result<String> {
        let response = self.client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl FeedSource for FeedFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let parsed = Self::parse_url(url).inspect_err(|e| {
            log::error!("Error with creating URL {url:?}: {e}");
        })?;

        log::debug!("Requesting {parsed}");
        let body = self.get_text(parsed).await.inspect_err(|e| match e {
            AppError::Status { status, .. } => log::error!("Error response code: {status}"),
            _ => log::error!("Problem retrieving the earthquake JSON results: {e}"),
        })?;

        log::debug!("Received {} bytes from {url}", body.len());
        Ok(body)
    }
}
