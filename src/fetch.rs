use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{error, info};

use crate::error::{EtlError, Result};

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
pub const TIMEOUT: Duration = Duration::from_secs(10);

/// Single-shot page downloader. No retries, no caching.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .build()
            .map_err(EtlError::Client)?;
        Ok(Fetcher { client })
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub fn fetch(&self, url: &str) -> Result<String> {
        info!("Fetching {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(|source| EtlError::Fetch {
                url: url.to_string(),
                source,
            });

        match body {
            Ok(html) => {
                info!("Fetched {} bytes from {}", html.len(), url);
                Ok(html)
            }
            Err(e) => {
                error!("{}", e);
                Err(e)
            }
        }
    }
}

// ── Tests ──
