use std::sync::Arc;
use std::time::Duration;

use digest_core::DigestDocument;
use url::Url;
use viewer_logging::{viewer_info, viewer_warn};

use crate::fetch::{resolve_data_url, Fetcher};
use crate::{FailureKind, FetchError, LoadError};

/// First attempt plus exactly one retry.
pub const MAX_ATTEMPTS: u32 = 2;

#[derive(Debug, Clone)]
pub struct LoaderSettings {
    /// Relative to the page location.
    pub data_path: String,
    pub retry_delay: Duration,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            data_path: "data/digest.json".to_string(),
            retry_delay: Duration::from_millis(800),
        }
    }
}

pub struct DigestLoader {
    fetcher: Arc<dyn Fetcher>,
    url: Url,
    settings: LoaderSettings,
}

impl DigestLoader {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        page_url: &Url,
        settings: LoaderSettings,
    ) -> Result<Self, FetchError> {
        let url = resolve_data_url(page_url, &settings.data_path)?;
        Ok(Self {
            fetcher,
            url,
            settings,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Fetches and decodes the digest. A failed attempt is retried once after
    /// `retry_delay`; the second failure is returned. Attempts never overlap.
    pub async fn load(&self) -> Result<DigestDocument, LoadError> {
        let mut attempt = 1;
        loop {
            match self.attempt().await {
                Ok(document) => {
                    viewer_info!(
                        "Loaded digest from {} ({} dates, attempt {})",
                        self.url,
                        document.dates.len(),
                        attempt
                    );
                    return Ok(document);
                }
                Err(err) if attempt < MAX_ATTEMPTS => {
                    viewer_warn!(
                        "Digest attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt,
                        MAX_ATTEMPTS,
                        err,
                        self.settings.retry_delay
                    );
                    tokio::time::sleep(self.settings.retry_delay).await;
                    attempt += 1;
                }
                Err(last) => {
                    return Err(LoadError {
                        attempts: attempt,
                        last,
                    })
                }
            }
        }
    }

    async fn attempt(&self) -> Result<DigestDocument, FetchError> {
        let output = self.fetcher.fetch(&self.url).await?;
        DigestDocument::from_slice(&output.bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}
