//! Page transport: one GET per page, decoded from ISO-8859-1.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};
use vurdering_core::ScraperConfig;

use crate::error::ScraperError;
use crate::retry::retry_with_backoff;

/// Fetches the text of one results page.
///
/// Each call resolves exactly once, with either the decoded page or the
/// first error the transport reported.
pub trait PageSource {
    fn fetch_page(&self, url: &Url) -> impl Future<Output = Result<String, ScraperError>> + Send;
}

/// Decodes ISO-8859-1 bytes byte-for-byte into a UTF-8 `String`.
///
/// The registry declares Latin-1, but some messages are emitted as UTF-8.
/// Those come out double-decoded (`"VÃ¦lg"` for `"Vælg"`) and are kept as-is.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

/// [`PageSource`] backed by `reqwest`.
///
/// Timeouts and transient-error retries live here; the driver imposes none.
pub struct HttpPageSource {
    client: Client,
    /// Maximum number of retry attempts after the first failure.
    max_retries: u32,
    backoff_base_ms: u64,
}

impl HttpPageSource {
    /// Creates a source with the configured timeouts, `User-Agent` and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: &ScraperConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .user_agent(&config.user_agent)
            .build()?;
        Ok(Self {
            client,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        })
    }

    async fn fetch_once(&self, url: &Url) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url.clone())
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "da-DK,da;q=0.9")
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(ScraperError::RateLimited {
                url: url.to_string(),
                retry_after_secs,
            });
        }

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!(url = %url, bytes = body.len(), "fetched results page");
        Ok(decode_latin1(&body))
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, url: &Url) -> Result<String, ScraperError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || self.fetch_once(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_latin1_letters() {
        // "Ikke flere ejendomme på vejen" with å as 0xE5.
        let bytes = b"Ikke flere ejendomme p\xe5 vejen";
        assert_eq!(decode_latin1(bytes), "Ikke flere ejendomme på vejen");
    }

    #[test]
    fn utf8_input_is_double_decoded() {
        let bytes = "Vælg et vejnavn".as_bytes();
        assert_eq!(decode_latin1(bytes), "VÃ¦lg et vejnavn");
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_latin1(b"<html></html>"), "<html></html>");
    }

    #[test]
    fn builds_from_default_config() {
        assert!(HttpPageSource::new(&ScraperConfig::default()).is_ok());
    }
}
