use std::fmt;
use std::time::Duration;
use reqwest::{Client, StatusCode};
use url::Url;
use wiki_core::{Error, Result, Summary, SummaryModel};
use crate::Config;

/// Summary source backed by the Wikipedia REST page summary endpoint.
pub struct WikipediaModel {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl WikipediaModel {
    pub fn new(config: &Config) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            Error::invalid_argument(format!("Invalid summary URL {}: {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::invalid_argument(format!(
                "Invalid summary URL {}: cannot append a path",
                config.base_url
            )));
        }
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            base_url,
            timeout: config.timeout,
        })
    }

    /// The summary URL for a term, with the term percent-encoded as the
    /// last path segment.
    pub fn summary_url(&self, term: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(term);
        }
        url
    }

    fn upstream_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::UpstreamTimeout(self.timeout)
        } else {
            Error::Http(err)
        }
    }
}

impl fmt::Debug for WikipediaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikipediaModel")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[async_trait::async_trait]
impl SummaryModel for WikipediaModel {
    fn name(&self) -> &str {
        "Wikipedia"
    }

    async fn fetch_summary(&self, term: &str) -> Result<Summary> {
        let url = self.summary_url(term);
        tracing::debug!("Requesting summary from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.upstream_error(e))?;

        match response.status() {
            StatusCode::NOT_FOUND => Err(Error::not_found("Keine Zusammenfassung gefunden")),
            status if !status.is_success() => {
                tracing::warn!("Summary request for '{}' failed with {}", term, status);
                Err(Error::UpstreamStatus(status.as_u16()))
            }
            _ => response
                .json::<Summary>()
                .await
                .map_err(|e| self.upstream_error(e)),
        }
    }
}
