use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::error::{CrawlError, Result};

/// A third-party pass-through endpoint used to retrieve pages the caller
/// cannot reach directly. The `{target}` placeholder in the template is
/// replaced with the percent-encoded page URL.
#[derive(Debug, Clone)]
pub struct Relay {
    pub name: String,
    pub template: String,
}

impl Relay {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    fn forward_url(&self, target: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
        self.template.replace("{target}", &encoded)
    }
}

/// The production relay chain, tried in order. None of these carry an SLA;
/// callers may swap in their own list at any time.
pub fn default_relays() -> Vec<Relay> {
    vec![
        Relay::new("corsproxy", "https://corsproxy.io/?{target}"),
        Relay::new("allorigins", "https://api.allorigins.win/raw?url={target}"),
    ]
}

/// Fetches page bodies through a relay fallback chain. The first relay that
/// answers with a 2xx wins; a failing relay only costs us the next attempt.
pub struct ProxyFetcher {
    client: Client,
    relays: Vec<Relay>,
}

impl ProxyFetcher {
    pub fn new(relays: Vec<Relay>) -> Self {
        Self::with_timeout(relays, 15)
    }

    pub fn with_timeout(relays: Vec<Relay>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Sitemapper/0.1 (+https://github.com/sitemapper-tools/sitemapper)")
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, relays }
    }

    pub fn relays(&self) -> &[Relay] {
        &self.relays
    }

    /// Fetch `target` through the relay chain and return the body text.
    ///
    /// Relays are tried in configured order; transport errors and non-2xx
    /// statuses both count as a relay failure and move on to the next one.
    /// Only when every relay has failed does this return `RelayExhausted`,
    /// carrying the last underlying failure's message. Cancellation short
    /// circuits the chain and is never reported as a relay failure.
    pub async fn fetch(&self, target: &str, cancel: &CancellationToken) -> Result<String> {
        let mut last_error = String::from("no relays configured");

        for relay in &self.relays {
            if cancel.is_cancelled() {
                return Err(CrawlError::Cancelled);
            }

            debug!("fetching {} via relay {}", target, relay.name);
            match self.try_relay(relay, target, cancel).await {
                Ok(body) => return Ok(body),
                Err(CrawlError::Cancelled) => return Err(CrawlError::Cancelled),
                Err(err) => {
                    warn!("relay {} failed for {}: {}", relay.name, target, err);
                    last_error = err.to_string();
                }
            }
        }

        Err(CrawlError::RelayExhausted(last_error))
    }

    async fn try_relay(
        &self,
        relay: &Relay,
        target: &str,
        cancel: &CancellationToken,
    ) -> Result<String> {
        let forward = relay.forward_url(target);

        let attempt = async {
            let response =
                self.client
                    .get(&forward)
                    .send()
                    .await
                    .map_err(|e| CrawlError::RelayFailed {
                        relay: relay.name.clone(),
                        reason: e.to_string(),
                    })?;

            if !response.status().is_success() {
                return Err(CrawlError::RelayFailed {
                    relay: relay.name.clone(),
                    reason: format!("HTTP {}", response.status().as_u16()),
                });
            }

            response.text().await.map_err(|e| CrawlError::RelayFailed {
                relay: relay.name.clone(),
                reason: e.to_string(),
            })
        };

        tokio::select! {
            _ = cancel.cancelled() => Err(CrawlError::Cancelled),
            result = attempt => result,
        }
    }
}
