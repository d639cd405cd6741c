use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("invalid start URL '{0}': must be an absolute http:// or https:// URL")]
    InvalidStartUrl(String),

    #[error("could not fetch {url}: {reason}")]
    StartUnreachable { url: String, reason: String },

    #[error("relay {relay} failed: {reason}")]
    RelayFailed { relay: String, reason: String },

    #[error("all relays failed, last error: {0}")]
    RelayExhausted(String),

    /// Not a real failure. The engine turns this into a `Stopped` outcome;
    /// it only exists so a cancelled fetch is distinguishable from a dead relay.
    #[error("cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, CrawlError>;
