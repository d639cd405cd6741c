pub mod crawler;
pub mod error;
pub mod event;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod outcome;

pub use crawler::Crawler;
pub use error::CrawlError;
pub use event::CrawlEvent;
pub use extract::extract_internal_links;
pub use fetch::{ProxyFetcher, Relay, default_relays};
pub use normalize::normalize_url;
pub use outcome::{CrawlOutcome, CrawlStatus};
