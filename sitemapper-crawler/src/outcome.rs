use serde::{Deserialize, Serialize};

/// How a crawl run ended. Fatal errors (bad seed URL, unreachable seed) are
/// not outcomes; `Crawler::crawl` returns those as `Err(CrawlError)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrawlStatus {
    /// The queue drained or the page budget was reached.
    Completed,
    /// The caller cancelled. Partial results remain valid.
    Stopped,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlOutcome {
    /// Successfully fetched pages, normalized, in discovery order.
    pub discovered: Vec<String>,
    /// Pages that failed on every relay and were skipped.
    pub failed_count: usize,
    pub status: CrawlStatus,
}

impl CrawlOutcome {
    pub fn is_stopped(&self) -> bool {
        self.status == CrawlStatus::Stopped
    }
}
