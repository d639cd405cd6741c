/// Progress notifications emitted while a crawl is running.
///
/// The engine pushes these over an unbounded channel so observers (progress
/// bars, TUIs) never block the crawl loop. Counts are running totals at the
/// moment the event was emitted.
#[derive(Debug, Clone)]
pub enum CrawlEvent {
    /// The seed fetch is underway.
    Connecting { url: String },
    /// A page was fetched successfully and added to the discovered list.
    PageDiscovered {
        url: String,
        discovered: usize,
        failed: usize,
    },
    /// A page fetch failed and was skipped; the crawl continues.
    PageSkipped {
        url: String,
        discovered: usize,
        failed: usize,
    },
    /// Terminal summary, sent exactly once per run.
    Finished { discovered: usize, failed: usize },
}
