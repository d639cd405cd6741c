use futures::future::join_all;
use std::collections::{HashSet, VecDeque};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{CrawlError, Result};
use crate::event::CrawlEvent;
use crate::extract::extract_internal_links;
use crate::fetch::{ProxyFetcher, Relay, default_relays};
use crate::normalize::normalize_url;
use crate::outcome::{CrawlOutcome, CrawlStatus};

const DEFAULT_MAX_PAGES: usize = 50;
const DEFAULT_MAX_DEPTH: usize = 3;

/// How many fetches run concurrently within one batch. Keeps pressure off
/// both the target site and the relays.
const DEFAULT_BATCH_SIZE: usize = 3;

/// Safety valve: stop enqueueing once queued + discovered pages reach
/// `max_pages * headroom`, so a link-dense site cannot grow the queue
/// without bound.
const DEFAULT_QUEUE_HEADROOM: usize = 2;

/// A pending page and its link distance from the seed.
#[derive(Debug, Clone)]
struct CrawlTarget {
    url: String,
    depth: usize,
}

/// Breadth-first crawler over a site's internal link graph.
///
/// Single-shot: each call to [`crawl`](Crawler::crawl) is an independent run
/// with fresh state. All crawl state (visited set, queue, discovered list) is
/// owned by the run's control loop and only mutated between batches, so the
/// overlapping in-flight fetches never race on it.
pub struct Crawler {
    fetcher: ProxyFetcher,
    max_pages: usize,
    max_depth: Option<usize>,
    batch_size: usize,
    queue_headroom: usize,
    events: Option<UnboundedSender<CrawlEvent>>,
}

impl Crawler {
    pub fn new() -> Self {
        Self {
            fetcher: ProxyFetcher::new(default_relays()),
            max_pages: DEFAULT_MAX_PAGES,
            max_depth: Some(DEFAULT_MAX_DEPTH),
            batch_size: DEFAULT_BATCH_SIZE,
            queue_headroom: DEFAULT_QUEUE_HEADROOM,
            events: None,
        }
    }

    pub fn with_relays(mut self, relays: Vec<Relay>) -> Self {
        self.fetcher = ProxyFetcher::new(relays);
        self
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages.max(1);
        self
    }

    /// `None` means unbounded depth.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_queue_headroom(mut self, headroom: usize) -> Self {
        self.queue_headroom = headroom.max(1);
        self
    }

    /// Attach a progress channel. Events are fire-and-forget; a dropped
    /// receiver never stalls or fails the crawl.
    pub fn with_events(mut self, sender: UnboundedSender<CrawlEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    fn emit(&self, event: CrawlEvent) {
        if let Some(sender) = &self.events {
            let _ = sender.send(event);
        }
    }

    /// Run one crawl from `start_url` until the queue drains, the page budget
    /// is reached, or `cancel` fires.
    ///
    /// Only two failures are fatal: a start URL that is not absolute http(s),
    /// and a seed fetch that fails on every relay. Everything after the seed
    /// is skip-and-continue. Cancellation is not an error; it yields an
    /// `Ok` outcome with `CrawlStatus::Stopped` and whatever was discovered.
    pub async fn crawl(&self, start_url: &str, cancel: CancellationToken) -> Result<CrawlOutcome> {
        let start = normalize_url(start_url.trim());
        let parsed =
            Url::parse(&start).map_err(|_| CrawlError::InvalidStartUrl(start.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CrawlError::InvalidStartUrl(start));
        }

        info!(
            "starting crawl of {} (max {} pages, depth {:?})",
            start, self.max_pages, self.max_depth
        );

        let mut visited: HashSet<String> = HashSet::new();
        let mut discovered: Vec<String> = Vec::new();
        let mut queue: VecDeque<CrawlTarget> = VecDeque::new();
        let mut failed_count = 0usize;

        visited.insert(start.clone());
        self.emit(CrawlEvent::Connecting { url: start.clone() });

        // The seed is fetched on its own, not batched: if it is unreachable
        // the whole crawl is meaningless, so this is the one fetch whose
        // failure is fatal.
        let seed_html = match self.fetcher.fetch(&start, &cancel).await {
            Ok(html) => html,
            Err(CrawlError::Cancelled) => {
                return Ok(self.finish(discovered, failed_count, CrawlStatus::Stopped));
            }
            Err(err) => {
                return Err(CrawlError::StartUnreachable {
                    url: start,
                    reason: err.to_string(),
                });
            }
        };

        discovered.push(start.clone());
        self.emit(CrawlEvent::PageDiscovered {
            url: start.clone(),
            discovered: discovered.len(),
            failed: failed_count,
        });

        // Visited is marked at enqueue time, not fetch time, so the same URL
        // can never be queued twice by links found in concurrent fetches.
        for link in extract_internal_links(&seed_html, &start) {
            if visited.insert(link.clone()) {
                queue.push_back(CrawlTarget {
                    url: link,
                    depth: 1,
                });
            }
        }

        while !queue.is_empty() && discovered.len() < self.max_pages && !cancel.is_cancelled() {
            let width = self.batch_size.min(queue.len());
            let batch: Vec<CrawlTarget> = queue.drain(..width).collect();
            debug!("fetching batch of {} (queue: {})", batch.len(), queue.len());

            let fetcher = &self.fetcher;
            let fetches = batch.into_iter().map(|target| {
                let cancel = cancel.clone();
                async move {
                    let result = fetcher.fetch(&target.url, &cancel).await;
                    (target, result)
                }
            });

            // Every fetch in the batch settles before the next batch starts;
            // state below is only touched at this point, never concurrently.
            for (target, result) in join_all(fetches).await {
                match result {
                    Ok(html) => {
                        // A fetch that raced past cancellation, or past a
                        // filled budget, is discarded rather than appended.
                        if cancel.is_cancelled() || discovered.len() >= self.max_pages {
                            continue;
                        }

                        discovered.push(target.url.clone());
                        self.emit(CrawlEvent::PageDiscovered {
                            url: target.url.clone(),
                            discovered: discovered.len(),
                            failed: failed_count,
                        });

                        let within_depth = self.max_depth.is_none_or(|d| target.depth < d);
                        if !within_depth {
                            continue;
                        }

                        for link in extract_internal_links(&html, &start) {
                            let headroom =
                                discovered.len() + queue.len() < self.max_pages * self.queue_headroom;
                            if headroom && !visited.contains(&link) {
                                visited.insert(link.clone());
                                queue.push_back(CrawlTarget {
                                    url: link,
                                    depth: target.depth + 1,
                                });
                            }
                        }
                    }
                    Err(CrawlError::Cancelled) => {
                        // Abandoned in flight; not a failure, not a result.
                    }
                    Err(err) => {
                        failed_count += 1;
                        warn!("skipping {}: {}", target.url, err);
                        self.emit(CrawlEvent::PageSkipped {
                            url: target.url.clone(),
                            discovered: discovered.len(),
                            failed: failed_count,
                        });
                    }
                }
            }
        }

        let status = if cancel.is_cancelled() {
            CrawlStatus::Stopped
        } else {
            CrawlStatus::Completed
        };
        Ok(self.finish(discovered, failed_count, status))
    }

    fn finish(
        &self,
        discovered: Vec<String>,
        failed_count: usize,
        status: CrawlStatus,
    ) -> CrawlOutcome {
        info!(
            "crawl finished ({:?}): {} discovered, {} failed",
            status,
            discovered.len(),
            failed_count
        );
        self.emit(CrawlEvent::Finished {
            discovered: discovered.len(),
            failed: failed_count,
        });
        CrawlOutcome {
            discovered,
            failed_count,
            status,
        }
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}
