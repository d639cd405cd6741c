use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use url::Url;

use sitemapper_crawler::{CrawlError, CrawlEvent, CrawlOutcome, CrawlStatus, Crawler, Relay};

/// Options for configuring a crawl run.
pub struct CrawlRunOptions {
    pub start_url: String,
    pub max_pages: usize,
    /// `None` crawls to unbounded depth.
    pub max_depth: Option<usize>,
    /// Relay chain to fetch through; defaults to the production relays.
    pub relays: Vec<Relay>,
    pub show_progress: bool,
}

impl CrawlRunOptions {
    pub fn new(start_url: impl Into<String>) -> Self {
        Self {
            start_url: start_url.into(),
            max_pages: 50,
            max_depth: Some(3),
            relays: sitemapper_crawler::default_relays(),
            show_progress: true,
        }
    }
}

/// Extract the path component from a URL, for compact progress display.
pub fn extract_url_path(url: &str) -> String {
    Url::parse(url)
        .ok()
        .map(|u| {
            let path = u.path().to_string();
            if path.is_empty() { "/".to_string() } else { path }
        })
        .unwrap_or_else(|| url.to_string())
}

/// Execute a crawl with the given options, driving a spinner from the
/// engine's event channel while it runs. Returns the crawl outcome; the
/// caller decides what to do with the discovered URLs.
pub async fn execute_crawl(
    options: CrawlRunOptions,
    cancel: CancellationToken,
) -> Result<CrawlOutcome, CrawlError> {
    let progress_bar = if options.show_progress {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Starting crawl...");
        Some(pb)
    } else {
        None
    };

    let (sender, mut receiver) = mpsc::unbounded_channel();

    // Drain events into spinner updates off the crawl loop.
    let max_pages = options.max_pages;
    let pb_updates = progress_bar.clone();
    let drain = tokio::spawn(async move {
        while let Some(event) = receiver.recv().await {
            let Some(pb) = &pb_updates else { continue };
            match event {
                CrawlEvent::Connecting { url } => {
                    pb.set_message(format!("Connecting to {}...", url));
                }
                CrawlEvent::PageDiscovered {
                    url,
                    discovered,
                    failed,
                } => {
                    pb.set_message(format!(
                        "Crawling {}  [{}/{} pages{}]",
                        extract_url_path(&url),
                        discovered,
                        max_pages,
                        skipped_suffix(failed)
                    ));
                }
                CrawlEvent::PageSkipped { discovered, failed, .. } => {
                    pb.set_message(format!(
                        "Crawling...  [{}/{} pages{}]",
                        discovered,
                        max_pages,
                        skipped_suffix(failed)
                    ));
                }
                CrawlEvent::Finished { .. } => {}
            }
        }
    });

    let crawler = Crawler::new()
        .with_relays(options.relays)
        .with_max_pages(options.max_pages)
        .with_max_depth(options.max_depth)
        .with_events(sender);

    let result = crawler.crawl(&options.start_url, cancel).await;

    // Dropping the crawler closes the event channel and ends the drain task.
    drop(crawler);
    let _ = drain.await;

    if let Some(pb) = progress_bar {
        match &result {
            Ok(outcome) => {
                let verdict = match outcome.status {
                    CrawlStatus::Completed => "Done",
                    CrawlStatus::Stopped => "Stopped",
                };
                pb.finish_with_message(format!(
                    "{} - {} page{} found{}",
                    verdict,
                    outcome.discovered.len(),
                    if outcome.discovered.len() == 1 { "" } else { "s" },
                    skipped_suffix(outcome.failed_count)
                ));
            }
            Err(_) => pb.finish_and_clear(),
        }
    }

    result
}

fn skipped_suffix(failed: usize) -> String {
    if failed > 0 {
        format!(", {} skipped", failed)
    } else {
        String::new()
    }
}

/// Human-readable account of a failed crawl. Some sites categorically block
/// relayed requests, so a dead seed points the user at the bulk-import
/// fallback rather than a retry.
pub fn describe_crawl_error(error: &CrawlError) -> String {
    match error {
        CrawlError::InvalidStartUrl(_) => {
            format!("{}. Enter a full URL such as https://example.com.", error)
        }
        CrawlError::StartUnreachable { url, reason } => format!(
            "Could not fetch {} ({}). This usually means the site blocks external \
             requests. Try `sitemapper generate` with a pasted URL list instead.",
            url, reason
        ),
        other => other.to_string(),
    }
}

/// Generate a short text report from a crawl outcome, pages grouped by host.
pub fn summarize_outcome(outcome: &CrawlOutcome) -> String {
    let mut report = String::new();
    report.push_str("Summary:\n");
    report.push_str(&format!("  Pages discovered: {}\n", outcome.discovered.len()));
    report.push_str(&format!("  Pages skipped: {}\n", outcome.failed_count));
    if outcome.is_stopped() {
        report.push_str("  Crawl was stopped before completing.\n");
    }

    let mut by_host: HashMap<String, Vec<&str>> = HashMap::new();
    for url in &outcome.discovered {
        if let Ok(parsed) = Url::parse(url)
            && let Some(host) = parsed.host_str()
        {
            by_host.entry(host.to_string()).or_default().push(url);
        }
    }

    for (host, urls) in by_host.iter() {
        report.push_str(&format!("\n  {}\n", host));
        for url in urls {
            report.push_str(&format!("    {}\n", extract_url_path(url)));
        }
    }

    report
}
