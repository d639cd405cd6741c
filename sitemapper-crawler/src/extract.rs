use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

use crate::normalize::normalize_url;

/// Parse an HTML document and return its internal links: every anchor href
/// that resolves against `base_url` to a same-origin http(s) URL. Results are
/// normalized, deduplicated, and kept in document order of first occurrence.
///
/// Malformed hrefs are skipped without aborting extraction. A malformed base
/// yields an empty list, since origin comparison is meaningless without one.
pub fn extract_internal_links(html: &str, base_url: &str) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        debug!("cannot extract links, invalid base URL: {}", base_url);
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").unwrap();

    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        if resolved.origin() != base.origin() {
            continue;
        }
        if !matches!(resolved.scheme(), "http" | "https") {
            continue;
        }

        let normalized = normalize_url(resolved.as_str());
        if seen.insert(normalized.clone()) {
            links.push(normalized);
        }
    }

    links
}
