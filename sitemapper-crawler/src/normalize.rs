use url::Url;

/// Canonicalize a URL string for identity comparison: drop the fragment and
/// a single trailing slash on any non-root path. Scheme, host, port and query
/// are preserved. Malformed input is returned unchanged, treated as opaque.
///
/// Pure and idempotent: `normalize_url(normalize_url(x)) == normalize_url(x)`.
pub fn normalize_url(href: &str) -> String {
    match Url::parse(href) {
        Ok(mut url) => {
            url.set_fragment(None);
            let path = url.path();
            if path != "/" && path.ends_with('/') {
                let trimmed = path[..path.len() - 1].to_string();
                url.set_path(&trimmed);
            }
            url.to_string()
        }
        Err(_) => href.to_string(),
    }
}
