// Tests for bulk URL import and entry defaults

use sitemapper_core::bulk::parse_bulk_urls;
use sitemapper_core::entry::{
    ChangeFreq, EntryDefaults, entries_from_urls, is_valid_priority, is_valid_url,
};

// ============================================================================
// Bulk Parsing Tests
// ============================================================================

#[test]
fn test_parse_bulk_urls_keeps_http_lines() {
    let text = "https://a.com/\nhttps://a.com/about\nhttp://a.com/legacy";
    let urls = parse_bulk_urls(text);
    assert_eq!(
        urls,
        vec!["https://a.com/", "https://a.com/about", "http://a.com/legacy"]
    );
}

#[test]
fn test_parse_bulk_urls_drops_other_lines() {
    let text = "my favourite pages:\n\nhttps://a.com/x\nftp://a.com/file\n# comment\n   ";
    let urls = parse_bulk_urls(text);
    assert_eq!(urls, vec!["https://a.com/x"]);
}

#[test]
fn test_parse_bulk_urls_trims_whitespace() {
    let urls = parse_bulk_urls("   https://a.com/x   \n\thttps://a.com/y");
    assert_eq!(urls, vec!["https://a.com/x", "https://a.com/y"]);
}

#[test]
fn test_parse_bulk_urls_empty_input() {
    assert!(parse_bulk_urls("").is_empty());
    assert!(parse_bulk_urls("\n\n\n").is_empty());
}

// ============================================================================
// Entry Defaults Tests
// ============================================================================

#[test]
fn test_entries_from_urls_apply_defaults() {
    let defaults = EntryDefaults {
        priority: "0.8".to_string(),
        changefreq: ChangeFreq::Daily,
    };
    let entries = entries_from_urls(
        vec!["https://a.com/".to_string(), "https://a.com/x".to_string()],
        &defaults,
    );

    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.priority.as_deref(), Some("0.8"));
        assert_eq!(entry.changefreq, Some(ChangeFreq::Daily));
        assert!(entry.include);
        // lastmod defaults to today, YYYY-MM-DD
        let lastmod = entry.lastmod.as_deref().unwrap();
        assert_eq!(lastmod.len(), 10);
        assert_eq!(lastmod.as_bytes()[4], b'-');
        assert_eq!(lastmod.as_bytes()[7], b'-');
    }
}

#[test]
fn test_default_defaults() {
    let defaults = EntryDefaults::default();
    assert_eq!(defaults.priority, "0.5");
    assert_eq!(defaults.changefreq, ChangeFreq::Weekly);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_is_valid_url_blank_is_neutral() {
    assert_eq!(is_valid_url(""), None);
    assert_eq!(is_valid_url("   "), None);
}

#[test]
fn test_is_valid_url_accepts_http_and_https() {
    assert_eq!(is_valid_url("https://a.com/x"), Some(true));
    assert_eq!(is_valid_url("http://a.com"), Some(true));
    assert_eq!(is_valid_url("  https://a.com  "), Some(true));
}

#[test]
fn test_is_valid_url_rejects_other_input() {
    assert_eq!(is_valid_url("ftp://a.com/x"), Some(false));
    assert_eq!(is_valid_url("a.com/no-scheme"), Some(false));
    assert_eq!(is_valid_url("not a url"), Some(false));
}

#[test]
fn test_is_valid_priority() {
    assert!(is_valid_priority("0.0"));
    assert!(is_valid_priority("0.8"));
    assert!(is_valid_priority("1.0"));
    assert!(!is_valid_priority("1.5"));
    assert!(!is_valid_priority("-0.1"));
    assert!(!is_valid_priority("high"));
}
