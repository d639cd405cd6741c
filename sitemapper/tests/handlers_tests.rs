use sitemapper::handlers::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, tempdir};

#[test]
fn test_parse_url_line_with_scheme() {
    let result = parse_url_line("https://example.com");
    assert_eq!(result, Some("https://example.com".to_string()));
}

#[test]
fn test_parse_url_line_without_scheme() {
    let result = parse_url_line("example.com");
    assert_eq!(result, Some("http://example.com".to_string()));
}

#[test]
fn test_parse_url_line_invalid() {
    let result = parse_url_line("not a valid url!!!");
    assert_eq!(result, None);
}

#[test]
fn test_parse_url_line_rejects_other_schemes() {
    let result = parse_url_line("ftp://example.com/file");
    assert_eq!(result, None);
}

#[test]
fn test_load_urls_from_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut temp_file = NamedTempFile::new()?;
    writeln!(temp_file, "https://example.com")?;
    writeln!(temp_file, "example.org/about")?;
    writeln!(temp_file)?; // Empty line
    writeln!(temp_file, "https://example.com/contact")?;

    let path = PathBuf::from(temp_file.path());
    let urls = load_urls_from_file(&path)?;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0], "https://example.com");
    assert_eq!(urls[1], "http://example.org/about");
    assert_eq!(urls[2], "https://example.com/contact");

    Ok(())
}

#[test]
fn test_load_urls_from_file_empty() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file).unwrap();
    writeln!(temp_file, "   ").unwrap();

    let path = PathBuf::from(temp_file.path());
    let result = load_urls_from_file(&path);

    assert!(result.is_err());
    assert!(result.unwrap_err().contains("No valid URLs"));
}

#[test]
fn test_load_urls_from_missing_file() {
    let result = load_urls_from_file(&PathBuf::from("/definitely/not/here.txt"));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to read"));
}

#[test]
fn test_write_output_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sitemap.xml").display().to_string();

    write_output("<urlset/>", Some(&path)).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "<urlset/>");
}

#[test]
fn test_write_output_reports_bad_path() {
    let result = write_output("x", Some(&"/definitely/not/a/dir/out.xml".to_string()));
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Failed to write"));
}
