use std::fs;
use std::io::Read;
use std::path::PathBuf;
use url::Url;

use sitemapper_core::parse_bulk_urls;

/// Load and parse URLs from a newline-delimited file.
pub fn load_urls_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read URL file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Parse a single line as a URL, trying to add http:// if needed.
pub fn parse_url_line(line: &str) -> Option<String> {
    if let Ok(parsed) = Url::parse(line)
        && matches!(parsed.scheme(), "http" | "https")
    {
        return Some(line.to_string());
    }

    // Lines like "example.com/about" are common in hand-kept lists
    if !line.contains("://") {
        let with_scheme = format!("http://{}", line);
        if Url::parse(&with_scheme).is_ok() {
            return Some(with_scheme);
        }
    }

    eprintln!("[!] Skipping invalid URL '{}'", line);
    None
}

/// Read piped bulk-paste input: only lines starting with http:// or https://
/// are kept, the same rule the paste box applies.
pub fn read_urls_from_stdin() -> Result<Vec<String>, String> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| format!("Failed to read stdin: {}", e))?;

    let urls = parse_bulk_urls(&text);
    if urls.is_empty() {
        return Err("No URLs found on stdin (expected one http(s) URL per line)".to_string());
    }
    Ok(urls)
}

/// Write generated output to a file (with `~` expansion) or stdout.
pub fn write_output(content: &str, path: Option<&String>) -> Result<(), String> {
    match path {
        Some(path) => {
            let expanded = shellexpand::tilde(path);
            fs::write(expanded.as_ref(), content)
                .map_err(|e| format!("Failed to write {}: {}", path, e))
        }
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
