/// Parse pasted or piped text into importable URLs: one per line, trimmed,
/// keeping only lines that start with an http(s) scheme. Everything else
/// (blank lines, comments, fragments of prose) is dropped silently.
pub fn parse_bulk_urls(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http://") || line.starts_with("https://"))
        .map(str::to_string)
        .collect()
}
