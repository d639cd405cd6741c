use crate::entry::SitemapEntry;

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render the entries into a sitemap protocol XML document.
///
/// The output is a hard external contract consumed by search engines and
/// must be byte-for-byte reproducible: UTF-8 prolog, `urlset` in the 0.9
/// namespace, per entry a `url` block with `loc`, then optional `lastmod`,
/// `changefreq` and `priority` in that order, two-space indented,
/// newline-joined. Rows with `include` unset or a blank URL are left out.
pub fn generate_sitemap(entries: &[SitemapEntry]) -> String {
    let url_blocks = entries
        .iter()
        .filter(|entry| entry.include && !entry.url.trim().is_empty())
        .map(|entry| {
            let mut lines = vec![
                "  <url>".to_string(),
                format!("    <loc>{}</loc>", escape_xml(entry.url.trim())),
            ];
            if let Some(lastmod) = &entry.lastmod
                && !lastmod.trim().is_empty()
            {
                lines.push(format!("    <lastmod>{}</lastmod>", lastmod.trim()));
            }
            if let Some(changefreq) = &entry.changefreq {
                lines.push(format!("    <changefreq>{}</changefreq>", changefreq.as_str()));
            }
            if let Some(priority) = &entry.priority
                && !priority.is_empty()
            {
                lines.push(format!("    <priority>{}</priority>", priority));
            }
            lines.push("  </url>".to_string());
            lines.join("\n")
        });

    let mut document = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        format!(r#"<urlset xmlns="{}">"#, SITEMAP_NAMESPACE),
    ];
    document.extend(url_blocks);
    document.push("</urlset>".to_string());
    document.join("\n")
}

/// Human-readable size label for the generated document.
pub fn estimate_size(xml: &str) -> String {
    let bytes = xml.len();
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn escape_xml(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
