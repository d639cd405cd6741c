use chrono::Local;
use serde::{Deserialize, Serialize};
use url::Url;

/// Valid values for the sitemap `changefreq` element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const ALL: [ChangeFreq; 7] = [
        ChangeFreq::Always,
        ChangeFreq::Hourly,
        ChangeFreq::Daily,
        ChangeFreq::Weekly,
        ChangeFreq::Monthly,
        ChangeFreq::Yearly,
        ChangeFreq::Never,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Always => "always",
            ChangeFreq::Hourly => "hourly",
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
            ChangeFreq::Monthly => "monthly",
            ChangeFreq::Yearly => "yearly",
            ChangeFreq::Never => "never",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "always" => Some(ChangeFreq::Always),
            "hourly" => Some(ChangeFreq::Hourly),
            "daily" => Some(ChangeFreq::Daily),
            "weekly" => Some(ChangeFreq::Weekly),
            "monthly" => Some(ChangeFreq::Monthly),
            "yearly" => Some(ChangeFreq::Yearly),
            "never" => Some(ChangeFreq::Never),
            _ => None,
        }
    }
}

/// One candidate row of the sitemap. Rows come from manual entry, bulk
/// import or a crawl; only rows with `include` set and a non-blank URL make
/// it into the generated document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub url: String,
    pub priority: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub lastmod: Option<String>,
    pub include: bool,
}

impl SitemapEntry {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            priority: None,
            changefreq: None,
            lastmod: None,
            include: true,
        }
    }
}

/// Row defaults applied when importing a batch of bare URLs.
#[derive(Debug, Clone)]
pub struct EntryDefaults {
    pub priority: String,
    pub changefreq: ChangeFreq,
}

impl Default for EntryDefaults {
    fn default() -> Self {
        Self {
            priority: "0.5".to_string(),
            changefreq: ChangeFreq::Weekly,
        }
    }
}

/// Today's date in the `YYYY-MM-DD` form `lastmod` expects.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Turn a list of bare URLs (from a crawl or a bulk paste) into sitemap
/// rows carrying the configured defaults and today's date.
pub fn entries_from_urls(urls: Vec<String>, defaults: &EntryDefaults) -> Vec<SitemapEntry> {
    let lastmod = today();
    urls.into_iter()
        .map(|url| SitemapEntry {
            url,
            priority: Some(defaults.priority.clone()),
            changefreq: Some(defaults.changefreq),
            lastmod: Some(lastmod.clone()),
            include: true,
        })
        .collect()
}

/// Validity of a user-entered URL. `None` means blank input, which is
/// neither valid nor invalid (an empty row, not an error).
pub fn is_valid_url(url: &str) -> Option<bool> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let valid = match Url::parse(trimmed) {
        Ok(parsed) => matches!(parsed.scheme(), "http" | "https"),
        Err(_) => false,
    };
    Some(valid)
}

/// A sitemap priority must be a decimal between 0.0 and 1.0.
pub fn is_valid_priority(priority: &str) -> bool {
    priority
        .parse::<f32>()
        .map(|p| (0.0..=1.0).contains(&p))
        .unwrap_or(false)
}
