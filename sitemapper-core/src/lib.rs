pub mod bulk;
pub mod crawl;
pub mod entry;
pub mod sitemap;

use colored::Colorize;

pub use bulk::parse_bulk_urls;
pub use entry::{ChangeFreq, EntryDefaults, SitemapEntry, entries_from_urls, is_valid_url};
pub use sitemap::{estimate_size, generate_sitemap};

pub fn print_banner() {
    println!(
        "{}",
        r#"
  ___ (_) /____  __ _  ___ ____  ___  ___ ____
 (_-</ / __/ -_)/  ' \/ _ `/ _ \/ _ \/ -_) __/
/___/_/\__/\__//_/_/_/\_,_/ .__/ .__/\__/_/
                         /_/  /_/
"#
        .bright_cyan()
    );
    println!(
        "  {} {}\n",
        "XML sitemap generator".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_black()
    );
}
