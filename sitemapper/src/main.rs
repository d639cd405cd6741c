use clap::ArgMatches;
use colored::Colorize;
use commands::command_argument_builder;
use sitemapper::handlers;
use sitemapper_core::crawl::{CrawlRunOptions, describe_crawl_error, execute_crawl};
use sitemapper_core::entry::{ChangeFreq, EntryDefaults, entries_from_urls, is_valid_priority};
use sitemapper_core::{estimate_size, generate_sitemap, print_banner};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use url::Url;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    match chosen_command.subcommand() {
        Some(("crawl", primary_command)) => handle_crawl(primary_command, quiet).await,
        Some(("generate", primary_command)) => handle_generate(primary_command, quiet),
        _ => unreachable!("clap should ensure we don't get here"),
    }
}

fn entry_defaults_from_args(args: &ArgMatches) -> EntryDefaults {
    let priority = args.get_one::<String>("priority").unwrap();
    if !is_valid_priority(priority) {
        eprintln!(
            "{} --priority must be a decimal between 0.0 and 1.0, got '{}'",
            "✗".red(),
            priority
        );
        std::process::exit(2);
    }

    let changefreq = args.get_one::<String>("changefreq").unwrap();
    EntryDefaults {
        priority: priority.clone(),
        // clap restricts the value to the frequency list already
        changefreq: ChangeFreq::from_str(changefreq).expect("changefreq validated by clap"),
    }
}

async fn handle_crawl(args: &ArgMatches, quiet: bool) {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let url = args.get_one::<Url>("url").unwrap();
    let max_pages = *args.get_one::<usize>("max-pages").unwrap();
    let max_depth = match *args.get_one::<usize>("max-depth").unwrap() {
        0 => None,
        depth => Some(depth),
    };
    let format = args.get_one::<String>("format").unwrap().clone();
    let output = args.get_one::<String>("output").cloned();
    let defaults = entry_defaults_from_args(args);

    let mut options = CrawlRunOptions::new(url.as_str());
    options.max_pages = max_pages;
    options.max_depth = max_depth;
    options.show_progress = !quiet;

    // Ctrl-c requests a stop; the crawl winds down and still reports what it
    // found so far.
    let cancel = CancellationToken::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            canceller.cancel();
        }
    });

    let outcome = match execute_crawl(options, cancel).await {
        Ok(outcome) => outcome,
        Err(error) => {
            eprintln!("{} {}", "✗".red(), describe_crawl_error(&error).red());
            std::process::exit(1);
        }
    };

    let rendered = match format.as_str() {
        "urls" => outcome.discovered.join("\n"),
        "json" => {
            serde_json::to_string_pretty(&outcome).expect("Failed to serialize crawl outcome")
        }
        _ => {
            let entries = entries_from_urls(outcome.discovered.clone(), &defaults);
            generate_sitemap(&entries)
        }
    };

    if let Err(error) = handlers::write_output(&rendered, output.as_ref()) {
        eprintln!("{} {}", "✗".red(), error.red());
        std::process::exit(1);
    }

    if !quiet {
        let skipped = if outcome.failed_count > 0 {
            format!(" ({} skipped)", outcome.failed_count)
        } else {
            String::new()
        };
        eprintln!(
            "{} {} page{} discovered{}",
            "✓".green(),
            outcome.discovered.len(),
            if outcome.discovered.len() == 1 { "" } else { "s" },
            skipped
        );
    }
}

fn handle_generate(args: &ArgMatches, quiet: bool) {
    let input = args.get_one::<PathBuf>("input");
    let output = args.get_one::<String>("output").cloned();
    let defaults = entry_defaults_from_args(args);

    let urls = match input {
        Some(path) => handlers::load_urls_from_file(path),
        None => handlers::read_urls_from_stdin(),
    };
    let urls = match urls {
        Ok(urls) => urls,
        Err(error) => {
            eprintln!("{} {}", "✗".red(), error.red());
            std::process::exit(1);
        }
    };

    let entries = entries_from_urls(urls, &defaults);
    let xml = generate_sitemap(&entries);

    if let Err(error) = handlers::write_output(&xml, output.as_ref()) {
        eprintln!("{} {}", "✗".red(), error.red());
        std::process::exit(1);
    }

    if !quiet {
        eprintln!(
            "{} Sitemap with {} URL{} generated ({})",
            "✓".green(),
            entries.len(),
            if entries.len() == 1 { "" } else { "s" },
            estimate_size(&xml)
        );
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
