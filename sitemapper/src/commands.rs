use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("sitemapper")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("sitemapper")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Discover a site's internal pages by crawling from a start URL, then \
                emit them as a sitemap.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The URL to start crawling from")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(--"max-pages" <COUNT>)
                        .required(false)
                        .help("Stop once this many pages have been discovered")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("50"),
                )
                .arg(
                    arg!(--"max-depth" <DEPTH>)
                        .required(false)
                        .help("Follow links at most this many hops from the start URL (0 = unlimited)")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("3"),
                )
                .arg(
                    arg!(--"priority" <PRIORITY>)
                        .required(false)
                        .help("Priority written into every generated entry (0.0-1.0)")
                        .default_value("0.5"),
                )
                .arg(
                    arg!(--"changefreq" <FREQ>)
                        .required(false)
                        .help("Change frequency written into every generated entry")
                        .value_parser([
                            "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
                        ])
                        .default_value("weekly"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Output format: xml sitemap, plain URL list, or JSON crawl outcome")
                        .value_parser(["xml", "urls", "json"])
                        .default_value("xml"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write output to a file (default: stdout)"),
                ),
        )
        .subcommand(
            command!("generate")
                .about(
                    "Generate a sitemap from an existing URL list, either a file or lines \
                piped on stdin.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(false)
                        .help("Newline-delimited URL file (default: read stdin)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"priority" <PRIORITY>)
                        .required(false)
                        .help("Priority written into every entry (0.0-1.0)")
                        .default_value("0.5"),
                )
                .arg(
                    arg!(--"changefreq" <FREQ>)
                        .required(false)
                        .help("Change frequency written into every entry")
                        .value_parser([
                            "always", "hourly", "daily", "weekly", "monthly", "yearly", "never",
                        ])
                        .default_value("weekly"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the sitemap to a file (default: stdout)"),
                ),
        )
}
