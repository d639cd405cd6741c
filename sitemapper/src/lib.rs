pub mod handlers;

pub use handlers::{load_urls_from_file, parse_url_line, write_output};
