mod discover;
mod error;
mod loader;
mod parse;
mod report;

pub use discover::{discover, discover_all, resolve_glob};
pub use error::ConfigError;
pub use loader::{LoadOptions, LoadedRedirects, load_redirects, load_redirects_with};
pub use parse::{
    ConfigFormat, parse_config_file, parse_config_str, read_redirects_file, redirect_records,
};
pub use report::{Location, Section, Severity, ValidationIssue, ValidationReport};
