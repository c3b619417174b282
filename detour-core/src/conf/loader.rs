use crate::conf::discover::discover_all;
use crate::conf::error::ConfigError;
use crate::conf::parse::{parse_config_file, read_redirects_file};
use crate::conf::report::{Section, ValidationReport};
use crate::rules::{Redirect, RuleParser, UrlParser, merge_redirects};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where to look for redirects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Redirects files, parsed in order.
    #[serde(default)]
    pub redirects_files: Vec<PathBuf>,

    /// Config document whose `redirects` list is merged after the files.
    #[serde(default)]
    pub config_path: Option<PathBuf>,
}

impl LoadOptions {
    /// Build options by expanding redirects-file globs relative to `root`.
    ///
    /// Files found by each pattern keep the pattern order; within a pattern
    /// they are sorted. A file matched twice is loaded once.
    pub fn discover(
        root: &Path,
        patterns: &[String],
        config_path: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            redirects_files: discover_all(root, patterns)?,
            config_path: config_path.map(|p| root.join(p)),
        })
    }
}

/// Merged redirects plus everything that went wrong along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadedRedirects {
    pub redirects: Vec<Redirect>,
    pub report: ValidationReport,
}

/// Loads, validates and merges every redirect named by `options`.
///
/// Uses the default URL parser. See [`load_redirects_with`] to supply one.
///
/// # Arguments
///
/// * `options` - Redirects files, parsed in order, and an optional config
///   document whose `redirects` list is merged after them
///
/// # Returns
///
/// The merged redirects plus a `ValidationReport` holding every rejected
/// rule (as an error) and every missing file (as a warning).
///
/// # Errors
///
/// Returns a `ConfigError` when a file exists but cannot be read, when the
/// config document has an unsupported extension or fails to decode, or when
/// its `redirects` key is not a list.
pub fn load_redirects(options: &LoadOptions) -> Result<LoadedRedirects, ConfigError> {
    load_redirects_with(&RuleParser::new(), options)
}

/// Parse every redirects file and the config document, then merge.
///
/// Rules that fail to parse land in the report and never abort the load.
/// Only IO and document decoding failures are hard errors.
pub fn load_redirects_with<U: UrlParser>(
    parser: &RuleParser<U>,
    options: &LoadOptions,
) -> Result<LoadedRedirects, ConfigError> {
    let mut report = ValidationReport::default();

    //--------------------------------------------------------------------------
    // Redirects files (missing files are empty)
    //--------------------------------------------------------------------------
    let mut file_redirects = Vec::new();
    for path in &options.redirects_files {
        let Some(text) = read_redirects_file(path)? else {
            report.missing_file(path);
            continue;
        };

        let batch = parser.parse_text(&text);
        tracing::debug!(
            path = %path.display(),
            accepted = batch.successes.len(),
            rejected = batch.errors.len(),
            "parsed redirects file"
        );

        report.rule_failures(path, Section::Line, &batch.errors);
        file_redirects.extend(batch.successes);
    }

    //--------------------------------------------------------------------------
    // Config document
    //--------------------------------------------------------------------------
    let mut config_redirects = Vec::new();
    if let Some(path) = &options.config_path {
        match parse_config_file(path)? {
            Some(records) => {
                let batch = parser.parse_records(&records);
                tracing::debug!(
                    path = %path.display(),
                    accepted = batch.successes.len(),
                    rejected = batch.errors.len(),
                    "parsed config redirects"
                );

                report.rule_failures(path, Section::Redirect, &batch.errors);
                config_redirects = batch.successes;
            }
            None => report.missing_file(path),
        }
    }

    //--------------------------------------------------------------------------
    // Merge: file rules come first, config rules after
    //--------------------------------------------------------------------------
    let from_files = file_redirects.len();
    let from_config = config_redirects.len();
    let redirects = merge_redirects(file_redirects, config_redirects);

    tracing::info!(
        from_files,
        from_config,
        total = redirects.len(),
        errors = report.errors.len(),
        "loaded redirects"
    );

    Ok(LoadedRedirects { redirects, report })
}
