use crate::conf::parse::ConfigFormat;
use crate::rules::RuleError;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a whole file from being read, as opposed to
/// [`RuleError`]s, which only reject one rule.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // IO / Discovery
    //-------------------------------------------------------------------------
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    //-------------------------------------------------------------------------
    // Parsing
    //-------------------------------------------------------------------------
    #[error("unsupported configuration format: {path}")]
    #[diagnostic(help("use a .toml, .yaml, .yml, .hcl or .json file"))]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid {format} configuration file: {path}\n\n{message}")]
    Parse {
        path: PathBuf,
        format: ConfigFormat,
        message: String,
    },

    //-------------------------------------------------------------------------
    // Structure
    //-------------------------------------------------------------------------
    #[error("invalid redirects in {path}: {source}")]
    Redirects {
        path: PathBuf,
        #[source]
        source: RuleError,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(
        path: impl Into<PathBuf>,
        format: ConfigFormat,
        message: impl Into<String>,
    ) -> Self {
        Self::Parse {
            path: path.into(),
            format,
            message: message.into(),
        }
    }
}
