mod check;
mod dump;

pub use check::*;
pub use dump::*;

use crate::conf::{ConfigError, LoadOptions};
use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Where the CLI should look for redirects.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory that globs and the config path are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Glob matching redirects files; may be repeated
    #[arg(long = "redirects", default_value = "_redirects")]
    pub redirects: Vec<String>,

    /// Config document with a top-level `redirects` list (toml, yaml, hcl or json)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl SourceArgs {
    pub fn load_options(&self) -> Result<LoadOptions, ConfigError> {
        LoadOptions::discover(&self.root, &self.redirects, self.config.clone())
    }
}

#[derive(Subcommand, Debug)]
pub enum RedirectsCmd {
    /// Validate redirects and exit non-zero if any rule is invalid
    Check {
        #[command(flatten)]
        sources: SourceArgs,

        /// How to print the validation report
        #[arg(long, value_enum, default_value = "pretty")]
        format: ReportFormat,
    },

    /// Print the merged, canonical redirects
    Dump {
        #[command(flatten)]
        sources: SourceArgs,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}
