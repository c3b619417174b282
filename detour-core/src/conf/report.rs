use crate::rules::{RuleFailure, rule_error_hint};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which kind of item inside a file an issue points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// A line of a redirects file.
    Line,
    /// An element of a config document's `redirects` list.
    Redirect,
    /// The file as a whole.
    File,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "line",
            Self::Redirect => "redirect",
            Self::File => "file",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub file: PathBuf,
    pub section: Section,
    pub index: Option<usize>,
}

impl Location {
    pub fn new(file: &Path, section: Section, index: Option<usize>) -> Self {
        Self {
            file: file.to_path_buf(),
            section,
            index,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "{}: {}[{}]", self.file.display(), self.section, i),
            None => write!(f, "{}", self.file.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    /// The offending line or serialized record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn warning(&mut self, message: String, location: Location) {
        self.warnings.push(ValidationIssue {
            severity: Severity::Warning,
            message,
            location,
            raw: None,
            help: None,
        });
    }

    /// Record every failure of one file's batch parse.
    pub fn rule_failures(&mut self, file: &Path, section: Section, failures: &[RuleFailure]) {
        for failure in failures {
            self.errors.push(ValidationIssue {
                severity: Severity::Error,
                message: failure.reason(),
                location: Location::new(file, section, Some(failure.index)),
                raw: Some(failure.raw.clone()),
                help: rule_error_hint(&failure.error).map(str::to_string),
            });
        }
    }

    pub fn missing_file(&mut self, file: &Path) {
        self.warning(
            "file does not exist, no redirects loaded from it".to_string(),
            Location::new(file, Section::File, None),
        );
    }

    fn issues(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.errors.iter().chain(self.warnings.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// One `location:severity: message` line per issue.
    pub fn to_plain(&self) -> String {
        self.to_string()
    }

    pub fn render_json(&self) -> serde_json::Result<()> {
        println!("{}", self.to_json()?);
        Ok(())
    }

    pub fn render_plain(&self) {
        print!("{}", self.to_plain());
    }

    pub fn render_pretty(&self) {
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors > 0 || warnings > 0 {
            println!(
                "redirect validation found problems ({} errors, {} warnings)\n",
                errors, warnings
            );
        }

        let mut by_file = BTreeMap::new();
        for issue in self.issues() {
            by_file
                .entry(&issue.location.file)
                .or_insert(Vec::new())
                .push(issue);
        }

        for (file, issues) in by_file {
            println!("{}", file.display());

            for issue in issues {
                let at = match issue.location.index {
                    Some(i) => format!("{} {}: ", issue.location.section, i),
                    None => String::new(),
                };

                match issue.severity {
                    Severity::Error => {
                        println!("  {}: {}{}", "error".red().bold(), at, issue.message);
                    }
                    Severity::Warning => {
                        println!("  {}: {}{}", "warning".yellow().bold(), at, issue.message);
                    }
                }

                if let Some(raw) = &issue.raw {
                    println!("    {}", raw.dimmed());
                }

                if let Some(help) = &issue.help {
                    println!("  {}: {}", "help".cyan(), help.replace('\n', "\n        "));
                }

                println!();
            }
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in self.issues() {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };

            writeln!(f, "{}:{}: {}", issue.location, severity, issue.message)?;

            if let Some(help) = &issue.help {
                writeln!(f, "  help: {}", help.replace('\n', "\n        "))?;
            }
        }
        Ok(())
    }
}
