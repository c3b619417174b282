use crate::conf::error::ConfigError;
use crate::rules::{RuleError, expect_list};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Serialization formats a config document may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Hcl,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "hcl" => Some(Self::Hcl),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Decode a document into a generic tree.
    pub fn decode(self, text: &str) -> Result<Value, String> {
        match self {
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            Self::Hcl => hcl::from_str(text).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
            Self::Hcl => "HCL",
            Self::Json => "JSON",
        };
        f.write_str(name)
    }
}

/// The records under a document's top-level `redirects` key.
///
/// A document without the key (or an empty YAML document) has no redirects.
pub fn redirect_records(document: &Value) -> Result<Vec<Value>, RuleError> {
    match document.get("redirects") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(value) => expect_list(value).map(<[Value]>::to_vec),
    }
}

/// Decodes a config document and returns its `redirects` records.
///
/// The records are returned undecoded; each becomes a rule (or a
/// per-record failure) in the batch parser.
///
/// # Arguments
///
/// * `text` - Document contents
/// * `format` - Decoder to use
/// * `path` - Used only for error messages
///
/// # Errors
///
/// * `ConfigError::Parse` if the document does not decode
/// * `ConfigError::Redirects` if `redirects` is present but not a list
pub fn parse_config_str(
    text: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<Vec<Value>, ConfigError> {
    let document = format
        .decode(text)
        .map_err(|message| ConfigError::parse(path, format, message))?;

    redirect_records(&document).map_err(|source| ConfigError::Redirects {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and decodes a config document.
///
/// # Returns
///
/// `Ok(None)` when the file does not exist, otherwise the records under its
/// `redirects` key.
///
/// # Errors
///
/// Returns `ConfigError::UnsupportedFormat` for an unknown extension,
/// `ConfigError::ReadFile` for any read failure other than a missing file,
/// and the errors of [`parse_config_str`].
pub fn parse_config_file(path: &Path) -> Result<Option<Vec<Value>>, ConfigError> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    match read_optional(path)? {
        Some(text) => parse_config_str(&text, format, path).map(Some),
        None => Ok(None),
    }
}

/// Read a redirects file. `Ok(None)` when the file does not exist.
pub fn read_redirects_file(path: &Path) -> Result<Option<String>, ConfigError> {
    read_optional(path)
}

fn read_optional(path: &Path) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file not found, treating as empty");
            Ok(None)
        }
        Err(e) => Err(ConfigError::read_file(path, e)),
    }
}
