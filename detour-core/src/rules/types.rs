use crate::rules::error::RuleError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub type QueryMap = BTreeMap<String, String>;
pub type Conditions = BTreeMap<String, Vec<String>>;
pub type HeaderMap = BTreeMap<String, String>;

/// A validated redirect rule.
///
/// Maps are ordered so that two rules parsed from differently ordered input
/// compare (and hash) equal, which the merge step relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Redirect {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    pub path: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default)]
    pub force: bool,
    #[serde(default)]
    pub query: QueryMap,
    #[serde(default)]
    pub conditions: Conditions,
    #[serde(default)]
    pub headers: HeaderMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed: Option<String>,
    #[serde(default)]
    pub proxy: bool,
}

impl Redirect {
    /// True when the rule only matches requests for a specific host.
    pub fn is_host_scoped(&self) -> bool {
        self.host.is_some()
    }
}

/// One unit of input, tagged by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleInput {
    Line(String),
    Record(Map<String, Value>),
}

impl RuleInput {
    /// Wrap a decoded config value, rejecting anything that is not an object.
    pub fn from_value(value: Value) -> Result<Self, RuleError> {
        match value {
            Value::Object(map) => Ok(Self::Record(map)),
            other => Err(RuleError::MalformedRecord {
                found: other.to_string(),
            }),
        }
    }

    /// Original text of the input, used when reporting a failure.
    pub fn raw(&self) -> String {
        match self {
            Self::Line(line) => line.trim().to_string(),
            Self::Record(map) => Value::Object(map.clone()).to_string(),
        }
    }
}

/// A rule after field canonicalization but before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: String,
    pub to: Option<String>,
    pub status: Option<u16>,
    pub force: bool,
    pub query: QueryMap,
    pub conditions: Conditions,
    /// Kept untyped until validation checks its shape.
    pub headers: Option<Value>,
    pub signed: Option<String>,
}

/// Send an already canonical rule back through validation, e.g. one read
/// from a dump. `proxy` is dropped so validation derives it again.
impl From<Redirect> for Draft {
    fn from(redirect: Redirect) -> Self {
        let headers = (!redirect.headers.is_empty()).then(|| {
            Value::Object(
                redirect
                    .headers
                    .into_iter()
                    .map(|(name, value)| (name, Value::String(value)))
                    .collect(),
            )
        });

        Self {
            scheme: redirect.scheme,
            host: redirect.host,
            path: redirect.path,
            to: Some(redirect.to),
            status: redirect.status,
            force: redirect.force,
            query: redirect.query,
            conditions: redirect.conditions,
            headers,
            signed: redirect.signed,
        }
    }
}
