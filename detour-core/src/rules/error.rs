use miette::Diagnostic;
use thiserror::Error;

/// Why a single rule (a DSL line or a config record) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuleError {
    //-------------------------------------------------------------------------
    // Source
    //-------------------------------------------------------------------------
    #[error("missing \"from\" field")]
    MissingSource,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("\"path\" field must not start with \"/.netlify\": {path}")]
    InvalidSourcePath { path: String },

    //-------------------------------------------------------------------------
    // Destination / tail
    //-------------------------------------------------------------------------
    #[error("missing destination path/URL")]
    MissingDestination,

    #[error("invalid status '{token}': expected an HTTP status code such as 301 or 200!")]
    InvalidStatus { token: String },

    //-------------------------------------------------------------------------
    // Record shape
    //-------------------------------------------------------------------------
    #[error("\"headers\" field must be an object of strings: {reason}")]
    InvalidHeaders { reason: String },

    #[error("\"{field}\" field must be {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("redirects must be objects, not: {found}")]
    MalformedRecord { found: String },

    #[error("redirects must be an array, not: {found}")]
    InvalidListType { found: String },
}

impl RuleError {
    pub fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_field(field: &'static str, expected: &'static str) -> Self {
        Self::InvalidField { field, expected }
    }
}

/// Example-bearing guidance for the errors users hit most.
pub fn rule_error_hint(err: &RuleError) -> Option<&'static str> {
    match err {
        RuleError::MissingDestination => Some(
            "Every rule needs a destination unless it is a forward rule.\n\
             \n\
             Example:\n\
             \n\
             /blog/*    /news/:splat    301\n\
             /admin/*   200             # forward rule, destination is /admin/:splat",
        ),

        RuleError::InvalidSourcePath { .. } => Some(
            "Paths under /.netlify are reserved and cannot be redirected.",
        ),

        RuleError::InvalidStatus { .. } => Some(
            "The token after the destination must be a status code, optionally\n\
             followed by ! to force the rule.\n\
             \n\
             Example:\n\
             \n\
             /old   /new   301!",
        ),

        RuleError::InvalidHeaders { .. } => Some(
            "Headers must be a flat table of names to string values.\n\
             \n\
             Example:\n\
             \n\
             [redirects.headers]\n\
             X-From = \"Detour\"",
        ),

        _ => None,
    }
}
