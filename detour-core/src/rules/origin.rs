use crate::rules::error::RuleError;
use url::Url;

/// Source paths under this prefix belong to the platform and cannot be matched.
pub const RESERVED_PATH_PREFIX: &str = "/.netlify";

/// The pieces of an absolute URL a rule cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: Option<String>,
    pub path: String,
}

/// Parses absolute URLs for the origin resolver.
///
/// Injected into [`RuleParser`](crate::rules::RuleParser) so callers can swap
/// the URL implementation without any process-wide state.
pub trait UrlParser: Send + Sync {
    fn parse_url(&self, raw: &str) -> Result<UrlParts, String>;
}

/// WHATWG URL parsing backed by the `url` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct WhatwgUrlParser;

impl UrlParser for WhatwgUrlParser {
    fn parse_url(&self, raw: &str) -> Result<UrlParts, String> {
        let url = Url::parse(raw).map_err(|e| e.to_string())?;

        // Mirror the URL `host` accessor: the port is kept when it is not the
        // scheme default.
        let host = url.host_str().map(|host| match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        });

        Ok(UrlParts {
            scheme: url.scheme().to_string(),
            host,
            path: url.path().to_string(),
        })
    }
}

/// Where a rule matches: a bare path, or a path on a specific host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedOrigin {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub path: String,
}

pub fn is_absolute_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

pub fn is_reserved_path(path: &str) -> bool {
    path.starts_with(RESERVED_PATH_PREFIX)
}

/// Split a `from` value into scheme, host and path.
pub fn resolve_origin(
    from: Option<&str>,
    urls: &dyn UrlParser,
) -> Result<ResolvedOrigin, RuleError> {
    let from = from.ok_or(RuleError::MissingSource)?;

    let origin = if is_absolute_url(from) {
        let parts = urls
            .parse_url(from)
            .map_err(|reason| RuleError::invalid_url(from, reason))?;

        ResolvedOrigin {
            scheme: Some(parts.scheme),
            host: parts.host,
            path: parts.path,
        }
    } else {
        ResolvedOrigin {
            scheme: None,
            host: None,
            path: from.to_string(),
        }
    };

    if is_reserved_path(&origin.path) {
        return Err(RuleError::InvalidSourcePath { path: origin.path });
    }

    Ok(origin)
}
