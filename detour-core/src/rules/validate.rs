use crate::rules::error::RuleError;
use crate::rules::origin::{is_absolute_url, is_reserved_path};
use crate::rules::types::{Draft, HeaderMap, Redirect};
use serde_json::Value;

/// Turn a draft into a redirect, or report the first check it fails.
///
/// Checks run in order: reserved source prefix, destination presence,
/// header shape. `proxy` is always derived here, never taken from input.
pub fn validate(draft: Draft) -> Result<Redirect, RuleError> {
    if is_reserved_path(&draft.path) {
        return Err(RuleError::InvalidSourcePath { path: draft.path });
    }

    let to = draft.to.ok_or(RuleError::MissingDestination)?;
    let headers = flat_headers(draft.headers)?;
    let proxy = is_proxy(draft.status, &to);

    Ok(Redirect {
        scheme: draft.scheme,
        host: draft.host,
        path: draft.path,
        to,
        status: draft.status,
        force: draft.force,
        query: draft.query,
        conditions: draft.conditions,
        headers,
        signed: draft.signed,
        proxy,
    })
}

/// A rule proxies when it answers 200 with content from another origin.
pub fn is_proxy(status: Option<u16>, to: &str) -> bool {
    status == Some(200) && is_absolute_url(to)
}

fn flat_headers(value: Option<Value>) -> Result<HeaderMap, RuleError> {
    let map = match value {
        None | Some(Value::Null) => return Ok(HeaderMap::new()),
        Some(Value::Object(map)) => map,
        Some(other) => {
            return Err(RuleError::InvalidHeaders {
                reason: format!("expected an object, found {other}"),
            });
        }
    };

    map.into_iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name, s)),
            other => Err(RuleError::InvalidHeaders {
                reason: format!("header '{name}' has non-string value {other}"),
            }),
        })
        .collect()
}
