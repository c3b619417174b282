use crate::rules::error::RuleError;
use crate::rules::types::{Draft, Redirect};
use crate::rules::validate::validate;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;

/// Combine file rules with config rules.
///
/// Routing upstream is first-match-wins, so `primary` stays ahead of
/// `secondary`. Exact duplicates collapse onto their last occurrence.
pub fn merge_redirects(primary: Vec<Redirect>, secondary: Vec<Redirect>) -> Vec<Redirect> {
    let combined: Vec<Redirect> = primary.into_iter().chain(secondary).collect();
    dedup_keep_last(combined)
}

/// [`merge_redirects`] over untyped lists of canonical redirects, e.g. ones
/// read back from a `detour dump`.
///
/// Either argument that is not an array fails with `InvalidListType`; an
/// element that is not a redirect object fails with `MalformedRecord`. Every
/// element is validated again, so a reserved source fails with
/// `InvalidSourcePath` and `proxy` is recomputed.
pub fn merge_redirect_lists(
    primary: &Value,
    secondary: &Value,
) -> Result<Vec<Redirect>, RuleError> {
    let primary = redirects_from_list(primary)?;
    let secondary = redirects_from_list(secondary)?;
    Ok(merge_redirects(primary, secondary))
}

fn redirects_from_list(value: &Value) -> Result<Vec<Redirect>, RuleError> {
    expect_list(value)?
        .iter()
        .map(|item| {
            let redirect = Redirect::deserialize(item).map_err(|_| RuleError::MalformedRecord {
                found: item.to_string(),
            })?;
            validate(Draft::from(redirect))
        })
        .collect()
}

/// Drop every redirect that is structurally equal to a later one, keeping the
/// relative order of the survivors.
pub fn dedup_keep_last(redirects: Vec<Redirect>) -> Vec<Redirect> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(redirects.len());
        let mut keep: Vec<bool> = redirects.iter().rev().map(|r| seen.insert(r)).collect();
        keep.reverse();
        keep
    };

    let before = redirects.len();
    let out: Vec<Redirect> = redirects
        .into_iter()
        .zip(keep)
        .filter_map(|(redirect, keep)| keep.then_some(redirect))
        .collect();

    if out.len() < before {
        tracing::debug!(dropped = before - out.len(), "collapsed duplicate redirects");
    }

    out
}

/// Borrow a decoded value as a redirect list, refusing any other shape.
pub fn expect_list(value: &Value) -> Result<&[Value], RuleError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(RuleError::InvalidListType {
            found: other.to_string(),
        }),
    }
}
