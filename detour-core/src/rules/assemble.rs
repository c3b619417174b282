use crate::rules::error::RuleError;
use crate::rules::fields::{self, Field};
use crate::rules::line::{LineTokens, split_pair};
use crate::rules::origin::{UrlParser, is_absolute_url, resolve_origin};
use crate::rules::types::{Conditions, Draft, QueryMap};
use serde_json::{Map, Value};

const SPLAT_SUFFIX: &str = "/*";

/// Build a draft from a tokenized line.
///
/// Line layout: `from [query...] [to] [status[!]] [conditions...]`.
pub fn assemble_line(tokens: &LineTokens<'_>, urls: &dyn UrlParser) -> Result<Draft, RuleError> {
    let origin = resolve_origin(Some(tokens.from), urls)?;
    let parts = tokens.parts.as_slice();

    let forward = parts
        .first()
        .is_some_and(|first| starts_forward_rule(&origin.path, first));

    let (query, to, tail) = if forward {
        (QueryMap::new(), None, parts)
    } else {
        let to_index = parts
            .iter()
            .position(|part| is_destination(part))
            .ok_or(RuleError::MissingDestination)?;

        (
            parse_pairs(&parts[..to_index]),
            Some(parts[to_index].to_string()),
            &parts[to_index + 1..],
        )
    };

    let (status, force) = match tail.first() {
        Some(token) => parse_status(token)?,
        None => (None, false),
    };
    let (conditions, signed) = parse_conditions(tail.get(1..).unwrap_or_default());

    let mut draft = Draft {
        scheme: origin.scheme,
        host: origin.host,
        path: origin.path,
        to,
        status,
        force,
        query,
        conditions,
        headers: None,
        signed,
    };
    apply_forward_rule(&mut draft);

    Ok(draft)
}

/// Build a draft from a decoded config record, resolving legacy field names.
pub fn assemble_record(
    record: &Map<String, Value>,
    urls: &dyn UrlParser,
) -> Result<Draft, RuleError> {
    let from = fields::string(record, Field::From)?;
    let origin = resolve_origin(from.as_deref(), urls)?;

    let mut draft = Draft {
        scheme: origin.scheme,
        host: origin.host,
        path: origin.path,
        to: fields::string(record, Field::To)?,
        status: fields::status(record)?,
        force: fields::flag(record, Field::Force)?,
        query: fields::string_map(record, Field::Query)?,
        conditions: fields::conditions(record)?,
        headers: Field::Headers.lookup(record).cloned(),
        signed: fields::string(record, Field::Signed)?,
    };
    apply_forward_rule(&mut draft);

    Ok(draft)
}

/// A forward rule may omit its destination: the source ends in `/*` and the
/// status is 2xx.
pub fn is_forward_rule(path: &str, status: Option<u16>) -> bool {
    path.ends_with(SPLAT_SUFFIX) && status.is_some_and(|s| (200..300).contains(&s))
}

/// `/admin/*` forwards to `/admin/:splat`.
pub fn splat_destination(path: &str) -> String {
    match path.strip_suffix(SPLAT_SUFFIX) {
        Some(prefix) => format!("{prefix}/:splat"),
        None => path.to_string(),
    }
}

fn apply_forward_rule(draft: &mut Draft) {
    if draft.to.is_none() && is_forward_rule(&draft.path, draft.status) {
        draft.to = Some(splat_destination(&draft.path));
    }
}

fn starts_forward_rule(path: &str, token: &str) -> bool {
    is_status_token(token)
        && parse_status(token).is_ok_and(|(status, _)| is_forward_rule(path, status))
}

fn is_destination(token: &str) -> bool {
    token.starts_with('/') || is_absolute_url(token)
}

/// `digits` optionally followed by `!`, nothing else.
fn is_status_token(token: &str) -> bool {
    let digits = token.strip_suffix('!').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Leading digits are the status; a trailing `!` forces the rule.
fn parse_status(token: &str) -> Result<(Option<u16>, bool), RuleError> {
    let end = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());

    let status = token[..end]
        .parse::<u16>()
        .map_err(|_| RuleError::InvalidStatus {
            token: token.to_string(),
        })?;

    Ok((Some(status), token.ends_with('!')))
}

fn parse_pairs(tokens: &[&str]) -> QueryMap {
    tokens
        .iter()
        .map(|token| {
            let (key, value) = split_pair(token);
            (key.to_string(), value.to_string())
        })
        .collect()
}

/// `Sign=<secret>` (any case) names the signing secret instead of a condition.
fn parse_conditions(tokens: &[&str]) -> (Conditions, Option<String>) {
    let mut conditions = Conditions::new();
    let mut signed = None;

    for token in tokens {
        let (key, value) = split_pair(token);
        if key.eq_ignore_ascii_case("sign") || key.eq_ignore_ascii_case("signed") {
            signed = Some(value.to_string());
        } else {
            fields::insert_condition(&mut conditions, key, [value]);
        }
    }

    (conditions, signed)
}
