use crate::rules::error::RuleError;
use crate::rules::types::{Conditions, QueryMap};
use serde_json::{Map, Value};

/// Canonical record fields and the keys each one has been spelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    From,
    To,
    Query,
    Status,
    Force,
    Conditions,
    Headers,
    Signed,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::From,
        Field::To,
        Field::Query,
        Field::Status,
        Field::Force,
        Field::Conditions,
        Field::Headers,
        Field::Signed,
    ];

    pub const fn name(self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted keys, current name first and oldest legacy name last.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::From => &["from", "origin"],
            Field::To => &["to", "destination"],
            Field::Query => &["query", "params", "parameters"],
            Field::Status => &["status"],
            Field::Force => &["force"],
            Field::Conditions => &["conditions"],
            Field::Headers => &["headers"],
            Field::Signed => &["signed", "signing", "sign"],
        }
    }

    /// First non-null value among this field's aliases.
    pub fn lookup(self, record: &Map<String, Value>) -> Option<&Value> {
        self.aliases()
            .iter()
            .find_map(|key| record.get(*key).filter(|v| !v.is_null()))
    }
}

pub fn string(record: &Map<String, Value>, field: Field) -> Result<Option<String>, RuleError> {
    match field.lookup(record) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(RuleError::invalid_field(field.name(), "a string")),
    }
}

pub fn status(record: &Map<String, Value>) -> Result<Option<u16>, RuleError> {
    let invalid = || RuleError::invalid_field(Field::Status.name(), "an HTTP status code");

    match Field::Status.lookup(record) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::String(s)) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse().map(Some).map_err(|_| invalid())
        }
        Some(_) => Err(invalid()),
    }
}

pub fn flag(record: &Map<String, Value>, field: Field) -> Result<bool, RuleError> {
    match field.lookup(record) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(RuleError::invalid_field(field.name(), "a boolean")),
    }
}

pub fn string_map(record: &Map<String, Value>, field: Field) -> Result<QueryMap, RuleError> {
    let invalid = || RuleError::invalid_field(field.name(), "a table of strings");

    let Some(value) = field.lookup(record) else {
        return Ok(QueryMap::new());
    };
    let Value::Object(map) = value else {
        return Err(invalid());
    };

    map.iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k.clone(), s.clone())),
            _ => Err(invalid()),
        })
        .collect()
}

pub fn conditions(record: &Map<String, Value>) -> Result<Conditions, RuleError> {
    let invalid = || {
        RuleError::invalid_field(
            Field::Conditions.name(),
            "a table of strings or lists of strings",
        )
    };

    let mut out = Conditions::new();
    let Some(value) = Field::Conditions.lookup(record) else {
        return Ok(out);
    };
    let Value::Object(map) = value else {
        return Err(invalid());
    };

    for (key, value) in map {
        match value {
            Value::String(s) => insert_condition(&mut out, key, [s.as_str()]),
            Value::Array(items) => {
                let values = items
                    .iter()
                    .map(|item| item.as_str().ok_or_else(invalid))
                    .collect::<Result<Vec<_>, _>>()?;
                insert_condition(&mut out, key, values);
            }
            _ => return Err(invalid()),
        }
    }

    Ok(out)
}

/// Store a condition under its lower-case key, splitting comma-joined values.
///
/// A key spelled twice (`Country`, `country`) keeps the later values.
pub fn insert_condition<'a>(
    conditions: &mut Conditions,
    key: &str,
    values: impl IntoIterator<Item = &'a str>,
) {
    let values = values
        .into_iter()
        .flat_map(|v| v.split(','))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect();

    conditions.insert(key.to_ascii_lowercase(), values);
}
