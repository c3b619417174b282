use crate::rules::error::RuleError;
use crate::rules::origin::UrlParser;
use crate::rules::parser::RuleParser;
use crate::rules::types::{Redirect, RuleInput};
use serde::{Serialize, Serializer};
use serde_json::Value;

/// A rejected line or record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailure {
    /// 1-based line number or record position.
    pub index: usize,
    pub raw: String,
    #[serde(rename = "reason", serialize_with = "serialize_reason")]
    pub error: RuleError,
}

impl RuleFailure {
    pub fn reason(&self) -> String {
        self.error.to_string()
    }
}

fn serialize_reason<S: Serializer>(error: &RuleError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(error)
}

/// Everything a batch parse produced, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchResult {
    pub successes: Vec<Redirect>,
    pub errors: Vec<RuleFailure>,
}

impl BatchResult {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn append(&mut self, other: BatchResult) {
        self.successes.extend(other.successes);
        self.errors.extend(other.errors);
    }

    fn record(
        &mut self,
        index: usize,
        raw: impl FnOnce() -> String,
        outcome: Result<Redirect, RuleError>,
    ) {
        match outcome {
            Ok(redirect) => {
                tracing::debug!(
                    index,
                    path = %redirect.path,
                    to = %redirect.to,
                    "accepted redirect"
                );
                self.successes.push(redirect);
            }
            Err(error) => {
                tracing::warn!(index, reason = %error, "rejected redirect");
                self.errors.push(RuleFailure {
                    index,
                    raw: raw(),
                    error,
                });
            }
        }
    }
}

impl<U: UrlParser> RuleParser<U> {
    /// Parse a whole redirects file. Indices are line numbers, counting the
    /// blank and comment lines that produce no outcome.
    pub fn parse_text(&self, text: &str) -> BatchResult {
        let mut result = BatchResult::default();

        for (i, line) in text.split('\n').enumerate() {
            if let Some(outcome) = self.parse_line(line) {
                result.record(i + 1, || line.trim().to_string(), outcome);
            }
        }

        result
    }

    /// Parse a decoded record list. Elements that are not objects are
    /// reported as malformed without stopping the batch.
    pub fn parse_records(&self, records: &[Value]) -> BatchResult {
        let mut result = BatchResult::default();

        for (i, value) in records.iter().enumerate() {
            let outcome = match value {
                Value::Object(record) => self.parse_record(record),
                other => Err(RuleError::MalformedRecord {
                    found: other.to_string(),
                }),
            };
            result.record(i + 1, || value.to_string(), outcome);
        }

        result
    }

    /// Parse caller-tagged inputs, numbering them from 1.
    pub fn parse_inputs(&self, inputs: impl IntoIterator<Item = RuleInput>) -> BatchResult {
        let mut result = BatchResult::default();

        for (i, input) in inputs.into_iter().enumerate() {
            if let Some(outcome) = self.parse_input(&input) {
                result.record(i + 1, || input.raw(), outcome);
            }
        }

        result
    }
}
