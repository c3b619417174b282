use crate::rules::assemble::{assemble_line, assemble_record};
use crate::rules::error::RuleError;
use crate::rules::line::tokenize_line;
use crate::rules::origin::{UrlParser, WhatwgUrlParser};
use crate::rules::types::{Redirect, RuleInput};
use crate::rules::validate::validate;
use serde_json::{Map, Value};

/// Parses redirect rules from either input shape.
///
/// Holds no mutable state: one parser can be shared across threads and used
/// for any number of files.
#[derive(Debug, Default, Clone)]
pub struct RuleParser<U = WhatwgUrlParser> {
    urls: U,
}

impl RuleParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<U: UrlParser> RuleParser<U> {
    pub fn with_url_parser(urls: U) -> Self {
        Self { urls }
    }

    /// Parse one line of a redirects file. Blank and comment lines yield `None`.
    pub fn parse_line(&self, line: &str) -> Option<Result<Redirect, RuleError>> {
        match tokenize_line(line) {
            Ok(None) => None,
            Ok(Some(tokens)) => Some(assemble_line(&tokens, &self.urls).and_then(validate)),
            Err(e) => Some(Err(e)),
        }
    }

    pub fn parse_record(&self, record: &Map<String, Value>) -> Result<Redirect, RuleError> {
        assemble_record(record, &self.urls).and_then(validate)
    }

    pub fn parse_input(&self, input: &RuleInput) -> Option<Result<Redirect, RuleError>> {
        match input {
            RuleInput::Line(line) => self.parse_line(line),
            RuleInput::Record(record) => Some(self.parse_record(record)),
        }
    }
}
