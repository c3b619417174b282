use crate::rules::error::RuleError;

/// A tokenized redirect line: the source followed by everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens<'a> {
    pub from: &'a str,
    pub parts: Vec<&'a str>,
}

/// Split one line of a redirects file into tokens.
///
/// Returns `Ok(None)` for blank and comment-only lines. An inline comment is
/// any token starting with `#`; it and the rest of the line are dropped, so a
/// `#` inside a token (`/post#anchor`) is kept.
pub fn tokenize_line(line: &str) -> Result<Option<LineTokens<'_>>, RuleError> {
    let mut tokens = line
        .split_whitespace()
        .take_while(|token| !is_comment(token));

    let Some(from) = tokens.next() else {
        return Ok(None);
    };

    let parts: Vec<&str> = tokens.collect();
    if parts.is_empty() {
        return Err(RuleError::MissingDestination);
    }

    Ok(Some(LineTokens { from, parts }))
}

pub fn is_comment(token: &str) -> bool {
    token.starts_with('#')
}

/// Split a `key=value` token on its first `=`; a bare key has an empty value.
pub fn split_pair(token: &str) -> (&str, &str) {
    token.split_once('=').unwrap_or((token, ""))
}
