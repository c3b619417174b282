//! Redirect rule parsing.
//!
//! Two input shapes feed one pipeline:
//!
//! - redirects files, one rule per line: `from [query] [to] [status[!]] [conditions]`
//! - decoded config records with `from`, `to`, `status`, ... fields
//!
//! Both are assembled into a [`Draft`], validated into a [`Redirect`] and
//! collected into a [`BatchResult`]. [`merge_redirects`] combines lists from
//! different sources.

mod assemble;
mod batch;
mod error;
mod fields;
mod line;
mod merge;
mod origin;
mod parser;
#[cfg(test)]
mod tests;
mod types;
mod validate;

pub use assemble::{assemble_line, assemble_record, is_forward_rule, splat_destination};
pub use batch::{BatchResult, RuleFailure};
pub use error::{RuleError, rule_error_hint};
pub use fields::Field;
pub use line::{LineTokens, tokenize_line};
pub use merge::{dedup_keep_last, expect_list, merge_redirect_lists, merge_redirects};
pub use origin::{
    RESERVED_PATH_PREFIX, ResolvedOrigin, UrlParser, UrlParts, WhatwgUrlParser, is_absolute_url,
    resolve_origin,
};
pub use parser::RuleParser;
pub use types::{Conditions, Draft, HeaderMap, QueryMap, Redirect, RuleInput};
pub use validate::{is_proxy, validate};
