use crate::rules::{LineTokens, RuleError, tokenize_line};
use pretty_assertions::assert_eq;

#[test]
fn tokenize_blank_line_is_skipped() {
    assert_eq!(tokenize_line(""), Ok(None));
    assert_eq!(tokenize_line("   \t "), Ok(None));
}

#[test]
fn tokenize_comment_line_is_skipped() {
    assert_eq!(tokenize_line("# redirects for the blog"), Ok(None));
    assert_eq!(tokenize_line("   #indented"), Ok(None));
}

#[test]
fn tokenize_splits_on_whitespace_runs() {
    // Act
    let tokens = tokenize_line("  /home \t  /   301  ").unwrap().unwrap();

    // Assert
    assert_eq!(
        tokens,
        LineTokens {
            from: "/home",
            parts: vec!["/", "301"],
        }
    );
}

#[test]
fn tokenize_strips_inline_comment() {
    // Act
    let tokens = tokenize_line("/home / 301 # moved in 2019").unwrap().unwrap();

    // Assert
    assert_eq!(tokens.parts, vec!["/", "301"]);
}

#[test]
fn tokenize_keeps_hash_inside_token() {
    // Act
    let tokens = tokenize_line("/blog/my-post-ads.php /blog/my-post#ads")
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(tokens.parts, vec!["/blog/my-post#ads"]);
}

#[test]
fn tokenize_source_only_line_fails() {
    assert_eq!(tokenize_line("/lonely"), Err(RuleError::MissingDestination));
    assert_eq!(
        tokenize_line("/lonely # no destination"),
        Err(RuleError::MissingDestination)
    );
}
