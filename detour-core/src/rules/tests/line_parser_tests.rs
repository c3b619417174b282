use crate::rules::tests::test_helpers::{parser, redirect, strings};
use crate::rules::{Conditions, QueryMap, Redirect, RuleError};
use pretty_assertions::assert_eq;

fn parse_ok(line: &str) -> Redirect {
    parser()
        .parse_line(line)
        .expect("line should not be skipped")
        .unwrap()
}

fn parse_err(line: &str) -> RuleError {
    parser()
        .parse_line(line)
        .expect("line should not be skipped")
        .unwrap_err()
}

#[test]
fn parse_simple_redirect() {
    assert_eq!(parse_ok("/home /"), redirect("/home", "/"));
}

#[test]
fn parse_comment_line_yields_nothing() {
    assert_eq!(parser().parse_line("# /home /"), None);
}

#[test]
fn parse_destination_is_taken_verbatim() {
    // Act
    let rule = parse_ok("/test https://www.bitballoon.com/test=hello 301!");

    // Assert
    assert_eq!(rule.to, "https://www.bitballoon.com/test=hello");
    assert_eq!(rule.status, Some(301));
    assert!(rule.force);
    assert!(rule.query.is_empty());
}

#[test]
fn parse_forward_rule() {
    // Act
    let rule = parse_ok("/admin/* 200");

    // Assert
    assert_eq!(
        rule,
        Redirect {
            status: Some(200),
            ..redirect("/admin/*", "/admin/:splat")
        }
    );
}

#[test]
fn parse_forced_forward_rule() {
    // Act
    let rule = parse_ok("/admin/* 200!");

    // Assert
    assert_eq!(
        rule,
        Redirect {
            status: Some(200),
            force: true,
            ..redirect("/admin/*", "/admin/:splat")
        }
    );
}

#[test]
fn parse_forward_rule_with_conditions() {
    // Act
    let rule = parse_ok("/member/* 200 Role=admin,member");

    // Assert
    assert_eq!(rule.to, "/member/:splat");
    assert_eq!(
        rule.conditions,
        Conditions::from([("role".to_string(), strings(&["admin", "member"]))])
    );
}

#[test]
fn parse_splat_source_with_explicit_destination() {
    // Act
    let rule = parse_ok("/* https://www.bitballoon.com/:splat 301");

    // Assert
    assert_eq!(rule.to, "https://www.bitballoon.com/:splat");
    assert_eq!(rule.status, Some(301));
    assert!(!rule.proxy);
}

#[test]
fn parse_query_and_conditions() {
    // Act
    let rule = parse_ok("/donate source=:source email=:email /donate/usa 302 Country=us");

    // Assert
    assert_eq!(
        rule.query,
        QueryMap::from([
            ("source".to_string(), ":source".to_string()),
            ("email".to_string(), ":email".to_string()),
        ])
    );
    assert_eq!(rule.to, "/donate/usa");
    assert_eq!(rule.status, Some(302));
    assert_eq!(
        rule.conditions,
        Conditions::from([("country".to_string(), strings(&["us"]))])
    );
}

#[test]
fn parse_query_value_may_contain_slash() {
    // Act
    let rule = parse_ok("/ _escaped_fragment_=/about /about 301");

    // Assert
    assert_eq!(
        rule.query,
        QueryMap::from([("_escaped_fragment_".to_string(), "/about".to_string())])
    );
    assert_eq!(rule.to, "/about");
}

#[test]
fn parse_comma_joined_condition_values() {
    // Act
    let rule = parse_ok("/ /china 302 Country=ch,tw Language=en");

    // Assert
    assert_eq!(
        rule.conditions,
        Conditions::from([
            ("country".to_string(), strings(&["ch", "tw"])),
            ("language".to_string(), strings(&["en"])),
        ])
    );
}

#[test]
fn parse_proxy_rule() {
    // Act
    let rule = parse_ok("/api/* https://api.bitballoon.com/* 200");

    // Assert
    assert!(rule.proxy);
    assert_eq!(rule.to, "https://api.bitballoon.com/*");
}

#[test]
fn parse_status_200_to_path_is_not_proxy() {
    assert!(!parse_ok("/pass-through / 200").proxy);
}

#[test]
fn parse_signed_rule() {
    // Act
    let rule = parse_ok("/api/* https://api.example.com/:splat 200! Sign=API_SECRET");

    // Assert
    assert_eq!(rule.signed.as_deref(), Some("API_SECRET"));
    assert!(rule.conditions.is_empty());
    assert!(rule.proxy);
    assert!(rule.force);
}

#[test]
fn parse_signed_key_is_case_insensitive() {
    assert_eq!(
        parse_ok("/api/* https://api.example.com/:splat 200 signed=KEY").signed,
        Some("KEY".to_string())
    );
    assert_eq!(
        parse_ok("/api/* https://api.example.com/:splat 200 SIGN=KEY").signed,
        Some("KEY".to_string())
    );
}

#[test]
fn parse_absolute_source() {
    // Act
    let rule = parse_ok("http://hello.bitballoon.com/* http://www.hello.com/:splat");

    // Assert
    assert_eq!(
        rule,
        Redirect {
            scheme: Some("http".to_string()),
            host: Some("hello.bitballoon.com".to_string()),
            ..redirect("/*", "http://www.hello.com/:splat")
        }
    );
}

#[test]
fn parse_without_destination_fails() {
    assert_eq!(parse_err("/a b=c d=e"), RuleError::MissingDestination);
}

#[test]
fn parse_splat_source_with_redirect_status_needs_destination() {
    assert_eq!(parse_err("/old/* 301"), RuleError::MissingDestination);
}

#[test]
fn parse_forward_status_without_splat_needs_destination() {
    assert_eq!(parse_err("/old 200"), RuleError::MissingDestination);
}

#[test]
fn parse_non_numeric_status_fails() {
    assert_eq!(
        parse_err("/a /b Country=us"),
        RuleError::InvalidStatus {
            token: "Country=us".to_string()
        }
    );
}

#[test]
fn parse_out_of_range_status_fails() {
    assert_eq!(
        parse_err("/a /b 700000"),
        RuleError::InvalidStatus {
            token: "700000".to_string()
        }
    );
}

#[test]
fn parse_reserved_source_fails() {
    assert!(matches!(
        parse_err("/.netlify/functions/* /api/:splat 200"),
        RuleError::InvalidSourcePath { .. }
    ));
    assert!(matches!(
        parse_err("https://example.com/.netlify/x /y"),
        RuleError::InvalidSourcePath { .. }
    ));
}

#[test]
fn parse_malformed_absolute_source_fails() {
    assert!(matches!(
        parse_err("http://[::1/a /b"),
        RuleError::InvalidUrl { .. }
    ));
}
