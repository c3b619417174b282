use crate::rules::tests::test_helpers::redirect;
use crate::rules::{
    Redirect, RuleError, dedup_keep_last, expect_list, merge_redirect_lists, merge_redirects,
};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn merge_empty_lists() {
    assert_eq!(merge_redirects(vec![], vec![]), Vec::<Redirect>::new());
}

#[test]
fn merge_keeps_primary_before_secondary() {
    // Arrange
    let primary = vec![redirect("/one", "/two")];
    let secondary = vec![redirect("/one", "/three")];

    // Act
    let merged = merge_redirects(primary, secondary);

    // Assert
    assert_eq!(
        merged,
        vec![redirect("/one", "/two"), redirect("/one", "/three")]
    );
}

#[test]
fn merge_keeps_last_duplicate() {
    // Arrange
    let r1 = redirect("/r1", "/x");
    let r2 = redirect("/r2", "/y");

    // Act
    let merged = merge_redirects(vec![r1.clone(), r2.clone()], vec![r1.clone()]);

    // Assert
    assert_eq!(merged, vec![r2, r1]);
}

#[test]
fn merge_is_idempotent() {
    // Arrange
    let a = vec![redirect("/a", "/1"), redirect("/b", "/2"), redirect("/a", "/1")];
    let b = vec![redirect("/b", "/2"), redirect("/c", "/3")];

    // Act
    let once = merge_redirects(a.clone(), b.clone());
    let again = merge_redirects(once.clone(), vec![]);
    let twice = merge_redirects(a, b);

    // Assert
    assert_eq!(again, once);
    assert_eq!(twice, once);
    assert_eq!(once.len(), 3);
}

#[test]
fn merge_only_collapses_exact_duplicates() {
    // Arrange
    let plain = redirect("/a", "/b");
    let forced = Redirect {
        force: true,
        ..redirect("/a", "/b")
    };

    // Act
    let merged = merge_redirects(vec![plain.clone()], vec![forced.clone()]);

    // Assert
    assert_eq!(merged, vec![plain, forced]);
}

#[test]
fn dedup_within_single_list() {
    // Arrange
    let a = redirect("/a", "/1");
    let b = redirect("/b", "/2");

    // Act
    let out = dedup_keep_last(vec![a.clone(), b.clone(), a.clone(), b.clone(), a.clone()]);

    // Assert
    assert_eq!(out, vec![b, a]);
}

#[test]
fn expect_list_rejects_non_arrays() {
    // Act
    let err = expect_list(&json!({ "from": "/a" })).unwrap_err();

    // Assert
    assert!(matches!(err, RuleError::InvalidListType { .. }));
    assert_eq!(expect_list(&json!([1, 2])).unwrap().len(), 2);
}

#[test]
fn merge_lists_of_canonical_objects() {
    // Arrange
    let primary = json!([
        { "path": "/a", "to": "/b", "status": 301 },
        { "path": "/c", "to": "/d" }
    ]);
    let secondary = json!([{ "path": "/a", "to": "/b", "status": 301, "force": false }]);

    // Act
    let merged = merge_redirect_lists(&primary, &secondary).unwrap();

    // Assert
    assert_eq!(
        merged,
        vec![
            redirect("/c", "/d"),
            Redirect {
                status: Some(301),
                ..redirect("/a", "/b")
            },
        ]
    );
}

#[test]
fn merge_lists_rejects_non_list_input() {
    // Act
    let err = merge_redirect_lists(&json!([]), &json!({ "path": "/a" })).unwrap_err();

    // Assert
    assert!(matches!(err, RuleError::InvalidListType { .. }));
}

#[test]
fn merge_lists_rejects_non_redirect_elements() {
    // Act
    let err = merge_redirect_lists(&json!(["/a /b"]), &json!([])).unwrap_err();

    // Assert
    assert_eq!(
        err,
        RuleError::MalformedRecord {
            found: "\"/a /b\"".to_string()
        }
    );
}

#[test]
fn merge_lists_rejects_reserved_source() {
    // Act
    let err = merge_redirect_lists(
        &json!([{ "path": "/.netlify/functions/x", "to": "/y" }]),
        &json!([]),
    )
    .unwrap_err();

    // Assert
    assert_eq!(
        err,
        RuleError::InvalidSourcePath {
            path: "/.netlify/functions/x".to_string()
        }
    );
}

#[test]
fn merge_lists_recomputes_proxy() {
    // Arrange
    let primary = json!([
        { "path": "/p", "to": "https://example.com", "status": 200, "proxy": false },
        { "path": "/q", "to": "/local", "status": 200, "proxy": true }
    ]);

    // Act
    let merged = merge_redirect_lists(&primary, &json!([])).unwrap();

    // Assert
    assert_eq!(
        merged,
        vec![
            Redirect {
                status: Some(200),
                proxy: true,
                ..redirect("/p", "https://example.com")
            },
            Redirect {
                status: Some(200),
                ..redirect("/q", "/local")
            },
        ]
    );
}

#[test]
fn merge_lists_keeps_headers() {
    // Arrange
    let primary = json!([{ "path": "/h", "to": "/i", "headers": { "X-From": "detour" } }]);

    // Act
    let merged = merge_redirect_lists(&primary, &json!([])).unwrap();

    // Assert
    assert_eq!(
        merged[0].headers.get("X-From").map(String::as_str),
        Some("detour")
    );
}
