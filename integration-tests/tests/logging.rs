use integration_tests::harness::{TestSite, capture_events};
use pretty_assertions::assert_eq;
use tracing::Level;

#[test]
fn rejected_rules_are_logged_as_warnings() {
    // Arrange
    let site = TestSite::new();
    site.write("_redirects", "/ok /fine\n/broken\n");

    // Act
    let (loaded, events) = capture_events(|| site.load(&["_redirects"], None).unwrap());

    // Assert
    assert_eq!(loaded.redirects.len(), 1);

    let rejected: Vec<_> = events
        .iter()
        .filter(|e| e.level == Level::WARN && e.message() == Some("rejected redirect"))
        .collect();
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].field("index"), Some("2"));
    assert_eq!(
        rejected[0].field("reason"),
        Some("missing destination path/URL")
    );
    assert!(rejected[0].target.starts_with("detour_core"));
}

#[test]
fn load_summary_is_logged_at_info() {
    // Arrange
    let site = TestSite::new();
    site.write("_redirects", "/a /b\n/c /d\n");
    site.write("netlify.toml", "[[redirects]]\nfrom = \"/e\"\nto = \"/f\"\n");

    // Act
    let (_, events) =
        capture_events(|| site.load(&["_redirects"], Some("netlify.toml")).unwrap());

    // Assert
    let summary = events
        .iter()
        .find(|e| e.level == Level::INFO && e.message() == Some("loaded redirects"))
        .expect("no load summary event");
    assert_eq!(summary.field("from_files"), Some("2"));
    assert_eq!(summary.field("from_config"), Some("1"));
    assert_eq!(summary.field("total"), Some("3"));
    assert_eq!(summary.field("errors"), Some("0"));
}
