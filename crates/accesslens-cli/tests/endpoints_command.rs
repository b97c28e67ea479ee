use accesslens_core::analysis::EndpointStats;
use std::path::PathBuf;

/// Helper to get path to test fixtures
fn fixture_path(filename: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("tests")
        .join("fixtures")
        .join(filename)
}

/// Test that endpoint tallies count every quoted request line
#[test]
fn test_analyze_endpoints_counts_requests() {
    // Arrange
    let input = fixture_path("sample.log");

    // Act
    let result = accesslens_cli::commands::endpoints::analyze_endpoints(&input);

    // Assert
    assert!(result.is_ok(), "Should successfully analyze log file");

    let stats: EndpointStats = result.unwrap();
    assert_eq!(stats.endpoints.total, 10);
    assert_eq!(stats.endpoints.unique, 6);
    assert_eq!(stats.endpoints.entries[0].key, "/api/users");
    assert_eq!(stats.endpoints.entries[0].count, 5);
}

/// Test that ties keep the order endpoints were first seen in
#[test]
fn test_endpoint_ties_keep_first_seen_order() {
    let stats =
        accesslens_cli::commands::endpoints::analyze_endpoints(&fixture_path("sample.log"))
            .unwrap();

    let keys: Vec<&str> = stats
        .endpoints
        .entries
        .iter()
        .map(|e| e.key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec![
            "/api/users",
            "/api/login",
            "/api/products",
            "/api/users/7",
            "/api/products/3",
            "/api/orders/1",
        ]
    );
}

/// Test that the method breakdown covers every supported verb
#[test]
fn test_analyze_endpoints_counts_methods() {
    let stats =
        accesslens_cli::commands::endpoints::analyze_endpoints(&fixture_path("sample.log"))
            .unwrap();

    assert_eq!(stats.methods.total, 10);
    assert_eq!(stats.methods.unique, 6);
    assert_eq!(stats.methods.entries[0].key, "GET");
    assert_eq!(stats.methods.entries[0].count, 5);
}

/// Test that the most accessed endpoint carries its share of traffic
#[test]
fn test_most_accessed_endpoint_percentage() {
    let stats =
        accesslens_cli::commands::endpoints::analyze_endpoints(&fixture_path("sample.log"))
            .unwrap();

    let top = stats.endpoints.top.expect("Should have a most accessed endpoint");
    assert_eq!(top.key, "/api/users");
    assert!((top.percentage - 50.0).abs() < 1e-9);
}

/// Test that an empty log yields zero totals and no most accessed endpoint
#[test]
fn test_empty_log_has_zero_totals() {
    let stats =
        accesslens_cli::commands::endpoints::analyze_endpoints(&fixture_path("empty.log"))
            .unwrap();

    assert_eq!(stats.endpoints.total, 0);
    assert_eq!(stats.endpoints.unique, 0);
    assert!(stats.endpoints.top.is_none());
    assert!(stats.methods.entries.is_empty());
}

/// Test that a missing file is an error rather than an empty report
#[test]
fn test_missing_file_is_error() {
    let result =
        accesslens_cli::commands::endpoints::analyze_endpoints(&fixture_path("missing.log"));
    assert!(result.is_err());
}
