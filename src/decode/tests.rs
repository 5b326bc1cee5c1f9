//! Tests for response unwrapping

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

const ORGS: RecordUnwrap = RecordUnwrap::MappingValues {
    key: "organizations",
};
const REPOS: RecordUnwrap = RecordUnwrap::MappingValues {
    key: "repositories",
};

#[test]
fn test_array_unwrap() {
    let body = json!([
        {"id": "r1", "url": "https://socket.dev/reports/r1"},
        {"id": "r2", "url": "https://socket.dev/reports/r2"}
    ]);

    let records = RecordUnwrap::Array.records("reports", &body).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "r1");
    assert_eq!(records[1]["id"], "r2");
}

#[test]
fn test_empty_array_yields_zero_records() {
    let records = RecordUnwrap::Array.records("reports", &json!([])).unwrap();
    assert!(records.is_empty());
}

#[test_case(json!({"id": "r1"}) ; "object body")]
#[test_case(json!("oops") ; "string body")]
#[test_case(json!(null) ; "null body")]
fn test_array_unwrap_rejects_non_array(body: serde_json::Value) {
    let err = RecordUnwrap::Array.records("reports", &body).unwrap_err();
    assert!(err.to_string().contains("reports"));
    assert!(err.to_string().contains("expected a JSON array"));
}

#[test]
fn test_mapping_values_discards_keys() {
    let body = json!({
        "organizations": {
            "a": {"id": "1", "name": "Acme", "image": "", "plan": "free", "slug": "acme"}
        }
    });

    let records = ORGS.records("organizations", &body).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "1");
    assert_eq!(records[0]["name"], "Acme");
    // The outer key "a" must not leak into the record
    assert!(records[0].get("a").is_none());
}

#[test]
fn test_mapping_values_preserve_source_order() {
    let body: serde_json::Value = serde_json::from_str(
        r#"{"organizations": {
            "z": {"slug": "zeta"},
            "a": {"slug": "alpha"},
            "m": {"slug": "mid"}
        }}"#,
    )
    .unwrap();

    let records = ORGS.records("organizations", &body).unwrap();
    let slugs: Vec<&str> = records
        .iter()
        .map(|r| r["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_empty_mapping_yields_zero_records() {
    let body = json!({"repositories": {}});
    let records = REPOS.records("repositories", &body).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_missing_key_is_attributable_error() {
    let body = json!({"unexpected": {}});
    let err = ORGS.records("organizations", &body).unwrap_err();

    match &err {
        crate::error::Error::ResponseShape { stream, message } => {
            assert_eq!(stream, "organizations");
            assert!(message.contains("missing key 'organizations'"));
        }
        other => panic!("Expected ResponseShape error, got: {other}"),
    }
}

#[test]
fn test_mapping_key_wrong_type() {
    let body = json!({"repositories": [1, 2, 3]});
    let err = REPOS.records("repositories", &body).unwrap_err();
    assert!(err
        .to_string()
        .contains("'repositories' is not an object mapping"));
}

#[test]
fn test_mapping_unwrap_rejects_array_body() {
    let err = ORGS.records("organizations", &json!([])).unwrap_err();
    assert!(err.to_string().contains("expected a JSON object"));
}

#[test]
fn test_unwrap_count_matches_entry_count() {
    let mut mapping = serde_json::Map::new();
    for i in 0..17 {
        mapping.insert(format!("key{i}"), json!({"id": i.to_string()}));
    }
    let body = json!({"repositories": mapping});

    let records = REPOS.records("repositories", &body).unwrap();
    assert_eq!(records.len(), 17);
}
