//! Integration tests for clause parsing and classification

mod common;

use common::{clause, init_tracing, load_fixture, ORDERS};
use mbql_filter::{ClauseError, FilterClause, StructuredQuery};
use serde_json::json;

#[test]
fn test_exactly_one_kind_or_invalid() {
    init_tracing();
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let clauses = vec![
        clause(json!([">", ["field", 14, null], 100])),
        clause(json!(["between", ["field", 14, null], 10, 20])),
        clause(json!([null, ["field", 14, null]])),
        clause(json!(["segment", 1])),
        clause(json!(["segment", "gaid::-4"])),
        clause(json!(["and", [">", ["field", 14, null], 100], ["segment", 1]])),
        clause(json!(["contains", ["field", 21, {"source-field": 12}], ["concat", "a", "b"]])),
        clause(json!(["=", ["expression", "Discounted"], 5])),
        clause(json!([])),
    ];

    for c in &clauses {
        let kinds = [c.is_standard(), c.is_segment(), c.is_custom()]
            .iter()
            .filter(|k| **k)
            .count();
        if kinds == 0 {
            assert!(!c.is_valid(&query), "unclassified clause must be invalid: {:?}", c);
        } else {
            assert_eq!(kinds, 1, "clause has more than one kind: {:?}", c);
        }
    }
}

#[test]
fn test_unset_operator_is_standard() {
    let c = clause(json!([null, ["field", 14, null]]));
    assert!(c.is_standard());
    assert!(c.is_field_filter());
    assert_eq!(c.operator_name(), None);
}

#[test]
fn test_unknown_operator_is_custom() {
    let c = clause(json!(["regex-match", ["field", 21, null], "^W"]));
    assert!(c.is_custom());
    assert_eq!(c.operator_name(), Some("regex-match"));
    assert!(c.arguments().is_empty());
}

#[test]
fn test_malformed_input() {
    assert!(matches!(
        FilterClause::from_mbql(&json!("segment")),
        Err(ClauseError::NotAnArray(_))
    ));
    assert!(matches!(
        FilterClause::from_mbql(&json!([42, ["field", 1, null]])),
        Err(ClauseError::InvalidOperator(_))
    ));
    assert!(matches!(
        FilterClause::from_mbql(&json!(["segment", true])),
        Err(ClauseError::InvalidSegmentId(_))
    ));
}

#[test]
fn test_serde_through_mbql() {
    let value = json!(["contains", ["field", 21, {"source-field": 12}], "Widget", {"case-sensitive": false}]);
    let c: FilterClause = serde_json::from_value(value.clone()).unwrap();
    assert!(c.is_standard());
    assert_eq!(serde_json::to_value(&c).unwrap(), value);
}

#[test]
fn test_field_resolution() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let c = clause(json!(["=", ["field", 22, {"source-field": 12}], "Gadget"]));
    let dimension = c.dimension(&query).unwrap();
    assert_eq!(dimension.display_name(), "Category");
    assert_eq!(c.field(&query).unwrap().name, "CATEGORY");

    let operators: Vec<String> = c
        .filter_operators(&query)
        .unwrap()
        .into_iter()
        .map(|op| op.name)
        .collect();
    assert_eq!(&operators[..4], &["=", "!=", "contains", "does-not-contain"]);
    assert!(c.is_operator(&query, "="));
    assert!(!c.is_operator(&query, "!="));
    assert!(c.operator(&query, ">").is_none());

    let unknown = clause(json!(["=", ["field", 999, null], 1]));
    assert!(unknown.dimension(&query).is_none());
    assert!(unknown.current_operator(&query).is_none());
    assert!(unknown.filter_operators(&query).is_none());
}

#[test]
fn test_starting_from_resolves_inner_field() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);
    let c = clause(json!([
        "between",
        ["+", ["field", 15, {"temporal-unit": "month"}], ["interval", 12, "month"]],
        ["relative-datetime", -3, "month"],
        ["relative-datetime", 0, "month"]
    ]));
    assert!(c.is_starting_from());
    assert_eq!(c.dimension(&query).unwrap().display_name(), "Created At");
    assert!(c.is_valid(&query));
}
