//! Integration tests for quick filter drills on a clicked cell

mod common;

use common::{init_tracing, load_fixture, ORDERS, REVIEWS};
use mbql_filter::{quick_filter_drills, FieldRef, QuickFilterDrill, StructuredQuery};
use serde_json::json;

fn titles(drills: &[QuickFilterDrill]) -> Vec<&str> {
    drills.iter().map(|d| d.title.as_str()).collect()
}

#[test]
fn test_short_text_cell() {
    init_tracing();
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    let drills = quick_filter_drills(&query, &FieldRef::id(52), &json!("christ"));
    assert_eq!(titles(&drills), vec!["Is christ", "Is not christ"]);
    assert_eq!(drills[0].clause.to_mbql(), json!(["=", ["field", 52, null], "christ"]));
    assert_eq!(drills[1].clause.to_mbql(), json!(["!=", ["field", 52, null], "christ"]));
    assert!(drills.iter().all(|d| d.clause.is_valid(&query)));
}

#[test]
fn test_number_cell() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    let drills = quick_filter_drills(&query, &FieldRef::id(53), &json!(5));
    assert_eq!(titles(&drills), vec!["<", ">", "=", "≠"]);
    assert_eq!(drills[3].clause.to_mbql(), json!(["!=", ["field", 53, null], 5]));
}

#[test]
fn test_long_text_cell() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    // Description columns are matched by substring regardless of length
    let drills = quick_filter_drills(&query, &FieldRef::id(54), &json!("Ad perspiciatis quis"));
    assert_eq!(titles(&drills), vec!["Contains…", "Does not contain…"]);
    assert_eq!(
        drills[0].clause.to_mbql(),
        json!(["contains", ["field", 54, null], null, {"case-sensitive": false}])
    );
    // The user still has to type the text
    assert!(!drills[0].clause.is_valid(&query));

    let long_name = "abbey-heidenreich-the-second";
    let drills = quick_filter_drills(&query, &FieldRef::id(52), &json!(long_name));
    assert_eq!(titles(&drills), vec!["Contains…", "Does not contain…"]);
}

#[test]
fn test_date_cell() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    let drills = quick_filter_drills(&query, &FieldRef::id(55), &json!("2024-05-15T00:00:00"));
    assert_eq!(titles(&drills), vec!["Before", "After", "On", "Not on"]);
    assert_eq!(
        drills[0].clause.to_mbql(),
        json!(["<", ["field", 55, null], "2024-05-15T00:00:00"])
    );
}

#[test]
fn test_null_cell() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    let drills = quick_filter_drills(&query, &FieldRef::id(53), &json!(null));
    assert_eq!(titles(&drills), vec!["Is empty", "Not empty"]);
    assert_eq!(drills[0].clause.to_mbql(), json!(["is-null", ["field", 53, null]]));
}

#[test]
fn test_key_and_unknown_cells() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    assert!(quick_filter_drills(&query, &FieldRef::id(50), &json!(1)).is_empty());
    assert!(quick_filter_drills(&query, &FieldRef::id(51), &json!(1)).is_empty());
    assert!(quick_filter_drills(&query, &FieldRef::id(999), &json!(1)).is_empty());
}

#[test]
fn test_boolean_cell() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let drills = quick_filter_drills(&query, &FieldRef::id(18), &json!(true));
    assert_eq!(titles(&drills), vec!["=", "≠"]);
    assert_eq!(drills[0].clause.to_mbql(), json!(["=", ["field", 18, null], true]));
}

#[test]
fn test_drill_is_added_to_query() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, REVIEWS);

    let drill = quick_filter_drills(&query, &FieldRef::id(53), &json!(4))
        .into_iter()
        .find(|d| d.title == ">")
        .unwrap();
    let query = query.apply(drill.clause.add_to_query()).unwrap();
    assert_eq!(
        query.to_mbql(),
        json!({"source-table": 4, "filter": [">", ["field", 53, null], 4]})
    );
}
