//! Integration tests for filter labels

mod common;

use common::{clause, load_fixture, load_settings, ORDERS};
use mbql_filter::{DisplayNameOptions, FilterClause, StructuredQuery};
use serde_json::json;

fn label(query: &StructuredQuery, value: serde_json::Value) -> String {
    clause(value).display_name(query, DisplayNameOptions::default())
}

#[test]
fn test_standard_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    assert_eq!(label(&query, json!([">", ["field", 14, null], 100])), "Total is greater than 100");
    assert_eq!(label(&query, json!(["between", ["field", 14, null], 10, 20])), "Total between 10 20");
    assert_eq!(label(&query, json!(["is-null", ["field", 14, null]])), "Total is empty");
    assert_eq!(
        label(&query, json!(["=", ["field", 22, {"source-field": 12}], "Gadget"])),
        "Category is Gadget"
    );
    assert_eq!(
        label(&query, json!(["contains", ["field", 21, {"source-field": 12}], "Widget", {"case-sensitive": false}])),
        "Title contains Widget"
    );
}

#[test]
fn test_label_parts_can_be_left_out() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);
    let c = clause(json!([">", ["field", 14, null], 100]));

    let without_dimension = DisplayNameOptions {
        include_dimension: false,
        include_operator: true,
    };
    assert_eq!(c.display_name(&query, without_dimension), "is greater than 100");

    let values_only = DisplayNameOptions {
        include_dimension: false,
        include_operator: false,
    };
    assert_eq!(c.display_name(&query, values_only), "100");
}

#[test]
fn test_unset_arguments_are_skipped() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);
    let c = clause(json!([">", ["field", 14, null]]));
    assert_eq!(c.display_name(&query, DisplayNameOptions::default()), "Total is greater than");
    assert_eq!(FilterClause::Empty.display_name(&query, DisplayNameOptions::default()), "Unknown Filter");
}

#[test]
fn test_multi_value_collapse() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);
    let c = clause(json!(["=", ["field", 14, null], 1, 2]));

    assert_eq!(c.formatted_arguments(&query, 1), vec!["2 selections"]);
    assert_eq!(c.formatted_arguments(&query, 5), vec!["1", "2"]);
    assert_eq!(c.display_name(&query, DisplayNameOptions::default()), "Total is equal to 2 selections");

    // Settings raise the threshold
    let relaxed = StructuredQuery::new(&metadata, ORDERS).with_settings(load_settings("settings.yaml"));
    assert_eq!(c.display_name(&relaxed, DisplayNameOptions::default()), "Total is equal to 1 2");
}

#[test]
fn test_hidden_and_compact_arguments() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);
    let inside = json!([
        "inside",
        ["field", 42, {"source-field": 11}],
        ["field", 43, {"source-field": 11}],
        37.774929,
        -122.419416,
        37.7,
        -122.5
    ]);
    assert_eq!(label(&query, inside), "Latitude is inside 37.77 -122.42 37.7 -122.5");
}

#[test]
fn test_segment_and_custom_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    assert_eq!(label(&query, json!(["segment", 1])), "Expensive orders");
    assert_eq!(label(&query, json!(["segment", 99])), "Unknown Segment");
    assert_eq!(
        label(&query, json!(["and", [">", ["field", 14, null], 100], ["segment", 1]])),
        "[Total] > 100 AND [Expensive orders]"
    );
    assert_eq!(
        label(&query, json!(["contains", ["field", 21, {"source-field": 12}], ["concat", "a", "b"]])),
        "contains([Title], concat(\"a\", \"b\"))"
    );
}

#[test]
fn test_date_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    // The week range already reads as "on"
    assert_eq!(
        label(&query, json!(["=", ["field", 15, {"temporal-unit": "week"}], "2024-03-04"])),
        "Created At March 3–9, 2024"
    );
    assert_eq!(
        label(&query, json!(["between", ["field", 15, {"temporal-unit": "week"}], "2024-01-01", "2024-01-07"])),
        "Created At is December 31, 2023 – January 13, 2024"
    );
    assert_eq!(
        label(&query, json!(["=", ["field", 15, {"temporal-unit": "month"}], "2024-02-01"])),
        "Created At is February 2024"
    );
    assert_eq!(
        label(&query, json!(["=", ["field", 15, {"temporal-unit": "day-of-month"}], "2024-01-16"])),
        "Created At is 16th day of the month"
    );
    assert_eq!(
        label(&query, json!(["<", ["field", 15, null], "2024-02-01T09:05:00"])),
        "Created At is before February 1, 2024, 9:05 AM"
    );
}

#[test]
fn test_relative_date_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    assert_eq!(
        label(&query, json!(["time-interval", ["field", 15, null], -30, "day"])),
        "Created At Previous 30 days"
    );
    // "Starting from" filters never show the operator
    assert_eq!(
        label(&query, json!([
            "between",
            ["+", ["field", 15, {"temporal-unit": "month"}], ["interval", 12, "month"]],
            ["relative-datetime", -3, "month"],
            ["relative-datetime", 0, "month"]
        ])),
        "Created At Previous 3 months This month"
    );
}

#[test]
fn test_time_style_setting() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS).with_settings(load_settings("settings.yaml"));
    assert_eq!(
        label(&query, json!(["=", ["field", 15, {"temporal-unit": "hour-of-day"}], 15])),
        "Created At is 15:00"
    );
}

#[test]
fn test_extreme_relative_counts() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    assert_eq!(
        label(&query, json!(["time-interval", ["field", 15, null], i64::MIN, "day"])),
        "Created At Previous 9223372036854775808 days"
    );
    assert_eq!(
        label(&query, json!([">", ["field", 15, null], ["relative-datetime", i64::MIN, "week"]])),
        "Created At is after 9223372036854775808 weeks ago"
    );
}
