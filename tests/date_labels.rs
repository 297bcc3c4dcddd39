//! Integration tests for date range labels and date picker conversion

mod common;

use common::{clause, load_fixture, load_settings, ORDERS};
use mbql_filter::{FormatSettings, StructuredQuery};
use serde_json::json;

#[test]
fn test_range_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let cases = [
        (json!(["between", ["field", 15, {"temporal-unit": "week"}], "2024-01-01", "2024-01-07"]), "December 31, 2023 – January 13, 2024"),
        (json!(["=", ["field", 15, {"temporal-unit": "week"}], "2024-03-04"]), "March 3–9, 2024"),
        (json!(["between", ["field", 15, null], "2024-03-03", "2024-03-09"]), "March 3–9, 2024"),
        (json!(["between", ["field", 15, {"temporal-unit": "day"}], "2024-01-29", "2024-02-04"]), "January 29 – February 4, 2024"),
        (json!(["between", ["field", 15, {"temporal-unit": "month"}], "2024-01-01", "2024-03-15"]), "January–March 2024"),
        (json!(["between", ["field", 15, {"temporal-unit": "quarter"}], "2024-01-01", "2024-08-01"]), "Q1–Q3 2024"),
        (json!(["between", ["field", 15, {"temporal-unit": "year"}], "2022-01-01", "2024-06-01"]), "2022–2024"),
    ];
    for (value, expected) in cases {
        assert_eq!(clause(value.clone()).better_date_label(&query).as_deref(), Some(expected), "{}", value);
    }
}

#[test]
fn test_date_part_labels() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let cases = [
        ("minute-of-hour", "2024-01-01T10:32:00", "minute 32"),
        ("hour-of-day", "2024-01-01T10:32:00", "hour 10"),
        ("day-of-month", "2024-01-16", "16th day of the month"),
        ("day-of-year", "2024-02-01", "32nd day of the year"),
        ("week-of-year", "2024-01-16", "3rd week of the year"),
    ];
    for (unit, arg, expected) in cases {
        let c = clause(json!(["=", ["field", 15, {"temporal-unit": unit}], arg]));
        assert_eq!(c.better_date_label(&query).as_deref(), Some(expected), "{}", unit);
    }
}

#[test]
fn test_no_better_label() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    for value in [
        json!(["=", ["field", 15, {"temporal-unit": "day"}], "2024-01-16"]),
        json!(["<", ["field", 15, {"temporal-unit": "week"}], "2024-01-16"]),
        json!(["between", ["field", 15, {"temporal-unit": "hour"}], "2024-01-16T10:00:00", "2024-01-16T12:00:00"]),
        json!(["between", ["field", 15, null], "2024-01-16", 5]),
        json!(["time-interval", ["field", 15, null], -30, "day"]),
        json!(["not-null", ["field", 15, null]]),
    ] {
        assert_eq!(clause(value.clone()).better_date_label(&query), None, "{}", value);
    }
}

#[test]
fn test_date_args() {
    let c = clause(json!(["between", ["field", 15, null], "2024-01-16", "2024-02-01T10:00:00"]));
    let args = c.date_args().unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(args[1].format("%Y-%m-%d %H:%M").to_string(), "2024-02-01 10:00");

    assert!(clause(json!(["=", ["field", 15, null], "yesterday"])).date_args().is_none());
    assert!(clause(json!(["=", ["field", 15, null], ["relative-datetime", -1, "day"]])).date_args().is_none());
    assert!(clause(json!(["not-null", ["field", 15, null]])).date_args().is_none());
}

#[test]
fn test_picker_coarse_units() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS);

    let month = clause(json!(["=", ["field", 15, {"temporal-unit": "month"}], "2024-02-01"]));
    assert_eq!(
        month.to_date_picker_filter(&query).to_mbql(),
        json!(["between", ["field", 15, {"temporal-unit": "day"}], "2024-02-01", "2024-02-29"])
    );

    let quarter = clause(json!(["between", ["field", 15, {"temporal-unit": "quarter"}], "2024-05-01", "2024-02-10"]));
    assert_eq!(
        quarter.to_date_picker_filter(&query).to_mbql(),
        json!(["between", ["field", 15, {"temporal-unit": "day"}], "2024-01-01", "2024-06-30"])
    );

    let before = clause(json!(["<", ["field", 15, {"temporal-unit": "week"}], "2024-03-06"]));
    assert_eq!(
        before.to_date_picker_filter(&query).to_mbql(),
        json!(["<", ["field", 15, {"temporal-unit": "day"}], "2024-03-03"])
    );

    let after = clause(json!([">", ["field", 15, {"temporal-unit": "week"}], "2024-03-06"]));
    assert_eq!(
        after.to_date_picker_filter(&query).to_mbql(),
        json!([">", ["field", 15, {"temporal-unit": "day"}], "2024-03-09"])
    );

    let excluded = clause(json!(["!=", ["field", 15, {"temporal-unit": "year"}], "2024-01-01"]));
    assert_eq!(excluded.to_date_picker_filter(&query), excluded);
}

#[test]
fn test_picker_week_start_setting() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS).with_settings(load_settings("settings.yaml"));

    let week = clause(json!(["=", ["field", 15, {"temporal-unit": "week"}], "2024-03-06"]));
    assert_eq!(
        week.to_date_picker_filter(&query).to_mbql(),
        json!(["between", ["field", 15, {"temporal-unit": "day"}], "2024-03-04", "2024-03-10"])
    );
    assert_eq!(week.better_date_label(&query).as_deref(), Some("March 4–10, 2024"));
}

#[test]
fn test_picker_fine_units() {
    let metadata = load_fixture("sample.yaml");
    let query = StructuredQuery::new(&metadata, ORDERS).with_settings(FormatSettings::default());

    let day = clause(json!(["=", ["field", 15, null], "2024-02-01T10:30:00"]));
    assert_eq!(
        day.to_date_picker_filter(&query).to_mbql(),
        json!(["=", ["field", 15, {"temporal-unit": "day"}], "2024-02-01"])
    );

    let hour = clause(json!(["<", ["field", 15, {"temporal-unit": "hour"}], "2024-02-01T10:30"]));
    assert_eq!(
        hour.to_date_picker_filter(&query).to_mbql(),
        json!(["<", ["field", 15, {"temporal-unit": "hour"}], "2024-02-01T10:30:00"])
    );

    let extracted = clause(json!(["=", ["field", 15, {"temporal-unit": "day-of-week"}], "2024-02-01"]));
    assert_eq!(extracted.to_date_picker_filter(&query), extracted);

    let relative = clause(json!(["time-interval", ["field", 15, null], -30, "day"]));
    assert_eq!(relative.to_date_picker_filter(&query), relative);
}
