// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DateRange, DomainError, format_date, month_bounds, parse_date};
use time::{Date, Month};

#[test]
fn test_parse_date_accepts_iso_8601() {
    let date: Date = parse_date("2024-06-01").unwrap();
    assert_eq!(date.year(), 2024);
    assert_eq!(date.month(), Month::June);
    assert_eq!(date.day(), 1);
}

#[test]
fn test_parse_date_rejects_malformed_strings() {
    for value in ["", "2024-13-01", "2024-06-32", "06/01/2024", "2024-6-1"] {
        assert!(parse_date(value).is_err(), "expected '{value}' to be rejected");
    }
}

#[test]
fn test_format_date_zero_pads() {
    let date: Date = Date::from_calendar_date(2024, Month::June, 1).unwrap();
    assert_eq!(format_date(date), "2024-06-01");
}

#[test]
fn test_parse_format_round_trip() {
    let date: Date = parse_date("2024-12-31").unwrap();
    assert_eq!(format_date(date), "2024-12-31");
}

#[test]
fn test_month_bounds_full_month() {
    let (first, last) = month_bounds(2024, 6).unwrap();
    assert_eq!(format_date(first), "2024-06-01");
    assert_eq!(format_date(last), "2024-06-30");
}

#[test]
fn test_month_bounds_leap_february() {
    let (_, last) = month_bounds(2024, 2).unwrap();
    assert_eq!(format_date(last), "2024-02-29");

    let (_, last) = month_bounds(2023, 2).unwrap();
    assert_eq!(format_date(last), "2023-02-28");
}

#[test]
fn test_month_bounds_rejects_invalid_month() {
    assert!(matches!(
        month_bounds(2024, 0).unwrap_err(),
        DomainError::InvalidMonth { month: 0 }
    ));
    assert!(matches!(
        month_bounds(2024, 13).unwrap_err(),
        DomainError::InvalidMonth { month: 13 }
    ));
}

#[test]
fn test_date_range_rejects_inverted_bounds() {
    let start: Date = parse_date("2024-06-10").unwrap();
    let end: Date = parse_date("2024-06-01").unwrap();
    assert!(matches!(
        DateRange::new(start, end).unwrap_err(),
        DomainError::InvalidDateRange { .. }
    ));
}

#[test]
fn test_date_range_contains_is_inclusive() {
    let start: Date = parse_date("2024-06-01").unwrap();
    let end: Date = parse_date("2024-06-30").unwrap();
    let range: DateRange = DateRange::new(start, end).unwrap();

    assert!(range.contains(start));
    assert!(range.contains(end));
    assert!(range.contains(parse_date("2024-06-15").unwrap()));
    assert!(!range.contains(parse_date("2024-05-31").unwrap()));
    assert!(!range.contains(parse_date("2024-07-01").unwrap()));
}

#[test]
fn test_single_day_range_is_valid() {
    let day: Date = parse_date("2024-06-01").unwrap();
    let range: DateRange = DateRange::new(day, day).unwrap();
    assert!(range.contains(day));
}
