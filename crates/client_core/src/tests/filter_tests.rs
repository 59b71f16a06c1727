use super::*;
use shared::domain::EmployeeId;

fn employee(id: &str, hire_date: &str) -> Employee {
    Employee {
        id: EmployeeId::from(id),
        name: format!("employee-{id}"),
        position: "Analista".to_string(),
        salary: 1000.0,
        sex: "F".to_string(),
        hire_date: hire_date.to_string(),
    }
}

fn date(raw: &str) -> NaiveDate {
    raw.parse().expect("test date")
}

#[test]
fn parses_plain_dates_and_rfc3339_timestamps() {
    assert_eq!(parse_hire_date("2023-06-15"), Some(date("2023-06-15")));
    assert_eq!(
        parse_hire_date("2023-06-15T08:30:00Z"),
        Some(date("2023-06-15"))
    );
    assert_eq!(parse_hire_date(" 2023-06-15 "), Some(date("2023-06-15")));
    assert_eq!(parse_hire_date(""), None);
    assert_eq!(parse_hire_date("15/06/2023"), None);
}

#[test]
fn no_bounds_returns_the_full_set_order_preserved() {
    let records = vec![
        employee("c", "2024-01-01"),
        employee("a", "2023-01-01"),
        employee("b", "garbage"),
    ];
    let filtered = filter_by_range(&records, None, None);
    assert_eq!(filtered, records);
}

#[test]
fn inclusive_on_both_bounds() {
    let records = vec![
        employee("a", "2023-01-01"),
        employee("b", "2023-06-15"),
        employee("c", "2024-01-01"),
    ];
    let filtered = filter_by_range(&records, Some(date("2023-01-01")), Some(date("2023-12-31")));
    assert_eq!(filtered, records[..2]);
}

#[test]
fn exact_boundary_dates_are_kept() {
    let records = vec![employee("a", "2023-01-01"), employee("b", "2023-12-31")];
    let filtered = filter_by_range(&records, Some(date("2023-01-01")), Some(date("2023-12-31")));
    assert_eq!(filtered.len(), 2);
}

#[test]
fn start_only_is_unconstrained_above() {
    let records = vec![
        employee("a", "2023-01-01"),
        employee("b", "2023-06-15"),
        employee("c", "2024-01-01"),
    ];
    let filtered = filter_by_range(&records, Some(date("2023-06-15")), None);
    assert_eq!(filtered, records[1..]);
}

#[test]
fn end_only_is_unconstrained_below() {
    let records = vec![
        employee("a", "2023-01-01"),
        employee("b", "2023-06-15"),
        employee("c", "2024-01-01"),
    ];
    let filtered = filter_by_range(&records, None, Some(date("2023-06-15")));
    assert_eq!(filtered, records[..2]);
}

#[test]
fn unparseable_hire_date_is_excluded_once_any_bound_is_set() {
    let records = vec![
        employee("a", "2023-06-15"),
        employee("bad", "mañana"),
        employee("empty", ""),
    ];

    let filtered = filter_by_range(&records, Some(date("2023-01-01")), None);
    assert_eq!(filtered, records[..1]);

    let filtered = filter_by_range(&records, None, Some(date("2024-01-01")));
    assert_eq!(filtered, records[..1]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(filter_by_range(&[], Some(date("2023-01-01")), None).is_empty());
    assert!(filter_by_range(&[], None, None).is_empty());
}
