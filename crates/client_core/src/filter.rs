use chrono::{DateTime, NaiveDate};
use shared::domain::Employee;

/// Parses a hire date as the remote store serves it.
///
/// The API returns both plain `YYYY-MM-DD` values and full RFC 3339
/// timestamps; anything else counts as unparseable.
pub fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|timestamp| timestamp.date_naive())
}

/// Returns the records whose hire date falls inside the inclusive range,
/// preserving input order.
///
/// An absent bound is unconstrained on that side; with no bounds at all the
/// input comes back whole. A record with a missing or unparseable hire date
/// is excluded as soon as either bound is set, so an invalid date is never
/// silently compared.
pub fn filter_by_range(
    records: &[Employee],
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<Employee> {
    if start.is_none() && end.is_none() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|employee| {
            let Some(hired) = parse_hire_date(&employee.hire_date) else {
                return false;
            };
            start.map_or(true, |bound| hired >= bound) && end.map_or(true, |bound| hired <= bound)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "tests/filter_tests.rs"]
mod tests;
