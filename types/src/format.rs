//! Display formatting shared by the dashboards.

use jiff::{Timestamp, tz::TimeZone};

/// Format whole rupees the way `en-IN` does: `₹` prefix, no fraction digits, and the
/// last three digits grouped separately from the pairs before them (`₹12,34,567`).
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("{sign}₹{}", group_indian(&digits))
}

/// Amounts that are absent or zero read as "not set" on the dashboards.
pub fn money(amount: Option<f64>) -> Option<String> {
    amount.filter(|a| *a != 0.0).map(format_inr)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Avatar initials from a first and last name.
pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .take(1)
        .chain(last_name.chars().take(1))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Calendar date in UTC, e.g. "Mar 02, 2024".
pub fn short_date(timestamp: Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::UTC)
        .strftime("%b %d, %Y")
        .to_string()
}
