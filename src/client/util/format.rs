//! Display formatting for prices and dates.

use chrono::{DateTime, Utc};

/// Formats a price as Indian rupees with en-IN digit grouping: the last
/// three digits form one group, every group above them has two digits
/// (`₹12,34,567.89`). Always renders two decimal places.
pub fn format_price(price: f64) -> String {
    let paise = (price.abs() * 100.0).round() as u64;
    let rupees = paise / 100;
    let fraction = paise % 100;
    let sign = if price < 0.0 && paise > 0 { "-" } else { "" };

    format!("{sign}₹{}.{fraction:02}", group_indian(&rupees.to_string()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}

/// Formats a timestamp as an en-IN short date, e.g. `1 Jun 2024`.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %b %Y").to_string()
}
