//! Human-readable formatting helpers for values, addresses, and dates.

use chrono::{DateTime, Utc};

use crate::WalletAddress;

/// Format an economic value with thousands separators and the Infinity
/// currency suffix. An absent value renders as `0 ∞`.
pub fn format_value(value: Option<i64>) -> String {
    match value {
        Some(value) => format!("{} ∞", group_thousands(value)),
        None => "0 ∞".to_string(),
    }
}

/// Shorten a wallet address to its first six and last four characters.
pub fn format_wallet_address(address: &WalletAddress) -> String {
    let raw = address.as_str();
    if raw.len() <= 10 {
        return raw.to_string();
    }
    format!("{}...{}", &raw[..6], &raw[raw.len() - 4..])
}

/// Render a timestamp relative to `now`: "just now", "5m ago", "3h ago",
/// "2d ago", or the calendar date once it is a week old.
pub fn format_relative_date(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 7 {
        format!("{}d ago", days)
    } else {
        timestamp.format("%Y-%m-%d").to_string()
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let lead = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(0)), "0 ∞");
        assert_eq!(format_value(Some(950)), "950 ∞");
        assert_eq!(format_value(Some(1100)), "1,100 ∞");
        assert_eq!(format_value(Some(1_234_567)), "1,234,567 ∞");
        assert_eq!(format_value(Some(-9900)), "-9,900 ∞");
        assert_eq!(format_value(None), "0 ∞");
    }

    #[test]
    fn test_format_wallet_address() {
        let address: WalletAddress = "0xa1b2c3d4e5f6a7b8c9d0".parse().expect("valid address");
        assert_eq!(format_wallet_address(&address), "0xa1b2...c9d0");
    }

    #[test]
    fn test_format_relative_date() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("valid");
        let at = |secs: i64| now - chrono::Duration::seconds(secs);

        assert_eq!(format_relative_date(at(30), now), "just now");
        assert_eq!(format_relative_date(at(5 * 60), now), "5m ago");
        assert_eq!(format_relative_date(at(3 * 3600), now), "3h ago");
        assert_eq!(format_relative_date(at(2 * 86_400), now), "2d ago");
        assert_eq!(format_relative_date(at(10 * 86_400), now), "2024-06-05");
    }
}
