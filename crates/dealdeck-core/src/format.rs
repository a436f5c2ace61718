//! Display formatting: rupee amounts and relative timestamps

use chrono::{DateTime, Utc};

/// Format whole rupees with Indian digit grouping, e.g. `₹1,29,999`.
pub fn format_rupees(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&amount.unsigned_abs().to_string()))
}

/// Indian grouping: last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut parts: Vec<&str> = Vec::new();
    let mut i = head.len();
    while i > 2 {
        parts.push(&head[i - 2..i]);
        i -= 2;
    }
    parts.push(&head[..i]);
    parts.reverse();
    format!("{},{}", parts.join(","), tail)
}

/// "Just now" / "Nm ago" / "Nh ago" / "Nd ago" buckets.
pub fn time_ago(from: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mins = (now - from).num_minutes();
    if mins < 1 {
        return "Just now".to_string();
    }
    if mins < 60 {
        return format!("{}m ago", mins);
    }
    let hours = mins / 60;
    if hours < 24 {
        return format!("{}h ago", hours);
    }
    format!("{}d ago", hours / 24)
}

/// Wall-clock label for the "last updated" readout, e.g. `14:05`.
pub fn clock_label(now: DateTime<chrono::Local>) -> String {
    now.format("%H:%M").to_string()
}

/// mm:ss countdown label.
pub fn countdown_label(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rupee_grouping() {
        assert_eq!(format_rupees(0), "₹0");
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1_000), "₹1,000");
        assert_eq!(format_rupees(15_999), "₹15,999");
        assert_eq!(format_rupees(100_000), "₹1,00,000");
        assert_eq!(format_rupees(129_999), "₹1,29,999");
        assert_eq!(format_rupees(1_234_567), "₹12,34,567");
        assert_eq!(format_rupees(10_000_000), "₹1,00,00,000");
        assert_eq!(format_rupees(-1_500), "-₹1,500");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap();
        let at = |secs: i64| now - chrono::Duration::seconds(secs);

        assert_eq!(time_ago(at(30), now), "Just now");
        assert_eq!(time_ago(at(90), now), "1m ago");
        assert_eq!(time_ago(at(59 * 60), now), "59m ago");
        assert_eq!(time_ago(at(60 * 60), now), "1h ago");
        assert_eq!(time_ago(at(23 * 3600), now), "23h ago");
        assert_eq!(time_ago(at(24 * 3600), now), "1d ago");
        assert_eq!(time_ago(at(3 * 24 * 3600), now), "3d ago");
        // A future timestamp never formats negative.
        assert_eq!(time_ago(at(-120), now), "Just now");
    }

    #[test]
    fn test_countdown_label() {
        assert_eq!(countdown_label(0), "0:00");
        assert_eq!(countdown_label(59), "0:59");
        assert_eq!(countdown_label(60), "1:00");
        assert_eq!(countdown_label(299), "4:59");
    }
}
