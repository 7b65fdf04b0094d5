//! Display formatting helpers
//!
//! Pure functions shared by the inbox, detail view and top bar.

use chrono::{DateTime, Local, Utc};

/// Number of body characters shown in an inbox row
pub const PREVIEW_CHARS: usize = 100;

/// Format a timestamp relative to `now` (e.g., "2 hours ago")
pub fn format_distance_to_now(ts: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(ts);

    if duration.num_seconds() < 60 {
        "Just now".to_string()
    } else if duration.num_minutes() < 60 {
        plural(duration.num_minutes(), "minute")
    } else if duration.num_hours() < 24 {
        plural(duration.num_hours(), "hour")
    } else if duration.num_days() < 7 {
        plural(duration.num_days(), "day")
    } else {
        let local: DateTime<Local> = ts.into();
        local.format("%b %d").to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Format a timestamp in full for the message header, in local time
pub fn format_full_date(ts: DateTime<Utc>) -> String {
    let local: DateTime<Local> = ts.into();
    local.format("%A, %B %d, %Y at %H:%M").to_string()
}

/// Shorten an address to `head` leading and `tail` trailing characters
///
/// Addresses too short to benefit are returned unchanged.
pub fn shorten_address(address: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= head + tail + 3 {
        return address.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}

/// Two-letter avatar text (e.g., "alice.sol" -> "AL")
pub fn initials(name: &str) -> String {
    let text: String = name.chars().take(2).collect::<String>().to_uppercase();
    if text.is_empty() { "?".to_string() } else { text }
}

/// Body preview for an inbox row
pub fn body_preview(body: &str) -> String {
    let preview: String = body.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", preview.replace('\n', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_just_now() {
        let ts = now() - Duration::seconds(30);
        assert_eq!(format_distance_to_now(ts, now()), "Just now");
    }

    #[test]
    fn test_minutes_and_hours() {
        assert_eq!(format_distance_to_now(now() - Duration::minutes(1), now()), "1 minute ago");
        assert_eq!(format_distance_to_now(now() - Duration::minutes(5), now()), "5 minutes ago");
        assert_eq!(format_distance_to_now(now() - Duration::hours(2), now()), "2 hours ago");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_distance_to_now(now() - Duration::hours(24), now()), "1 day ago");
        assert_eq!(format_distance_to_now(now() - Duration::hours(48), now()), "2 days ago");
    }

    #[test]
    fn test_older_than_a_week_shows_date() {
        let ts = now() - Duration::days(30);
        let expected = ts.with_timezone(&Local).format("%b %d").to_string();
        assert_eq!(format_distance_to_now(ts, now()), expected);
    }

    #[test]
    fn test_full_date_uses_local_time() {
        let ts = now();
        let formatted = format_full_date(ts);
        assert!(formatted.contains("2024"));
        assert!(formatted.contains(" at "));
    }

    #[test]
    fn test_shorten_address() {
        let addr = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU";
        assert_eq!(shorten_address(addr, 6, 4), "7xKXtg...gAsU");
        assert_eq!(shorten_address(addr, 4, 4), "7xKX...gAsU");
        assert_eq!(shorten_address("short", 4, 4), "short");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("alice.sol"), "AL");
        assert_eq!(initials("x"), "X");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_body_preview() {
        assert_eq!(body_preview("Hi\nthere"), "Hi there...");
        let long = "a".repeat(250);
        assert_eq!(body_preview(&long).chars().count(), PREVIEW_CHARS + 3);
    }
}
