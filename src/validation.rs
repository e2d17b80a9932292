//! Input validation and normalization.
//!
//! Untrusted strings from the CLI and the HTTP API pass through here before
//! they reach storage.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Parse a deadline string, falling back to the current time.
///
/// Accepts `YYYY-MM-DD` (interpreted as midnight UTC) or a full RFC 3339
/// timestamp. Absent or unparseable input yields `Utc::now()` — a missing or
/// garbled deadline means "due now", it is never a validation failure.
pub fn normalize_deadline(raw: Option<&str>) -> DateTime<Utc> {
    let Some(raw) = raw else {
        return Utc::now();
    };
    let raw = raw.trim();

    if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return day.and_time(NaiveTime::MIN).and_utc();
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.with_timezone(&Utc);
    }

    Utc::now()
}

/// Escape control characters so the string can be embedded safely in a JSON
/// or script context.
///
/// Backslash, double quote, and the common C0 escapes become their
/// two-character sequences; every other C0/C1 control code point becomes
/// `\uXXXX`.
pub fn sanitize_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0000}'..='\u{001F}' | '\u{007F}'..='\u{009F}' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_normalize_deadline_date() {
        let deadline = normalize_deadline(Some("2025-01-01"));
        assert_eq!(deadline.date_naive().to_string(), "2025-01-01");
        assert_eq!(deadline.hour(), 0);
        assert_eq!(deadline.minute(), 0);
    }

    #[test]
    fn test_normalize_deadline_rfc3339() {
        let deadline = normalize_deadline(Some("2025-06-15T12:30:00+02:00"));
        assert_eq!(deadline.to_rfc3339(), "2025-06-15T10:30:00+00:00");
    }

    #[test]
    fn test_normalize_deadline_invalid_falls_back_to_now() {
        let before = Utc::now();
        let deadline = normalize_deadline(Some("not-a-date"));
        let after = Utc::now();
        assert!(deadline >= before && deadline <= after);
    }

    #[test]
    fn test_normalize_deadline_absent_falls_back_to_now() {
        let before = Utc::now();
        let deadline = normalize_deadline(None);
        let after = Utc::now();
        assert!(deadline >= before && deadline <= after);
    }

    #[test]
    fn test_sanitize_string_escapes_quotes_and_backslashes() {
        assert_eq!(sanitize_string(r#"say "hi"\now"#), r#"say \"hi\"\\now"#);
    }

    #[test]
    fn test_sanitize_string_escapes_common_controls() {
        assert_eq!(sanitize_string("a\nb\tc\r"), "a\\nb\\tc\\r");
        assert_eq!(sanitize_string("\u{0008}\u{000C}"), "\\b\\f");
    }

    #[test]
    fn test_sanitize_string_escapes_other_control_points() {
        assert_eq!(sanitize_string("\u{0000}"), "\\u0000");
        assert_eq!(sanitize_string("\u{001B}"), "\\u001b");
        assert_eq!(sanitize_string("\u{007F}"), "\\u007f");
        assert_eq!(sanitize_string("\u{009F}"), "\\u009f");
    }

    #[test]
    fn test_sanitize_string_passes_plain_text_through() {
        assert_eq!(sanitize_string("Buy milk"), "Buy milk");
        assert_eq!(sanitize_string("héllo wörld"), "héllo wörld");
    }
}
