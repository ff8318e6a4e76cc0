use std::sync::OnceLock;

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use regex::Regex;
use serde_json::Value;

static UUID_REGEX: OnceLock<Regex> = OnceLock::new();

fn uuid_regex() -> &'static Regex {
    UUID_REGEX.get_or_init(|| {
        Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
            .expect("uuid pattern is a valid regex")
    })
}

pub(crate) fn is_string(value: &Value) -> bool {
    value.is_string()
}

/// Whole numbers only. `5.0` counts, `"5"` and `5.5` do not.
pub(crate) fn is_integer(value: &Value) -> bool {
    match value {
        Value::Number(number) => {
            if number.is_i64() || number.is_u64() {
                return true;
            }
            number
                .as_f64()
                .is_some_and(|float| float.is_finite() && float.fract() == 0.0)
        }
        _ => false,
    }
}

/// A string is ISO-8601 only if it survives a parse and re-serialize
/// round trip in the canonical `YYYY-MM-DDTHH:MM:SS.sssZ` form.
/// Leap seconds (`:60`) are never canonical.
pub(crate) fn is_iso8601(value: &Value) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    match DateTime::parse_from_rfc3339(text) {
        Ok(parsed) => {
            let utc = parsed.with_timezone(&Utc);
            utc.nanosecond() < 1_000_000_000
                && utc.to_rfc3339_opts(SecondsFormat::Millis, true) == text
        }
        Err(_) => false,
    }
}

pub(crate) fn is_uuid(value: &Value) -> bool {
    value.as_str().is_some_and(|text| uuid_regex().is_match(text))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn integer_accepts_whole_numbers_only() {
        assert!(is_integer(&json!(0)));
        assert!(is_integer(&json!(-42)));
        assert!(is_integer(&json!(u64::MAX)));
        assert!(is_integer(&json!(5.0)));
        assert!(!is_integer(&json!(5.5)));
        assert!(!is_integer(&json!("5")));
        assert!(!is_integer(&json!(true)));
    }

    #[test]
    fn iso8601_requires_canonical_round_trip() {
        assert!(is_iso8601(&json!("2021-03-04T05:06:07.890Z")));
        assert!(is_iso8601(&json!("1970-01-01T00:00:00.000Z")));

        // parseable, but not the canonical rendering
        assert!(!is_iso8601(&json!("2021-03-04T05:06:07Z")));
        assert!(!is_iso8601(&json!("2021-03-04T05:06:07.890+00:00")));
        assert!(!is_iso8601(&json!("2021-03-04T05:06:07.89Z")));
        assert!(!is_iso8601(&json!("2021-03-04")));

        assert!(!is_iso8601(&json!("2021-02-30T00:00:00.000Z")));
        assert!(!is_iso8601(&json!("2021-03-04T05:06:60.000Z")));
        assert!(!is_iso8601(&json!("yesterday")));
        assert!(!is_iso8601(&json!(1614834367890_i64)));
    }

    #[test]
    fn iso8601_rejects_leap_seconds() {
        for text in [
            "2021-03-04T05:06:60.000Z",
            "2016-12-31T23:59:60.000Z",
            "2021-03-04T05:06:60.500Z",
        ] {
            assert!(!is_iso8601(&json!(text)), "{text}");
        }
        assert!(is_iso8601(&json!("2016-12-31T23:59:59.999Z")));
    }

    #[test]
    fn uuid_matches_versions_one_to_five() {
        assert!(is_uuid(&json!("123e4567-e89b-12d3-a456-426614174000")));
        assert!(is_uuid(&json!("9B2D3C4E-5F60-4A7B-8C9D-0E1F2A3B4C5D")));
        assert!(is_uuid(&json!("00000000-0000-5000-b000-000000000000")));

        assert!(!is_uuid(&json!("123e4567-e89b-62d3-a456-426614174000")));
        assert!(!is_uuid(&json!("123e4567-e89b-12d3-c456-426614174000")));
        assert!(!is_uuid(&json!("123e4567e89b12d3a456426614174000")));
        assert!(!is_uuid(&json!("{123e4567-e89b-12d3-a456-426614174000}")));
        assert!(!is_uuid(&json!(12)));
    }
}
