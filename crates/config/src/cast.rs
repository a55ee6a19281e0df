//! Typed accessors layered on `Resolver::get`.
//!
//! Responsibilities:
//! - Convert resolved string values into booleans, integers, durations, and timestamps.
//!
//! Does NOT handle:
//! - Key resolution or dotenv discovery; every accessor calls `Resolver::get`,
//!   so a miss still triggers a load.
//!
//! Invariants:
//! - Lenient accessors never fail: an unparsable or out-of-range value yields
//!   the type's zero value (`false`, `0`, `Duration::ZERO`).
//! - Values are trimmed before conversion.

use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::loader::Resolver;
use crate::store::EnvStore;

impl<S: EnvStore> Resolver<S> {
    /// `true` for `1`, `t`, `T`, `TRUE`, `true`, `True`; `false` otherwise.
    pub fn get_bool(&self, key: &str) -> bool {
        parse_bool(&self.get(key)).unwrap_or(false)
    }

    pub fn get_int(&self, key: &str) -> i64 {
        self.get_integer(key)
    }

    pub fn get_i32(&self, key: &str) -> i32 {
        self.get_integer(key)
    }

    pub fn get_i64(&self, key: &str) -> i64 {
        self.get_integer(key)
    }

    pub fn get_u32(&self, key: &str) -> u32 {
        self.get_integer(key)
    }

    pub fn get_u64(&self, key: &str) -> u64 {
        self.get_integer(key)
    }

    pub fn get_usize(&self, key: &str) -> usize {
        self.get_integer(key)
    }

    fn get_integer<T>(&self, key: &str) -> T
    where
        T: TryFrom<i128> + Default,
    {
        parse_integer(&self.get(key))
            .and_then(|value| T::try_from(value).ok())
            .unwrap_or_default()
    }

    /// Duration value of `key`.
    ///
    /// A bare integer is read as nanoseconds; otherwise the value is a
    /// sequence such as `1h30m` or `250ms`. Negative or invalid values yield zero.
    pub fn get_duration(&self, key: &str) -> Duration {
        parse_duration(&self.get(key)).unwrap_or_default()
    }

    /// Timestamp value of `key`, if it parses.
    ///
    /// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` (both read as
    /// UTC), and integer Unix seconds.
    pub fn get_time(&self, key: &str) -> Option<DateTime<Utc>> {
        parse_time(&self.get(key))
    }

    /// Strictly parsed value of `key`. `None` if the key is absent or does not parse.
    pub fn get_parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.lookup_or_load(key, "")
            .and_then(|value| value.trim().parse().ok())
    }
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a signed integer with optional `0x`/`0o`/`0b` prefix and `_` separators.
pub fn parse_integer(raw: &str) -> Option<i128> {
    let trimmed = raw.trim();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let lower = unsigned.to_ascii_lowercase();
    let (radix, digits) = if let Some(rest) = lower.strip_prefix("0x") {
        (16, rest)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, rest)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, rest)
    } else {
        (10, lower.as_str())
    };

    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') {
        return None;
    }
    let digits: String = digits.chars().filter(|c| *c != '_').collect();
    // from_str_radix accepts its own sign; a second one is not allowed.
    if digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = i128::from_str_radix(&digits, radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a duration: integer nanoseconds, or `<decimal><unit>` pairs.
///
/// Units are `ns`, `us`, `µs`, `ms`, `s`, `m`, `h`. A leading `+` is allowed;
/// negative durations are rejected, except for an explicit zero.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(nanos) = trimmed.parse::<i64>() {
        return u64::try_from(nanos).ok().map(Duration::from_nanos);
    }

    let (negative, mut rest) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total_nanos: f64 = 0.0;
    while !rest.is_empty() {
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let number = &rest[..number_len];
        if number.is_empty() || number == "." {
            return None;
        }
        let value: f64 = number.parse().ok()?;
        rest = &rest[number_len..];

        let unit_len = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let scale = unit_nanos(&rest[..unit_len])?;
        rest = &rest[unit_len..];

        total_nanos += value * scale;
    }

    if negative && total_nanos > 0.0 {
        return None;
    }
    if !total_nanos.is_finite() || total_nanos > u64::MAX as f64 {
        return None;
    }
    Some(Duration::from_nanos(total_nanos.round() as u64))
}

fn unit_nanos(unit: &str) -> Option<f64> {
    let nanos = match unit {
        "ns" => 1.0,
        "us" | "µs" | "μs" => 1e3,
        "ms" => 1e6,
        "s" => 1e9,
        "m" => 60e9,
        "h" => 3600e9,
        _ => return None,
    };
    Some(nanos)
}

pub fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
