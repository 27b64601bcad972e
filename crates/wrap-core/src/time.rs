//! Timestamp parsing and fixed-offset local time conversion.
//!
//! Export timestamps are RFC 3339 (`2025-03-01T02:00:00.123456Z`). Some older
//! exports drop the zone designator; those are read as UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::CoreError;

/// Largest accepted distance from UTC, in seconds.
pub const MAX_OFFSET_SECONDS: i32 = 14 * 3600;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse an export timestamp into UTC.
///
/// # Errors
///
/// Returns `CoreError::InvalidTimestamp` for empty strings and strings that
/// match neither RFC 3339 nor a zone-less ISO 8601 form.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidTimestamp {
            value: value.to_string(),
            reason: "empty".to_string(),
        });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| CoreError::InvalidTimestamp {
            value: value.to_string(),
            reason: "expected RFC 3339".to_string(),
        })
}

/// A fixed local offset from UTC, e.g. `-06:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalOffset(FixedOffset);

impl LocalOffset {
    /// Build from a signed number of seconds east of UTC.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidOffset` when the offset exceeds ±14 hours.
    pub fn from_seconds(seconds: i32) -> Result<Self, CoreError> {
        if seconds.abs() > MAX_OFFSET_SECONDS {
            return Err(CoreError::InvalidOffset {
                value: seconds.to_string(),
                reason: "must be within ±14:00".to_string(),
            });
        }
        FixedOffset::east_opt(seconds)
            .map(Self)
            .ok_or_else(|| CoreError::InvalidOffset {
                value: seconds.to_string(),
                reason: "out of range".to_string(),
            })
    }

    #[must_use]
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    #[must_use]
    pub const fn offset(self) -> FixedOffset {
        self.0
    }

    #[must_use]
    pub fn seconds(self) -> i32 {
        self.0.local_minus_utc()
    }

    /// Convert a UTC instant to local wall-clock time at this offset.
    #[must_use]
    pub fn to_local(self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.0)
    }

    /// Calendar year of `instant` at this offset.
    #[must_use]
    pub fn local_year(self, instant: DateTime<Utc>) -> i32 {
        self.to_local(instant).year()
    }
}

impl Default for LocalOffset {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for LocalOffset {
    type Err = CoreError;

    /// Accepts `Z`, `UTC`, `+05:30`, `-0600`, `-06`, and `-6`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidOffset {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return Ok(Self::utc());
        }

        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid("expected a leading '+' or '-'")),
        };

        let (hours, minutes) = if let Some((h, m)) = rest.split_once(':') {
            (h, m)
        } else if rest.len() == 4 && rest.is_ascii() {
            rest.split_at(2)
        } else {
            (rest, "0")
        };

        let hours: i32 = hours.parse().map_err(|_| invalid("hours are not a number"))?;
        let minutes: i32 = minutes
            .parse()
            .map_err(|_| invalid("minutes are not a number"))?;
        if !(0..60).contains(&minutes) || hours < 0 {
            return Err(invalid("minutes must be 0-59"));
        }
        if hours > MAX_OFFSET_SECONDS / 3600 {
            return Err(invalid("must be within ±14:00"));
        }

        Self::from_seconds(sign * (hours * 3600 + minutes * 60))
            .map_err(|_| invalid("must be within ±14:00"))
    }
}

impl fmt::Display for LocalOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.seconds();
        let sign = if seconds < 0 { '-' } else { '+' };
        let abs = seconds.abs();
        write!(f, "{sign}{:02}:{:02}", abs / 3600, (abs % 3600) / 60)
    }
}

impl Serialize for LocalOffset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserializes from an offset string (`"-06:00"`) or a bare number of hours
/// (`-6`, `5.5`), which is what environment variables tend to produce.
impl<'de> Deserialize<'de> for LocalOffset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => s.parse().map_err(D::Error::custom),
            serde_json::Value::Number(n) => {
                let hours = n
                    .as_f64()
                    .ok_or_else(|| D::Error::custom("UTC offset is not a finite number"))?;
                #[allow(clippy::cast_possible_truncation)]
                let seconds = (hours * 3600.0).round() as i32;
                Self::from_seconds(seconds).map_err(D::Error::custom)
            }
            other => Err(D::Error::custom(format!(
                "expected a UTC offset string or hours, found {other}"
            ))),
        }
    }
}
