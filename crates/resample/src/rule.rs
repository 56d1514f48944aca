//! Fixed-width resample rules such as `"h"`, `"15min"` or `"D"`.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::ResampleError;

/// A fixed bucket width parsed from an offset alias.
///
/// Accepted forms are an optional positive multiplier followed by a unit,
/// case-insensitive:
///
/// | Unit | Meaning |
/// |------|---------|
/// | `s`, `sec` | seconds |
/// | `t`, `min` | minutes |
/// | `h`, `hour` | hours |
/// | `d`, `day` | days |
/// | `w`, `week` | weeks |
///
/// Calendar-dependent widths (months, years) are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResampleRule {
    step: TimeDelta,
}

impl ResampleRule {
    /// Creates a rule from an explicit bucket width.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidRule`] if `step` is not positive.
    pub fn new(step: TimeDelta) -> Result<Self, ResampleError> {
        if step <= TimeDelta::zero() {
            return Err(ResampleError::InvalidRule {
                rule: format!("{}s", step.num_seconds()),
                reason: "bucket width must be positive".into(),
            });
        }
        Ok(Self { step })
    }

    /// One-hour buckets.
    pub fn hourly() -> Self {
        Self {
            step: TimeDelta::hours(1),
        }
    }

    /// One-day buckets.
    pub fn daily() -> Self {
        Self {
            step: TimeDelta::days(1),
        }
    }

    /// Bucket width.
    pub fn step(&self) -> TimeDelta {
        self.step
    }

    /// Parses an offset alias.
    ///
    /// # Errors
    ///
    /// Returns [`ResampleError::InvalidRule`] for empty strings, a zero
    /// multiplier, unknown units or overflowing widths.
    pub fn parse(rule: &str) -> Result<Self, ResampleError> {
        let invalid = |reason: &str| ResampleError::InvalidRule {
            rule: rule.to_string(),
            reason: reason.to_string(),
        };

        let trimmed = rule.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| invalid("missing unit"))?;
        let (digits, unit) = trimmed.split_at(split);
        let multiplier: i64 = if digits.is_empty() {
            1
        } else {
            digits.parse().map_err(|_| invalid("multiplier out of range"))?
        };
        if multiplier == 0 {
            return Err(invalid("multiplier must be positive"));
        }

        let unit_seconds: i64 = match unit.to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => 1,
            "t" | "min" | "minute" | "minutes" => 60,
            "h" | "hour" | "hours" => 3_600,
            "d" | "day" | "days" => 86_400,
            "w" | "week" | "weeks" => 604_800,
            _ => return Err(invalid("unknown unit")),
        };
        let seconds = multiplier
            .checked_mul(unit_seconds)
            .ok_or_else(|| invalid("bucket width overflows"))?;
        let step =
            TimeDelta::try_seconds(seconds).ok_or_else(|| invalid("bucket width overflows"))?;
        Ok(Self { step })
    }

    /// Start of the day containing `ts`; buckets are anchored there.
    pub fn origin(ts: NaiveDateTime) -> NaiveDateTime {
        ts.date().and_time(chrono::NaiveTime::MIN)
    }

    /// Bucket number of `ts` relative to `origin` (floor division).
    pub fn bucket(&self, ts: NaiveDateTime, origin: NaiveDateTime) -> i64 {
        let offset = (ts - origin).num_milliseconds();
        offset.div_euclid(self.step.num_milliseconds())
    }

    /// Left edge of bucket `k` relative to `origin`.
    pub fn bucket_start(&self, k: i64, origin: NaiveDateTime) -> NaiveDateTime {
        origin + TimeDelta::milliseconds(self.step.num_milliseconds() * k)
    }
}

impl FromStr for ResampleRule {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResampleRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.step.num_seconds();
        match secs {
            s if s % 86_400 == 0 => write!(f, "{}D", s / 86_400),
            s if s % 3_600 == 0 => write!(f, "{}h", s / 3_600),
            s if s % 60 == 0 => write!(f, "{}min", s / 60),
            s => write!(f, "{s}s"),
        }
    }
}
