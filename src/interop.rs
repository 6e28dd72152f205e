// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversions between [`Interval`] and other duration representations.
//!
//! | Other type | Into `Interval` | From `Interval` |
//! |------------|-----------------|-----------------|
//! | `chrono::Duration` | `From` (microseconds) | [`Interval::to_chrono`] |
//! | `std::time::Duration` | `From` (seconds) | `TryFrom` |
//! | `qtty::Seconds` | `TryFrom` | [`Interval::to_qtty_seconds`] |
//! | `qtty::Days` | `TryFrom` | [`Interval::to_qtty_days`] |

use crate::error::{IntervalError, IntervalResult};
use crate::interval::Interval;
use crate::unit::Unit;
use qtty::{Days, Seconds};

/// 2^63, the first magnitude that no longer fits an `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

impl Interval {
    /// Convert to a `chrono::Duration` with microsecond resolution.
    ///
    /// The magnitude is rounded to the nearest microsecond. Fails when the
    /// interval is infinite or does not fit an `i64` microsecond count.
    pub fn to_chrono(&self) -> IntervalResult<chrono::Duration> {
        let micros = self.to_microseconds().value().round();
        if !micros.is_finite() || micros < -I64_LIMIT || micros >= I64_LIMIT {
            tracing::debug!(
                value = self.value(),
                unit = self.tag(),
                "interval exceeds chrono range"
            );
            return Err(IntervalError::OutOfRange {
                target: "chrono::Duration",
                value: self.value(),
            });
        }
        Ok(chrono::Duration::microseconds(micros as i64))
    }

    /// The interval as a `qtty` seconds quantity.
    #[inline]
    pub fn to_qtty_seconds(&self) -> Seconds {
        Seconds::new(self.to_seconds().value())
    }

    /// The interval as a `qtty` days quantity.
    #[inline]
    pub fn to_qtty_days(&self) -> Days {
        Days::new(self.to_days().value())
    }
}

// ── chrono ────────────────────────────────────────────────────────────────

impl From<chrono::Duration> for Interval {
    /// Microsecond interval; millisecond interval when the microsecond count
    /// overflows `i64`.
    fn from(duration: chrono::Duration) -> Self {
        match duration.num_microseconds() {
            Some(us) => Interval::new_unchecked(Unit::Microsecond, us as f64),
            None => Interval::new_unchecked(Unit::Millisecond, duration.num_milliseconds() as f64),
        }
    }
}

// ── std ───────────────────────────────────────────────────────────────────

impl From<std::time::Duration> for Interval {
    fn from(duration: std::time::Duration) -> Self {
        Interval::new_unchecked(Unit::Second, duration.as_secs_f64())
    }
}

impl TryFrom<Interval> for std::time::Duration {
    type Error = IntervalError;

    /// Fails for negative, infinite, or overflowing intervals.
    fn try_from(interval: Interval) -> IntervalResult<Self> {
        let secs = interval.to_seconds().value();
        std::time::Duration::try_from_secs_f64(secs).map_err(|_| {
            tracing::debug!(
                value = interval.value(),
                unit = interval.tag(),
                "interval exceeds std range"
            );
            IntervalError::OutOfRange {
                target: "std::time::Duration",
                value: interval.value(),
            }
        })
    }
}

// ── qtty ──────────────────────────────────────────────────────────────────

impl TryFrom<Seconds> for Interval {
    type Error = IntervalError;

    fn try_from(seconds: Seconds) -> IntervalResult<Self> {
        Interval::new(Unit::Second, seconds.value())
    }
}

impl TryFrom<Days> for Interval {
    type Error = IntervalError;

    fn try_from(days: Days) -> IntervalResult<Self> {
        Interval::new(Unit::Day, days.value())
    }
}
