// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The unit-tagged duration value.
//!
//! [`Interval`] pairs a [`Unit`] with an `f64` magnitude. It is `Copy` and
//! immutable: every conversion or transform returns a fresh value. The only
//! invariant is that the magnitude is never NaN; infinities, negatives and
//! fractions are all accepted.

use crate::error::{IntervalError, IntervalResult};
use crate::format::{self, FormatOptions};
use crate::unit::Unit;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A duration expressed in a single [`Unit`].
///
/// # Examples
///
/// ```
/// use tempspan::{second, Unit};
///
/// let ninety = second(90.0).unwrap();
/// let minutes = ninety.to_minutes();
///
/// assert_eq!(minutes.unit(), Unit::Minute);
/// assert_eq!(minutes.value(), 1.5);
/// assert_eq!(minutes.to_string(), "1.5 minute");
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct Interval {
    unit: Unit,
    value: f64,
}

impl Interval {
    // ── constructors ──────────────────────────────────────────────────

    /// Create an interval, rejecting NaN.
    pub fn new(unit: Unit, value: f64) -> IntervalResult<Self> {
        if value.is_nan() {
            tracing::debug!(unit = unit.tag(), "rejected NaN interval value");
            return Err(IntervalError::NotANumber { unit });
        }
        Ok(Self { unit, value })
    }

    /// Caller guarantees `value` is not NaN.
    #[inline]
    pub(crate) fn new_unchecked(unit: Unit, value: f64) -> Self {
        debug_assert!(!value.is_nan());
        Self { unit, value }
    }

    /// A zero-length interval in `unit`.
    #[inline]
    pub const fn zero(unit: Unit) -> Self {
        Self { unit, value: 0.0 }
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub const fn unit(&self) -> Unit {
        self.unit
    }

    /// The raw magnitude, without its unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Same as [`value`](Self::value); reads better in arithmetic.
    #[inline]
    pub const fn as_f64(&self) -> f64 {
        self.value
    }

    /// Descriptive tag of the unit (`"Week"`).
    #[inline]
    pub const fn tag(&self) -> &'static str {
        self.unit.tag()
    }

    // ── conversions ───────────────────────────────────────────────────

    /// Express the same duration in another unit.
    ///
    /// No conversion can turn a non-NaN magnitude into NaN, so this is
    /// infallible.
    pub fn to(&self, target: Unit) -> Self {
        let value = self.unit.convert(self.value, target);
        tracing::trace!(from = self.unit.tag(), to = target.tag(), value, "converted interval");
        Self {
            unit: target,
            value,
        }
    }

    pub fn to_microseconds(&self) -> Self {
        self.to(Unit::Microsecond)
    }

    pub fn to_milliseconds(&self) -> Self {
        self.to(Unit::Millisecond)
    }

    pub fn to_seconds(&self) -> Self {
        self.to(Unit::Second)
    }

    pub fn to_minutes(&self) -> Self {
        self.to(Unit::Minute)
    }

    pub fn to_hours(&self) -> Self {
        self.to(Unit::Hour)
    }

    pub fn to_days(&self) -> Self {
        self.to(Unit::Day)
    }

    pub fn to_weeks(&self) -> Self {
        self.to(Unit::Week)
    }

    // ── transforms ────────────────────────────────────────────────────

    /// Apply `op` to the magnitude, keeping the unit.
    ///
    /// The result is validated like any other construction: a transform
    /// that yields NaN is reported as [`IntervalError::NotANumber`].
    ///
    /// ```
    /// use tempspan::second;
    ///
    /// let five = second(5.0).unwrap();
    /// let six = five.map(|v| v + 1.0).unwrap();
    /// assert_eq!(six.value(), 6.0);
    /// assert_eq!(five.value(), 5.0);
    /// ```
    pub fn map<F>(self, op: F) -> IntervalResult<Self>
    where
        F: FnOnce(f64) -> f64,
    {
        Self::new(self.unit, op(self.value))
    }

    // ── formatting ────────────────────────────────────────────────────

    /// Render as `<number><separator><label>` using `options`.
    ///
    /// `Display` is equivalent to `format(&FormatOptions::default())`.
    pub fn format(&self, options: &FormatOptions) -> String {
        let mut out = format::number_to_string(self.value);
        out.push_str(options.separator());
        out.push_str(self.unit.label(options.mode));
        out
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = FormatOptions::default();
        format::write_number(f, self.value)?;
        write!(f, "{}{}", options.separator(), self.unit.label(options.mode))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Factories
// ═══════════════════════════════════════════════════════════════════════════

macro_rules! factory {
    ($(#[$doc:meta])* $name:ident => $unit:expr) => {
        $(#[$doc])*
        ///
        /// Pass `None` for a zero-length interval. Fails on NaN.
        pub fn $name(value: impl Into<Option<f64>>) -> IntervalResult<Interval> {
            Interval::new($unit, value.into().unwrap_or(0.0))
        }
    };
}

factory!(
    /// An interval measured in microseconds.
    microsecond => Unit::Microsecond
);
factory!(
    /// An interval measured in milliseconds.
    millisecond => Unit::Millisecond
);
factory!(
    /// An interval measured in seconds.
    second => Unit::Second
);
factory!(
    /// An interval measured in minutes.
    minute => Unit::Minute
);
factory!(
    /// An interval measured in hours.
    hour => Unit::Hour
);
factory!(
    /// An interval measured in days.
    day => Unit::Day
);
factory!(
    /// An interval measured in weeks.
    week => Unit::Week
);

// ═══════════════════════════════════════════════════════════════════════════
// Numeric coercion
// ═══════════════════════════════════════════════════════════════════════════
//
// These operate on the bare magnitude and discard the unit. Compare
// intervals of different units only after converting them to a common one.

impl From<Interval> for f64 {
    #[inline]
    fn from(interval: Interval) -> Self {
        interval.value
    }
}

impl PartialEq<f64> for Interval {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd<f64> for Interval {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

macro_rules! coerce_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<f64> for Interval {
            type Output = f64;
            #[inline]
            fn $method(self, rhs: f64) -> f64 {
                self.value $op rhs
            }
        }

        impl $trait<Interval> for f64 {
            type Output = f64;
            #[inline]
            fn $method(self, rhs: Interval) -> f64 {
                self $op rhs.value
            }
        }
    };
}

coerce_op!(Add, add, +);
coerce_op!(Sub, sub, -);
coerce_op!(Mul, mul, *);
coerce_op!(Div, div, /);

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawInterval {
    unit: Unit,
    value: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for Interval {
    type Error = IntervalError;

    fn try_from(raw: RawInterval) -> IntervalResult<Self> {
        Interval::new(raw.unit, raw.value)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
