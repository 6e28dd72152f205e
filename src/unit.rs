// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration units.
//!
//! [`Unit`] is a closed set of seven granularities. Each one carries a fixed
//! factor relative to the **millisecond base**, which every conversion uses
//! as its pivot:
//!
//! | Unit | Factor (ms) | Verbose | Abbreviated |
//! |------|-------------|---------|-------------|
//! | [`Unit::Microsecond`] | 0.001 | microsecond | µs |
//! | [`Unit::Millisecond`] | 1 | millisecond | ms |
//! | [`Unit::Second`] | 1 000 | second | sec |
//! | [`Unit::Minute`] | 60 000 | minute | min |
//! | [`Unit::Hour`] | 3 600 000 | hour | hr |
//! | [`Unit::Day`] | 86 400 000 | day | d |
//! | [`Unit::Week`] | 604 800 000 | week | wk |

use crate::format::FormatMode;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Factors (milliseconds per unit)
// ---------------------------------------------------------------------------

const MILLISECOND: f64 = 1.0;
const MICROSECOND: f64 = MILLISECOND / 1000.0;
const SECOND: f64 = MILLISECOND * 1000.0;
const MINUTE: f64 = SECOND * 60.0;
const HOUR: f64 = MINUTE * 60.0;
const DAY: f64 = HOUR * 24.0;
const WEEK: f64 = DAY * 7.0;

/// A duration granularity.
///
/// Variants are declared from the shortest to the longest, so the derived
/// `Ord` orders units by duration-per-unit.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
}

impl Unit {
    /// Every unit, ascending.
    pub const ALL: [Unit; 7] = [
        Unit::Microsecond,
        Unit::Millisecond,
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
    ];

    /// Length of one unit expressed in milliseconds.
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            Unit::Microsecond => MICROSECOND,
            Unit::Millisecond => MILLISECOND,
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
        }
    }

    /// Descriptive tag, identical to the variant name (`"Week"`).
    pub const fn tag(self) -> &'static str {
        match self {
            Unit::Microsecond => "Microsecond",
            Unit::Millisecond => "Millisecond",
            Unit::Second => "Second",
            Unit::Minute => "Minute",
            Unit::Hour => "Hour",
            Unit::Day => "Day",
            Unit::Week => "Week",
        }
    }

    /// Label used when rendering a value in this unit.
    ///
    /// Labels are never pluralised.
    pub const fn label(self, mode: FormatMode) -> &'static str {
        match mode {
            FormatMode::Verbose => match self {
                Unit::Microsecond => "microsecond",
                Unit::Millisecond => "millisecond",
                Unit::Second => "second",
                Unit::Minute => "minute",
                Unit::Hour => "hour",
                Unit::Day => "day",
                Unit::Week => "week",
            },
            FormatMode::Abbreviated => match self {
                Unit::Microsecond => "\u{00B5}s",
                Unit::Millisecond => "ms",
                Unit::Second => "sec",
                Unit::Minute => "min",
                Unit::Hour => "hr",
                Unit::Day => "d",
                Unit::Week => "wk",
            },
        }
    }

    /// Rescale `value` expressed in `self` into `target`.
    ///
    /// Routes through the millisecond base:
    ///
    /// ```text
    /// value * factor(self) / factor(target)
    /// ```
    ///
    /// Same-unit conversion returns `value` untouched.
    #[inline]
    pub fn convert(self, value: f64, target: Unit) -> f64 {
        if self == target {
            return value;
        }
        (value * self.factor()) / target.factor()
    }
}

impl fmt::Debug for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(FormatMode::Verbose))
    }
}
