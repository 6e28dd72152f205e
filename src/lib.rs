// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Unit-tagged durations
//!
//! This crate provides a small immutable duration value, [`Interval`], that
//! remembers the unit it is expressed in.
//!
//! # Core types
//!
//! - [`Interval`]: a `(unit, value)` pair; `Copy`, never NaN.
//! - [`Unit`]: the closed set of granularities, from microsecond to week.
//! - [`FormatOptions`] / [`FormatMode`]: rendering configuration.
//! - [`IntervalError`]: the single failure mode (NaN), plus interop range errors.
//!
//! # Constructors
//!
//! | Function | Unit |
//! |----------|------|
//! | [`microsecond`] | [`Unit::Microsecond`] |
//! | [`millisecond`] | [`Unit::Millisecond`] |
//! | [`second`] | [`Unit::Second`] |
//! | [`minute`] | [`Unit::Minute`] |
//! | [`hour`] | [`Unit::Hour`] |
//! | [`day`] | [`Unit::Day`] |
//! | [`week`] | [`Unit::Week`] |
//!
//! Each takes `impl Into<Option<f64>>`; `None` means zero.
//!
//! # Conversion
//!
//! Every conversion pivots on the millisecond base:
//! `value * factor(source) / factor(target)`.
//!
//! ```
//! use tempspan::{day, FormatOptions};
//!
//! let one_day = day(1.0)?;
//! assert_eq!(one_day.to_weeks().value(), 1.0 / 7.0);
//! assert_eq!(one_day.to_hours().format(&FormatOptions::abbreviated()), "24hr");
//! # Ok::<(), tempspan::IntervalError>(())
//! ```

mod error;
mod format;
mod interop;
mod interval;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use error::{IntervalError, IntervalResult};
pub use format::{FormatMode, FormatOptions};
pub use interval::{day, hour, microsecond, millisecond, minute, second, week, Interval};
pub use unit::Unit;
