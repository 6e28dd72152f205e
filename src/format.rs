// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rendering options for [`Interval`](crate::Interval).
//!
//! An interval renders as `<number><separator><label>`. The number follows
//! the shortest round-trip decimal form used by ECMAScript's
//! `Number.prototype.toString`, so `1/60` prints as `0.016666666666666666`
//! and `1e21` as `1e+21`.

use std::fmt::{self, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which label table to use.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FormatMode {
    /// `3 minute`
    #[default]
    Verbose,
    /// `3min`
    Abbreviated,
}

impl FormatMode {
    /// Separator used when none is configured.
    pub const fn default_separator(self) -> &'static str {
        match self {
            FormatMode::Verbose => " ",
            FormatMode::Abbreviated => "",
        }
    }
}

/// Options accepted by [`Interval::format`](crate::Interval::format).
///
/// ```
/// use tempspan::{minute, FormatOptions};
///
/// let three = minute(3.0).unwrap();
/// assert_eq!(three.format(&FormatOptions::default()), "3 minute");
/// assert_eq!(three.format(&FormatOptions::abbreviated()), "3min");
/// assert_eq!(three.format(&FormatOptions::default().with_separator("-")), "3-minute");
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormatOptions {
    pub mode: FormatMode,
    /// Overrides the mode's default separator when set.
    pub separator: Option<String>,
}

impl FormatOptions {
    pub fn verbose() -> Self {
        Self {
            mode: FormatMode::Verbose,
            separator: None,
        }
    }

    pub fn abbreviated() -> Self {
        Self {
            mode: FormatMode::Abbreviated,
            separator: None,
        }
    }

    pub fn with_mode(mut self, mode: FormatMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// The separator actually written between number and label.
    pub fn separator(&self) -> &str {
        self.separator
            .as_deref()
            .unwrap_or_else(|| self.mode.default_separator())
    }
}

/// Writes `value` the way ECMAScript's `Number.prototype.toString(10)` does.
pub(crate) fn write_number<W: Write>(out: &mut W, value: f64) -> fmt::Result {
    if value.is_nan() {
        return out.write_str("NaN");
    }
    if value.is_infinite() {
        return out.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        // Covers -0 as well.
        return out.write_str("0");
    }
    if value < 0.0 {
        out.write_char('-')?;
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `1.6666666666666666e-2`.
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    if k <= n && n <= 21 {
        out.write_str(&digits)?;
        for _ in 0..(n - k) {
            out.write_char('0')?;
        }
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        write!(out, "{int}.{frac}")?;
    } else if -6 < n && n <= 0 {
        out.write_str("0.")?;
        for _ in 0..(-n) {
            out.write_char('0')?;
        }
        out.write_str(&digits)?;
    } else {
        let (lead, rest) = digits.split_at(1);
        out.write_str(lead)?;
        if !rest.is_empty() {
            write!(out, ".{rest}")?;
        }
        let sign = if n - 1 < 0 { '-' } else { '+' };
        write!(out, "e{sign}{}", (n - 1).abs())?;
    }
    Ok(())
}

/// Renders `value` as a standalone string.
pub(crate) fn number_to_string(value: f64) -> String {
    let mut s = String::new();
    // Writing into a String cannot fail.
    let _ = write_number(&mut s, value);
    s
}
