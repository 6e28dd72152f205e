// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use crate::unit::Unit;
use thiserror::Error;

pub type IntervalResult<T> = Result<T, IntervalError>;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// An interval was built from a NaN magnitude.
    #[error("Cannot create a {unit:?} interval from NaN")]
    NotANumber { unit: Unit },

    /// The magnitude cannot be represented by the conversion target.
    #[error("Interval value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: f64 },
}
