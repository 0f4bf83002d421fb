// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error type shared by every conversion in the crate.
//!
//! All fallible operations return [`TimeResult<T>`]. Conversions fail fast
//! and never hand back a partially filled value.

use std::fmt;

/// Civil field rejected by [`TimeError::InvalidDateComponent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateComponent {
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl fmt::Display for DateComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateComponent::Month => "month",
            DateComponent::Day => "day",
            DateComponent::Hour => "hour",
            DateComponent::Minute => "minute",
            DateComponent::Second => "second",
        };
        f.write_str(name)
    }
}

/// Errors produced by calendar conversion, formatting and clock sampling.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimeError {
    /// A civil date or time field is out of range for the calendar.
    #[error("invalid {component} {value}: {reason}")]
    InvalidDateComponent {
        component: DateComponent,
        value: f64,
        reason: String,
    },

    /// A layout name that is not one of the recognised [`DateFormat`](crate::DateFormat)s.
    #[error("unsupported date format `{0}`")]
    UnsupportedFormat(String),

    /// The system wall clock could not be read.
    #[error("system clock unavailable: {0}")]
    ClockUnavailable(String),

    /// A UTC offset of a full day or more.
    #[error("UTC offset of {seconds} s is outside ±86400 s")]
    InvalidUtcOffset { seconds: i64 },
}

impl TimeError {
    pub(crate) fn invalid(component: DateComponent, value: f64, reason: impl Into<String>) -> Self {
        TimeError::InvalidDateComponent {
            component,
            value,
            reason: reason.into(),
        }
    }
}

/// Result alias used across the crate.
pub type TimeResult<T> = Result<T, TimeError>;
