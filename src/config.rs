// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Clock configuration and the epoch constants it depends on.
//!
//! Nothing in this module is global mutable state: a [`ClockConfig`] is
//! built by the caller and handed to [`EpochClock`](crate::EpochClock).
//!
//! ```
//! use julday::{ClockConfig, EpochConvention, UtcOffset};
//!
//! let config = ClockConfig::new()
//!     .with_utc_offset(UtcOffset::from_seconds(2 * 3600).unwrap())
//!     .with_convention(EpochConvention::Canonical);
//! assert_eq!(config.convention().jd_shift(), 0.0);
//! ```

use crate::offset::UtcOffset;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;
pub const HOURS_PER_DAY: f64 = 24.0;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Julian Date of the Unix epoch, 1970-01-01T00:00:00Z.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Half-day shift between the noon-based Julian Date and a midnight-based
/// day count.
///
/// Only [`EpochConvention::HalfDayShifted`] applies it.
pub const JD_DIFF: f64 = 0.5;

/// How epoch seconds map onto the Julian Date axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EpochConvention {
    /// `jd = seconds / 86400 + 2440587.5`.
    #[default]
    Canonical,
    /// Canonical value plus [`JD_DIFF`]. Matches JD values produced by code
    /// that counts civil days from noon.
    HalfDayShifted,
}

impl EpochConvention {
    /// Days added on top of the canonical Julian Date.
    #[inline]
    pub const fn jd_shift(self) -> f64 {
        match self {
            EpochConvention::Canonical => 0.0,
            EpochConvention::HalfDayShifted => JD_DIFF,
        }
    }
}

/// Configuration of an [`EpochClock`](crate::EpochClock).
///
/// Defaults: offset resolved from the OS on first use, canonical epoch
/// convention.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockConfig {
    utc_offset: Option<UtcOffset>,
    #[cfg_attr(feature = "serde", serde(default))]
    convention: EpochConvention,
}

impl ClockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin the offset used for local time instead of asking the OS.
    pub fn with_utc_offset(mut self, offset: UtcOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    pub fn with_convention(mut self, convention: EpochConvention) -> Self {
        self.convention = convention;
        self
    }

    /// The pinned offset, if any.
    pub fn utc_offset(&self) -> Option<UtcOffset> {
        self.utc_offset
    }

    pub fn convention(&self) -> EpochConvention {
        self.convention
    }
}
