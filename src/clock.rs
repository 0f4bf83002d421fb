// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wall-clock sampling on the Julian Date axis.
//!
//! [`EpochClock`] reads a [`WallClock`] (the OS clock by default), breaks the
//! instant into civil fields and converts them with
//! [`to_julian_hms`](crate::calendar::to_julian_hms). Local time is the
//! same instant with a [`UtcOffset`] applied before the breakdown.
//!
//! ```no_run
//! use julday::{DateFormat, EpochClock};
//!
//! let clock = EpochClock::system();
//! let now = clock.now_utc()?;
//! println!("{}", now.format(DateFormat::YMDHM));
//! # Ok::<(), julday::TimeError>(())
//! ```

use crate::calendar::to_julian_hms;
use crate::config::{ClockConfig, SECONDS_PER_DAY, UNIX_EPOCH_JD};
use crate::error::{TimeError, TimeResult};
use crate::offset::UtcOffset;
use crate::JulianDate;
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current UTC instant.
pub trait WallClock {
    fn now(&self) -> TimeResult<DateTime<Utc>>;
}

/// The operating system's real-time clock.
///
/// Reads `SystemTime` rather than `Utc::now()` so that a clock set before
/// 1970 surfaces as [`TimeError::ClockUnavailable`] instead of a panic.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl WallClock for SystemClock {
    fn now(&self) -> TimeResult<DateTime<Utc>> {
        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::ClockUnavailable(format!("clock is before 1970: {e}")))?;
        let secs = i64::try_from(since_epoch.as_secs())
            .map_err(|_| TimeError::ClockUnavailable("clock reading overflows i64".into()))?;
        DateTime::<Utc>::from_timestamp(secs, since_epoch.subsec_nanos()).ok_or_else(|| {
            TimeError::ClockUnavailable(format!("{secs} s is outside the representable range"))
        })
    }
}

/// A clock stopped at a fixed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl WallClock for FixedClock {
    fn now(&self) -> TimeResult<DateTime<Utc>> {
        Ok(self.0)
    }
}

/// Canonical Julian Date of a Unix timestamp in seconds.
#[inline]
pub fn from_epoch_seconds(seconds: f64) -> JulianDate {
    JulianDate::new(seconds / SECONDS_PER_DAY + UNIX_EPOCH_JD)
}

/// Unix timestamp in seconds of a canonical Julian Date.
#[inline]
pub fn to_epoch_seconds(jd: JulianDate) -> f64 {
    (jd.value() - UNIX_EPOCH_JD) * SECONDS_PER_DAY
}

/// Samples a [`WallClock`] as Julian Dates.
#[derive(Debug, Clone)]
pub struct EpochClock<C: WallClock = SystemClock> {
    clock: C,
    config: ClockConfig,
}

impl EpochClock<SystemClock> {
    /// OS clock with the default configuration.
    pub fn system() -> Self {
        Self::new(SystemClock, ClockConfig::default())
    }
}

impl Default for EpochClock<SystemClock> {
    fn default() -> Self {
        Self::system()
    }
}

impl<C: WallClock> EpochClock<C> {
    pub fn new(clock: C, config: ClockConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    /// Offset used by [`now_local`](Self::now_local): the configured one, or
    /// the process-wide OS offset.
    pub fn utc_offset(&self) -> UtcOffset {
        self.config.utc_offset().unwrap_or_else(UtcOffset::local)
    }

    /// Current instant as a UTC Julian Date.
    pub fn now_utc(&self) -> TimeResult<JulianDate> {
        self.now(false)
    }

    /// Current instant with the local offset applied to the calendar fields.
    ///
    /// Describes the same instant as [`now_utc`](Self::now_utc); only the
    /// reading of the calendar changes.
    pub fn now_local(&self) -> TimeResult<JulianDate> {
        self.now(true)
    }

    /// Current Julian Date, local or UTC.
    pub fn now(&self, local: bool) -> TimeResult<JulianDate> {
        let instant = self.clock.now()?;
        let offset = if local { self.utc_offset() } else { UtcOffset::UTC };
        let jd = self.instant_to_jd(instant, offset)?;
        tracing::debug!(
            jd = jd.value(),
            offset = offset.seconds(),
            convention = ?self.config.convention(),
            "sampled wall clock"
        );
        Ok(jd)
    }

    /// Unix timestamp of the current instant, with sub-second precision.
    pub fn current_seconds(&self) -> TimeResult<f64> {
        let instant = self.clock.now()?;
        Ok(instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9)
    }

    /// Julian Date of a Unix timestamp under the configured convention.
    pub fn from_epoch_seconds(&self, seconds: f64) -> JulianDate {
        from_epoch_seconds(seconds) + qtty::Days::new(self.shift())
    }

    /// Unix timestamp of a Julian Date under the configured convention.
    pub fn to_epoch_seconds(&self, jd: JulianDate) -> f64 {
        to_epoch_seconds(jd - qtty::Days::new(self.shift()))
    }

    fn shift(&self) -> f64 {
        self.config.convention().jd_shift()
    }

    fn instant_to_jd(&self, instant: DateTime<Utc>, offset: UtcOffset) -> TimeResult<JulianDate> {
        let wall = offset.to_fixed_offset().from_utc_datetime(&instant.naive_utc());
        let second = f64::from(wall.second())
            + f64::from(wall.nanosecond().min(999_999_999)) / 1e9;
        let jd = to_julian_hms(
            wall.year(),
            wall.month(),
            wall.day(),
            wall.hour(),
            wall.minute(),
            second,
        )?;
        Ok(jd + qtty::Days::new(self.shift()))
    }
}
