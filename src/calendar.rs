// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Calendar conversion: Julian Date ↔ civil date and time
//!
//! Implements the day-count algorithms from Chapter 7 of
//! *Jean Meeus, Astronomical Algorithms (2nd ed. 1998)*.
//!
//! ## Calendar rule
//! Dates from 1582-10-15 onwards are Gregorian. Earlier dates are counted on
//! the Julian calendar, which is what the astronomical Julian Date epoch
//! (JD 0.0 = −4712-01-01 12:00) is defined against. The ten days
//! 1582-10-05 … 1582-10-14 do not exist. Years use astronomical numbering:
//! year 0 is 1 BC and negative years need no special casing.
//!
//! ## Two day starts
//! A Julian Date counts days from **noon**; civil dates count them from
//! **midnight**. The half-day shift between the two is applied in exactly
//! one place, [`midnight_split`], and every civil field is derived from its
//! result.
//!
//! ## Quick Example
//! ```rust
//! use julday::calendar::{to_julian_hms, to_ymd, to_hms};
//!
//! let jd = to_julian_hms(2000, 1, 1, 12, 0, 0.0).unwrap();
//! assert_eq!(jd.value(), 2_451_545.0);
//!
//! let date = to_ymd(jd);
//! assert_eq!((date.year, date.month, date.day), (2000, 1, 1.5));
//! assert_eq!(to_hms(jd).hour, 12);
//! ```

use crate::config::{HOURS_PER_DAY, MILLIS_PER_DAY, SECONDS_PER_DAY};
use crate::error::{DateComponent, TimeError, TimeResult};
use crate::JulianDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First day counted on the Gregorian calendar (1582-10-15), as the integer
/// day number of [`midnight_split`].
const GREGORIAN_REFORM_DAY: f64 = 2_299_161.0;

/// Last Julian-calendar date before the reform.
const LAST_JULIAN_DATE: (i32, u32, u32) = (1582, 10, 4);
/// First Gregorian-calendar date after the reform.
const FIRST_GREGORIAN_DATE: (i32, u32, u32) = (1582, 10, 15);

const DAYS_IN_MONTH: [[u32; 12]; 2] = [
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
    [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31],
];

// ═══════════════════════════════════════════════════════════════════════════
// Value types
// ═══════════════════════════════════════════════════════════════════════════

/// Calendar date with the time of day folded into a fractional day.
///
/// `day` is the day of the month plus the fraction elapsed since civil
/// midnight: `1.0` is the first midnight of the month, `1.5` its noon.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDate {
    pub year: i32,
    pub month: u32,
    pub day: f64,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Integer day of the month.
    #[inline]
    pub fn day_of_month(&self) -> u32 {
        self.day.floor() as u32
    }

    /// Fraction of the day elapsed since midnight, in `[0, 1)`.
    #[inline]
    pub fn day_fraction(&self) -> f64 {
        self.day - self.day.floor()
    }

    /// Julian Date of this civil date. See [`to_julian`].
    pub fn to_julian(&self) -> TimeResult<JulianDate> {
        to_julian(self.year, self.month, self.day)
    }
}

/// Time of day on the civil (midnight-based) clock, to the millisecond.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
        millisecond: 0,
    };

    /// Break a millisecond-of-day count into fields. Values of a full day or
    /// more wrap to the next day's clock reading.
    pub(crate) fn from_millis(millis: i64) -> Self {
        let ms = millis.rem_euclid(MILLIS_PER_DAY);
        Self {
            hour: (ms / 3_600_000) as u32,
            minute: ((ms / 60_000) % 60) as u32,
            second: ((ms / 1_000) % 60) as u32,
            millisecond: (ms % 1_000) as u32,
        }
    }

    /// Fraction of the day elapsed at this clock reading.
    pub fn day_fraction(&self) -> f64 {
        self.total_seconds() / SECONDS_PER_DAY
    }

    /// Seconds elapsed since midnight.
    pub fn total_seconds(&self) -> f64 {
        f64::from(self.hour * 3_600 + self.minute * 60 + self.second)
            + f64::from(self.millisecond) / 1_000.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Noon → midnight
// ═══════════════════════════════════════════════════════════════════════════

/// Split a Julian Date into the civil day it falls on and the fraction of
/// that day elapsed since midnight.
///
/// Returns `(z, f)` with `jd + 0.5 == z + f`, `z` integral and `0 ≤ f < 1`.
/// `z` is the Julian Day Number of the civil day's noon.
#[inline]
pub fn midnight_split(jd: JulianDate) -> (f64, f64) {
    let shifted = jd.value() + 0.5;
    let z = shifted.floor();
    let f = shifted - z;
    // Tiny negative inputs can round the fraction up to exactly 1.0.
    if f >= 1.0 {
        (z + 1.0, 0.0)
    } else {
        (z, f)
    }
}

/// Civil day number and millisecond of day, rounded once so that date and
/// clock reading always describe the same instant.
pub(crate) fn civil_millis(jd: JulianDate) -> (f64, i64) {
    let (z, f) = midnight_split(jd);
    let ms = (f * MILLIS_PER_DAY as f64).round() as i64;
    if ms >= MILLIS_PER_DAY {
        (z + 1.0, ms - MILLIS_PER_DAY)
    } else {
        (z, ms)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// JD → civil
// ═══════════════════════════════════════════════════════════════════════════

/// Year, month and fractional day (Meeus ch. 7, "Calculation of the
/// Calendar Date from the JD").
pub fn to_ymd(jd: JulianDate) -> CivilDate {
    let (z, f) = midnight_split(jd);
    ymd_from_day_number(z, f)
}

fn ymd_from_day_number(z: f64, f: f64) -> CivilDate {
    let a = if z < GREGORIAN_REFORM_DAY {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };

    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    CivilDate {
        year: year as i32,
        month: month as u32,
        day,
    }
}

/// Clock reading of the civil day `jd` falls on, rounded to the millisecond.
///
/// Derived from the fraction after midnight independently of
/// [`CivilDate::day`]; an instant within half a millisecond of the next
/// midnight reads `00:00:00.000`.
pub fn to_hms(jd: JulianDate) -> TimeOfDay {
    let (_, ms) = civil_millis(jd);
    TimeOfDay::from_millis(ms)
}

/// Both civil breakdowns of `jd`.
pub fn to_civil(jd: JulianDate) -> (CivilDate, TimeOfDay) {
    tracing::trace!(jd = jd.value(), "civil breakdown");
    (to_ymd(jd), to_hms(jd))
}

/// Integer civil date (year, month, day of month) and time of day, read from
/// the same millisecond-rounded instant.
pub(crate) fn civil_fields(jd: JulianDate) -> ((i32, u32, u32), TimeOfDay) {
    let (z, ms) = civil_millis(jd);
    let date = ymd_from_day_number(z, 0.0);
    (
        (date.year, date.month, date.day_of_month()),
        TimeOfDay::from_millis(ms),
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// civil → JD
// ═══════════════════════════════════════════════════════════════════════════

/// Julian Date of a civil date whose `day` carries the time of day as a
/// fraction from midnight (Meeus ch. 7, eq. 7.1).
///
/// # Errors
/// [`TimeError::InvalidDateComponent`] when the month is outside 1–12, the
/// day is below 1 or past the end of the month, or the date falls in the
/// October 1582 reform gap.
pub fn to_julian(year: i32, month: u32, day: f64) -> TimeResult<JulianDate> {
    validate_date(year, month, day)?;

    let (y, m) = if month <= 2 {
        (f64::from(year) - 1.0, f64::from(month) + 12.0)
    } else {
        (f64::from(year), f64::from(month))
    };

    let b = if is_gregorian(year, month, day.floor() as u32) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };

    let jd = (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5;
    Ok(JulianDate::new(jd))
}

/// Julian Date of a civil date and clock reading.
///
/// `second` may carry a fraction; it must lie in `[0, 60)`.
pub fn to_julian_hms(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> TimeResult<JulianDate> {
    if hour > 23 {
        return Err(TimeError::invalid(
            DateComponent::Hour,
            f64::from(hour),
            "expected 0..=23",
        ));
    }
    if minute > 59 {
        return Err(TimeError::invalid(
            DateComponent::Minute,
            f64::from(minute),
            "expected 0..=59",
        ));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::invalid(
            DateComponent::Second,
            second,
            "expected 0 <= second < 60",
        ));
    }

    let fraction = (f64::from(hour * 3_600 + minute * 60) + second) / SECONDS_PER_DAY;
    to_julian(year, month, f64::from(day) + fraction)
}

fn validate_date(year: i32, month: u32, day: f64) -> TimeResult<()> {
    let length = days_in_month(year, month)?;
    // Also rejects NaN.
    if !(day >= 1.0 && day < f64::from(length) + 1.0) {
        return Err(TimeError::invalid(
            DateComponent::Day,
            day,
            format!("{year}-{month:02} has {length} days"),
        ));
    }
    let whole = (year, month, day.floor() as u32);
    if whole > LAST_JULIAN_DATE && whole < FIRST_GREGORIAN_DATE {
        return Err(TimeError::invalid(
            DateComponent::Day,
            day,
            "1582-10-05 through 1582-10-14 were skipped by the Gregorian reform",
        ));
    }
    Ok(())
}

#[inline]
fn is_gregorian(year: i32, month: u32, day: u32) -> bool {
    (year, month, day) >= FIRST_GREGORIAN_DATE
}

// ═══════════════════════════════════════════════════════════════════════════
// Calendar helpers
// ═══════════════════════════════════════════════════════════════════════════

/// Leap-year rule in force for `year`: Julian (every fourth year) before
/// 1582, Gregorian from 1582 on.
pub fn is_leap_year(year: i32) -> bool {
    if year < FIRST_GREGORIAN_DATE.0 {
        year.rem_euclid(4) == 0
    } else {
        (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
    }
}

/// Number of days in `month` of `year`.
///
/// October 1582 still reports 31: the reform gap is rejected separately.
pub fn days_in_month(year: i32, month: u32) -> TimeResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::invalid(
            DateComponent::Month,
            f64::from(month),
            "expected 1..=12",
        ));
    }
    Ok(DAYS_IN_MONTH[usize::from(is_leap_year(year))][month as usize - 1])
}

/// Ordinal day of the year, 1-based.
pub fn day_of_year(year: i32, month: u32, day: u32) -> TimeResult<u32> {
    let length = days_in_month(year, month)?;
    if day < 1 || day > length {
        return Err(TimeError::invalid(
            DateComponent::Day,
            f64::from(day),
            format!("{year}-{month:02} has {length} days"),
        ));
    }
    let leap = usize::from(is_leap_year(year));
    let before: u32 = DAYS_IN_MONTH[leap][..month as usize - 1].iter().sum();
    Ok(before + day)
}

/// Convert hours to a fraction of a day, e.g. 12 h → 0.5.
#[inline]
pub fn hour_to_day(hours: f64) -> f64 {
    hours / HOURS_PER_DAY
}
