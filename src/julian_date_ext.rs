// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) specific extensions.

use qtty::*;
use std::f64::consts::TAU;

use super::calendar::{self, CivilDate, TimeOfDay};
use super::error::TimeResult;
use super::format::{format_date_time, DateFormat};
use super::instant::Time;
use super::scales::{JD, MJD};
use super::weekday::{self, Weekday};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// One Julian millennium expressed in days.
    pub const JULIAN_MILLENNIUM: Days = Days::new(365_250.0);

    /// Julian millennia since J2000.0.
    #[inline]
    pub fn julian_millennias(&self) -> f64 {
        ((*self - Self::J2000) / Self::JULIAN_MILLENNIUM)
            .simplify()
            .value()
    }

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> f64 {
        ((*self - Self::J2000) / Self::JULIAN_CENTURY)
            .simplify()
            .value()
    }

    /// Mean Greenwich sidereal time in radians, normalised to `[0, 2π)`.
    ///
    /// Meeus eq. 12.4, with the day count split into whole and fractional
    /// parts so the large `360.98…°/day` rate is applied to a small number.
    pub fn greenwich_sidereal_time(&self) -> f64 {
        let d = (*self - Self::J2000).value();
        let t = d / Self::JULIAN_CENTURY.value();
        let whole = d.floor();
        let frac = d - whole;
        let degrees = 280.460_618_37
            + 360.985_647_366_29 * frac
            + 0.985_647_366_29 * whole
            + t * t * (3.879_33e-4 - t / 38_710_000.0);
        degrees.to_radians().rem_euclid(TAU)
    }

    /// Mean Greenwich sidereal time in hours, `[0, 24)`.
    #[inline]
    pub fn greenwich_sidereal_hours(&self) -> f64 {
        radians_to_hours(self.greenwich_sidereal_time())
    }

    /// Local mean sidereal time in hours for an observer at
    /// `longitude_deg` (east positive).
    pub fn local_sidereal_hours(&self, longitude_deg: f64) -> f64 {
        radians_to_hours(self.greenwich_sidereal_time() + longitude_deg.to_radians())
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }

    // ── civil calendar shortcuts ────────────────────────────────────────

    /// See [`calendar::to_julian`].
    #[inline]
    pub fn from_civil(year: i32, month: u32, day: f64) -> TimeResult<Self> {
        calendar::to_julian(year, month, day)
    }

    /// See [`calendar::to_julian_hms`].
    #[inline]
    pub fn from_civil_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> TimeResult<Self> {
        calendar::to_julian_hms(year, month, day, hour, minute, second)
    }

    #[inline]
    pub fn to_civil(&self) -> (CivilDate, TimeOfDay) {
        calendar::to_civil(*self)
    }

    #[inline]
    pub fn ymd(&self) -> CivilDate {
        calendar::to_ymd(*self)
    }

    #[inline]
    pub fn hms(&self) -> TimeOfDay {
        calendar::to_hms(*self)
    }

    #[inline]
    pub fn weekday(&self) -> Weekday {
        weekday::weekday(*self)
    }

    /// Render with one of the fixed [`DateFormat`] layouts.
    #[inline]
    pub fn format(&self, layout: DateFormat) -> String {
        format_date_time(*self, layout)
    }
}

fn radians_to_hours(angle: f64) -> f64 {
    let hours = angle.rem_euclid(TAU) * 24.0 / TAU;
    // rem_euclid may round up to exactly TAU
    if hours >= 24.0 {
        0.0
    } else {
        hours
    }
}
