// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date time keeping
//!
//! Conversions between the astronomical Julian Date, the civil calendar and
//! the system clock, for ephemeris and orbit-propagation code that works on a
//! continuous day count.
//!
//! # Core types
//!
//! - [`JulianDate`]: type alias for `Time<JD>`; fractional days since noon of
//!   −4712-01-01 (Julian calendar).
//! - [`Time<S>`]: generic instant parameterised by a [`TimeScale`] marker.
//! - [`CivilDate`] / [`TimeOfDay`]: civil calendar fields.
//! - [`Weekday`]: day of the week, Sunday = 0.
//! - [`DateFormat`]: the fixed text layouts.
//! - [`EpochClock`]: wall clock sampled as Julian Dates.
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Date |
//! | [`MJD`] | Modified Julian Date |
//! | [`UnixTime`] | Unix / POSIX time in days |
//!
//! Leap seconds and ΔT are not modelled: every scale is a linear offset of
//! the same UTC day count.
//!
//! # Example
//!
//! ```rust
//! use julday::{DateFormat, JulianDate, Weekday};
//!
//! let jd = JulianDate::from_civil_hms(1957, 10, 4, 19, 28, 34.0)?;
//! assert_eq!(jd.weekday(), Weekday::Friday);
//! assert_eq!(jd.format(DateFormat::YMonDHM), "1957 Oct 04 19:28");
//! # Ok::<(), julday::TimeError>(())
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
mod error;
pub mod format;
pub(crate) mod instant;
mod julian_date_ext;
mod offset;
pub(crate) mod scales;
pub mod weekday;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{
    days_in_month, is_leap_year, midnight_split, to_civil, to_hms, to_julian, to_julian_hms,
    to_ymd, CivilDate, TimeOfDay,
};
pub use clock::{EpochClock, FixedClock, SystemClock, WallClock};
pub use config::{ClockConfig, EpochConvention, JD_DIFF};
pub use error::{DateComponent, TimeError, TimeResult};
pub use format::{format_date_time, DateFormat};
pub use instant::{Time, TimeScale};
pub use offset::UtcOffset;
pub use scales::{UnixTime, JD, MJD};
pub use weekday::{weekday, Weekday};

/// Julian Date: continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Modified Julian Date, `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;
