// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text rendering of Julian Dates.
//!
//! Numeric fields are zero padded to two digits (four for the year). Layouts
//! with a clock reading show the minute the instant falls in.
//!
//! | Layout | J2000.0 |
//! |--------|---------|
//! | [`DateFormat::YMonD`] | `2000 Jan 01` |
//! | [`DateFormat::MonDY`] | `Jan 01 2000` |
//! | [`DateFormat::MonD`] | `Jan 01` |
//! | [`DateFormat::YMD`] | `2000-01-01` |
//! | [`DateFormat::MDY`] | `01/01/2000` |
//! | [`DateFormat::MD`] | `01/01` |
//! | [`DateFormat::YMonDHM`] | `2000 Jan 01 12:00` |
//! | [`DateFormat::MonDYHM`] | `Jan 01 2000 12:00` |
//! | [`DateFormat::MonDHM`] | `Jan 01 12:00` |
//! | [`DateFormat::YMDHM`] | `2000-01-01 12:00` |
//! | [`DateFormat::MDYHM`] | `01/01/2000 12:00` |
//! | [`DateFormat::MDHM`] | `01/01 12:00` |

use crate::calendar::{civil_fields, TimeOfDay};
use crate::config::{MILLIS_PER_DAY, SECONDS_PER_MINUTE};
use crate::error::{TimeError, TimeResult};
use crate::JulianDate;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name, `None` outside 1–12.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}

/// Three-letter English month abbreviation, `None` outside 1–12.
pub fn month_abbreviation(month: u32) -> Option<&'static str> {
    month_name(month).map(|name| &name[..3])
}

/// Closed set of date layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub enum DateFormat {
    YMonD,
    MonDY,
    MonD,
    YMD,
    MDY,
    MD,
    YMonDHM,
    MonDYHM,
    MonDHM,
    YMDHM,
    MDYHM,
    MDHM,
}

impl DateFormat {
    pub const ALL: [DateFormat; 12] = [
        DateFormat::YMonD,
        DateFormat::MonDY,
        DateFormat::MonD,
        DateFormat::YMD,
        DateFormat::MDY,
        DateFormat::MD,
        DateFormat::YMonDHM,
        DateFormat::MonDYHM,
        DateFormat::MonDHM,
        DateFormat::YMDHM,
        DateFormat::MDYHM,
        DateFormat::MDHM,
    ];

    /// Layout name as accepted by [`FromStr`], e.g. `"Y_M_D_HM"`.
    pub const fn name(self) -> &'static str {
        match self {
            DateFormat::YMonD => "Y_MON_D",
            DateFormat::MonDY => "MON_D_Y",
            DateFormat::MonD => "MON_D",
            DateFormat::YMD => "Y_M_D",
            DateFormat::MDY => "M_D_Y",
            DateFormat::MD => "M_D",
            DateFormat::YMonDHM => "Y_MON_D_HM",
            DateFormat::MonDYHM => "MON_D_Y_HM",
            DateFormat::MonDHM => "MON_D_HM",
            DateFormat::YMDHM => "Y_M_D_HM",
            DateFormat::MDYHM => "M_D_Y_HM",
            DateFormat::MDHM => "M_D_HM",
        }
    }

    /// Whether the layout ends with an `HH:MM` clock reading.
    pub const fn has_time(self) -> bool {
        matches!(
            self,
            DateFormat::YMonDHM
                | DateFormat::MonDYHM
                | DateFormat::MonDHM
                | DateFormat::YMDHM
                | DateFormat::MDYHM
                | DateFormat::MDHM
        )
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateFormat {
    type Err = TimeError;

    fn from_str(s: &str) -> TimeResult<Self> {
        let wanted = s.trim();
        DateFormat::ALL
            .into_iter()
            .find(|layout| layout.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TimeError::UnsupportedFormat(s.to_string()))
    }
}

impl TryFrom<String> for DateFormat {
    type Error = TimeError;

    fn try_from(s: String) -> TimeResult<Self> {
        s.parse()
    }
}

impl From<DateFormat> for String {
    fn from(layout: DateFormat) -> Self {
        layout.name().to_string()
    }
}

/// Render `jd` with `layout`.
///
/// The date and the `HH:MM` reading come from the same millisecond-rounded
/// civil breakdown, so an instant a hair before midnight never prints the
/// old date with the new day's clock.
pub fn format_date_time(jd: JulianDate, layout: DateFormat) -> String {
    let ((y, m, d), time) = civil_fields(jd);
    let mon = month_abbreviation(m).unwrap_or("???");

    let date = match layout {
        DateFormat::YMonD | DateFormat::YMonDHM => format!("{y:04} {mon} {d:02}"),
        DateFormat::MonDY | DateFormat::MonDYHM => format!("{mon} {d:02} {y:04}"),
        DateFormat::MonD | DateFormat::MonDHM => format!("{mon} {d:02}"),
        DateFormat::YMD | DateFormat::YMDHM => format!("{y:04}-{m:02}-{d:02}"),
        DateFormat::MDY | DateFormat::MDYHM => format!("{m:02}/{d:02}/{y:04}"),
        DateFormat::MD | DateFormat::MDHM => format!("{m:02}/{d:02}"),
    };

    if layout.has_time() {
        format!("{date} {:02}:{:02}", time.hour, time.minute)
    } else {
        date
    }
}

/// Render `jd` with a layout given by name.
///
/// # Errors
/// [`TimeError::UnsupportedFormat`] for an unknown layout name.
pub fn format_date_time_named(jd: JulianDate, layout: &str) -> TimeResult<String> {
    Ok(format_date_time(jd, layout.parse()?))
}

/// Render a fraction of a day (`0 ≤ f < 1`, from midnight) as `HH:MM`
/// rounded to the nearest minute, or as `HH:MM:SS` rounded to the nearest
/// second. A reading that rounds up to 24:00 wraps to 00:00.
pub fn format_time(day_fraction: f64, with_seconds: bool) -> String {
    let ms = (day_fraction.rem_euclid(1.0) * MILLIS_PER_DAY as f64).round() as i64;
    if with_seconds {
        let t = TimeOfDay::from_millis((ms + 500) / 1_000 * 1_000);
        format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
    } else {
        let t = TimeOfDay::from_millis((ms + 30_000) / 60_000 * 60_000);
        format!("{:02}:{:02}", t.hour, t.minute)
    }
}

/// Render a duration in minutes as `MM:SS.S`.
pub fn format_minutes(minutes: f64) -> String {
    let tenths = (minutes.abs() * SECONDS_PER_MINUTE * 10.0).round() as u64;
    let sign = if minutes < 0.0 && tenths > 0 { "-" } else { "" };
    let whole = tenths / 600;
    let rest = tenths % 600;
    format!("{sign}{whole:02}:{:02}.{}", rest / 10, rest % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    const J2000: JulianDate = JulianDate::new(2_451_545.0);

    #[test]
    fn every_layout_at_j2000() {
        let expected = [
            "2000 Jan 01",
            "Jan 01 2000",
            "Jan 01",
            "2000-01-01",
            "01/01/2000",
            "01/01",
            "2000 Jan 01 12:00",
            "Jan 01 2000 12:00",
            "Jan 01 12:00",
            "2000-01-01 12:00",
            "01/01/2000 12:00",
            "01/01 12:00",
        ];
        for (layout, want) in DateFormat::ALL.into_iter().zip(expected) {
            assert_eq!(format_date_time(J2000, layout), want, "{layout}");
        }
    }

    #[test]
    fn minutes_are_truncated() {
        // 1987-04-10 19:21:59
        let jd = JulianDate::new(2_446_895.5 + (19.0 * 3600.0 + 21.0 * 60.0 + 59.0) / 86_400.0);
        assert_eq!(format_date_time(jd, DateFormat::YMDHM), "1987-04-10 19:21");
    }

    #[test]
    fn negative_years_keep_sign() {
        let jd = JulianDate::new(1_676_496.5);
        assert_eq!(format_date_time(jd, DateFormat::YMD), "-123-12-31");
        assert_eq!(
            format_date_time(JulianDate::new(0.0), DateFormat::YMonDHM),
            "-4712 Jan 01 12:00"
        );
    }

    #[test]
    fn only_hm_layouts_carry_a_clock() {
        for layout in DateFormat::ALL {
            let text = format_date_time(J2000, layout);
            assert_eq!(text.ends_with(" 12:00"), layout.has_time(), "{layout}");
        }
        assert_eq!(DateFormat::ALL.iter().filter(|l| l.has_time()).count(), 6);
    }

    #[test]
    fn layout_names_parse() {
        for layout in DateFormat::ALL {
            assert_eq!(layout.name().parse::<DateFormat>().unwrap(), layout);
        }
        assert_eq!("y_m_d_hm".parse::<DateFormat>().unwrap(), DateFormat::YMDHM);
    }

    #[test]
    fn unknown_layout_is_unsupported() {
        let err = "D_M_Y".parse::<DateFormat>().unwrap_err();
        assert_eq!(err, TimeError::UnsupportedFormat("D_M_Y".into()));
        assert!(format_date_time_named(J2000, "ISO").is_err());
        assert_eq!(
            format_date_time_named(J2000, "Y_MON_D_HM").unwrap(),
            "2000 Jan 01 12:00"
        );
    }

    #[test]
    fn month_tables() {
        assert_eq!(month_name(2), Some("February"));
        assert_eq!(month_abbreviation(9), Some("Sep"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_abbreviation(13), None);
    }

    #[test]
    fn format_time_rounds() {
        assert_eq!(format_time(0.5, false), "12:00");
        assert_eq!(format_time(0.5 + 29.0 / 86_400.0, false), "12:00");
        assert_eq!(format_time(0.5 + 31.0 / 86_400.0, false), "12:01");
        assert_eq!(format_time(1.0 - 10.0 / 86_400.0, false), "00:00");
        assert_eq!(format_time(0.75 + 1.6 / 86_400.0, true), "18:00:02");
    }

    #[test]
    fn format_minutes_splits_seconds() {
        assert_eq!(format_minutes(5.125), "05:07.5");
        assert_eq!(format_minutes(0.0), "00:00.0");
        assert_eq!(format_minutes(-1.5), "-01:30.0");
    }
}
