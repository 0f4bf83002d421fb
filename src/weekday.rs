// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day of the week (Meeus ch. 7, p. 65).

use crate::calendar::midnight_split;
use crate::JulianDate;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Day of the week, numbered from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday for an index, reduced modulo 7.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Index in `0..=6`, Sunday = 0.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// Three-letter English abbreviation, e.g. `"Wed"`.
    pub fn abbreviation(self) -> &'static str {
        &NAMES[self as usize][..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => chrono::Weekday::Sun,
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        Self::from_index(i64::from(day.num_days_from_sunday()))
    }
}

/// Civil weekday `jd` falls on.
///
/// `(JDN + 1) mod 7`, where the Julian Day Number counts civil days. The
/// Euclidean remainder keeps negative Julian Dates in range.
pub fn weekday(jd: JulianDate) -> Weekday {
    let (day_number, _) = midnight_split(jd);
    Weekday::from_index(day_number as i64 + 1)
}
