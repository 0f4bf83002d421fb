// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Local UTC offset.
//!
//! The offset of the host's time zone is read from the OS once per process
//! and treated as constant afterwards. Callers that need the DST-correct
//! offset of some other instant use [`UtcOffset::local_at`].

use crate::config::SECONDS_PER_DAY;
use crate::error::{TimeError, TimeResult};
use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

static LOCAL_OFFSET: OnceLock<UtcOffset> = OnceLock::new();

/// Signed offset from UTC in whole seconds, east positive.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct UtcOffset {
    seconds: i32,
}

impl UtcOffset {
    pub const UTC: Self = Self { seconds: 0 };

    /// Offset of `seconds` east of UTC. Must be strictly within one day.
    pub fn from_seconds(seconds: i32) -> TimeResult<Self> {
        if seconds.unsigned_abs() >= SECONDS_PER_DAY as u32 {
            return Err(TimeError::InvalidUtcOffset {
                seconds: i64::from(seconds),
            });
        }
        Ok(Self { seconds })
    }

    /// Offset of the host time zone, resolved on first call.
    pub fn local() -> Self {
        *LOCAL_OFFSET.get_or_init(|| {
            let offset = Self::local_at(Utc::now());
            tracing::debug!(seconds = offset.seconds, "resolved local UTC offset");
            offset
        })
    }

    /// Offset of the host time zone in force at `instant` (DST included).
    pub fn local_at(instant: DateTime<Utc>) -> Self {
        let fixed = Local.offset_from_utc_datetime(&instant.naive_utc()).fix();
        Self {
            seconds: fixed.local_minus_utc(),
        }
    }

    #[inline]
    pub const fn seconds(&self) -> i32 {
        self.seconds
    }

    /// The offset as a fraction of a day, in `(-1, 1)`.
    #[inline]
    pub fn as_days(&self) -> f64 {
        f64::from(self.seconds) / SECONDS_PER_DAY
    }

    pub fn to_fixed_offset(&self) -> FixedOffset {
        // |seconds| < 86400 is guaranteed by construction.
        FixedOffset::east_opt(self.seconds).unwrap_or_else(|| Utc.fix())
    }
}

impl TryFrom<i32> for UtcOffset {
    type Error = TimeError;

    fn try_from(seconds: i32) -> TimeResult<Self> {
        Self::from_seconds(seconds)
    }
}

impl From<UtcOffset> for i32 {
    fn from(offset: UtcOffset) -> Self {
        offset.seconds
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.seconds < 0 { '-' } else { '+' };
        let abs = self.seconds.unsigned_abs();
        write!(f, "UTC{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
    }
}
