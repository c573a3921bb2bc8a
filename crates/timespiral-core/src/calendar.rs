//! Pure calendar arithmetic used by the spiral parametrizations.
//!
//! Everything here is side-effect free. Seasons follow fixed Gregorian
//! boundaries; Winter is the only season that crosses a year boundary,
//! so callers must not assume both ends of a season share a year.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cumulative day counts before each month, non-leap lengths.
pub(crate) const DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) const DAYS_PER_YEAR: f64 = 365.0;

#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a Gregorian month. `month` is 1-based; values
/// outside 1..=12 fold to a 30-day length.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30,
    }
}

/// Monday at or before the given instant, time of day zeroed.
pub fn start_of_week(instant: NaiveDateTime) -> NaiveDateTime {
    let date = instant.date();
    let back = date.weekday().num_days_from_monday() as i64;
    (date - Duration::days(back)).and_time(NaiveTime::MIN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

/// Season labels arrive as free-form strings from the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown season label: {0:?}")]
pub struct UnknownSeason(pub String);

impl FromStr for Season {
    type Err = UnknownSeason;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            _ => Err(UnknownSeason(s.to_string())),
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        })
    }
}

/// Inclusive date range covered by a season. Winter ends in `year + 1`.
pub fn season_date_range(season: Season, year: i32) -> (NaiveDate, NaiveDate) {
    match season {
        Season::Spring => (ymd(year, 3, 20), ymd(year, 6, 20)),
        Season::Summer => (ymd(year, 6, 21), ymd(year, 8, 22)),
        Season::Fall => (ymd(year, 8, 23), ymd(year, 11, 20)),
        Season::Winter => (ymd(year, 12, 21), ymd(year + 1, 2, 19)),
    }
}

/// Concrete instant standing in for a season-precision date: the middle
/// day of the season's middle month. Winter resolves into January of the
/// following year.
pub fn season_midpoint(season: Season, year: i32) -> NaiveDateTime {
    let (mid_year, mid_month) = match season {
        Season::Spring => (year, 4),
        Season::Summer => (year, 7),
        Season::Fall => (year, 10),
        Season::Winter => (year + 1, 1),
    };
    ymd(mid_year, mid_month, 15).and_time(NaiveTime::MIN)
}

#[inline]
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("calendar position within supported range")
}
