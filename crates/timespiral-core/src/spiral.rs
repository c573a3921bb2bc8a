//! Spiral parametrization: how calendar time becomes loop progress.
//!
//! One full loop represents one unit of the active granularity. Progress
//! is a real number `loops elapsed since origin + fraction within the
//! current loop`, monotone in calendar time. Fractions live in `[0, 1)`
//! with the upper boundary assigned to the next loop.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar::{days_in_month, start_of_week, ymd, DAYS_BEFORE_MONTH, DAYS_PER_YEAR};
use crate::constants::{
    ANNUAL_BASE_RADIUS, ANNUAL_HEIGHT_PER_LOOP, ANNUAL_RADIUS_GROWTH, DAILY_BASE_RADIUS,
    DAILY_HEIGHT_PER_LOOP, DAILY_RADIUS_GROWTH, MONTHLY_BASE_RADIUS, MONTHLY_HEIGHT_PER_LOOP,
    MONTHLY_RADIUS_GROWTH, QUARTERLY_BASE_RADIUS, QUARTERLY_HEIGHT_PER_LOOP,
    QUARTERLY_RADIUS_GROWTH, WEEKLY_BASE_RADIUS, WEEKLY_HEIGHT_PER_LOOP, WEEKLY_RADIUS_GROWTH,
};

/// The time unit one full spiral loop represents. Weekly is the odd one
/// out: each loop is a day, and the view covers the horizon's week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    Annual,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

/// Visible time window for one spiral instance. Immutable; build a new
/// range when the origin, horizon or granularity changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalRange {
    origin: NaiveDateTime,
    horizon: NaiveDateTime,
    granularity: Granularity,
}

impl TemporalRange {
    /// Constructs a range upholding `origin <= horizon`. Weekly origins
    /// snap back to Monday so day loops align with the week.
    pub fn new(origin: NaiveDateTime, horizon: NaiveDateTime, granularity: Granularity) -> Self {
        let mut origin = origin.min(horizon);
        if granularity == Granularity::Weekly {
            origin = start_of_week(origin);
        }
        Self {
            origin,
            horizon,
            granularity,
        }
    }

    #[inline]
    pub fn origin(&self) -> NaiveDateTime {
        self.origin
    }

    #[inline]
    pub fn horizon(&self) -> NaiveDateTime {
        self.horizon
    }

    #[inline]
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Whether an instant lies inside the closed visible window.
    #[inline]
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.origin <= instant && instant <= self.horizon
    }
}

/// Per-granularity spiral shape. `progress_of` is the single source of
/// truth for loop index plus fractional position; the forward mapper,
/// the curve sampler and the click resolver all go through it and its
/// inverse, `instant_at_progress`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralParametrization {
    pub granularity: Granularity,
    pub base_radius: f64,
    pub radius_growth_per_loop: f64,
    pub height_per_loop: f64,
}

impl SpiralParametrization {
    pub fn new(granularity: Granularity, zoom: f64) -> Self {
        let (base_radius, radius_growth_per_loop, height_per_loop) = match granularity {
            Granularity::Annual => (
                ANNUAL_BASE_RADIUS,
                ANNUAL_RADIUS_GROWTH,
                ANNUAL_HEIGHT_PER_LOOP,
            ),
            Granularity::Quarterly => (
                QUARTERLY_BASE_RADIUS,
                QUARTERLY_RADIUS_GROWTH,
                QUARTERLY_HEIGHT_PER_LOOP,
            ),
            Granularity::Monthly => (
                MONTHLY_BASE_RADIUS,
                MONTHLY_RADIUS_GROWTH,
                MONTHLY_HEIGHT_PER_LOOP,
            ),
            Granularity::Weekly => (
                WEEKLY_BASE_RADIUS,
                WEEKLY_RADIUS_GROWTH,
                WEEKLY_HEIGHT_PER_LOOP,
            ),
            Granularity::Daily => (
                DAILY_BASE_RADIUS,
                DAILY_RADIUS_GROWTH,
                DAILY_HEIGHT_PER_LOOP,
            ),
        };
        Self {
            granularity,
            base_radius,
            radius_growth_per_loop,
            height_per_loop: height_per_loop * zoom,
        }
    }

    /// Loops elapsed since the range origin plus fractional progress
    /// within the current loop. Instants before the origin clamp to the
    /// origin, so progress is always >= 0.
    pub fn progress_of(&self, instant: NaiveDateTime, range: &TemporalRange) -> f64 {
        let t = instant.max(range.origin());
        self.loops_between(range.origin(), t) as f64 + self.loop_fraction(t)
    }

    fn loops_between(&self, origin: NaiveDateTime, t: NaiveDateTime) -> i64 {
        match self.granularity {
            Granularity::Annual => (t.year() - origin.year()) as i64,
            Granularity::Quarterly => quarter_index(t) - quarter_index(origin),
            Granularity::Monthly => month_index(t) - month_index(origin),
            Granularity::Weekly | Granularity::Daily => (t.date() - origin.date()).num_days(),
        }
    }

    /// Fractional position within the loop containing `t`. Stays in
    /// `[0, 1)` except at the final calendar boundary of a loop, where it
    /// may reach 1.0 and roll over into the next loop index.
    pub fn loop_fraction(&self, t: NaiveDateTime) -> f64 {
        match self.granularity {
            Granularity::Annual => {
                (DAYS_BEFORE_MONTH[t.month0() as usize] + t.day() as i64) as f64 / DAYS_PER_YEAR
            }
            Granularity::Quarterly => {
                let month_in_quarter = (t.month0() % 3) as f64;
                let day_progress =
                    (t.day() - 1) as f64 / days_in_month(t.month(), t.year()) as f64;
                (month_in_quarter + day_progress) / 3.0
            }
            Granularity::Monthly => {
                (t.day() - 1) as f64 / days_in_month(t.month(), t.year()) as f64
            }
            Granularity::Weekly | Granularity::Daily => {
                (t.hour() as f64 + t.minute() as f64 / 60.0) / 24.0
            }
        }
    }

    /// Inverse of `progress_of`: reconstruct the calendar instant a
    /// progress value stands for. Negative progress resolves to instants
    /// before the origin so callers can detect and reject them.
    pub fn instant_at_progress(&self, progress: f64, range: &TemporalRange) -> NaiveDateTime {
        let loop_index = progress.floor() as i64;
        let frac = progress - loop_index as f64;
        let origin = range.origin();
        match self.granularity {
            Granularity::Annual => {
                let year = origin.year() + loop_index as i32;
                let total = (frac * DAYS_PER_YEAR).round() as i64;
                let month0 = DAYS_BEFORE_MONTH
                    .iter()
                    .rposition(|&cum| cum < total)
                    .unwrap_or(0);
                let day = (total - DAYS_BEFORE_MONTH[month0]).clamp(1, 31) as u32;
                ymd(year, month0 as u32 + 1, day).and_time(NaiveTime::MIN)
            }
            Granularity::Quarterly => {
                let qi = quarter_index(origin) + loop_index;
                let year = qi.div_euclid(4) as i32;
                let quarter = qi.rem_euclid(4) as u32;
                let within = frac * 3.0;
                let month_in_quarter = (within.floor() as i64).clamp(0, 2);
                let month = quarter * 3 + month_in_quarter as u32 + 1;
                let dim = days_in_month(month, year) as i64;
                let day_progress = within - month_in_quarter as f64;
                let day = ((day_progress * dim as f64 + 0.5).floor() as i64 + 1).clamp(1, dim);
                ymd(year, month, day as u32).and_time(NaiveTime::MIN)
            }
            Granularity::Monthly => {
                let mi = month_index(origin) + loop_index;
                let year = mi.div_euclid(12) as i32;
                let month = mi.rem_euclid(12) as u32 + 1;
                let dim = days_in_month(month, year) as i64;
                let day = ((frac * dim as f64 + 0.5).floor() as i64 + 1).clamp(1, dim);
                ymd(year, month, day as u32).and_time(NaiveTime::MIN)
            }
            Granularity::Weekly | Granularity::Daily => {
                let date = origin.date() + Duration::days(loop_index);
                let minutes = ((frac * 24.0 * 60.0).round() as i64).clamp(0, 24 * 60 - 1);
                date.and_time(NaiveTime::MIN) + Duration::minutes(minutes)
            }
        }
    }
}

#[inline]
fn quarter_index(t: NaiveDateTime) -> i64 {
    t.year() as i64 * 4 + (t.month0() / 3) as i64
}

#[inline]
fn month_index(t: NaiveDateTime) -> i64 {
    t.year() as i64 * 12 + t.month0() as i64
}
