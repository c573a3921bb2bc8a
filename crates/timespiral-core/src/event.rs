use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::calendar::{season_midpoint, Season};

/// When an event happened: an exact instant, or a season-precision guess.
/// Approximate timings resolve to the season midpoint once, before any
/// mapping, so downstream code never re-checks which case it holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventTiming {
    Exact(NaiveDateTime),
    Approximate { season: Season, year: i32 },
}

impl EventTiming {
    /// Concrete instant for mapping purposes.
    pub fn resolve(&self) -> NaiveDateTime {
        match *self {
            EventTiming::Exact(instant) => instant,
            EventTiming::Approximate { season, year } => season_midpoint(season, year),
        }
    }
}

/// A memory placed on the timeline. A present `end` makes it a duration
/// event rendered as a path; absent, a single point. Persisted as JSON
/// with ISO-8601 instants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEvent {
    pub id: u64,
    pub title: String,
    pub timing: EventTiming,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    pub intensity: u8,
}

impl TimeEvent {
    pub fn point(id: u64, title: impl Into<String>, timing: EventTiming, intensity: u8) -> Self {
        Self {
            id,
            title: title.into(),
            timing,
            end: None,
            intensity: intensity.clamp(1, 10),
        }
    }

    pub fn duration(
        id: u64,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        intensity: u8,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            timing: EventTiming::Exact(start),
            end: Some(end),
            intensity: intensity.clamp(1, 10),
        }
    }

    #[inline]
    pub fn start(&self) -> NaiveDateTime {
        self.timing.resolve()
    }

    #[inline]
    pub fn is_duration(&self) -> bool {
        self.end.is_some()
    }

    /// Intensity held to the 1..=10 scale even for hand-edited records.
    #[inline]
    pub fn clamped_intensity(&self) -> u8 {
        self.intensity.clamp(1, 10)
    }
}
