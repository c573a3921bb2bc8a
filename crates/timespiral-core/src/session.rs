//! Session controller owning the visible range, the event set and the
//! view configuration. The mapping layer stays stateless and pure; this
//! is the one stateful piece frontends talk to.

use chrono::{NaiveDateTime, NaiveTime};
use fnv::FnvHashMap;
use glam::Vec3;
use rand::prelude::*;

use crate::calendar::{start_of_week, ymd};
use crate::config::ViewConfig;
use crate::constants::{
    DEBRIS_HEIGHT_MAX, DEBRIS_HEIGHT_MIN, DEBRIS_RADIUS_MAX, DEBRIS_RADIUS_MIN, ZOOM_MAX, ZOOM_MIN,
};
use crate::event::TimeEvent;
use crate::mapping::{instant_for_click, position_for_instant, ClickError};
use crate::sample::{sample_curve, sample_segment, segment_point_count, SpiralPoint};
use crate::spiral::{Granularity, SpiralParametrization, TemporalRange};
use crate::state::{EventGlow, EventPlacement};

pub struct TimelineSession {
    events: FnvHashMap<u64, TimeEvent>,
    config: ViewConfig,
    now: NaiveDateTime,
    range: TemporalRange,
    param: SpiralParametrization,
    rng: StdRng,
}

impl TimelineSession {
    /// The caller owns the clock: `now` becomes the range horizon and is
    /// only advanced through `set_now`.
    pub fn new(config: ViewConfig, now: NaiveDateTime, seed: u64) -> Self {
        let (range, param) = build_view(&config, now);
        Self {
            events: FnvHashMap::default(),
            config,
            now,
            range,
            param,
            // Derive the debris stream from the base seed so reseeding one
            // concern leaves the others untouched
            rng: StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15),
        }
    }

    #[inline]
    pub fn range(&self) -> &TemporalRange {
        &self.range
    }

    #[inline]
    pub fn parametrization(&self) -> &SpiralParametrization {
        &self.param
    }

    #[inline]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn set_granularity(&mut self, granularity: Granularity) {
        if self.config.granularity == granularity {
            return;
        }
        self.config.granularity = granularity;
        self.rebuild_view();
        log::info!("[view] granularity -> {:?}", granularity);
    }

    pub fn set_origin_year(&mut self, year: i32) {
        if self.config.origin_year == year {
            return;
        }
        self.config.origin_year = year;
        self.rebuild_view();
        log::info!("[view] origin year -> {}", year);
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.config.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        self.rebuild_view();
    }

    /// Advance the horizon.
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
        self.rebuild_view();
    }

    fn rebuild_view(&mut self) {
        let (range, param) = build_view(&self.config, self.now);
        self.range = range;
        self.param = param;
    }

    pub fn add_event(&mut self, event: TimeEvent) {
        log::info!(
            "[event] add id={} intensity={}",
            event.id,
            event.clamped_intensity()
        );
        self.events.insert(event.id, event);
    }

    pub fn remove_event(&mut self, id: u64) -> Option<TimeEvent> {
        let removed = self.events.remove(&id);
        if removed.is_some() {
            log::info!("[event] remove id={}", id);
        }
        removed
    }

    #[inline]
    pub fn event(&self, id: u64) -> Option<&TimeEvent> {
        self.events.get(&id)
    }

    pub fn events(&self) -> impl Iterator<Item = &TimeEvent> {
        self.events.values()
    }

    #[inline]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Where to draw an event: on the spiral for instants inside the
    /// window, drifting off-spiral for future ones.
    pub fn placement_for(&mut self, id: u64) -> Option<EventPlacement> {
        let start = self.events.get(&id)?.start();
        Some(if start > self.range.horizon() {
            EventPlacement::Drifting(self.debris_position())
        } else {
            EventPlacement::OnSpiral(position_for_instant(start, &self.range, &self.param))
        })
    }

    /// Path for a duration event; a single-point path for point events
    /// and degenerate spans. `None` for future events, which drift
    /// instead of tracing the spiral.
    pub fn path_for(&self, id: u64) -> Option<Vec<Vec3>> {
        let event = self.events.get(&id)?;
        let start = event.start();
        if start > self.range.horizon() {
            return None;
        }
        let end = event.end.unwrap_or(start);
        Some(sample_segment(
            start,
            end,
            &self.range,
            &self.param,
            segment_point_count(start, end),
        ))
    }

    pub fn glow_for(&self, id: u64) -> Option<EventGlow> {
        self.events
            .get(&id)
            .map(|e| EventGlow::from_intensity(e.intensity))
    }

    /// Guide curve polyline. No caching here; callers memoize per range
    /// and resolution change.
    pub fn guide_curve(&self) -> Vec<SpiralPoint> {
        sample_curve(&self.range, &self.param, self.config.curve_resolution)
    }

    pub fn resolve_click(&self, point: Vec3) -> Result<NaiveDateTime, ClickError> {
        let resolved = instant_for_click(point, &self.range, &self.param);
        match &resolved {
            Ok(instant) => log::info!("[click] resolved {}", instant),
            Err(err) => log::info!("[click] rejected: {}", err),
        }
        resolved
    }

    fn debris_position(&mut self) -> Vec3 {
        let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let radius = self.rng.gen_range(DEBRIS_RADIUS_MIN..DEBRIS_RADIUS_MAX);
        let height = self.rng.gen_range(DEBRIS_HEIGHT_MIN..DEBRIS_HEIGHT_MAX);
        Vec3::new(radius * angle.cos(), height, radius * angle.sin())
    }
}

fn build_view(config: &ViewConfig, now: NaiveDateTime) -> (TemporalRange, SpiralParametrization) {
    let origin = match config.granularity {
        // the weekly spiral shows the horizon's week, one loop per day
        Granularity::Weekly => start_of_week(now),
        _ => ymd(config.origin_year, 1, 1).and_time(NaiveTime::MIN),
    };
    (
        TemporalRange::new(origin, now, config.granularity),
        SpiralParametrization::new(config.granularity, config.zoom),
    )
}
