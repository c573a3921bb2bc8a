//! Guide-curve and duration-path sampling.

use chrono::{Duration, NaiveDateTime};
use glam::Vec3;

use crate::constants::{SEGMENT_MAX_POINTS, SEGMENT_MIN_POINTS};
use crate::mapping::{position_for_instant, position_for_progress};
use crate::spiral::{SpiralParametrization, TemporalRange};

/// A sampled point on the guide curve: position plus the instant it
/// represents. Recomputed whenever the range or resolution changes;
/// callers own memoization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpiralPoint {
    pub position: Vec3,
    pub instant: NaiveDateTime,
}

/// Polyline for the spiral guide curve.
///
/// Full loops get `resolution_per_loop` evenly spaced samples; the last,
/// in-progress loop is truncated at the horizon and closed with a sample
/// exactly at the horizon. Points come back in ascending chronological
/// order with no angular wraparound between neighbors.
pub fn sample_curve(
    range: &TemporalRange,
    param: &SpiralParametrization,
    resolution_per_loop: u32,
) -> Vec<SpiralPoint> {
    let resolution = resolution_per_loop.max(1);
    let step = 1.0 / resolution as f64;
    let horizon_progress = param.progress_of(range.horizon(), range);
    let last_loop = horizon_progress.floor() as i64;

    let mut points = Vec::with_capacity((last_loop as usize + 1) * resolution as usize + 1);
    let mut last_emitted = f64::NEG_INFINITY;
    'loops: for loop_index in 0..=last_loop {
        for s in 0..resolution {
            let progress = loop_index as f64 + s as f64 * step;
            if progress > horizon_progress {
                break 'loops;
            }
            points.push(SpiralPoint {
                position: position_for_progress(progress, param),
                instant: param.instant_at_progress(progress, range),
            });
            last_emitted = progress;
        }
    }
    if last_emitted < horizon_progress {
        points.push(SpiralPoint {
            position: position_for_progress(horizon_progress, param),
            instant: range.horizon(),
        });
    }
    points
}

/// Smooth 3D path for a duration event.
///
/// Interpolates `point_count + 1` instants uniformly in wall-clock time
/// (not in spiral-progress space, so motion along the path is constant
/// calendar speed) and maps each through the forward mapper. The start is
/// clamped to the range origin; a degenerate span collapses to the single
/// mapped start position.
pub fn sample_segment(
    start: NaiveDateTime,
    end: NaiveDateTime,
    range: &TemporalRange,
    param: &SpiralParametrization,
    point_count: usize,
) -> Vec<Vec3> {
    let start = start.max(range.origin());
    if end <= start {
        return vec![position_for_instant(start, range, param)];
    }
    let span_seconds = (end - start).num_seconds();
    let n = point_count.max(1) as i64;
    let mut points = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = start + Duration::seconds(span_seconds * i / n);
        points.push(position_for_instant(t, range, param));
    }
    points
}

/// Point density heuristic for duration paths: grows with span length,
/// bounded above for rendering cost.
pub fn segment_point_count(start: NaiveDateTime, end: NaiveDateTime) -> usize {
    if end <= start {
        return 1;
    }
    ((end - start).num_days() as usize).clamp(SEGMENT_MIN_POINTS, SEGMENT_MAX_POINTS)
}
