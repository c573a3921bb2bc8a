//! Forward and inverse mapping between calendar instants and positions
//! in spiral space.

use std::f64::consts::{FRAC_PI_2, TAU};

use chrono::NaiveDateTime;
use glam::Vec3;
use thiserror::Error;

use crate::spiral::{SpiralParametrization, TemporalRange};

/// Click resolution failures. Out-of-range is an expected outcome the UI
/// reports to the user, not a fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClickError {
    #[error("resolved instant {0} is outside the visible time range")]
    OutOfRange(NaiveDateTime),
    #[error("click position is not finite")]
    NonFinite,
}

/// Spiral-space position for a progress value.
///
/// The negative angle sweeps clockwise seen from above, and the `pi/2`
/// offset puts progress 0 at the 12 o'clock position. Height descends so
/// more recent time sits lower.
pub fn position_for_progress(progress: f64, param: &SpiralParametrization) -> Vec3 {
    let frac = progress.rem_euclid(1.0);
    let angle = -TAU * frac + FRAC_PI_2;
    let radius = param.base_radius + progress * param.radius_growth_per_loop;
    let height = -progress * param.height_per_loop;
    Vec3::new(
        (radius * angle.cos()) as f32,
        height as f32,
        (radius * angle.sin()) as f32,
    )
}

/// Forward mapper: the 3D position of a calendar instant on the spiral.
/// Instants before the range origin collapse to the origin point; instants
/// beyond the horizon are the caller's debris case, not handled here.
pub fn position_for_instant(
    instant: NaiveDateTime,
    range: &TemporalRange,
    param: &SpiralParametrization,
) -> Vec3 {
    position_for_progress(param.progress_of(instant, range), param)
}

/// Whether the forward mapper applies to this instant. Later instants get
/// the rendering layer's floating-debris treatment instead.
#[inline]
pub fn within_range(instant: NaiveDateTime, range: &TemporalRange) -> bool {
    range.contains(instant)
}

/// Inverse mapper: best-effort calendar instant for a 3D point near the
/// spiral surface.
///
/// Loop recovery is radius-based, matching the radius term of the forward
/// formula. Since a click position is lossy, the resolved instant is
/// validated against the range and anything outside
/// `[origin, horizon + 1 loop]` is rejected.
pub fn instant_for_click(
    point: Vec3,
    range: &TemporalRange,
    param: &SpiralParametrization,
) -> Result<NaiveDateTime, ClickError> {
    if !point.is_finite() {
        return Err(ClickError::NonFinite);
    }
    let x = point.x as f64;
    let z = point.z as f64;
    let planar_radius = (x * x + z * z).sqrt();
    let theta = z.atan2(x).rem_euclid(TAU);
    let frac = ((FRAC_PI_2 - theta) / TAU).rem_euclid(1.0);
    let loops = ((planar_radius - param.base_radius) / param.radius_growth_per_loop - frac).round();
    let resolved = param.instant_at_progress(loops + frac, range);

    if resolved < range.origin() {
        return Err(ClickError::OutOfRange(resolved));
    }
    let horizon_progress = param.progress_of(range.horizon(), range);
    if param.progress_of(resolved, range) > horizon_progress + 1.0 {
        return Err(ClickError::OutOfRange(resolved));
    }
    Ok(resolved)
}
