// Tests for guide-curve sampling and duration-path interpolation.

use std::f64::consts::{PI, TAU};

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use timespiral_core::{
    position_for_instant, sample_curve, sample_segment, segment_point_count, Granularity,
    SpiralParametrization, TemporalRange, DEFAULT_ZOOM, SEGMENT_MAX_POINTS, SEGMENT_MIN_POINTS,
};

fn dt(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn dth(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn annual_view() -> (TemporalRange, SpiralParametrization) {
    (
        TemporalRange::new(dt(2020, 1, 1), dt(2024, 6, 15), Granularity::Annual),
        SpiralParametrization::new(Granularity::Annual, DEFAULT_ZOOM),
    )
}

#[test]
fn curve_has_no_angular_discontinuities() {
    let (range, param) = annual_view();
    let resolution = 64u32;
    let points = sample_curve(&range, &param, resolution);
    assert!(points.len() > resolution as usize, "several loops expected");

    let max_step = TAU / resolution as f64 * 1.5;
    for pair in points.windows(2) {
        let a0 = (pair[0].position.z as f64).atan2(pair[0].position.x as f64);
        let a1 = (pair[1].position.z as f64).atan2(pair[1].position.x as f64);
        let mut delta = a1 - a0;
        while delta > PI {
            delta -= TAU;
        }
        while delta < -PI {
            delta += TAU;
        }
        assert!(
            delta.abs() <= max_step,
            "angular jump {delta} between {} and {}",
            pair[0].instant,
            pair[1].instant
        );
    }
}

#[test]
fn curve_never_samples_past_the_horizon() {
    for granularity in [
        Granularity::Annual,
        Granularity::Quarterly,
        Granularity::Monthly,
        Granularity::Daily,
    ] {
        let range = TemporalRange::new(dt(2023, 1, 1), dth(2023, 9, 14, 10, 30), granularity);
        let param = SpiralParametrization::new(granularity, DEFAULT_ZOOM);
        let points = sample_curve(&range, &param, 48);
        assert!(!points.is_empty());
        for p in &points {
            assert!(
                p.instant <= range.horizon(),
                "{granularity:?} sampled past now: {}",
                p.instant
            );
        }
        assert_eq!(
            points.last().unwrap().instant,
            range.horizon(),
            "curve should close exactly at the horizon"
        );
    }
}

#[test]
fn curve_points_ascend_chronologically() {
    let (range, param) = annual_view();
    let points = sample_curve(&range, &param, 48);
    for pair in points.windows(2) {
        assert!(
            pair[0].instant <= pair[1].instant,
            "out of order: {} before {}",
            pair[1].instant,
            pair[0].instant
        );
    }
}

#[test]
fn full_loops_get_the_requested_resolution() {
    let (range, param) = annual_view();
    let resolution = 48u32;
    let points = sample_curve(&range, &param, resolution);
    let first_loop = points.iter().filter(|p| p.instant.year() == 2020).count();
    assert_eq!(first_loop, resolution as usize);
}

#[test]
fn truncated_week_curve_stops_midweek() {
    // Wednesday 11:45 horizon: two full day loops plus part of the third
    let range = TemporalRange::new(dt(2024, 6, 10), dth(2024, 6, 12, 11, 45), Granularity::Weekly);
    let param = SpiralParametrization::new(Granularity::Weekly, DEFAULT_ZOOM);
    let points = sample_curve(&range, &param, 24);
    assert_eq!(points.last().unwrap().instant, range.horizon());
    // two full loops, twelve hourly samples of the last, plus the
    // closing sample at the horizon itself
    assert_eq!(points.len(), 24 + 24 + 12 + 1);
}

#[test]
fn degenerate_segment_returns_the_single_mapped_point() {
    let (range, param) = annual_view();
    let t = dt(2022, 7, 4);
    let path = sample_segment(t, t, &range, &param, 10);
    assert_eq!(path.len(), 1);
    assert_eq!(path[0], position_for_instant(t, &range, &param));

    // inverted spans behave like points too
    let inverted = sample_segment(t, dt(2021, 1, 1), &range, &param, 10);
    assert_eq!(inverted.len(), 1);
    assert_eq!(inverted[0], position_for_instant(t, &range, &param));
}

#[test]
fn segment_interpolates_uniformly_in_wall_clock_time() {
    let (range, param) = annual_view();
    let start = dt(2022, 1, 1);
    let end = dt(2022, 1, 11);
    let path = sample_segment(start, end, &range, &param, 10);
    assert_eq!(path.len(), 11);
    assert_eq!(path[0], position_for_instant(start, &range, &param));
    assert_eq!(path[10], position_for_instant(end, &range, &param));
    // midpoint in time, not in angle
    assert_eq!(path[5], position_for_instant(dt(2022, 1, 6), &range, &param));
}

#[test]
fn segment_start_clamps_to_the_origin() {
    let (range, param) = annual_view();
    let path = sample_segment(dt(2015, 1, 1), dt(2021, 1, 1), &range, &param, 12);
    assert_eq!(path[0], position_for_instant(range.origin(), &range, &param));
}

#[test]
fn segment_point_count_scales_with_span() {
    let start = dt(2022, 1, 1);
    assert_eq!(segment_point_count(start, start), 1);
    assert_eq!(
        segment_point_count(start, dth(2022, 1, 1, 5, 0)),
        SEGMENT_MIN_POINTS
    );
    assert_eq!(segment_point_count(start, dt(2022, 1, 31)), 30);
    assert_eq!(
        segment_point_count(start, dt(2032, 1, 1)),
        SEGMENT_MAX_POINTS
    );
}
