// Shared tuning constants for the spiral views, used by core and frontends.

// Spiral shape per granularity: base radius, radius growth per loop and
// height per loop. Height is scaled by the view zoom at construction.
pub const ANNUAL_BASE_RADIUS: f64 = 3.0;
pub const ANNUAL_RADIUS_GROWTH: f64 = 0.5;
pub const ANNUAL_HEIGHT_PER_LOOP: f64 = 1.5;

pub const QUARTERLY_BASE_RADIUS: f64 = 3.0;
pub const QUARTERLY_RADIUS_GROWTH: f64 = 0.5;
pub const QUARTERLY_HEIGHT_PER_LOOP: f64 = 1.5;

pub const MONTHLY_BASE_RADIUS: f64 = 2.0;
pub const MONTHLY_RADIUS_GROWTH: f64 = 0.2;
pub const MONTHLY_HEIGHT_PER_LOOP: f64 = 0.6;

pub const WEEKLY_BASE_RADIUS: f64 = 1.5;
pub const WEEKLY_RADIUS_GROWTH: f64 = 0.08;
pub const WEEKLY_HEIGHT_PER_LOOP: f64 = 0.7;

pub const DAILY_BASE_RADIUS: f64 = 3.0;
pub const DAILY_RADIUS_GROWTH: f64 = 0.5;
pub const DAILY_HEIGHT_PER_LOOP: f64 = 1.5;

// View defaults
pub const DEFAULT_ZOOM: f64 = 1.0;
pub const ZOOM_MIN: f64 = 0.25;
pub const ZOOM_MAX: f64 = 4.0;
pub const DEFAULT_ORIGIN_YEAR: i32 = 2020;
pub const DEFAULT_CURVE_RESOLUTION: u32 = 96; // guide-curve samples per loop

// Glow mapping: intensity 1 maps to GLOW_BASE, intensity 10 to
// GLOW_BASE + GLOW_SPAN.
pub const GLOW_BASE: f32 = 0.15;
pub const GLOW_SPAN: f32 = 0.85;

// Future events drift in a shell outside the spiral body
pub const DEBRIS_RADIUS_MIN: f32 = 8.0;
pub const DEBRIS_RADIUS_MAX: f32 = 14.0;
pub const DEBRIS_HEIGHT_MIN: f32 = 1.0;
pub const DEBRIS_HEIGHT_MAX: f32 = 5.0;

// Duration path density
pub const SEGMENT_MIN_POINTS: usize = 8;
pub const SEGMENT_MAX_POINTS: usize = 96;
