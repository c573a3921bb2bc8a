use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURVE_RESOLUTION, DEFAULT_ORIGIN_YEAR, DEFAULT_ZOOM};
use crate::spiral::Granularity;

/// Per-view settings persisted between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub granularity: Granularity,
    pub origin_year: i32,
    pub zoom: f64,
    pub curve_resolution: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            granularity: Granularity::Annual,
            origin_year: DEFAULT_ORIGIN_YEAR,
            zoom: DEFAULT_ZOOM,
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
        }
    }
}
