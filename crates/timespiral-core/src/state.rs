//! Renderer-facing value types.
//!
//! These types intentionally avoid referencing any rendering engine.
//! Frontends convert `Vec3` into their native vertex formats and decide
//! how to draw glows and drifting debris.

use glam::Vec3;

use crate::constants::{GLOW_BASE, GLOW_SPAN};

/// Where the renderer should draw an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventPlacement {
    /// On the guide curve, at the mapped instant.
    OnSpiral(Vec3),
    /// Beyond the horizon: a free-floating position off the spiral.
    Drifting(Vec3),
}

impl EventPlacement {
    #[inline]
    pub fn position(&self) -> Vec3 {
        match *self {
            EventPlacement::OnSpiral(p) | EventPlacement::Drifting(p) => p,
        }
    }
}

/// Glow strength handed to the particle/glow pass.
///
/// `amount` stays in \[0, 1\] where 0 is idle and 1 is a full glow. The
/// renderer maps this to particle count and emissive intensity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EventGlow {
    pub amount: f32,
}

impl EventGlow {
    /// Map a 1-10 event intensity onto the glow range. Monotone; values
    /// outside the scale clamp to its ends.
    pub fn from_intensity(intensity: u8) -> Self {
        let i = intensity.clamp(1, 10) as f32;
        Self {
            amount: GLOW_BASE + GLOW_SPAN * (i - 1.0) / 9.0,
        }
    }
}
