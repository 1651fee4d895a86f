//! Layout of the dial within its drawing bounds.

use crate::geom::Point;

/// Bounds edge (the smaller of width/height) at which the reference radii
/// apply unscaled.
pub const REFERENCE_SIZE: f64 = 360.0;
pub const INNER_RADIUS: f64 = 90.0;
pub const OUTER_RADIUS: f64 = 150.0;
pub const HANDLE_RADIUS: f64 = 24.0;
pub const DOT_RADIUS: f64 = 2.0;

/// Resolved per-bounds layout: center and scaled radii.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialMetrics {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// Orbit of the handle and the tick dots, midway through the band.
    pub track_radius: f64,
    pub handle_radius: f64,
    pub dot_radius: f64,
    pub scale: f64,
}

impl DialMetrics {
    /// Layout for the given drawing bounds, `None` when the bounds cannot
    /// host any geometry (zero, negative or non-finite).
    pub fn from_bounds(width: f64, height: f64) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }

        let scale = width.min(height) / REFERENCE_SIZE;
        let inner_radius = INNER_RADIUS * scale;
        let outer_radius = OUTER_RADIUS * scale;

        Some(Self {
            center: Point::new(width / 2.0, height / 2.0),
            inner_radius,
            outer_radius,
            track_radius: inner_radius + (outer_radius - inner_radius) / 2.0,
            handle_radius: HANDLE_RADIUS * scale,
            dot_radius: DOT_RADIUS * scale,
            scale,
        })
    }
}
