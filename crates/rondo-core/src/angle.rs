//! Pointer position to rotation fraction.

use crate::geom::Point;
use std::f64::consts::{FRAC_PI_2, TAU};

/// Wrap hysteresis at the top seam.
///
/// `t = 1.0` (a full turn) and `t = 0.0` are distinct states even though
/// they share the same screen position, so a crossing near the seam is
/// pinned to whichever side the previous fraction was on instead of
/// letting the handle flicker between the two. Only fires inside `band`
/// of the extremes.
pub fn wrap(raw_t: f64, previous_t: f64, band: f64) -> f64 {
    if previous_t > 1.0 - band && raw_t < band {
        1.0
    } else if previous_t < band && raw_t > 1.0 - band {
        0.0
    } else {
        raw_t
    }
}

/// Map a pointer position to a rotation fraction in `[min_t, 1.0]`.
///
/// Angle zero is at the top of the dial and fractions grow clockwise.
/// Returns `None` when the input coordinates are not finite; the caller
/// keeps its previous fraction for that event.
pub fn position_to_fraction(
    pointer: Point,
    center: Point,
    previous_t: f64,
    min_t: f64,
    wrap_band: f64,
) -> Option<f64> {
    if !pointer.is_finite() || !center.is_finite() {
        return None;
    }

    // Center-minus-pointer puts angle zero at the top, clockwise.
    let delta = Point::new(center.x - pointer.x, center.y - pointer.y);
    let mut angle = delta.y.atan2(delta.x) - FRAC_PI_2;
    if angle < 0.0 {
        angle += TAU;
    }

    let raw_t = angle / TAU;
    if !raw_t.is_finite() {
        return None;
    }

    Some(wrap(raw_t, previous_t, wrap_band).clamp(min_t, 1.0))
}
