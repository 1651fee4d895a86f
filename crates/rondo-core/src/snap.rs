//! Soft and hard snapping between the continuous fraction and tick values.

use serde::{Deserialize, Serialize};

const DEFAULT_MAGNET_THRESHOLD: f64 = 0.3;
const DEFAULT_WRAP_BAND: f64 = 0.1;

/// Tunable snapping thresholds.
///
/// `magnet_threshold` is the distance (in units of one tick) within which
/// the displayed value follows the pointer mid-drag; `wrap_band` is the
/// fraction band at either extreme where the seam hysteresis fires.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapParams {
    pub magnet_threshold: f64,
    pub wrap_band: f64,
}

impl Default for SnapParams {
    fn default() -> Self {
        Self {
            magnet_threshold: DEFAULT_MAGNET_THRESHOLD,
            wrap_band: DEFAULT_WRAP_BAND,
        }
    }
}

impl SnapParams {
    /// Clamp both thresholds to `[0.0, 0.5]`, falling back to the default
    /// for values that are not finite.
    pub fn sanitized(self) -> Self {
        Self {
            magnet_threshold: sanitize(self.magnet_threshold, DEFAULT_MAGNET_THRESHOLD, "magnet_threshold"),
            wrap_band: sanitize(self.wrap_band, DEFAULT_WRAP_BAND, "wrap_band"),
        }
    }
}

fn sanitize(value: f64, fallback: f64, name: &str) -> f64 {
    if !value.is_finite() {
        log::warn!("snap parameter {name} = {value} is not finite, using {fallback}");
        return fallback;
    }
    if !(0.0..=0.5).contains(&value) {
        let clamped = value.clamp(0.0, 0.5);
        log::warn!("snap parameter {name} = {value} is out of range [0.0, 0.5], using {clamped}");
        return clamped;
    }
    value
}

/// Soft snap of the displayed value while a drag is in flight.
///
/// Returns the value to display when the pointer sits within
/// `threshold` of a tick, `None` when the display should keep showing
/// whatever it showed before.
pub fn magnetic_snap(raw_t: f64, count: u32, threshold: f64) -> Option<u32> {
    let candidate = raw_t * f64::from(count);
    let nearest = candidate.round();
    let distance = (candidate - nearest).abs();

    (distance < threshold).then(|| (nearest as i64).clamp(1, i64::from(count)) as u32)
}

/// Hard snap applied on release: the committed value and the corrected
/// fraction placing the handle exactly on its tick.
pub fn final_snap(t: f64, count: u32) -> (u32, f64) {
    let value = ((t * f64::from(count)).round() as i64).clamp(1, i64::from(count)) as u32;
    (value, f64::from(value) / f64::from(count))
}
