//! Drag state machine and per-update render description.

use crate::angle;
use crate::geom::{Point, polar};
use crate::label::{UnitLabel, UnitLabels};
use crate::metrics::DialMetrics;
use crate::shapes::{ArcSpec, Disc, EMPTY_TURN, RingSpec, TickSpec};
use crate::snap::{self, SnapParams};
use std::f64::consts::{FRAC_PI_2, TAU};

const TOP_ANGLE: f64 = -FRAC_PI_2;

#[derive(Debug, Clone, PartialEq)]
pub struct DialOptions {
    /// Number of selectable ticks; the dial picks an integer in `1..=count`.
    pub count: u32,
    pub initial: u32,
    pub snap: SnapParams,
    pub labels: UnitLabels,
    pub round_caps: bool,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            count: 12,
            initial: 4,
            snap: SnapParams::default(),
            labels: UnitLabels::default(),
            round_caps: true,
        }
    }
}

impl DialOptions {
    fn sanitized(mut self) -> Self {
        if self.count == 0 {
            log::warn!("dial count 0 is not selectable, using 1");
            self.count = 1;
        }
        self.snap = self.snap.sanitized();
        self.initial = self.initial.clamp(1, self.count);
        self
    }
}

/// The only state that outlives a render pass.
///
/// `value` equals `round(t * count)` whenever no drag is in flight;
/// mid-drag `t` tracks the pointer continuously and `value` follows only
/// through the magnetic snap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialState {
    pub t: f64,
    pub value: u32,
    pub dragging: bool,
}

/// Emitted when a completed gesture or a programmatic set changed the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueChanged {
    pub from: u32,
    pub to: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSpec {
    pub center: Point,
    pub radius: f64,
    pub pressed: bool,
}

/// Immutable render description, rebuilt after every state-affecting
/// event. Styling is entirely the renderer's business.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub track: RingSpec,
    /// Value indicator; absent while the fraction is effectively zero.
    pub active: Option<ArcSpec>,
    pub ticks: TickSpec,
    pub handle: HandleSpec,
    /// Center cap covering the inside of the ring.
    pub hub: Disc,
    pub value: u32,
    pub label: UnitLabel,
    pub scale: f64,
}

/// Owns the dial state and routes pointer input through the mapper and
/// the snap engine. All methods run synchronously on the host's event
/// thread; events must arrive in delivery order.
#[derive(Debug, Clone)]
pub struct DialController {
    opts: DialOptions,
    state: DialState,
    metrics: Option<DialMetrics>,
    drag_from: u32,
}

impl DialController {
    pub fn new(opts: DialOptions) -> Self {
        let opts = opts.sanitized();
        let value = opts.initial;
        Self {
            state: DialState {
                t: f64::from(value) / f64::from(opts.count),
                value,
                dragging: false,
            },
            drag_from: value,
            metrics: None,
            opts,
        }
    }

    pub fn value(&self) -> u32 {
        self.state.value
    }

    pub fn state(&self) -> DialState {
        self.state
    }

    pub fn options(&self) -> &DialOptions {
        &self.opts
    }

    fn min_t(&self) -> f64 {
        1.0 / f64::from(self.opts.count)
    }

    fn settle(&mut self) {
        let (value, t) = snap::final_snap(self.state.t, self.opts.count);
        self.state.value = value;
        self.state.t = t;
    }

    /// Swap parameters at runtime (config reload), keeping the current
    /// selection as close as the new range allows.
    pub fn apply_options(&mut self, opts: DialOptions) {
        let opts = opts.sanitized();
        self.state.value = self.state.value.clamp(1, opts.count);
        self.state.t = f64::from(self.state.value) / f64::from(opts.count);
        self.state.dragging = false;
        self.opts = opts;
    }

    /// Programmatic set, clamped to the selectable range. Fires a change
    /// notification when the clamped value differs from the current one.
    pub fn set_value(&mut self, value: i64) -> Option<ValueChanged> {
        let clamped = value.clamp(1, i64::from(self.opts.count)) as u32;
        let from = self.state.value;

        self.state.value = clamped;
        self.state.t = f64::from(clamped) / f64::from(self.opts.count);
        self.state.dragging = false;

        (clamped != from).then_some(ValueChanged { from, to: clamped })
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.metrics = DialMetrics::from_bounds(width, height);
    }

    pub fn pointer_down(&mut self, pos: Point) {
        self.state.dragging = true;
        self.drag_from = self.state.value;
        self.track_pointer(pos);
    }

    pub fn pointer_move(&mut self, pos: Point) {
        if self.state.dragging {
            self.track_pointer(pos);
        }
    }

    /// Release: settle onto the nearest tick and report the gesture's net
    /// change, if any.
    pub fn pointer_up(&mut self, pos: Point) -> Option<ValueChanged> {
        if !self.state.dragging {
            return None;
        }
        self.track_pointer(pos);
        self.finish_gesture()
    }

    /// Capture loss mid-gesture; settles exactly like a release so the
    /// controller can never be left dragging.
    pub fn pointer_cancel(&mut self) -> Option<ValueChanged> {
        if !self.state.dragging {
            return None;
        }
        self.finish_gesture()
    }

    fn finish_gesture(&mut self) -> Option<ValueChanged> {
        self.state.dragging = false;
        self.settle();

        let (from, to) = (self.drag_from, self.state.value);
        (to != from).then_some(ValueChanged { from, to })
    }

    fn track_pointer(&mut self, pos: Point) {
        let Some(metrics) = self.metrics else {
            return;
        };
        let Some(t) = angle::position_to_fraction(
            pos,
            metrics.center,
            self.state.t,
            self.min_t(),
            self.opts.snap.wrap_band,
        ) else {
            return;
        };

        self.state.t = t;
        if let Some(value) = snap::magnetic_snap(t, self.opts.count, self.opts.snap.magnet_threshold)
        {
            self.state.value = value;
        }
    }

    /// Current render description, `None` while the bounds cannot host
    /// any geometry.
    pub fn frame(&self) -> Option<RenderFrame> {
        let m = self.metrics?;
        let handle_angle = TOP_ANGLE + self.state.t * TAU;

        let active = (self.state.t > EMPTY_TURN).then(|| ArcSpec {
            center: m.center,
            inner_radius: m.inner_radius,
            outer_radius: m.outer_radius,
            start_angle: TOP_ANGLE,
            end_angle: TOP_ANGLE + self.state.t * TAU,
            round_caps: self.opts.round_caps,
        });

        Some(RenderFrame {
            track: RingSpec {
                center: m.center,
                inner_radius: m.inner_radius,
                outer_radius: m.outer_radius,
            },
            active,
            ticks: TickSpec {
                center: m.center,
                radius: m.track_radius,
                count: self.opts.count,
                dot_radius: m.dot_radius,
            },
            handle: HandleSpec {
                center: polar(m.center, m.track_radius, handle_angle),
                radius: m.handle_radius,
                pressed: self.state.dragging,
            },
            hub: Disc {
                center: m.center,
                radius: m.inner_radius,
            },
            value: self.state.value,
            label: self.opts.labels.for_value(self.state.value).clone(),
            scale: m.scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 180.0, y: 180.0 };

    fn controller() -> DialController {
        let mut c = DialController::new(DialOptions::default());
        c.resize(360.0, 360.0);
        c
    }

    /// Pointer position on the track for a given fraction.
    fn at(t: f64) -> Point {
        polar(CENTER, 120.0, TOP_ANGLE + t * TAU)
    }

    #[test]
    fn starts_settled_on_the_initial_value() {
        let c = controller();
        assert_eq!(c.value(), 4);
        assert!((c.state().t - 4.0 / 12.0).abs() < 1e-9);
        assert!(!c.state().dragging);
    }

    #[test]
    fn drag_to_bottom_selects_six() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        c.pointer_move(Point::new(180.0, 300.0)); // directly below center
        assert!((c.state().t - 0.5).abs() < 1e-9);

        let change = c.pointer_up(Point::new(180.0, 300.0));
        assert_eq!(c.value(), 6);
        assert!((c.state().t - 0.5).abs() < 1e-9);
        assert_eq!(change, Some(ValueChanged { from: 4, to: 6 }));
    }

    #[test]
    fn drag_past_the_seam_commits_twelve() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        c.pointer_move(at(0.99));
        // Magnetic snap already shows 12 while the handle is still short
        // of the seam.
        assert_eq!(c.value(), 12);

        let change = c.pointer_up(at(0.99));
        assert_eq!(change, Some(ValueChanged { from: 4, to: 12 }));
        assert_eq!(c.value(), 12);
        assert!((c.state().t - 1.0).abs() < 1e-9);
    }

    #[test]
    fn value_lags_between_ticks_mid_drag() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        c.pointer_move(at(6.5 / 12.0)); // exactly between two ticks
        assert_eq!(c.value(), 4, "display holds the previous value");
        assert!((c.state().t - 6.5 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn releasing_on_the_start_value_fires_no_change() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        let change = c.pointer_up(at(4.1 / 12.0));
        assert_eq!(change, None);
        assert_eq!(c.value(), 4);
    }

    #[test]
    fn cancel_settles_like_a_release() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        c.pointer_move(at(0.74));
        let change = c.pointer_cancel();

        assert!(!c.state().dragging);
        assert_eq!(c.value(), 9);
        assert_eq!(change, Some(ValueChanged { from: 4, to: 9 }));
        assert_eq!(c.pointer_cancel(), None, "cancel outside a drag is a no-op");
    }

    #[test]
    fn moves_without_a_press_are_ignored() {
        let mut c = controller();
        c.pointer_move(at(0.75));
        assert_eq!(c.value(), 4);
        assert!((c.state().t - 4.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn non_finite_pointer_leaves_state_unchanged() {
        let mut c = controller();
        c.pointer_down(at(4.0 / 12.0));
        let before = c.state();
        c.pointer_move(Point::new(f64::NAN, 40.0));
        assert_eq!(c.state(), before);
    }

    #[test]
    fn set_value_clamps_and_notifies() {
        let mut c = controller();
        assert_eq!(c.set_value(7), Some(ValueChanged { from: 4, to: 7 }));
        assert!((c.state().t - 7.0 / 12.0).abs() < 1e-9);

        assert_eq!(c.set_value(99), Some(ValueChanged { from: 7, to: 12 }));
        assert_eq!(c.set_value(-3), Some(ValueChanged { from: 12, to: 1 }));
        assert_eq!(c.set_value(1), None, "no notification without a change");
    }

    #[test]
    fn frame_describes_the_settled_dial() {
        let c = controller();
        let frame = c.frame().unwrap();

        assert_eq!(frame.track.inner_radius, 90.0);
        assert_eq!(frame.track.outer_radius, 150.0);
        assert_eq!(frame.ticks.count, 12);
        assert_eq!(frame.value, 4);
        assert_eq!(frame.label.as_str(), "months");
        assert!(!frame.handle.pressed);

        let active = frame.active.expect("a third of a turn is visible");
        assert!((active.end_angle - active.start_angle - TAU / 3.0).abs() < 1e-9);

        let expected_handle = polar(CENTER, 120.0, TOP_ANGLE + TAU / 3.0);
        assert!(frame.handle.center.distance(expected_handle) < 1e-9);
    }

    #[test]
    fn frame_uses_the_singular_label_at_one() {
        let mut c = controller();
        c.set_value(1);
        assert_eq!(c.frame().unwrap().label.as_str(), "month");
    }

    #[test]
    fn degenerate_bounds_suppress_the_frame() {
        let mut c = controller();
        c.resize(0.0, 360.0);
        assert!(c.frame().is_none());

        // Input while unsized must not corrupt the state.
        c.pointer_down(Point::new(10.0, 10.0));
        c.pointer_move(Point::new(20.0, 20.0));
        assert!((c.state().t - 4.0 / 12.0).abs() < 1e-9);

        c.resize(360.0, 360.0);
        assert!(c.frame().is_some());
    }

    #[test]
    fn pressed_flag_follows_the_gesture() {
        let mut c = controller();
        c.pointer_down(at(0.5));
        assert!(c.frame().unwrap().handle.pressed);
        c.pointer_up(at(0.5));
        assert!(!c.frame().unwrap().handle.pressed);
    }

    #[test]
    fn options_are_sanitized() {
        let c = DialController::new(DialOptions {
            count: 0,
            initial: 99,
            ..DialOptions::default()
        });
        assert_eq!(c.options().count, 1);
        assert_eq!(c.value(), 1);
    }

    #[test]
    fn reload_keeps_the_selection_in_range() {
        let mut c = controller();
        c.set_value(10);
        c.apply_options(DialOptions {
            count: 6,
            ..DialOptions::default()
        });
        assert_eq!(c.value(), 6);
        assert!((c.state().t - 1.0).abs() < 1e-9);
    }
}
