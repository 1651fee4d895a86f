//! Vector geometry for the dial: ring, donut arc and tick dots.
//!
//! All builders are pure functions of their numeric inputs and share one
//! angle convention with the pointer mapper: zero at the top of the dial,
//! increasing clockwise (widget coordinates, y grows downward). Output is
//! renderer-agnostic: closed figures made of line and endpoint-arc
//! segments, filled with the nonzero winding rule.

use crate::geom::{Point, polar};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Sweep fraction at or above which a donut arc degrades to the full ring.
pub const FULL_TURN: f64 = 0.9999;
/// Sweep fraction at or below which a donut arc produces no geometry.
pub const EMPTY_TURN: f64 = 0.001;

/// Annulus between two concentric circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

/// Wedge of an annulus between two angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpec {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub round_caps: bool,
}

/// Evenly spaced dots on a circle, the first at the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSpec {
    pub center: Point,
    pub radius: f64,
    pub count: u32,
    pub dot_radius: f64,
}

/// Filled circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub center: Point,
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Clockwise,
    CounterClockwise,
}

/// One leg of a figure. Arcs are endpoint-parameterized: the circle is
/// given by the previous point, `to` and `radius`; `large_arc` selects the
/// major path when the two candidate arcs differ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Arc {
        to: Point,
        radius: f64,
        large_arc: bool,
        sweep: Sweep,
    },
    Line {
        to: Point,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub start: Point,
    pub segments: Vec<Segment>,
    pub closed: bool,
}

/// A set of figures filled together under the nonzero winding rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shape {
    pub figures: Vec<Figure>,
}

impl Shape {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}

/// Full circle as two half arcs, starting at the top.
fn circle(center: Point, radius: f64, sweep: Sweep) -> Figure {
    let top = Point::new(center.x, center.y - radius);
    let bottom = Point::new(center.x, center.y + radius);

    let half = |to| Segment::Arc {
        to,
        radius,
        large_arc: false,
        sweep,
    };

    Figure {
        start: top,
        segments: vec![half(bottom), half(top)],
        closed: true,
    }
}

/// Region between two concentric circles: the outer disk wound clockwise
/// minus the inner disk wound the other way. Degenerate radii produce the
/// empty shape rather than an error.
pub fn ring(spec: &RingSpec) -> Shape {
    if spec.outer_radius <= 0.0 || spec.inner_radius >= spec.outer_radius {
        return Shape::empty();
    }

    let mut figures = vec![circle(spec.center, spec.outer_radius, Sweep::Clockwise)];
    if spec.inner_radius > 0.0 {
        figures.push(circle(spec.center, spec.inner_radius, Sweep::CounterClockwise));
    }
    Shape { figures }
}

/// Donut-shaped wedge from `start_angle` to `end_angle`, walked clockwise
/// along the outer radius and back counter-clockwise along the inner one.
///
/// A sweep of (almost) a full turn degrades to [`ring`], which avoids the
/// zero-length arc at exactly 360 degrees; a near-zero sweep yields the
/// empty shape.
pub fn donut_arc(spec: &ArcSpec) -> Shape {
    let ring_spec = RingSpec {
        center: spec.center,
        inner_radius: spec.inner_radius,
        outer_radius: spec.outer_radius,
    };

    let turn = (spec.end_angle - spec.start_angle) / TAU;
    if turn >= FULL_TURN {
        return ring(&ring_spec);
    }
    if turn <= EMPTY_TURN
        || spec.outer_radius <= 0.0
        || spec.inner_radius >= spec.outer_radius
        || spec.inner_radius < 0.0
    {
        return Shape::empty();
    }

    let outer_start = polar(spec.center, spec.outer_radius, spec.start_angle);
    let outer_end = polar(spec.center, spec.outer_radius, spec.end_angle);
    let inner_start = polar(spec.center, spec.inner_radius, spec.start_angle);
    let inner_end = polar(spec.center, spec.inner_radius, spec.end_angle);

    let large_arc = spec.end_angle - spec.start_angle > PI;
    let cap_radius = (spec.outer_radius - spec.inner_radius) / 2.0;

    let mut segments = Vec::with_capacity(4);

    segments.push(Segment::Arc {
        to: outer_end,
        radius: spec.outer_radius,
        large_arc,
        sweep: Sweep::Clockwise,
    });

    // End cap: down to the inner radius.
    if spec.round_caps {
        segments.push(Segment::Arc {
            to: inner_end,
            radius: cap_radius,
            large_arc: false,
            sweep: Sweep::Clockwise,
        });
    } else {
        segments.push(Segment::Line { to: inner_end });
    }

    segments.push(Segment::Arc {
        to: inner_start,
        radius: spec.inner_radius,
        large_arc,
        sweep: Sweep::CounterClockwise,
    });

    // Start cap: figure closure supplies the straight edge for flat caps.
    if spec.round_caps {
        segments.push(Segment::Arc {
            to: outer_start,
            radius: cap_radius,
            large_arc: false,
            sweep: Sweep::Clockwise,
        });
    }

    Shape {
        figures: vec![Figure {
            start: outer_start,
            segments,
            closed: true,
        }],
    }
}

/// `count` dots of `dot_radius`, evenly spaced on the tick circle, the
/// first at the top and proceeding clockwise.
pub fn tick_ring(spec: &TickSpec) -> Vec<Disc> {
    (0..spec.count)
        .map(|i| {
            let angle = f64::from(i) / f64::from(spec.count.max(1)) * TAU - FRAC_PI_2;
            Disc {
                center: polar(spec.center, spec.radius, angle),
                radius: spec.dot_radius,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point { x: 200.0, y: 200.0 };

    fn arc_spec(turn: f64, round_caps: bool) -> ArcSpec {
        ArcSpec {
            center: CENTER,
            inner_radius: 90.0,
            outer_radius: 150.0,
            start_angle: -FRAC_PI_2,
            end_angle: -FRAC_PI_2 + turn * TAU,
            round_caps,
        }
    }

    fn ring_spec() -> RingSpec {
        RingSpec {
            center: CENTER,
            inner_radius: 90.0,
            outer_radius: 150.0,
        }
    }

    #[test]
    fn ring_is_outer_minus_inner() {
        let shape = ring(&ring_spec());
        assert_eq!(shape.figures.len(), 2);

        let sweeps: Vec<_> = shape
            .figures
            .iter()
            .map(|f| match f.segments[0] {
                Segment::Arc { sweep, .. } => sweep,
                Segment::Line { .. } => panic!("circle figures have no line segments"),
            })
            .collect();
        assert_eq!(sweeps, vec![Sweep::Clockwise, Sweep::CounterClockwise]);
    }

    #[test]
    fn degenerate_ring_is_empty() {
        for (inner, outer) in [(150.0, 90.0), (90.0, 90.0), (0.0, 0.0), (10.0, -5.0)] {
            let shape = ring(&RingSpec {
                center: CENTER,
                inner_radius: inner,
                outer_radius: outer,
            });
            assert!(shape.is_empty(), "inner={inner} outer={outer}");
        }
    }

    #[test]
    fn zero_inner_radius_fills_the_disk() {
        let shape = ring(&RingSpec {
            center: CENTER,
            inner_radius: 0.0,
            outer_radius: 150.0,
        });
        assert_eq!(shape.figures.len(), 1);
    }

    #[test]
    fn full_turn_arc_degrades_to_ring() {
        assert_eq!(donut_arc(&arc_spec(1.0, true)), ring(&ring_spec()));
        assert_eq!(donut_arc(&arc_spec(0.99995, true)), ring(&ring_spec()));
    }

    #[test]
    fn near_zero_arc_is_empty() {
        assert!(donut_arc(&arc_spec(0.0, true)).is_empty());
        assert!(donut_arc(&arc_spec(0.0005, true)).is_empty());
    }

    #[test]
    fn round_capped_wedge_has_four_arcs() {
        let shape = donut_arc(&arc_spec(0.25, true));
        assert_eq!(shape.figures.len(), 1);

        let figure = &shape.figures[0];
        assert!(figure.closed);
        assert_eq!(figure.segments.len(), 4);
        assert!(figure
            .segments
            .iter()
            .all(|s| matches!(s, Segment::Arc { .. })));
    }

    #[test]
    fn flat_capped_wedge_closes_with_lines() {
        let shape = donut_arc(&arc_spec(0.25, false));
        let figure = &shape.figures[0];
        assert_eq!(figure.segments.len(), 3);
        assert!(matches!(figure.segments[1], Segment::Line { .. }));
    }

    #[test]
    fn wedge_walks_outer_then_inner() {
        let spec = arc_spec(0.25, true);
        let shape = donut_arc(&spec);
        let figure = &shape.figures[0];

        let outer_start = polar(CENTER, 150.0, spec.start_angle);
        assert!(figure.start.distance(outer_start) < 1e-9);

        match figure.segments[0] {
            Segment::Arc { to, radius, sweep, .. } => {
                assert_eq!(radius, 150.0);
                assert_eq!(sweep, Sweep::Clockwise);
                assert!(to.distance(polar(CENTER, 150.0, spec.end_angle)) < 1e-9);
            }
            Segment::Line { .. } => panic!("outer leg must be an arc"),
        }
        match figure.segments[2] {
            Segment::Arc { to, radius, sweep, .. } => {
                assert_eq!(radius, 90.0);
                assert_eq!(sweep, Sweep::CounterClockwise);
                assert!(to.distance(polar(CENTER, 90.0, spec.start_angle)) < 1e-9);
            }
            Segment::Line { .. } => panic!("inner leg must be an arc"),
        }
    }

    #[test]
    fn large_arc_flag_follows_half_turn() {
        let flags = |turn| {
            donut_arc(&arc_spec(turn, true)).figures[0]
                .segments
                .iter()
                .filter_map(|s| match s {
                    Segment::Arc { radius, large_arc, .. } if *radius >= 90.0 => Some(*large_arc),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(flags(0.25), vec![false, false]);
        assert_eq!(flags(0.5), vec![false, false]);
        assert_eq!(flags(0.51), vec![true, true]);
        assert_eq!(flags(0.9), vec![true, true]);
    }

    #[test]
    fn cap_radius_is_half_the_band() {
        let shape = donut_arc(&arc_spec(0.25, true));
        match shape.figures[0].segments[1] {
            Segment::Arc { radius, .. } => assert_eq!(radius, 30.0),
            Segment::Line { .. } => panic!("round end cap must be an arc"),
        }
    }

    #[test]
    fn tick_ring_places_dots_clockwise_from_top() {
        let dots = tick_ring(&TickSpec {
            center: CENTER,
            radius: 120.0,
            count: 12,
            dot_radius: 2.0,
        });
        assert_eq!(dots.len(), 12);

        // i = 0 top, i = 3 right, i = 6 bottom.
        assert!(dots[0].center.distance(Point::new(200.0, 80.0)) < 1e-9);
        assert!(dots[3].center.distance(Point::new(320.0, 200.0)) < 1e-9);
        assert!(dots[6].center.distance(Point::new(200.0, 320.0)) < 1e-9);
        assert!(dots.iter().all(|d| d.radius == 2.0));
    }

    #[test]
    fn identical_inputs_build_identical_geometry() {
        let spec = arc_spec(0.37, true);
        assert_eq!(donut_arc(&spec), donut_arc(&spec));
    }
}
