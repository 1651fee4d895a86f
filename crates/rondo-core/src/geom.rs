#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Point at `angle` radians on the circle of `radius` around `center`.
///
/// Angles use the atan2 convention in widget coordinates (y grows
/// downward), so `-PI/2` is the top of the circle and positive angles
/// proceed clockwise.
pub fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}
