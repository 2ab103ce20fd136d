use std::fmt;

/// A waypoint in the formation path.
///
/// Displays in the canonical operator-facing form `x,y,z`, which is also the
/// form accepted by the waypoint grammar, so formatting and re-parsing a
/// point round-trips exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}
