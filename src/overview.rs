//! Bounded step-through of a previewed formation path.

use crate::geometry::Point3;

/// Direction of one overview step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// A live walkthrough over a previewed path.
///
/// Exists only while the overview overlay is open. The index is always in
/// bounds; stepping past either end clamps silently instead of wrapping or
/// erroring.
#[derive(Debug, Clone, PartialEq)]
pub struct OverviewSession {
    waypoints: Vec<Point3>,
    index: usize,
}

impl OverviewSession {
    /// Start a session at index 0. Requires at least two waypoints; the
    /// caller reports shorter paths as a validation failure before ever
    /// creating a session.
    pub fn new(waypoints: Vec<Point3>) -> Option<Self> {
        if waypoints.len() < 2 {
            return None;
        }
        Some(Self {
            waypoints,
            index: 0,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[Point3] {
        &self.waypoints
    }

    /// Reset the walkthrough back to the first waypoint.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// The waypoint the camera is currently parked on.
    pub fn current(&self) -> Point3 {
        self.waypoints[self.index]
    }

    /// Step the walkthrough. Returns the waypoint newly arrived at, or
    /// `None` when the step clamped at an end and nothing moved.
    pub fn advance(&mut self, direction: Direction) -> Option<Point3> {
        match direction {
            Direction::Next => {
                if self.index + 1 >= self.waypoints.len() {
                    return None;
                }
                self.index += 1;
            }
            Direction::Prev => {
                if self.index == 0 {
                    return None;
                }
                self.index -= 1;
            }
        }
        Some(self.waypoints[self.index])
    }
}
