use crate::geometry::Point3;

/// What the camera should look at.
#[derive(Debug, Clone, PartialEq)]
pub enum FocusTarget {
    /// A raw waypoint in the formation path.
    Waypoint(Point3),
    /// A live entity handle owned by the fleet coordinator.
    Entity(EntityHandle),
}

/// Opaque handle to a fleet entity the camera can track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityHandle(pub String);

/// Camera seam. Rendering and interpolation live outside the console; this
/// only retargets.
pub trait CameraRig {
    fn focus_on(&mut self, target: FocusTarget);

    /// Return to the default target.
    fn reset_focus(&mut self);
}
