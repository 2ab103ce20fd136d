use thiserror::Error;

/// Failures surfaced by the formation command flow.
///
/// All variants are recovered where they are detected: each maps to a short
/// status string plus a longer log line shown in the console, and none abort
/// or retry anything. The operator corrects the input and resubmits.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Count field did not parse as a base-10 integer.
    #[error("input error")]
    InvalidFormat,
    /// Count parsed but exceeds the number of available drones.
    #[error("not enough drones")]
    InsufficientCapacity,
    /// Waypoint field violated the `x,y,z ; x,y,z` grammar.
    #[error("input error")]
    MalformedPath,
    /// Waypoints parsed but fewer than two were given.
    #[error("input error")]
    InsufficientWaypoints,
    /// Fleet coordinator declined the preview request.
    #[error("preview failed")]
    PreviewFailed,
    /// Fleet coordinator declined the build request.
    #[error("formation build failed")]
    BuildFailed,
}

impl CommandError {
    /// Detailed log line published alongside the short status.
    pub fn detail(self) -> &'static str {
        match self {
            CommandError::InvalidFormat => "[input error!] check the drone count field!",
            CommandError::InsufficientCapacity => {
                "[unavailable!] fewer drones are available than the count you entered!"
            }
            CommandError::MalformedPath => {
                "[input error!] check the waypoint field! (ex 1,1,1 ; 10,5,10 ; 3,3,3)"
            }
            CommandError::InsufficientWaypoints => {
                "[input error!] at least 2 waypoints are required! (ex 1,1,1 ; 10,5,10 ; 3,3,3)"
            }
            CommandError::PreviewFailed => "[preview failed]",
            CommandError::BuildFailed => "[formation build failed]",
        }
    }
}
