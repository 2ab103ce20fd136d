//! Operator-facing text grammars for the formation command fields.
//!
//! Two independent parses: the drone count (`["-"]digit+`, base 10) and the
//! waypoint path (`point (";" point)*` with `point := num "," num "," num`).
//! Both return tagged results instead of panicking or throwing; a violation
//! anywhere fails the whole parse with no partial output.

use crate::error::CommandError;
use crate::geometry::Point3;

/// Parse the drone count field as a base-10 integer.
///
/// Anything other than an optionally-signed integer (after trimming
/// surrounding whitespace) yields [`CommandError::InvalidFormat`]. Capacity
/// against the live fleet is checked separately by the caller so the two
/// failure kinds never conflate.
pub fn parse_count(text: &str) -> Result<i64, CommandError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| CommandError::InvalidFormat)
}

/// Parse the waypoint path field.
///
/// Grammar: `point (";" point)*`, `point := num "," num "," num` with
/// floating-point numbers. Each segment and each numeric token is trimmed
/// before parsing. A segment with more or fewer than three tokens, or any
/// non-numeric token, fails the whole input with
/// [`CommandError::MalformedPath`]; there are no partial results.
///
/// Callers that need a traversable route additionally require at least two
/// points and report that separately as
/// [`CommandError::InsufficientWaypoints`].
pub fn parse_waypoints(text: &str) -> Result<Vec<Point3>, CommandError> {
    let mut points = Vec::new();
    for segment in text.trim().split(';') {
        let mut coords = [0f32; 3];
        let mut count = 0usize;
        for token in segment.trim().split(',') {
            if count == 3 {
                return Err(CommandError::MalformedPath);
            }
            coords[count] = token
                .trim()
                .parse::<f32>()
                .map_err(|_| CommandError::MalformedPath)?;
            count += 1;
        }
        if count != 3 {
            return Err(CommandError::MalformedPath);
        }
        points.push(Point3::new(coords[0], coords[1], coords[2]));
    }
    Ok(points)
}

/// Re-serialize waypoints to the canonical text form accepted by
/// [`parse_waypoints`]. Formatting then re-parsing is idempotent.
pub fn format_waypoints(points: &[Point3]) -> String {
    points
        .iter()
        .map(Point3::to_string)
        .collect::<Vec<_>>()
        .join(";")
}
