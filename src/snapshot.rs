use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseSnapshotError;
use crate::geometry::PointF;

/// Highest coordinate the IR camera reports on either axis.
pub const DEFAULT_CAMERA_MAX_UNIT: u16 = 1023;

/// Raw sensor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Point {
        Point { x, y }
    }

    pub fn to_f32(self) -> PointF {
        PointF::new(self.x as f32, self.y as f32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One sample of four IR detections.
///
/// Point order is whatever the sensor reported and says nothing about which
/// corner a point belongs to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub points: [Point; 4],
}

impl Snapshot {
    pub const fn new(points: [Point; 4]) -> Snapshot {
        Snapshot { points }
    }

    /// "No detection" reading for the default camera range.
    pub const fn invalid() -> Snapshot {
        Snapshot::invalid_for(DEFAULT_CAMERA_MAX_UNIT)
    }

    pub const fn invalid_for(max_unit: u16) -> Snapshot {
        let p = Point::new(max_unit, max_unit);
        Snapshot { points: [p; 4] }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_for(DEFAULT_CAMERA_MAX_UNIT)
    }

    /// `false` iff every point equals the `(max_unit, max_unit)` sentinel.
    pub fn is_valid_for(&self, max_unit: u16) -> bool {
        *self != Snapshot::invalid_for(max_unit)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [p0, p1, p2, p3] = self.points;
        write!(f, "[{},{},{},{}]", p0, p1, p2, p3)
    }
}

fn parse_coordinate(value: &str) -> Result<u16, ParseSnapshotError> {
    let value = value.trim();
    value
        .parse()
        .map_err(|source| ParseSnapshotError::InvalidCoordinate {
            value: value.to_string(),
            source,
        })
}

/// Parses the inside of one `(x,y)` group; `chunk` has the closing paren
/// already removed.
fn parse_point(chunk: &str) -> Result<Point, ParseSnapshotError> {
    let malformed = || ParseSnapshotError::MalformedPoint(chunk.trim().to_string());
    let body = chunk.trim().strip_prefix('(').ok_or_else(malformed)?;
    let (x, y) = body.split_once(',').ok_or_else(malformed)?;
    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

impl FromStr for Snapshot {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(ParseSnapshotError::MissingBrackets)?
            .trim();
        if inner.is_empty() {
            return Err(ParseSnapshotError::WrongPointCount(0));
        }
        if !inner.ends_with(')') {
            return Err(ParseSnapshotError::MalformedPoint(inner.to_string()));
        }

        let mut points = [Point::default(); 4];
        let mut count = 0;
        for (idx, chunk) in inner.split_terminator(')').enumerate() {
            let chunk = if idx == 0 {
                chunk
            } else {
                chunk
                    .trim_start()
                    .strip_prefix(',')
                    .ok_or_else(|| ParseSnapshotError::MalformedPoint(chunk.trim().to_string()))?
            };
            let point = parse_point(chunk)?;
            if let Some(slot) = points.get_mut(count) {
                *slot = point;
            }
            count += 1;
        }

        if count != points.len() {
            return Err(ParseSnapshotError::WrongPointCount(count));
        }
        Ok(Snapshot { points })
    }
}
