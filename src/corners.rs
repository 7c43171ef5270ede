use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::{MappingConfig, ScreenConstants};
use crate::error::MappingError;
use crate::geometry::{Line, PointF, safe_divide};
use crate::snapshot::Snapshot;

/// Four named corners of a quadrilateral, in camera or destination space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenCorners {
    pub top_left: PointF,
    pub top_right: PointF,
    pub bot_left: PointF,
    pub bot_right: PointF,
}

impl ScreenCorners {
    pub fn new(
        top_left: PointF,
        top_right: PointF,
        bot_left: PointF,
        bot_right: PointF,
    ) -> ScreenCorners {
        ScreenCorners {
            top_left,
            top_right,
            bot_left,
            bot_right,
        }
    }

    /// Axis aligned rectangle anchored at the origin.
    pub fn from_rect(width: f32, height: f32) -> ScreenCorners {
        ScreenCorners::new(
            PointF::new(0.0, 0.0),
            PointF::new(width, 0.0),
            PointF::new(0.0, height),
            PointF::new(width, height),
        )
    }

    /// Corners in `[top_left, top_right, bot_left, bot_right]` order.
    pub fn to_array(&self) -> [PointF; 4] {
        [self.top_left, self.top_right, self.bot_left, self.bot_right]
    }
}

impl From<ScreenConstants> for ScreenCorners {
    fn from(screen: ScreenConstants) -> Self {
        ScreenCorners::from_rect(screen.effective_width, screen.effective_height)
    }
}

const TOP_LEFT: usize = 0;
const TOP_RIGHT: usize = 1;
const BOT_LEFT: usize = 2;
const BOT_RIGHT: usize = 3;

/// Role of `point` relative to `centroid`, or `None` when it sits on either
/// centroid axis.
fn corner_role(point: PointF, centroid: PointF) -> Option<usize> {
    let left = point.x < centroid.x;
    let right = point.x > centroid.x;
    let top = point.y < centroid.y;
    let bot = point.y > centroid.y;
    match (left, right, top, bot) {
        (true, _, true, _) => Some(TOP_LEFT),
        (_, true, true, _) => Some(TOP_RIGHT),
        (true, _, _, true) => Some(BOT_LEFT),
        (_, true, _, true) => Some(BOT_RIGHT),
        _ => None,
    }
}

/// Assigns each raw point a corner role by comparing it to the centroid.
///
/// Every role has to be filled by exactly one point.
pub fn classify_corners(snapshot: &Snapshot) -> Result<ScreenCorners, MappingError> {
    let points = snapshot.points.map(|p| p.to_f32());
    let centroid = points.iter().copied().sum::<PointF>() / points.len() as f32;

    let mut roles: [Option<PointF>; 4] = [None; 4];
    for point in points {
        let role = corner_role(point, centroid).ok_or(MappingError::AmbiguousCorners)?;
        if roles[role].replace(point).is_some() {
            return Err(MappingError::AmbiguousCorners);
        }
    }

    match roles {
        [Some(top_left), Some(top_right), Some(bot_left), Some(bot_right)] => Ok(
            ScreenCorners::new(top_left, top_right, bot_left, bot_right),
        ),
        _ => Err(MappingError::AmbiguousCorners),
    }
}

/// Half of the calibrated span of one marker pair along x.
///
/// The pair is `reference_spacing` apart physically, so the camera distance
/// from the pair midpoint to the outer marker fixes the scale for the whole
/// `target_width`.
fn calibrated_half_span(
    outer: PointF,
    average: PointF,
    config: &MappingConfig,
) -> Result<f32, MappingError> {
    let ratio = safe_divide(outer.x - average.x, config.reference_spacing / 2.0)?;
    Ok((config.target_width / 2.0 * ratio).abs())
}

/// Projects one marker pair out to the calibrated left and right ends.
fn calibrate_pair(
    left: PointF,
    right: PointF,
    config: &MappingConfig,
) -> Result<(PointF, PointF), MappingError> {
    let line = Line::from_points(left, right)
        .ok_or(MappingError::DegenerateGeometry("coincident marker pair"))?;
    let average = (left + right) / 2.0;
    let half_span = calibrated_half_span(right, average, config)?;

    let x_left = average.x - half_span;
    let x_right = average.x + half_span;
    let y_left = line
        .y_at(x_left)
        .ok_or(MappingError::DegenerateGeometry("vertical marker pair"))?;
    let y_right = line
        .y_at(x_right)
        .ok_or(MappingError::DegenerateGeometry("vertical marker pair"))?;
    Ok((PointF::new(x_left, y_left), PointF::new(x_right, y_right)))
}

/// Derives the camera-space extent of the target surface from one snapshot.
pub fn calibrate_corners(
    snapshot: &Snapshot,
    config: &MappingConfig,
) -> Result<ScreenCorners, MappingError> {
    let raw = classify_corners(snapshot)?;
    let (top_left, top_right) = calibrate_pair(raw.top_left, raw.top_right, config)?;
    let (bot_left, bot_right) = calibrate_pair(raw.bot_left, raw.bot_right, config)?;
    trace!(
        "calibrated corners tl={} tr={} bl={} br={}",
        top_left, top_right, bot_left, bot_right
    );
    Ok(ScreenCorners::new(top_left, top_right, bot_left, bot_right))
}
