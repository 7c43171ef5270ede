//! Cursor mapping by intersecting the screen borders with the camera axes.
//!
//! The camera's optical center is fixed in camera space. Under perspective
//! tilt the lines through it that are "parallel" to the screen borders are
//! not parallel to any single border, so their slopes are interpolated
//! between the opposing borders according to where the optical center sits.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::MappingConfig;
use crate::corners::{ScreenCorners, calibrate_corners};
use crate::error::MappingError;
use crate::geometry::{Line, LineSegment, PointF, safe_divide};
use crate::snapshot::Snapshot;

/// Full intermediate geometry of one axis-engine run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Borders {
    pub corners: ScreenCorners,
    pub top: Line,
    pub bot: Line,
    pub left: Line,
    pub right: Line,
    pub horizontal_axis: Line,
    pub vertical_axis: Line,
    /// Top, bottom, left and right borders followed by the horizontal and
    /// vertical camera axes clipped to the borders.
    pub segments: [LineSegment; 6],
}

fn border(p1: PointF, p2: PointF) -> Result<Line, MappingError> {
    Line::from_points(p1, p2).ok_or(MappingError::DegenerateGeometry("coincident corners"))
}

fn swap(point: PointF) -> PointF {
    PointF::new(point.y, point.x)
}

/// Slope at `at_y` of the helper line joining `(first(at_x), slope(first))`
/// and `(second(at_x), slope(second))`.
fn interpolated_slope(
    first: &Line,
    second: &Line,
    at_x: f32,
    at_y: f32,
) -> Result<f32, MappingError> {
    let sample = |line: &Line| -> Result<PointF, MappingError> {
        let slope = line.slope().ok_or(MappingError::DegenerateGeometry(
            "border without a finite slope",
        ))?;
        let y = line
            .y_at(at_x)
            .ok_or(MappingError::DegenerateGeometry("border without a finite slope"))?;
        Ok(PointF::new(y, slope))
    };
    let helper = Line::from_points(sample(first)?, sample(second)?)
        .ok_or(MappingError::DegenerateGeometry("opposing borders coincide"))?;
    helper
        .y_at(at_y)
        .ok_or(MappingError::DegenerateGeometry("opposing borders meet at the optical center"))
}

fn crossing(a: &Line, b: &Line) -> Result<PointF, MappingError> {
    a.intersection(b)
        .ok_or(MappingError::DegenerateGeometry("camera axis parallel to a border"))
}

/// Builds borders and tilt-compensated camera axes for calibrated corners.
pub fn borders_from_corners(
    corners: ScreenCorners,
    config: &MappingConfig,
) -> Result<Borders, MappingError> {
    let top = border(corners.top_left, corners.top_right)?;
    let bot = border(corners.bot_left, corners.bot_right)?;
    let left = border(corners.top_left, corners.bot_left)?;
    let right = border(corners.top_right, corners.bot_right)?;
    let center = config.optical_center();

    let horizontal_slope = interpolated_slope(&top, &bot, center.x, center.y)?;
    let horizontal_axis = Line::through_point(center, horizontal_slope);

    // left/right borders are close to vertical, so work with swapped axes
    let vertical_slope =
        interpolated_slope(&left.swap_axes(), &right.swap_axes(), center.y, center.x)?;
    let vertical_axis = Line::through_point(swap(center), vertical_slope).swap_axes();
    trace!(
        "camera axes: horizontal {:?}, vertical {:?}",
        horizontal_axis, vertical_axis
    );

    let h_left = crossing(&horizontal_axis, &left)?;
    let h_right = crossing(&horizontal_axis, &right)?;
    let v_top = crossing(&vertical_axis, &top)?;
    let v_bot = crossing(&vertical_axis, &bot)?;

    let segments = [
        LineSegment::new(corners.top_left, corners.top_right),
        LineSegment::new(corners.bot_left, corners.bot_right),
        LineSegment::new(corners.top_left, corners.bot_left),
        LineSegment::new(corners.top_right, corners.bot_right),
        LineSegment::new(h_left, h_right),
        LineSegment::new(v_top, v_bot),
    ];

    Ok(Borders {
        corners,
        top,
        bot,
        left,
        right,
        horizontal_axis,
        vertical_axis,
        segments,
    })
}

/// Calibrates the snapshot and builds its [`Borders`].
pub fn compute_borders(
    snapshot: &Snapshot,
    config: &MappingConfig,
) -> Result<Borders, MappingError> {
    let corners = calibrate_corners(snapshot, config)?;
    borders_from_corners(corners, config)
}

/// Cursor position on `destination` from the camera-axis crossings.
///
/// Only the destination's top-left anchor, width (top edge) and height (left
/// edge) are used. The y fraction is flipped because the sensor's vertical
/// sense is opposite to the destination's.
pub fn cursor_from_borders(
    borders: &Borders,
    destination: &ScreenCorners,
) -> Result<PointF, MappingError> {
    let corners = &borders.corners;
    let intersect_bot = crossing(&borders.vertical_axis, &borders.bot)?;
    let intersect_left = crossing(&borders.horizontal_axis, &borders.left)?;

    let x_pct = safe_divide(
        intersect_bot.x - corners.top_left.x,
        corners.top_right.x - corners.top_left.x,
    )?;
    let y_pct = safe_divide(
        intersect_left.y - corners.top_left.y,
        corners.bot_left.y - corners.top_left.y,
    )?;

    let width = destination.top_right.x - destination.top_left.x;
    let height = destination.bot_left.y - destination.top_left.y;
    Ok(PointF::new(
        destination.top_left.x + x_pct * width,
        destination.top_left.y + height - y_pct * height,
    ))
}
