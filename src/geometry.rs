use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::MappingError;

/// A derived (sub-unit) point in camera or destination space.
pub type PointF = Vec2;

/// Divides, reporting an exact zero denominator as an error instead of
/// producing an infinity.
pub fn safe_divide(numerator: f32, denominator: f32) -> Result<f32, MappingError> {
    if denominator == 0.0 {
        return Err(MappingError::DivisionByZero);
    }
    Ok(numerator / denominator)
}

/// A 2D line, either `y = m * x + n` or `x = const`.
///
/// A horizontal line is the sloped case with `m == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Line {
    Sloped { m: f32, n: f32 },
    Vertical { x: f32 },
}

impl Line {
    pub fn new(m: f32, n: f32) -> Line {
        Line::Sloped { m, n }
    }

    /// Line through `point` with slope `m`.
    pub fn through_point(point: PointF, m: f32) -> Line {
        Line::Sloped {
            m,
            n: point.y - m * point.x,
        }
    }

    pub fn vertical(x_const: f32) -> Line {
        Line::Vertical { x: x_const }
    }

    /// Line through two points; `None` when the points coincide.
    pub fn from_points(p1: PointF, p2: PointF) -> Option<Line> {
        if p1 == p2 {
            return None;
        }
        if p1.x == p2.x {
            return Some(Line::vertical(p1.x));
        }
        if p1.y == p2.y {
            return Some(Line::new(0.0, p1.y));
        }
        let m = (p1.y - p2.y) / (p1.x - p2.x);
        Some(Line::through_point(p1, m))
    }

    pub fn slope(&self) -> Option<f32> {
        match *self {
            Line::Sloped { m, .. } => Some(m),
            Line::Vertical { .. } => None,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(*self, Line::Sloped { m, .. } if m == 0.0)
    }

    pub fn y_at(&self, x: f32) -> Option<f32> {
        match *self {
            Line::Vertical { .. } => None,
            Line::Sloped { m, n } if m == 0.0 => Some(n),
            Line::Sloped { m, n } => Some(m * x + n),
        }
    }

    /// Inverse evaluation; undefined for horizontal and vertical lines.
    pub fn x_at(&self, y: f32) -> Option<f32> {
        match *self {
            Line::Vertical { .. } => None,
            Line::Sloped { m, .. } if m == 0.0 => None,
            Line::Sloped { m, n } => Some((y - n) / m),
        }
    }

    /// Crossing point of two lines, `None` for parallel lines.
    pub fn intersection(&self, other: &Line) -> Option<PointF> {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => None,
            (Line::Vertical { x }, sloped) | (sloped, Line::Vertical { x }) => {
                sloped.y_at(x).map(|y| PointF::new(x, y))
            }
            (Line::Sloped { m: m0, n: n0 }, Line::Sloped { m: m1, n: n1 }) => {
                if m0 == m1 {
                    return None;
                }
                let x = (n1 - n0) / (m0 - m1);
                self.y_at(x).map(|y| PointF::new(x, y))
            }
        }
    }

    /// Line through `point` perpendicular to `self`.
    pub fn perpendicular(&self, point: PointF) -> Line {
        match *self {
            Line::Vertical { .. } => Line::through_point(point, 0.0),
            Line::Sloped { m, .. } if m == 0.0 => Line::vertical(point.x),
            // slopes of perpendicular lines multiply to -1
            Line::Sloped { m, .. } => Line::through_point(point, -1.0 / m),
        }
    }

    pub fn perpendicular_foot(&self, point: PointF) -> Option<PointF> {
        self.intersection(&self.perpendicular(point))
    }

    /// The same line expressed with the x and y axes exchanged.
    ///
    /// A horizontal line becomes vertical and vice versa, so a line that has
    /// no finite slope in one orientation gets one in the other.
    pub fn swap_axes(&self) -> Line {
        match *self {
            Line::Vertical { x } => Line::new(0.0, x),
            Line::Sloped { m, n } if m == 0.0 => Line::vertical(n),
            Line::Sloped { m, n } => Line::new(1.0 / m, -n / m),
        }
    }
}

/// Two end points bounding a [`Line`], kept for drawing only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: PointF,
    pub p2: PointF,
}

impl LineSegment {
    pub fn new(p1: PointF, p2: PointF) -> LineSegment {
        LineSegment { p1, p2 }
    }
}
