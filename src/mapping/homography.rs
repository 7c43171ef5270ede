use nalgebra as na;

use crate::corners::ScreenCorners;
use crate::error::MappingError;
use crate::geometry::PointF;

type Matrix8 = na::SMatrix<f32, 8, 8>;
type Vector8 = na::SVector<f32, 8>;

/// 3x3 perspective transform with the bottom-right entry fixed at 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveTransform {
    pub h: na::Matrix3<f32>,
}

impl PerspectiveTransform {
    /// Solves the transform mapping each `src` corner onto the same-named
    /// `dst` corner.
    pub fn from_corners(
        src: &ScreenCorners,
        dst: &ScreenCorners,
    ) -> Result<PerspectiveTransform, MappingError> {
        let (mut lhs, mut rhs) = build_system(src, dst);
        let r = gaussian_elimination_in_place(&mut lhs, &mut rhs)?;
        let h = na::Matrix3::new(
            r[0], r[1], r[2], //
            r[3], r[4], r[5], //
            r[6], r[7], 1.0,
        );
        Ok(PerspectiveTransform { h })
    }

    /// Maps `point` through the transform in homogeneous coordinates.
    pub fn apply(&self, point: PointF) -> Result<PointF, MappingError> {
        let mapped = self.h * na::Vector3::new(point.x, point.y, 1.0);
        let w = mapped[2];
        if w.abs() < f32::EPSILON {
            return Err(MappingError::DegenerateGeometry("point maps to infinity"));
        }
        Ok(PointF::new(mapped[0] / w, mapped[1] / w))
    }
}

/// Two direct-linear-transform rows per correspondence, unknowns
/// `[h1 h2 h3 h4 h5 h6 h7 h8]`:
/// `dx * (h7 sx + h8 sy + 1) = h1 sx + h2 sy + h3` and the `dy` analogue.
fn build_system(src: &ScreenCorners, dst: &ScreenCorners) -> (Matrix8, Vector8) {
    let mut lhs = Matrix8::zeros();
    let mut rhs = Vector8::zeros();
    for (k, (s, d)) in src.to_array().iter().zip(dst.to_array()).enumerate() {
        let r0 = 2 * k;
        lhs[(r0, 0)] = s.x;
        lhs[(r0, 1)] = s.y;
        lhs[(r0, 2)] = 1.0;
        lhs[(r0, 6)] = -s.x * d.x;
        lhs[(r0, 7)] = -s.y * d.x;
        rhs[r0] = d.x;

        let r1 = 2 * k + 1;
        lhs[(r1, 3)] = s.x;
        lhs[(r1, 4)] = s.y;
        lhs[(r1, 5)] = 1.0;
        lhs[(r1, 6)] = -s.x * d.y;
        lhs[(r1, 7)] = -s.y * d.y;
        rhs[r1] = d.y;
    }
    (lhs, rhs)
}

/// Gaussian elimination with partial pivoting followed by back substitution.
///
/// Consumes the contents of `lhs` and `rhs`.
fn gaussian_elimination_in_place(
    lhs: &mut Matrix8,
    rhs: &mut Vector8,
) -> Result<Vector8, MappingError> {
    const N: usize = 8;

    for it in 0..N {
        // largest magnitude in the pivot column, from this row down
        let mut pivot_row = it;
        for row in (it + 1)..N {
            if lhs[(row, it)].abs() > lhs[(pivot_row, it)].abs() {
                pivot_row = row;
            }
        }
        if lhs[(pivot_row, it)].abs() < f32::EPSILON {
            return Err(MappingError::SingularSystem);
        }
        if pivot_row != it {
            lhs.swap_rows(it, pivot_row);
            rhs.swap_rows(it, pivot_row);
        }

        let norm = lhs[(it, it)];
        for col in it..N {
            lhs[(it, col)] /= norm;
        }
        rhs[it] /= norm;

        for row in (it + 1)..N {
            let factor = lhs[(row, it)];
            for col in it..N {
                lhs[(row, col)] -= factor * lhs[(it, col)];
            }
            rhs[row] -= factor * rhs[it];
        }
    }

    // upper triangular with a unit diagonal now
    let mut result = Vector8::zeros();
    for row in (0..N).rev() {
        let mut value = rhs[row];
        for col in (row + 1)..N {
            value -= lhs[(row, col)] * result[col];
        }
        result[row] = value;
    }
    Ok(result)
}

/// Projects the camera's optical center through the transform between the
/// calibrated camera-space corners and the destination.
pub fn map_center(
    camera: &ScreenCorners,
    destination: &ScreenCorners,
    optical_center: PointF,
) -> Result<PointF, MappingError> {
    PerspectiveTransform::from_corners(camera, destination)?.apply(optical_center)
}
