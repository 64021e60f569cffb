//! 2x3 affine transform over [`Point2D`].
//!
//! The six coefficients map a point `(x, y)` to
//! `(m00*x + m01*y + m02, m10*x + m11*y + m12)`. Transforms are either
//! solved from a pair of triangles (one exact affine per triangle pair)
//! or built from a scale/rotation/translation pose.

use super::point::Point2D;

/// Determinants smaller than this are treated as a degenerate triangle.
const DEGENERACY_EPSILON: f64 = 1e-9;

/// A 2x3 affine transform, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    m: [[f64; 3]; 2],
}

impl Affine2 {
    /// Identity transform.
    pub const IDENTITY: Affine2 = Affine2 {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    };

    /// Apply the transform to a point.
    #[inline]
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.m[0][0] * p.x + self.m[0][1] * p.y + self.m[0][2],
            self.m[1][0] * p.x + self.m[1][1] * p.y + self.m[1][2],
        )
    }

    /// Solve the affine transform mapping triangle `src` onto triangle `dst`.
    ///
    /// The three vertex pairs give six linear equations in the six
    /// coefficients; the system has a unique solution iff `src` is
    /// non-degenerate. Returns `None` for a degenerate source triangle
    /// (collinear or repeated vertices).
    pub fn from_triangles(src: [Point2D; 3], dst: [Point2D; 3]) -> Option<Affine2> {
        // Cramer's rule on | x0 y0 1 |, solved once per output row.
        let det = (src[1].x - src[0].x) * (src[2].y - src[0].y)
            - (src[2].x - src[0].x) * (src[1].y - src[0].y);
        if det.abs() < DEGENERACY_EPSILON {
            return None;
        }

        let row = |b: [f64; 3]| -> [f64; 3] {
            let d0 = (b[1] - b[0]) * (src[2].y - src[0].y) - (b[2] - b[0]) * (src[1].y - src[0].y);
            let d1 = (src[1].x - src[0].x) * (b[2] - b[0]) - (src[2].x - src[0].x) * (b[1] - b[0]);
            let c0 = d0 / det;
            let c1 = d1 / det;
            [c0, c1, b[0] - c0 * src[0].x - c1 * src[0].y]
        };

        Some(Affine2 {
            m: [
                row([dst[0].x, dst[1].x, dst[2].x]),
                row([dst[0].y, dst[1].y, dst[2].y]),
            ],
        })
    }

    /// Build the transform `p -> R(rotation) * diag(scale) * p + translation`.
    pub fn from_pose(scale: Point2D, rotation: f64, translation: Point2D) -> Affine2 {
        let (sin_r, cos_r) = rotation.sin_cos();
        Affine2 {
            m: [
                [cos_r * scale.x, -sin_r * scale.y, translation.x],
                [sin_r * scale.x, cos_r * scale.y, translation.y],
            ],
        }
    }

    /// Build the exact algebraic inverse of [`Affine2::from_pose`]:
    /// `p -> diag(1/scale) * R(-rotation) * (p - translation)`.
    ///
    /// The translation is removed *before* the rotation and scale are
    /// undone. Some older tooling subtracted the translation after the
    /// rotation step instead, which is only correct for zero rotation.
    pub fn inverse_pose(scale: Point2D, rotation: f64, translation: Point2D) -> Affine2 {
        let (sin_r, cos_r) = rotation.sin_cos();
        Affine2 {
            m: [
                [
                    cos_r / scale.x,
                    sin_r / scale.x,
                    -(cos_r * translation.x + sin_r * translation.y) / scale.x,
                ],
                [
                    -sin_r / scale.y,
                    cos_r / scale.y,
                    (sin_r * translation.x - cos_r * translation.y) / scale.y,
                ],
            ],
        }
    }
}
