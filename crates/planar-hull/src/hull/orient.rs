use nalgebra::Matrix2;

use super::types::Point;

/// Turn direction of `p1 → p2 → p3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Ccw,
    Collinear,
    Cw,
}

/// Twice the signed area of triangle `p1 p2 p3` (X/Y only).
///
/// Equals `det [[1, x1, y1], [1, x2, y2], [1, x3, y3]]`; evaluated after
/// subtracting `p1` so large offsets do not swamp the result.
/// Positive for a counter-clockwise turn, negative for clockwise.
#[inline]
pub fn orient(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let a = p2.xy() - p1.xy();
    let b = p3.xy() - p1.xy();
    Matrix2::from_columns(&[a, b]).determinant()
}

/// Classify `orient(p1, p2, p3)` with a symmetric tolerance band `[-eps, eps]`.
#[inline]
pub fn turn(p1: &Point, p2: &Point, p3: &Point, eps: f64) -> Turn {
    let det = orient(p1, p2, p3);
    if det > eps {
        Turn::Ccw
    } else if det < -eps {
        Turn::Cw
    } else {
        Turn::Collinear
    }
}
