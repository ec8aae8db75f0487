//! Point alias, tolerances, and the closed hull ring.
//!
//! - `Point`: `nalgebra::Point3<f64>`; Z is carried through untouched, never read.
//! - `HullCfg`: centralizes the orientation, angle, and duplicate tolerances.
//! - `Hull`: closed counter-clockwise ring with area/perimeter/membership helpers.

use nalgebra::Point3;

use super::orient::orient;

/// Input and output point type. Hull computations only read `x` and `y`.
pub type Point = Point3<f64>;

/// Hull tolerances.
///
/// Scale matters: `eps_orient` bounds twice a triangle area, `eps_dup` is a
/// distance, `eps_angle` is in radians. Tighten or loosen together with the
/// magnitude of the coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullCfg {
    /// Orientation values above `-eps_orient` count as left turn or collinear.
    pub eps_orient: f64,
    /// Angles closer than this are ordered by distance from the anchor, provided
    /// the points are also collinear with it within `eps_orient`.
    pub eps_angle: f64,
    /// Points closer than this (in X/Y) are reported by `find_duplicates`. The
    /// hull only merges exact duplicates.
    pub eps_dup: f64,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-6,
            eps_angle: 1e-5,
            eps_dup: 1e-4,
        }
    }
}

/// Closed convex hull ring.
///
/// Invariants:
/// - `ring.first() == ring.last()` and at least 3 distinct vertices.
/// - Counter-clockwise; every vertex is an input point (bitwise, Z included).
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    ring: Vec<Point>,
}

impl Hull {
    pub(crate) fn from_ring(ring: Vec<Point>) -> Self {
        debug_assert!(ring.len() >= 4, "hull ring needs 3 vertices plus closure");
        debug_assert_eq!(
            ring.first().map(|p| p.xy()),
            ring.last().map(|p| p.xy()),
            "hull ring must be closed"
        );
        Self { ring }
    }

    /// Full ring, starting at the anchor and ending with it again.
    #[inline]
    pub fn closed(&self) -> &[Point] {
        &self.ring
    }

    /// Ring without the closing point.
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.ring[..self.ring.len() - 1]
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.ring.len() - 1
    }

    /// Lowest (then rightmost) input point; the ring starts here.
    #[inline]
    pub fn anchor(&self) -> Point {
        self.ring[0]
    }

    /// Shoelace area in the X/Y plane; positive for the CCW ring.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .ring
            .windows(2)
            .map(|e| e[0].x * e[1].y - e[1].x * e[0].y)
            .sum::<f64>()
    }

    pub fn perimeter(&self) -> f64 {
        self.ring
            .windows(2)
            .map(|e| (e[1].xy() - e[0].xy()).norm())
            .sum()
    }

    /// Membership with slack on the orientation value of each edge.
    ///
    /// `eps > 0` accepts points slightly outside; `eps < 0` demands a margin inside.
    pub fn contains_eps(&self, p: &Point, eps: f64) -> bool {
        self.ring.windows(2).all(|e| orient(&e[0], &e[1], p) >= -eps)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.ring
    }
}
