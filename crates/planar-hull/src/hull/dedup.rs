//! Duplicate detection in the X/Y plane.
//!
//! The hull pipeline only collapses exact X/Y duplicates; the distance-based
//! helpers serve callers that want to warn about or pre-filter near-duplicates.
//! All helpers are quadratic; inputs are hand-picked point sets, not clouds.

use super::types::Point;

#[inline]
fn close_xy(a: &Point, b: &Point, eps: f64) -> bool {
    (a.xy() - b.xy()).norm() < eps
}

fn keep_first(points: &[Point], same: impl Fn(&Point, &Point) -> bool) -> Vec<Point> {
    let mut kept: Vec<Point> = Vec::with_capacity(points.len());
    for p in points {
        if !kept.iter().any(|q| same(p, q)) {
            kept.push(*p);
        }
    }
    kept
}

/// All index pairs `(i, j)`, `i < j`, whose X/Y distance is below `eps`.
pub fn find_duplicates(points: &[Point], eps: f64) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            if close_xy(a, b, eps) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Copy of `points` without exact X/Y repeats; the first occurrence (and its Z) is kept.
pub fn dedup_exact(points: &[Point]) -> Vec<Point> {
    keep_first(points, |a, b| a.xy() == b.xy())
}

/// Copy of `points` where each point closer than `eps` to an earlier kept point is dropped.
///
/// Which of two near-duplicates survives depends on input order, so this is a
/// caller-side filter; the hull itself never drops points that are merely close.
pub fn dedup_eps(points: &[Point], eps: f64) -> Vec<Point> {
    keep_first(points, |a, b| close_xy(a, b, eps))
}
