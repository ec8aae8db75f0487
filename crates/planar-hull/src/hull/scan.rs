use tracing::trace;

use super::orient::orient;
use super::types::Point;

/// Graham scan over an anchor-first, angle-sorted sequence.
///
/// Starts from `[sorted[0], sorted[1]]`. For each further point `p`, with
/// `det = orient(ring[-2], ring[-1], p)`:
/// - `det > -eps_orient`: push `p` (left turn or collinear), advance.
/// - clockwise and more than 2 ring points: pop the last ring point, retest `p`.
/// - clockwise with only 2 ring points: skip `p`, advance.
///
/// Every input point is advanced past exactly once, so the loop runs at most
/// `2n` times. Returns the ring closed with `sorted[0]`, or `None` if fewer
/// than 2 points were given.
pub fn graham_scan(sorted: &[Point], eps_orient: f64) -> Option<Vec<Point>> {
    if sorted.len() < 2 {
        return None;
    }
    let mut ring: Vec<Point> = Vec::with_capacity(sorted.len() + 1);
    ring.push(sorted[0]);
    ring.push(sorted[1]);

    let mut i = 2;
    while i < sorted.len() {
        let p = sorted[i];
        let n = ring.len();
        let det = orient(&ring[n - 2], &ring[n - 1], &p);
        if det > -eps_orient {
            ring.push(p);
            i += 1;
        } else if n > 2 {
            let dropped = ring.pop();
            trace!(index = i, det, ?dropped, "backtrack");
        } else {
            trace!(index = i, det, "skip clockwise point against initial edge");
            i += 1;
        }
    }
    ring.push(sorted[0]);
    Some(ring)
}
