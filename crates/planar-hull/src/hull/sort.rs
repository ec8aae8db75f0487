use nalgebra::Vector2;

use super::orient::orient;
use super::types::{HullCfg, Point};

/// Order `points[1..]` by unsigned angle to +X as seen from `points[0]`.
///
/// Ordering
/// - Primary key: angle in [0, π] between `p - anchor` and the X axis, exact;
///   exact ties go nearest-first.
/// - A tie run is a stretch of consecutive points whose angles stay within
///   `cfg.eps_angle` of the run's first angle and which are pairwise collinear
///   with the anchor (`|orient| < cfg.eps_orient`). Runs are reordered by
///   distance to the anchor, nearest first (stable).
/// - A point whose angle is close but which is not collinear keeps its exact
///   angle position, so a far hull vertex is never queued behind a nearer point
///   that turns clockwise from it.
///
/// Both comparators are exact (`total_cmp`); the tolerances only decide run boundaries.
/// Points equal to the anchor get angle 0 and distance 0; callers collapse
/// duplicates beforehand.
pub fn sort_by_angle(points: &mut [Point], cfg: &HullCfg) {
    let Some((anchor, rest)) = points.split_first_mut() else {
        return;
    };
    let anchor = *anchor;
    let origin = anchor.xy();
    let mut keyed: Vec<(f64, f64, Point)> = rest
        .iter()
        .map(|p| {
            let v = p.xy() - origin;
            (polar_angle(v), v.norm(), *p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut start = 0;
    while start < keyed.len() {
        let base = keyed[start].0;
        let mut end = start + 1;
        while end < keyed.len()
            && keyed[end].0 - base < cfg.eps_angle
            && keyed[start..end]
                .iter()
                .all(|m| orient(&anchor, &m.2, &keyed[end].2).abs() < cfg.eps_orient)
        {
            end += 1;
        }
        keyed[start..end].sort_by(|a, b| a.1.total_cmp(&b.1));
        start = end;
    }

    for (slot, (_, _, p)) in rest.iter_mut().zip(keyed) {
        *slot = p;
    }
}

/// Unsigned angle between `v` and +X; 0 for the zero vector.
#[inline]
fn polar_angle(v: Vector2<f64>) -> f64 {
    v.y.abs().atan2(v.x)
}
