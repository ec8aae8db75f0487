//! Planar convex hull via Graham scan (anchor, angular sort, incremental scan).
//!
//! Purpose
//! - Turn an unordered point set (3D points, read through their X/Y projection)
//!   into a closed, counter-clockwise hull ring whose vertices are input points.
//! - Keep every convexity decision on one eps-aware primitive (`orient`).
//!
//! Pipeline
//! - Collapse exact X/Y duplicates (first occurrence wins), so no point can
//!   coincide with the anchor during the angular sort. Near-duplicates stay;
//!   `find_duplicates` reports them to callers.
//! - `place_anchor`: lowest Y, ties broken by highest X, moved to index 0.
//! - `sort_by_angle`: unsigned angle to +X in [0, π]; near-equal angles that
//!   are also collinear with the anchor are ordered nearest-first.
//! - `graham_scan`: append on left turn or collinear, backtrack on right turn,
//!   skip when only the initial edge remains; close with the anchor.
//!
//! The caller's slice is never mutated; all reordering happens on a working copy.
//!
//! Code cross-refs: `types::{Hull, HullCfg}`, `orient::{orient, Turn}`, `error::HullError`

mod anchor;
mod dedup;
mod error;
mod orient;
pub mod rand;
mod scan;
mod sort;
mod types;

pub use anchor::{anchor_index, place_anchor};
pub use dedup::{dedup_eps, dedup_exact, find_duplicates};
pub use error::{HullError, Result};
pub use orient::{orient, turn, Turn};
pub use scan::graham_scan;
pub use sort::sort_by_angle;
pub use types::{Hull, HullCfg, Point};

use tracing::debug;

/// Convex hull with default tolerances. See [`convex_hull_with`].
pub fn convex_hull(points: &[Point]) -> Result<Hull> {
    convex_hull_with(points, &HullCfg::default())
}

/// Convex hull of `points` as a closed counter-clockwise ring.
///
/// Errors
/// - `InsufficientInput` for fewer than 3 input points.
/// - `NonFiniteInput` if any X/Y coordinate is NaN or infinite.
/// - `DegenerateInput` if fewer than 3 distinct points remain after collapsing
///   exact duplicates, or if all points are collinear within `cfg.eps_orient`. The
///   error carries the two extreme points of the collinear set.
pub fn convex_hull_with(points: &[Point], cfg: &HullCfg) -> Result<Hull> {
    if points.len() < 3 {
        return Err(HullError::InsufficientInput { got: points.len() });
    }
    if let Some(index) = points
        .iter()
        .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(HullError::NonFiniteInput { index });
    }

    let mut work = dedup_exact(points);
    if work.len() < points.len() {
        debug!(
            input = points.len(),
            kept = work.len(),
            "collapsed duplicate points"
        );
    }
    let from = place_anchor(&mut work).ok_or(HullError::InsufficientInput { got: 0 })?;
    debug!(anchor_from = from, x = work[0].x, y = work[0].y, "anchor selected");
    if work.len() < 3 {
        return Err(degenerate(&work));
    }

    sort_by_angle(&mut work, cfg);
    let ring = graham_scan(&work, cfg.eps_orient).ok_or_else(|| degenerate(&work))?;
    if !has_strict_turn(&ring, cfg.eps_orient) {
        return Err(degenerate(&work));
    }
    debug!(vertices = ring.len() - 1, "hull built");
    Ok(Hull::from_ring(ring))
}

/// True if some consecutive vertex triple of the closed `ring` turns left by more than `eps`.
fn has_strict_turn(ring: &[Point], eps: f64) -> bool {
    let verts = &ring[..ring.len().saturating_sub(1)];
    let m = verts.len();
    if m < 3 {
        return false;
    }
    (0..m).any(|k| orient(&verts[k], &verts[(k + 1) % m], &verts[(k + 2) % m]) > eps)
}

/// Extreme points of an anchor-first collinear set: the anchor and the point farthest from it.
fn degenerate(anchored: &[Point]) -> HullError {
    let start = anchored[0];
    let end = anchored
        .iter()
        .max_by(|a, b| {
            let da = (a.xy() - start.xy()).norm_squared();
            let db = (b.xy() - start.xy()).norm_squared();
            da.total_cmp(&db)
        })
        .copied()
        .unwrap_or(start);
    HullError::DegenerateInput { start, end }
}

#[cfg(test)]
mod tests;
