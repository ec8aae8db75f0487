//! Planar convex hulls (Graham scan) with explicit, configurable tolerances.
//!
//! Points are `nalgebra::Point3<f64>`; only X/Y take part in the computation and
//! Z rides along unchanged. The single entry point is [`convex_hull`] (or
//! [`convex_hull_with`] for custom tolerances); the pipeline stages are exported
//! as well for callers that want to inspect them.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer clarity over compatibility; breaking changes are fine when they
//!   improve the design.

pub mod hull;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{convex_hull, convex_hull_with, Hull, HullCfg, HullError, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{draw_points_disk, DiskCfg, ReplayToken};
    pub use crate::hull::{
        convex_hull, convex_hull_with, dedup_eps, dedup_exact, find_duplicates, orient, turn, Hull,
        HullCfg, HullError, Point, Turn,
    };
    pub use nalgebra::{point, Point2};
}
