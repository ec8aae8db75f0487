//! Random planar point clouds (uniform disk + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benches, and the `sample` CLI command.
//!
//! Model
//! - Draw `count` points uniformly from a disk: radius `R·sqrt(u)`, angle `2πv`.
//! - Z is always 0.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Point2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Point;

/// Disk sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct DiskCfg {
    pub count: usize,
    pub radius: f64,
    pub center: Point2<f64>,
}

impl Default for DiskCfg {
    fn default() -> Self {
        Self {
            count: 64,
            radius: 1.0,
            center: Point2::origin(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from the disk described by `cfg`.
pub fn draw_points_disk(cfg: DiskCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let r0 = cfg.radius.abs();
    (0..cfg.count)
        .map(|_| {
            let r = r0 * rng.gen::<f64>().sqrt();
            let theta = rng.gen::<f64>() * std::f64::consts::TAU;
            Point::new(
                cfg.center.x + r * theta.cos(),
                cfg.center.y + r * theta.sin(),
                0.0,
            )
        })
        .collect()
}
