//! Hull of a square with an interior point and a duplicate corner.
//!
//! Usage:
//!   cargo run -p planar-hull --example square_hull

use planar_hull::prelude::*;

fn main() {
    let pts = vec![
        point![0.0, 0.0, 0.0],
        point![4.0, 0.0, 0.0],
        point![4.0, 4.0, 0.0],
        point![0.0, 4.0, 0.0],
        point![2.0, 2.0, 0.0],
        point![4.0, 4.0, 0.0],
    ];
    for (i, j) in find_duplicates(&pts, HullCfg::default().eps_dup) {
        println!("duplicate points {i} and {j}");
    }
    match convex_hull(&pts) {
        Ok(hull) => {
            for (k, v) in hull.closed().iter().enumerate() {
                println!("{k}: ({}, {})", v.x, v.y);
            }
            println!("area = {}, perimeter = {}", hull.signed_area(), hull.perimeter());
        }
        Err(e) => eprintln!("no hull: {e}"),
    }
}
