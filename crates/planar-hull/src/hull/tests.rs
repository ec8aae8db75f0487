use super::rand::{draw_points_disk, DiskCfg, ReplayToken};
use super::*;
use nalgebra::point;

fn p(x: f64, y: f64) -> Point {
    point![x, y, 0.0]
}

fn with_angle_eps(eps_angle: f64) -> HullCfg {
    HullCfg {
        eps_angle,
        ..HullCfg::default()
    }
}

#[test]
fn square_with_interior_point() {
    let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(2.0, 2.0)];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
        hull.closed(),
        &[p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0), p(4.0, 0.0)]
    );
    assert_eq!(hull.vertex_count(), 4);
    assert!((hull.signed_area() - 16.0).abs() < 1e-12);
    assert!((hull.perimeter() - 16.0).abs() < 1e-12);
    assert!(!hull.vertices().contains(&p(2.0, 2.0)));
    assert_eq!(hull.into_points().len(), 5);
}

#[test]
fn collinear_input_is_degenerate() {
    let pts = vec![p(0.0, 0.0), p(2.0, 0.0), p(4.0, 0.0)];
    match convex_hull(&pts) {
        Err(HullError::DegenerateInput { start, end }) => {
            assert_eq!(start, p(4.0, 0.0));
            assert_eq!(end, p(0.0, 0.0));
        }
        other => panic!("expected degenerate, got {other:?}"),
    }
    // Slanted line, shuffled.
    let slanted = vec![p(2.0, 2.0), p(0.0, 0.0), p(3.0, 3.0), p(1.0, 1.0)];
    match convex_hull(&slanted) {
        Err(HullError::DegenerateInput { start, end }) => {
            assert_eq!(start, p(0.0, 0.0));
            assert_eq!(end, p(3.0, 3.0));
        }
        other => panic!("expected degenerate, got {other:?}"),
    }
}

#[test]
fn duplicates_collapse_to_one_vertex() {
    let pts = vec![p(0.0, 0.0), p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0)];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(hull.vertex_count(), 3);
    assert_eq!(
        hull.vertices().iter().filter(|v| **v == p(0.0, 0.0)).count(),
        1
    );
    assert_eq!(find_duplicates(&pts, 1e-4), vec![(0, 1)]);
}

#[test]
fn near_duplicates_are_reported_but_kept() {
    let pts = vec![p(0.0, 0.0), p(2.0, 0.0), p(1.0, 2.0), p(2.0, 0.00005)];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
        hull.vertices(),
        &[p(2.0, 0.0), p(2.0, 0.00005), p(1.0, 2.0), p(0.0, 0.0)]
    );
    assert_eq!(find_duplicates(&pts, 1e-4), vec![(1, 3)]);
    assert_eq!(dedup_eps(&pts, 1e-4).len(), 3);
    assert_eq!(dedup_exact(&pts).len(), 4);
}

#[test]
fn near_duplicate_hull_vertex_is_kept_in_any_order() {
    let pts = vec![p(0.0, 0.0), p(10.0, 0.0), p(0.0, 10.0), p(10.0, -0.00005)];
    let mut swapped = pts.clone();
    swapped.swap(1, 3);
    let a = convex_hull(&pts).unwrap();
    let b = convex_hull(&swapped).unwrap();
    assert_eq!(
        a.vertices(),
        &[p(10.0, -0.00005), p(10.0, 0.0), p(0.0, 10.0), p(0.0, 0.0)]
    );
    assert_eq!(a, b);
    for q in &pts {
        assert!(a.contains_eps(q, 1e-6), "{q:?} outside");
    }
}

#[test]
fn too_few_distinct_points_is_degenerate() {
    let pts = vec![p(1.0, 1.0), p(1.0, 1.0), p(1.0, 1.0)];
    assert_eq!(
        convex_hull(&pts),
        Err(HullError::DegenerateInput {
            start: p(1.0, 1.0),
            end: p(1.0, 1.0)
        })
    );
}

#[test]
fn anchor_prefers_rightmost_of_lowest() {
    let a = vec![p(0.0, 0.0), p(5.0, 0.0), p(2.0, 3.0)];
    let b = vec![p(5.0, 0.0), p(2.0, 3.0), p(0.0, 0.0)];
    assert_eq!(anchor_index(&a), Some(1));
    assert_eq!(anchor_index(&b), Some(0));
    assert_eq!(convex_hull(&a).unwrap().anchor(), p(5.0, 0.0));
    assert_eq!(convex_hull(&b).unwrap().anchor(), p(5.0, 0.0));
    assert_eq!(anchor_index(&[]), None);

    let mut buf = vec![p(1.0, 1.0), p(3.0, -1.0), p(-2.0, -1.0)];
    assert_eq!(place_anchor(&mut buf), Some(1));
    assert_eq!(buf[0], p(3.0, -1.0));
    assert_eq!(buf[1], p(1.0, 1.0));
}

#[test]
fn orientation_sign_convention() {
    let a = p(0.0, 0.0);
    let b = p(1.0, 0.0);
    let c = p(0.0, 1.0);
    assert!((orient(&a, &b, &c) - 1.0).abs() < 1e-12);
    assert!((orient(&a, &c, &b) + 1.0).abs() < 1e-12);
    assert_eq!(turn(&a, &b, &c, 1e-6), Turn::Ccw);
    assert_eq!(turn(&a, &c, &b, 1e-6), Turn::Cw);
    assert_eq!(turn(&a, &b, &p(2.0, 1e-9), 1e-6), Turn::Collinear);
    // Z is ignored.
    assert_eq!(
        orient(&point![0.0, 0.0, 5.0], &point![1.0, 0.0, -3.0], &c),
        orient(&a, &b, &c)
    );
}

#[test]
fn orientation_survives_large_offsets() {
    let o = 1e9;
    let det = orient(&p(o, o), &p(o + 1.0, o), &p(o, o + 1.0));
    assert!((det - 1.0).abs() < 1e-6);
}

#[test]
fn angle_ties_sort_nearest_first() {
    let mut pts = vec![
        p(0.0, 0.0),
        p(3.0, 3.0),
        p(-1.0, 0.0),
        p(1.0, 1.0),
        p(0.0, 2.0),
        p(2.0, 2.0),
    ];
    sort_by_angle(&mut pts, &HullCfg::default());
    assert_eq!(
        pts,
        vec![
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(2.0, 2.0),
            p(3.0, 3.0),
            p(0.0, 2.0),
            p(-1.0, 0.0),
        ]
    );
}

#[test]
fn close_angles_off_the_ray_keep_angle_order() {
    // 1e-6 rad apart, but 0.5 off collinear: not a tie.
    let mut pts = vec![p(0.0, 0.0), p(500.0, 0.002), p(1000.0, 0.003), p(0.0, 1000.0)];
    sort_by_angle(&mut pts, &HullCfg::default());
    assert_eq!(
        pts,
        vec![p(0.0, 0.0), p(1000.0, 0.003), p(500.0, 0.002), p(0.0, 1000.0)]
    );
    // Widening the angle window alone changes nothing.
    sort_by_angle(&mut pts, &with_angle_eps(1e-3));
    assert_eq!(pts[1], p(1000.0, 0.003));

    let hull = convex_hull(&[p(0.0, 0.0), p(500.0, 0.002), p(1000.0, 0.003), p(0.0, 1000.0)])
        .unwrap();
    assert_eq!(
        hull.vertices(),
        &[p(0.0, 0.0), p(1000.0, 0.003), p(0.0, 1000.0)]
    );
    assert!(hull.contains_eps(&p(500.0, 0.002), 0.0));
}

#[test]
fn angle_sort_leaves_anchor_and_short_input() {
    let mut empty: Vec<Point> = Vec::new();
    sort_by_angle(&mut empty, &HullCfg::default());
    assert!(empty.is_empty());
    let mut one = vec![p(3.0, 1.0)];
    sort_by_angle(&mut one, &HullCfg::default());
    assert_eq!(one, vec![p(3.0, 1.0)]);
    // Non-positive tolerance still terminates and degrades to exact angle order.
    let mut pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0)];
    sort_by_angle(&mut pts, &with_angle_eps(0.0));
    assert_eq!(pts, vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)]);
}

#[test]
fn scan_backtracks_over_reflex_vertices() {
    // Anchor-first, angle-sorted: (2,1) becomes reflex once (2,4) arrives.
    let sorted = vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 1.0), p(2.0, 4.0), p(-1.0, 2.0)];
    let ring = graham_scan(&sorted, 1e-6).unwrap();
    assert_eq!(
        ring,
        vec![p(0.0, 0.0), p(4.0, 0.0), p(2.0, 4.0), p(-1.0, 2.0), p(0.0, 0.0)]
    );
}

#[test]
fn scan_skips_clockwise_point_against_initial_edge() {
    let sorted = vec![p(0.0, 0.0), p(1.0, 1.0), p(2.0, 0.0), p(0.0, 2.0)];
    let ring = graham_scan(&sorted, 1e-6).unwrap();
    assert_eq!(
        ring,
        vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 2.0), p(0.0, 0.0)]
    );
    assert!(graham_scan(&sorted[..1], 1e-6).is_none());
}

#[test]
fn collinear_points_on_first_edge_are_kept() {
    let pts = vec![p(4.0, 0.0), p(4.0, 2.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
        hull.vertices(),
        &[p(4.0, 0.0), p(4.0, 2.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)]
    );
}

#[test]
fn collinear_points_on_closing_edge_are_pruned() {
    let pts = vec![p(4.0, 0.0), p(2.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
        hull.vertices(),
        &[p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)]
    );
}

#[test]
fn insufficient_and_non_finite_inputs() {
    assert_eq!(
        convex_hull(&[p(0.0, 0.0), p(1.0, 0.0)]),
        Err(HullError::InsufficientInput { got: 2 })
    );
    assert_eq!(
        convex_hull(&[]),
        Err(HullError::InsufficientInput { got: 0 })
    );
    assert_eq!(
        convex_hull(&[p(0.0, 0.0), p(f64::NAN, 1.0), p(1.0, 0.0)]),
        Err(HullError::NonFiniteInput { index: 1 })
    );
    // Z is not inspected.
    assert!(convex_hull(&[
        point![0.0, 0.0, f64::NAN],
        point![1.0, 0.0, 0.0],
        point![0.0, 1.0, 0.0]
    ])
    .is_ok());
}

#[test]
fn z_is_carried_through() {
    let pts = vec![
        point![0.0, 0.0, 1.0],
        point![1.0, 0.0, 2.0],
        point![0.0, 1.0, 3.0],
        point![0.2, 0.2, 9.0],
    ];
    let hull = convex_hull(&pts).unwrap();
    assert_eq!(
        hull.vertices(),
        &[point![1.0, 0.0, 2.0], point![0.0, 1.0, 3.0], point![0.0, 0.0, 1.0]]
    );
}

#[test]
fn duplicate_tolerance_only_affects_reporting() {
    let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0), p(0.01, 1.0)];
    let loose = HullCfg {
        eps_dup: 0.1,
        ..HullCfg::default()
    };
    assert!(find_duplicates(&pts, HullCfg::default().eps_dup).is_empty());
    assert_eq!(find_duplicates(&pts, loose.eps_dup), vec![(2, 3)]);
    assert_eq!(
        convex_hull(&pts).unwrap(),
        convex_hull_with(&pts, &loose).unwrap()
    );
    assert_eq!(convex_hull_with(&pts, &loose).unwrap().vertex_count(), 4);
}

#[test]
fn near_collinear_input_is_degenerate_after_scan() {
    // Every turn stays within eps_orient, so the scan builds a flat ring.
    let pts = vec![p(0.0, 0.0), p(1.0, 1e-7), p(2.0, 0.0), p(3.0, 0.0)];
    let mut work = pts.clone();
    place_anchor(&mut work);
    sort_by_angle(&mut work, &HullCfg::default());
    assert_eq!(
        work,
        vec![p(3.0, 0.0), p(2.0, 0.0), p(1.0, 1e-7), p(0.0, 0.0)]
    );
    assert_eq!(graham_scan(&work, 1e-6).map(|r| r.len()), Some(5));
    assert_eq!(
        convex_hull(&pts),
        Err(HullError::DegenerateInput {
            start: p(3.0, 0.0),
            end: p(0.0, 0.0)
        })
    );
}

#[test]
fn contains_eps_semantics() {
    let hull = convex_hull(&[p(0.0, 0.0), p(2.0, 0.0), p(2.0, 2.0), p(0.0, 2.0)]).unwrap();
    assert!(hull.contains_eps(&p(1.0, 1.0), 0.0));
    assert!(hull.contains_eps(&p(2.0, 1.0), 1e-9));
    assert!(!hull.contains_eps(&p(2.0, 1.0), -1e-9));
    assert!(!hull.contains_eps(&p(3.0, 1.0), 1e-6));
}

#[test]
fn random_disk_hull_contains_every_point() {
    let cfg = DiskCfg {
        count: 64,
        ..DiskCfg::default()
    };
    for index in 0..8 {
        let pts = draw_points_disk(cfg, ReplayToken { seed: 2025, index });
        let hull = convex_hull(&pts).unwrap();
        assert_eq!(hull.closed().first(), hull.closed().last());
        assert!(hull.signed_area() > 0.0);
        for q in &pts {
            assert!(hull.contains_eps(q, 1e-4));
        }
        for v in hull.vertices() {
            assert!(pts.contains(v));
        }
    }
}
