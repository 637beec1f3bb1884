use super::*;
use crate::geom::{Edge, InCircle, Triangle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

fn p(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn border() -> Rectangle {
    Rectangle::new(-10.0, -10.0, 10.0, 10.0)
}

/// Every triangle edge has a pair naming that triangle, and every pair
/// triangle is present.
fn assert_adjacency(tri: &Triangulation) {
    for t in tri.triangles() {
        for e in t.edges() {
            let pair = tri.pair(&e).unwrap_or_else(|| panic!("no pair for {e}"));
            assert!(pair.triangles().any(|u| u == *t), "{t:?} missing from pair of {e}");
        }
    }
    for (e, pair) in tri.edge_triangle_map() {
        assert!(tri.edges().contains(e));
        for t in pair.triangles() {
            assert!(tri.triangles().contains(&t));
            let apex = t.opposite_vertex(e).unwrap();
            assert!(pair.apexes().any(|a| a == apex));
        }
    }
    assert_eq!(tri.edges().len(), tri.edge_triangle_map().len());
}

fn assert_empty_circles(tri: &Triangulation) {
    for t in tri.triangles() {
        for s in tri.sites() {
            assert!(
                t.is_vertex(*s) || t.incircle(*s, 1e-9) != InCircle::Inside,
                "{s} inside circumcircle of {t:?}"
            );
        }
    }
}

#[test]
fn square_has_two_triangles() {
    let sites = [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0)];
    let tri = DelaunayDiagram::new(sites).split(border()).unwrap();
    assert_eq!(tri.triangles().len(), 2);
    assert_eq!(tri.edges().len(), 5);
    assert_eq!(tri.interior_edges().count(), 1);
    assert_eq!(tri.hull_edges().count(), 4);
    assert_eq!(tri.hull().len(), 4);
    assert!(tri.hull().signed_area() > 0.0);
    assert_adjacency(&tri);

    let diagonal = *tri.interior_edges().next().unwrap();
    let options = [
        Edge::new(p(0.0, 0.0), p(4.0, 4.0)),
        Edge::new(p(4.0, 0.0), p(0.0, 4.0)),
    ];
    assert!(options.contains(&diagonal));
}

#[test]
fn interior_site_fans_out() {
    let sites = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (5.0, 3.0)];
    let tri = DelaunayDiagram::new(sites)
        .split(Rectangle::new(-1.0, -1.0, 11.0, 9.0))
        .unwrap();
    assert_eq!(tri.triangles().len(), 3);
    assert!(tri.triangles().iter().all(|t| t.is_vertex(p(5.0, 3.0))));
    assert_eq!(tri.hull().len(), 3);
    assert!(!tri.hull().contains_vertex(p(5.0, 3.0)));
    assert_eq!(tri.adjacent_sites(p(5.0, 3.0)).len(), 3);
    assert_adjacency(&tri);
    assert_empty_circles(&tri);
}

#[test]
fn collinear_input_is_rejected() {
    let err = DelaunayDiagram::new([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])
        .split(border())
        .unwrap_err();
    assert!(matches!(err, DiagramError::DegenerateInput { distinct: 3, .. }));
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn nearly_collinear_input_is_rejected() {
    let inputs: [&[(f64, f64)]; 2] = [
        &[(0.0, 0.0), (1.0, 1e-12), (2.0, 0.0)],
        &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (1.5, 1e-11)],
    ];
    for sites in inputs {
        let err = DelaunayDiagram::new(sites.iter().copied())
            .split(border())
            .unwrap_err();
        assert!(
            matches!(err, DiagramError::DegenerateInput { .. }),
            "{sites:?}: {err}"
        );
        assert_eq!(err.kind(), ErrorKind::Input);
    }
}

#[test]
fn convex_position_on_a_flattened_ellipse() {
    // Every site is a hull vertex and the circumcircles are close to each
    // other, so many diagonals are decided by thin triangles.
    let border = Rectangle::new(-1.0, -1.0, 1.0, 1.0);
    for seed in 0..300 {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.gen_range(4..=40);
        let sites: Vec<(f64, f64)> = (0..n)
            .map(|_| {
                let th = rng.gen_range(0.0..std::f64::consts::TAU);
                (0.999 * th.cos(), 0.998 * th.sin())
            })
            .collect();
        let tri = DelaunayDiagram::new(sites)
            .split(border)
            .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
        assert_eq!(tri.hull().len(), n, "seed {seed}");
        assert_eq!(tri.triangles().len(), n - 2, "seed {seed}");
        assert_adjacency(&tri);
        assert_empty_circles(&tri);
    }
}

#[test]
fn point_on_border_is_rejected() {
    let err = DelaunayDiagram::new([(0.0, 0.0), (10.0, 0.0), (0.0, 5.0)])
        .split(border())
        .unwrap_err();
    match err {
        DiagramError::OutsideBorder { point, .. } => assert_eq!(point, p(10.0, 0.0)),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn too_few_points_are_rejected() {
    let err = DelaunayDiagram::new([(0.0, 0.0), (1.0, 0.0), (0.0, 0.0)])
        .split(border())
        .unwrap_err();
    assert!(matches!(err, DiagramError::DegenerateInput { distinct: 2, .. }));
    assert!(DelaunayDiagram::default().split(border()).is_err());
}

#[test]
fn duplicates_collapse_onto_first_occurrence() {
    let mut d = DelaunayDiagram::new([(0.0, 0.0), (4.0, 0.0)]);
    assert!(!d.push((0.0, 0.0)));
    assert!(!d.push((-0.0, 0.0)));
    assert!(d.push((2.0, 3.0)));
    assert_eq!(d.len(), 3);
    assert_eq!(d.sites()[2], p(2.0, 3.0));
    let tri = d.split(border()).unwrap();
    assert_eq!(tri.sites().len(), 3);
    assert_eq!(tri.triangles().len(), 1);
}

#[test]
fn site_on_existing_edge_splits_both_neighbours() {
    // (2, 2) lies on whichever diagonal the square got.
    let sites = [(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (4.0, 4.0), (2.0, 2.0)];
    let tri = DelaunayDiagram::new(sites).split(border()).unwrap();
    assert_eq!(tri.triangles().len(), 4);
    assert_eq!(tri.edges().len(), 8);
    assert!(tri.triangles().iter().all(|t| t.is_vertex(p(2.0, 2.0))));
    assert_eq!(tri.hull().len(), 4);
    assert_adjacency(&tri);
}

#[test]
fn collinear_hull_vertices_are_kept() {
    let sites = [(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (2.0, 3.0)];
    let tri = DelaunayDiagram::new(sites).split(border()).unwrap();
    assert_eq!(tri.triangles().len(), 2);
    assert_eq!(tri.hull().len(), 4);
    assert!(tri.hull().contains_vertex(p(2.0, 0.0)));
    assert!(tri.pair(&Edge::new(p(2.0, 0.0), p(2.0, 3.0))).is_some_and(|pr| pr.len() == 2));
    assert_adjacency(&tri);
}

#[test]
fn grid_is_delaunay_with_euler_counts() {
    let sites: Vec<(f64, f64)> = (0..5)
        .flat_map(|i| (0..4).map(move |j| (i as f64 * 1.25 + 0.25 * j as f64, j as f64 * 1.5)))
        .collect();
    let n = sites.len();
    let tri = DelaunayDiagram::new(sites).split(border()).unwrap();
    let h = tri.hull().len();
    assert_eq!(tri.triangles().len(), 2 * n - h - 2);
    assert_eq!(tri.edges().len(), 3 * n - h - 3);
    assert!(tri.hull().is_convex());
    assert_adjacency(&tri);
    assert_empty_circles(&tri);
}

#[test]
fn neighbors_share_an_edge() {
    let sites = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (5.0, 3.0)];
    let tri = DelaunayDiagram::new(sites)
        .split(Rectangle::new(-1.0, -1.0, 11.0, 9.0))
        .unwrap();
    for t in tri.triangles() {
        let around = tri.neighbors(t);
        assert_eq!(around.len(), 2);
        for u in around {
            let shared = t.edges().iter().filter(|e| u.edges().contains(e)).count();
            assert_eq!(shared, 1);
        }
    }
}

#[test]
fn auto_border_wraps_sites() {
    let sites = [(100.0, 100.0), (104.0, 100.0), (102.0, 103.0), (102.0, 101.0)];
    let tri = DelaunayDiagram::new(sites).split_auto().unwrap();
    assert_eq!(tri.triangles().len(), 3);
    assert_adjacency(&tri);
}

#[test]
fn insertion_order_does_not_change_the_edges() {
    let sites = vec![
        p(-3.0, -2.0),
        p(4.0, -1.5),
        p(1.0, 5.0),
        p(0.5, 0.2),
        p(-2.2, 3.1),
        p(3.3, 2.7),
        p(-0.7, -4.1),
    ];
    let forward = DelaunayDiagram::new(sites.iter().copied()).split(border()).unwrap();
    let backward = DelaunayDiagram::new(sites.iter().rev().copied())
        .split(border())
        .unwrap();
    assert_eq!(forward.edges(), backward.edges());
    let ft: BTreeSet<Triangle> = forward.triangles().clone();
    assert_eq!(&ft, backward.triangles());
}

#[test]
fn invariant_errors_are_classified() {
    let e = Edge::new(p(0.0, 0.0), p(1.0, 0.0));
    assert_eq!(DiagramError::MissingAdjacency { edge: e }.kind(), ErrorKind::InvariantViolation);
    assert_eq!(DiagramError::OpenHull { edges: vec![e] }.kind(), ErrorKind::InvariantViolation);
    assert_eq!(DiagramError::Unlocatable { point: p(0.0, 0.0) }.kind(), ErrorKind::Input);
    let msg = DiagramError::OpenHull { edges: vec![e, e] }.to_string();
    assert!(msg.starts_with("fail to calc frame: 2 boundary edges"));
}

#[test]
fn collected_from_iterator() {
    let d: DelaunayDiagram = [[0.0, 0.0], [3.0, 0.0], [0.0, 3.0]].into_iter().collect();
    assert_eq!(d.len(), 3);
    assert!(!d.is_empty());
}
