//! Closed polygons assembled from loose boundary edges.
//!
//! `PolygonBuilder` receives boundary edges in arbitrary order and direction
//! and succeeds only if they form exactly one simple closed loop: no repeated
//! edge, every vertex of degree two, one connected cycle.

use std::collections::{BTreeMap, HashSet};

use super::edge::Edge;
use super::point::{cross, Point};

/// Ordered closed loop of points (last connects back to first).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn contains_vertex(&self, p: Point) -> bool {
        self.points.contains(&p)
    }

    /// Boundary edges, one per consecutive pair (including the closing edge).
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Edge::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Shoelace area; positive for counterclockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        let mut s = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            s += p.x() * q.y() - q.x() * p.y();
        }
        0.5 * s
    }

    /// Sum of signed exterior angles; `+2π` for a counterclockwise simple loop.
    pub fn turning_sum(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let prev = self.points[(i + n - 1) % n].to_vector();
            let cur = self.points[i].to_vector();
            let next = self.points[(i + 1) % n].to_vector();
            let u = cur - prev;
            let v = next - cur;
            let c = u.x * v.y - u.y * v.x;
            sum += c.atan2(u.dot(&v));
        }
        sum
    }

    /// Reverse in place if the loop runs clockwise. Returns whether it reversed.
    pub fn normalize_ccw(&mut self) -> bool {
        if self.turning_sum() < 0.0 {
            self.points.reverse();
            true
        } else {
            false
        }
    }

    /// Every corner turns left (or is straight) in the stored order.
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        n >= 3
            && (0..n).all(|i| {
                cross(
                    self.points[(i + n - 1) % n],
                    self.points[i],
                    self.points[(i + 1) % n],
                ) >= 0.0
            })
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Point {
        self.points.remove(index)
    }
}

/// Incremental collector of boundary edges.
#[derive(Clone, Debug, Default)]
pub struct PolygonBuilder {
    edges: HashSet<Edge>,
    adjacency: BTreeMap<Point, Vec<Point>>,
    repeated: bool,
}

impl PolygonBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one boundary edge. Adding the same edge twice makes the builder fail.
    pub fn append(&mut self, edge: Edge) -> &mut Self {
        if !self.edges.insert(edge) {
            self.repeated = true;
            return self;
        }
        self.adjacency.entry(edge.a()).or_default().push(edge.b());
        self.adjacency.entry(edge.b()).or_default().push(edge.a());
        self
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// The accumulated edges form exactly one closed loop.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.walk().is_some()
    }

    /// Ordered loop starting at the smallest vertex; `None` unless closed.
    pub fn build(&self) -> Option<Polygon> {
        self.walk().map(Polygon::new)
    }

    fn walk(&self) -> Option<Vec<Point>> {
        if self.repeated || self.edges.len() < 3 {
            return None;
        }
        if self.adjacency.values().any(|n| n.len() != 2) {
            return None;
        }
        let (&start, first) = self.adjacency.iter().next()?;
        let mut loop_pts = Vec::with_capacity(self.adjacency.len());
        loop_pts.push(start);
        let mut prev = start;
        let mut cur = first[0];
        while cur != start {
            if loop_pts.len() >= self.adjacency.len() {
                return None;
            }
            loop_pts.push(cur);
            let nbrs = &self.adjacency[&cur];
            let next = if nbrs[0] == prev { nbrs[1] } else { nbrs[0] };
            prev = cur;
            cur = next;
        }
        // A shorter cycle than the vertex count means several disjoint loops.
        (loop_pts.len() == self.adjacency.len()).then_some(loop_pts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn square_builder() -> PolygonBuilder {
        let (a, b, c, d) = (p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0));
        let mut builder = PolygonBuilder::new();
        builder
            .append(Edge::new(c, d))
            .append(Edge::new(a, b))
            .append(Edge::new(d, a))
            .append(Edge::new(b, c));
        builder
    }

    #[test]
    fn builder_orders_loose_edges() {
        let builder = square_builder();
        assert!(builder.is_closed());
        let mut poly = builder.build().unwrap();
        assert_eq!(poly.len(), 4);
        poly.normalize_ccw();
        assert!(poly.signed_area() > 0.0);
        assert!((poly.signed_area() - 1.0).abs() < 1e-12);
        assert!((poly.turning_sum() - std::f64::consts::TAU).abs() < 1e-9);
        assert!(poly.is_convex());
        let edges: HashSet<Edge> = poly.edges().collect();
        let expected: HashSet<Edge> = square_builder().edges().copied().collect();
        assert_eq!(edges, expected);
    }

    #[test]
    fn normalize_reverses_clockwise() {
        let mut poly = Polygon::new(vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]);
        assert!(poly.signed_area() < 0.0);
        assert!(poly.normalize_ccw());
        assert!(poly.signed_area() > 0.0);
        assert!(!poly.normalize_ccw());
    }

    #[test]
    fn open_chain_is_not_closed() {
        let mut builder = PolygonBuilder::new();
        builder
            .append(Edge::new(p(0.0, 0.0), p(1.0, 0.0)))
            .append(Edge::new(p(1.0, 0.0), p(2.0, 0.0)))
            .append(Edge::new(p(2.0, 0.0), p(3.0, 1.0)));
        assert!(!builder.is_closed());
        assert!(builder.build().is_none());
    }

    #[test]
    fn two_loops_are_not_one() {
        let mut builder = PolygonBuilder::new();
        let t1 = [p(0.0, 0.0), p(1.0, 0.0), p(0.0, 1.0)];
        let t2 = [p(5.0, 0.0), p(6.0, 0.0), p(5.0, 1.0)];
        for t in [t1, t2] {
            for i in 0..3 {
                builder.append(Edge::new(t[i], t[(i + 1) % 3]));
            }
        }
        assert!(!builder.is_closed());
    }

    #[test]
    fn repeated_edge_fails() {
        let mut builder = square_builder();
        builder.append(Edge::new(p(1.0, 0.0), p(0.0, 0.0)));
        assert!(!builder.is_closed());
    }
}
