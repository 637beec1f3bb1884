//! Triangles and their two containment predicates.
//!
//! Two different questions are asked of a triangle and they must not be
//! confused:
//! - point-in-triangle (`contains_point`): used to locate the triangle an
//!   inserted point falls into. Boundary counts as inside.
//! - point-in-circumcircle: `circumcircle_contains*` compares distances to
//!   the explicit circle; `incircle` uses the lifted determinant and is what
//!   legalization asks. Both treat cocircular points as outside.

use std::fmt;

use nalgebra::{matrix, Vector2};

use super::cfg::{DET_EPS, ON_EDGE_EPS};
use super::circle::Circle;
use super::edge::Edge;
use super::point::{cross, Point};
use super::predicates::{incircle_eps, InCircle};

/// Three distinct points, stored in ascending point order.
///
/// The vertex order carries no meaning: `Triangle::new(a, b, c)` equals every
/// permutation of itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triangle {
    v: [Point; 3],
}

impl Triangle {
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        debug_assert!(a != b && b != c && c != a, "triangle vertices must be distinct");
        let mut v = [a, b, c];
        v.sort_unstable();
        Self { v }
    }

    /// Triangle spanned by `edge` and an apex.
    #[inline]
    pub fn from_edge(edge: Edge, apex: Point) -> Self {
        Self::new(edge.a(), edge.b(), apex)
    }

    #[inline]
    pub fn a(&self) -> Point {
        self.v[0]
    }
    #[inline]
    pub fn b(&self) -> Point {
        self.v[1]
    }
    #[inline]
    pub fn c(&self) -> Point {
        self.v[2]
    }

    #[inline]
    pub fn vertices(&self) -> [Point; 3] {
        self.v
    }

    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.v;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    #[inline]
    pub fn is_vertex(&self, p: Point) -> bool {
        self.v.contains(&p)
    }

    /// Edge opposite to vertex `p`; `None` if `p` is not a vertex.
    pub fn opposite_edge(&self, p: Point) -> Option<Edge> {
        let [a, b, c] = self.v;
        if p == a {
            Some(Edge::new(b, c))
        } else if p == b {
            Some(Edge::new(c, a))
        } else if p == c {
            Some(Edge::new(a, b))
        } else {
            None
        }
    }

    /// Vertex opposite to `edge`; `None` if `edge` is not a side of this triangle.
    pub fn opposite_vertex(&self, edge: &Edge) -> Option<Point> {
        if !(self.is_vertex(edge.a()) && self.is_vertex(edge.b())) {
            return None;
        }
        self.v.iter().copied().find(|p| !edge.has_endpoint(*p))
    }

    /// Signed area; positive if the stored vertex order is counterclockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * cross(self.v[0], self.v[1], self.v[2])
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Collinear within `eps` relative to the longest side.
    pub fn is_degenerate_eps(&self, eps: f64) -> bool {
        let longest = self
            .edges()
            .iter()
            .map(|e| e.length())
            .fold(0.0_f64, f64::max);
        cross(self.v[0], self.v[1], self.v[2]).abs() <= eps * longest * longest
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.is_degenerate_eps(ON_EDGE_EPS)
    }

    /// Circle through all three vertices, from the perpendicular bisectors.
    ///
    /// Returns `None` for (near-)collinear vertices.
    pub fn circumscribed(&self) -> Option<Circle> {
        let a = self.v[0].to_vector();
        let u = self.v[1].to_vector() - a;
        let v = self.v[2].to_vector() - a;
        // 2 u·x = |u|², 2 v·x = |v|² with x relative to a.
        let m = matrix![u.x, u.y; v.x, v.y];
        let det = m.determinant();
        if !det.is_finite() || det.abs() <= DET_EPS * u.norm() * v.norm() {
            return None;
        }
        let inv = m.try_inverse()?;
        let rhs = Vector2::new(0.5 * u.norm_squared(), 0.5 * v.norm_squared());
        let x = inv * rhs;
        let center = Point::from(a + x);
        Some(Circle::new(center, x.norm()))
    }

    /// Point-in-triangle with the default tolerance (boundary inclusive).
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        self.contains_point_eps(p, ON_EDGE_EPS)
    }

    /// Point-in-triangle; a point within `eps * |side|²` of a side counts as inside.
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        let orient = cross(self.v[0], self.v[1], self.v[2]).signum();
        if orient == 0.0 {
            return false;
        }
        let [a, b, c] = self.v;
        [(a, b), (b, c), (c, a)].iter().all(|&(s, t)| {
            let len2 = (t.to_vector() - s.to_vector()).norm_squared();
            cross(s, t, p) * orient >= -eps * len2
        })
    }

    /// Strict point-in-circumcircle. Degenerate triangles contain nothing.
    #[inline]
    pub fn circumcircle_contains(&self, p: Point) -> bool {
        self.circumscribed()
            .is_some_and(|circle| circle.contains_point(p))
    }

    /// Point-in-circumcircle with relative slack (see `Circle::contains_point_eps`).
    #[inline]
    pub fn circumcircle_contains_eps(&self, p: Point, eps: f64) -> bool {
        self.circumscribed()
            .is_some_and(|circle| circle.contains_point_eps(p, eps))
    }
}

impl Triangle {
    /// Classify `p` against the circumcircle (see `geom::predicates`).
    #[inline]
    pub fn incircle(&self, p: Point, eps: f64) -> InCircle {
        let [a, b, c] = self.v;
        incircle_eps(a, b, c, p, eps)
    }
}

impl fmt::Debug for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Triangle[{:?}, {:?}, {:?}]", self.v[0], self.v[1], self.v[2])
    }
}
