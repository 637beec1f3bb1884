//! Unordered edges and the lines through them.

use std::fmt;

use super::cfg::ON_EDGE_EPS;
use super::point::{cross, Point};

/// Unordered pair of points. Endpoints are stored smaller-first, so
/// `Edge::new(a, b) == Edge::new(b, a)` and both hash identically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: Point,
    b: Point,
}

impl Edge {
    #[inline]
    pub fn new(p: Point, q: Point) -> Self {
        if p <= q {
            Self { a: p, b: q }
        } else {
            Self { a: q, b: p }
        }
    }

    /// Smaller endpoint in the point order.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// Larger endpoint in the point order.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    #[inline]
    pub fn endpoints(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    #[inline]
    pub fn has_endpoint(&self, p: Point) -> bool {
        self.a == p || self.b == p
    }

    /// The endpoint that is not `p`, if `p` is an endpoint.
    #[inline]
    pub fn other(&self, p: Point) -> Option<Point> {
        if self.a == p {
            Some(self.b)
        } else if self.b == p {
            Some(self.a)
        } else {
            None
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(&self.b)
    }

    #[inline]
    pub fn line(&self) -> Line {
        Line::new(self.a, self.b)
    }

    /// `p` lies on the closed segment `a-b` (default tolerance).
    #[inline]
    pub fn on_edge(a: Point, b: Point, p: Point) -> bool {
        Self::on_edge_eps(a, b, p, ON_EDGE_EPS)
    }

    /// `p` is collinear with `a-b` and between the endpoints.
    ///
    /// Collinearity is relative: `|cross(a, b, p)| <= eps * |ab|²`, i.e. the
    /// distance from `p` to the line is at most `eps * |ab|`.
    pub fn on_edge_eps(a: Point, b: Point, p: Point, eps: f64) -> bool {
        let ab = b.to_vector() - a.to_vector();
        let len2 = ab.norm_squared();
        if len2 == 0.0 {
            return p == a;
        }
        if cross(a, b, p).abs() > eps * len2 {
            return false;
        }
        let t = (p.to_vector() - a.to_vector()).dot(&ab);
        t >= -eps * len2 && t <= len2 * (1.0 + eps)
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge[{:?} - {:?}]", self.a, self.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.a, self.b)
    }
}

/// Oriented infinite line through `from` towards `to`.
#[derive(Clone, Copy, Debug)]
pub struct Line {
    from: Point,
    to: Point,
}

impl Line {
    #[inline]
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    /// Signed side: positive left of `from → to`, negative right, zero on the line.
    #[inline]
    pub fn side(&self, p: Point) -> f64 {
        cross(self.from, self.to, p)
    }

    /// Both points strictly on the same side.
    #[inline]
    pub fn on_same_side(&self, p: Point, q: Point) -> bool {
        self.side(p) * self.side(q) > 0.0
    }
}
