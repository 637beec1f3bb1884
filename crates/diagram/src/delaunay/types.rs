//! Adjacency records, tolerances, and the published triangulation.

use std::collections::{BTreeSet, HashMap};

use crate::geom::cfg::{CIRCLE_EPS, ON_EDGE_EPS, TURN_EPS};
use crate::geom::{Edge, InCircle, Point, Polygon, Triangle};

use super::error::DiagramError;

/// Split tolerances.
///
/// All three are relative (see `geom::cfg`). `eps_circle` scales the
/// permanent of the incircle determinant; raising it makes legalization
/// ignore near-cocircular violations. Raising `eps_turn` keeps nearly
/// straight hull corners instead of filling them. `eps_on_edge` also bounds
/// how collinear the input may be before it is rejected as degenerate.
#[derive(Clone, Copy, Debug)]
pub struct SplitCfg {
    pub eps_on_edge: f64,
    pub eps_circle: f64,
    pub eps_turn: f64,
}

impl Default for SplitCfg {
    fn default() -> Self {
        Self {
            eps_on_edge: ON_EDGE_EPS,
            eps_circle: CIRCLE_EPS,
            eps_turn: TURN_EPS,
        }
    }
}

/// The one or two triangles sharing an edge.
///
/// `point1`/`t1` always exist. `point2`/`t2` exist only when the edge is
/// interior; hull edges have a single triangle. Values are immutable: every
/// update builds a new pair that replaces the old map entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrianglePair {
    edge: Edge,
    point1: Point,
    t1: Triangle,
    point2: Option<Point>,
    t2: Option<Triangle>,
}

impl TrianglePair {
    pub(crate) fn single(edge: Edge, apex: Point) -> Self {
        Self {
            edge,
            point1: apex,
            t1: Triangle::from_edge(edge, apex),
            point2: None,
            t2: None,
        }
    }

    pub(crate) fn double(edge: Edge, apex1: Point, apex2: Point) -> Self {
        Self {
            edge,
            point1: apex1,
            t1: Triangle::from_edge(edge, apex1),
            point2: Some(apex2),
            t2: Some(Triangle::from_edge(edge, apex2)),
        }
    }

    #[inline]
    pub fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub fn triangle1(&self) -> Triangle {
        self.t1
    }

    #[inline]
    pub fn triangle2(&self) -> Option<Triangle> {
        self.t2
    }

    /// Apex of `triangle1` (the vertex opposite the edge).
    #[inline]
    pub fn point1(&self) -> Point {
        self.point1
    }

    #[inline]
    pub fn point2(&self) -> Option<Point> {
        self.point2
    }

    pub fn triangles(&self) -> impl Iterator<Item = Triangle> {
        std::iter::once(self.t1).chain(self.t2)
    }

    pub fn apexes(&self) -> impl Iterator<Item = Point> {
        std::iter::once(self.point1).chain(self.point2)
    }

    /// 1 for hull edges, 2 for interior edges.
    #[inline]
    pub fn len(&self) -> usize {
        1 + usize::from(self.t2.is_some())
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.t2.is_none()
    }

    /// Swap in `change` as the apex on its side of the edge.
    ///
    /// If `change` is on the side of `point1` it replaces `point1`; otherwise it
    /// becomes (or replaces) `point2`.
    pub(crate) fn replaced(&self, change: Point) -> Result<Self, DiagramError> {
        let line = self.edge.line();
        let sc = line.side(change);
        if sc == 0.0 {
            return Err(DiagramError::broken(self.edge, "new apex is collinear with edge"));
        }
        if line.side(self.point1) * sc > 0.0 {
            Ok(match self.point2 {
                Some(p2) => Self::double(self.edge, change, p2),
                None => Self::single(self.edge, change),
            })
        } else {
            Ok(Self::double(self.edge, self.point1, change))
        }
    }

    /// Drop the side whose apex is `apex`; `None` if nothing would remain.
    pub(crate) fn without_apex(&self, apex: Point) -> Option<Self> {
        match self.point2 {
            Some(p2) if self.point1 == apex => Some(Self::single(self.edge, p2)),
            Some(p2) if p2 == apex => Some(Self::single(self.edge, self.point1)),
            Some(_) => Some(self.clone()),
            None if self.point1 == apex => None,
            None => Some(self.clone()),
        }
    }

    /// The edge is illegal: either apex lies inside the other triangle's
    /// circumcircle beyond `eps` (see `geom::incircle_eps`).
    pub(crate) fn is_flip(&self, eps: f64) -> bool {
        let (Some(p2), Some(t2)) = (self.point2, self.t2) else {
            return false;
        };
        self.t1.incircle(p2, eps) == InCircle::Inside
            || t2.incircle(self.point1, eps) == InCircle::Inside
    }

    /// The pair across the other diagonal of the quadrilateral.
    ///
    /// The new edge joins the two apexes; the old endpoints become the apexes.
    pub(crate) fn flipped(&self) -> Option<Self> {
        let p2 = self.point2?;
        Some(Self::double(
            Edge::new(self.point1, p2),
            self.edge.a(),
            self.edge.b(),
        ))
    }
}

/// Finished Delaunay triangulation of the input sites.
///
/// Only the real sites appear; the bootstrap container is gone. `hull` is the
/// counterclockwise convex boundary.
#[derive(Clone, Debug)]
pub struct Triangulation {
    pub(crate) sites: Vec<Point>,
    pub(crate) triangles: BTreeSet<Triangle>,
    pub(crate) edges: BTreeSet<Edge>,
    pub(crate) pairs: HashMap<Edge, TrianglePair>,
    pub(crate) hull: Polygon,
}

impl Triangulation {
    /// Deduplicated sites in insertion order.
    #[inline]
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    #[inline]
    pub fn triangles(&self) -> &BTreeSet<Triangle> {
        &self.triangles
    }

    #[inline]
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    #[inline]
    pub fn edge_triangle_map(&self) -> &HashMap<Edge, TrianglePair> {
        &self.pairs
    }

    #[inline]
    pub fn pair(&self, edge: &Edge) -> Option<&TrianglePair> {
        self.pairs.get(edge)
    }

    /// Counterclockwise convex hull of the sites.
    #[inline]
    pub fn hull(&self) -> &Polygon {
        &self.hull
    }

    pub fn hull_edges(&self) -> impl Iterator<Item = &Edge> {
        self.pairs
            .iter()
            .filter(|(_, pair)| pair.is_boundary())
            .map(|(edge, _)| edge)
    }

    pub fn interior_edges(&self) -> impl Iterator<Item = &Edge> {
        self.pairs
            .iter()
            .filter(|(_, pair)| !pair.is_boundary())
            .map(|(edge, _)| edge)
    }

    /// Triangles sharing an edge with `t`.
    pub fn neighbors(&self, t: &Triangle) -> Vec<Triangle> {
        t.edges()
            .iter()
            .filter_map(|e| self.pairs.get(e))
            .flat_map(|pair| pair.triangles())
            .filter(|n| n != t)
            .collect()
    }

    /// Distinct sites joined to `p` by an edge.
    pub fn adjacent_sites(&self, p: Point) -> BTreeSet<Point> {
        self.edges.iter().filter_map(|e| e.other(p)).collect()
    }
}
