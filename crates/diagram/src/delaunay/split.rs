//! Working state of one split: insertion, Lawson legalization, hull repair.
//!
//! `SplitContext` owns the triangle set, the edge → pair map and the flip
//! queue for exactly one `DelaunayDiagram::split` call and is consumed by
//! `finalize`.
//!
//! Adjacency updates always follow remove → rebuild → reinsert; a
//! `TrianglePair` in the map is never edited in place.

use std::collections::{BTreeSet, HashMap, VecDeque};

use crate::geom::{Container, Corner, Edge, Line, Point, Polygon, PolygonBuilder, Triangle};

use super::error::DiagramError;
use super::types::{SplitCfg, TrianglePair, Triangulation};

pub(crate) struct SplitContext {
    cfg: SplitCfg,
    container: Container,
    triangles: BTreeSet<Triangle>,
    pairs: HashMap<Edge, TrianglePair>,
    queue: VecDeque<Edge>,
    pub(crate) flips: usize,
}

impl SplitContext {
    pub(crate) fn new(container: Container, cfg: SplitCfg) -> Self {
        let [a, b, c] = container.points();
        let mut pairs = HashMap::new();
        for (e, apex) in [
            (Edge::new(a, b), c),
            (Edge::new(b, c), a),
            (Edge::new(c, a), b),
        ] {
            pairs.insert(e, TrianglePair::single(e, apex));
        }
        for corner in Corner::ALL {
            tracing::trace!(corner = %container.label(corner), "container corner");
        }
        Self {
            cfg,
            container,
            triangles: BTreeSet::from([container.triangle()]),
            pairs,
            queue: VecDeque::new(),
            flips: 0,
        }
    }

    #[inline]
    pub(crate) fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Linear scan for a triangle containing `p` (boundary inclusive).
    fn locate(&self, p: Point) -> Option<Triangle> {
        self.triangles
            .iter()
            .find(|t| t.contains_point_eps(p, self.cfg.eps_on_edge))
            .copied()
    }

    /// Insert one site and restore the Delaunay property.
    pub(crate) fn insert(&mut self, p: Point) -> Result<(), DiagramError> {
        let t = self
            .locate(p)
            .ok_or(DiagramError::Unlocatable { point: p })?;
        self.queue.clear();
        if t.is_vertex(p) {
            tracing::trace!(point = %p, "coincident vertex, skipped");
            return Ok(());
        }
        let [a, b, c] = t.vertices();
        let eps = self.cfg.eps_on_edge;
        if Edge::on_edge_eps(a, b, p, eps) {
            self.insert_on_edge(a, b, c, p)?;
        } else if Edge::on_edge_eps(b, c, p, eps) {
            self.insert_on_edge(b, c, a, p)?;
        } else if Edge::on_edge_eps(c, a, p, eps) {
            self.insert_on_edge(c, a, b, p)?;
        } else {
            self.insert_in_triangle(p, t)?;
        }
        self.legalize()
    }

    fn take_pair(&mut self, edge: Edge) -> Result<TrianglePair, DiagramError> {
        self.pairs
            .remove(&edge)
            .ok_or_else(|| DiagramError::broken(edge, "missing triangle pair"))
    }

    fn replace_apex(&mut self, edge: Edge, change: Point) -> Result<(), DiagramError> {
        let pair = self.take_pair(edge)?;
        self.pairs.insert(edge, pair.replaced(change)?);
        Ok(())
    }

    fn put_pair(&mut self, pair: TrianglePair) {
        self.pairs.insert(pair.edge(), pair);
    }

    /// `p` on edge `ab` of triangle `abc`; `abd` is the triangle across.
    fn insert_on_edge(&mut self, a: Point, b: Point, c: Point, p: Point) -> Result<(), DiagramError> {
        let old = Edge::new(a, b);
        let pair = self.take_pair(old)?;
        let d = pair
            .apexes()
            .find(|q| *q != c)
            .ok_or_else(|| DiagramError::broken(old, "on-edge insertion needs two triangles"))?;
        tracing::trace!(point = %p, edge = %old, "insert on edge");

        self.triangles.remove(&Triangle::new(a, b, c));
        self.triangles.remove(&Triangle::new(a, b, d));
        for t in [
            Triangle::new(p, a, c),
            Triangle::new(p, c, b),
            Triangle::new(p, b, d),
            Triangle::new(p, d, a),
        ] {
            self.triangles.insert(t);
        }
        self.put_pair(TrianglePair::double(Edge::new(p, c), a, b));
        self.put_pair(TrianglePair::double(Edge::new(p, d), a, b));
        self.put_pair(TrianglePair::double(Edge::new(p, a), d, c));
        self.put_pair(TrianglePair::double(Edge::new(p, b), d, c));

        for e in [
            Edge::new(a, c),
            Edge::new(b, c),
            Edge::new(a, d),
            Edge::new(b, d),
        ] {
            self.replace_apex(e, p)?;
            self.queue.push_back(e);
        }
        Ok(())
    }

    /// `p` strictly inside `t`.
    fn insert_in_triangle(&mut self, p: Point, t: Triangle) -> Result<(), DiagramError> {
        let [a, b, c] = t.vertices();
        tracing::trace!(point = %p, triangle = ?t, "insert in triangle");
        self.triangles.remove(&t);

        let (ab, bc, ca) = (Edge::new(a, b), Edge::new(b, c), Edge::new(c, a));
        self.replace_apex(ab, p)?;
        self.replace_apex(bc, p)?;
        self.replace_apex(ca, p)?;

        self.put_pair(TrianglePair::double(Edge::new(p, a), c, b));
        self.put_pair(TrianglePair::double(Edge::new(p, b), a, c));
        self.put_pair(TrianglePair::double(Edge::new(p, c), b, a));
        self.triangles.insert(Triangle::new(p, a, b));
        self.triangles.insert(Triangle::new(p, b, c));
        self.triangles.insert(Triangle::new(p, c, a));

        self.queue.extend([ab, bc, ca]);
        Ok(())
    }

    /// Drain the queue, flipping every edge that fails the empty-circle test.
    fn legalize(&mut self) -> Result<(), DiagramError> {
        // Lawson flipping terminates; the budget only guards float pathologies.
        let budget = 8 * self.pairs.len() + 64;
        let mut flips = 0usize;
        while let Some(edge) = self.queue.pop_front() {
            // Queued edges may have been flipped away meanwhile.
            let Some(pair) = self.pairs.get(&edge) else {
                continue;
            };
            if !pair.is_flip(self.cfg.eps_circle) || !is_convex_quad(pair) {
                continue;
            }
            flips += 1;
            if flips > budget {
                return Err(DiagramError::NonTerminating { flips, edge });
            }
            let pair = self.take_pair(edge)?;
            let flipped = pair
                .flipped()
                .ok_or_else(|| DiagramError::broken(edge, "flip needs two triangles"))?;
            tracing::trace!(old = %edge, new = %flipped.edge(), "flip");

            for t in pair.triangles() {
                self.triangles.remove(&t);
            }
            for t in flipped.triangles() {
                self.triangles.insert(t);
            }
            let diagonal = flipped.edge();
            let (na, nb) = (diagonal.a(), diagonal.b());
            let (oa, ob) = (edge.a(), edge.b());
            self.put_pair(flipped);

            // Each side of the quadrilateral now faces the other end of the new diagonal.
            for (side, apex) in [
                (Edge::new(oa, na), nb),
                (Edge::new(oa, nb), na),
                (Edge::new(ob, na), nb),
                (Edge::new(ob, nb), na),
            ] {
                self.replace_apex(side, apex)?;
                self.queue.push_back(side);
            }
        }
        self.flips += flips;
        Ok(())
    }

    /// Remove every container-touching triangle and return the CCW boundary
    /// of what remains.
    pub(crate) fn strip_container(&mut self) -> Result<Polygon, DiagramError> {
        let container = self.container;
        let mut builder = PolygonBuilder::new();
        let mut doomed = Vec::new();
        for t in &self.triangles {
            let corners = container.corners_of(t);
            if let [corner] = corners[..] {
                if let Some(e) = t.opposite_edge(container.point(corner)) {
                    builder.append(e);
                }
            }
            if !corners.is_empty() {
                doomed.push(*t);
            }
        }
        for t in &doomed {
            self.triangles.remove(t);
        }
        tracing::debug!(
            removed = doomed.len(),
            boundary = builder.edge_count(),
            "container stripped"
        );

        let mut hull = builder.build().ok_or_else(|| DiagramError::OpenHull {
            edges: builder.edges().copied().collect(),
        })?;

        self.pairs
            .retain(|e, _| !(container.is_corner(e.a()) || container.is_corner(e.b())));
        for &e in builder.edges() {
            let mut pair = self.take_pair(e)?;
            for k in container.points() {
                pair = pair
                    .without_apex(k)
                    .ok_or_else(|| DiagramError::broken(e, "hull edge without a real triangle"))?;
            }
            self.put_pair(pair);
        }

        if hull.normalize_ccw() {
            tracing::trace!("hull reversed to counterclockwise");
        }
        Ok(hull)
    }

    /// Fill every concave hull corner until the hull is convex.
    ///
    /// Collinear corners (within `eps_turn`) stay on the hull. A concave corner
    /// is only filled once no other hull vertex lies in its triangle.
    pub(crate) fn fill_concave_corners(&mut self, hull: &mut Polygon) -> Result<usize, DiagramError> {
        let mut filled = 0usize;
        loop {
            let before = filled;
            let mut i = 0;
            while i < hull.len() && hull.len() > 3 {
                let (prev, cur, next) = corner(hull, i);
                if self.is_concave(prev, cur, next) && self.is_ear(hull, prev, cur, next) {
                    self.fill_corner(prev, cur, next)?;
                    hull.remove_at(i);
                    filled += 1;
                    i = i.saturating_sub(1);
                } else {
                    i += 1;
                }
            }
            if filled == before {
                break;
            }
        }
        for i in 0..hull.len() {
            let (prev, cur, next) = corner(hull, i);
            if self.is_concave(prev, cur, next) {
                return Err(DiagramError::NonConvexHull { corner: cur });
            }
        }
        Ok(filled)
    }

    fn is_ear(&self, hull: &Polygon, a: Point, b: Point, c: Point) -> bool {
        let ear = Triangle::new(a, b, c);
        hull.points()
            .iter()
            .filter(|q| **q != a && **q != b && **q != c)
            .all(|q| !ear.contains_point_eps(*q, self.cfg.eps_on_edge))
    }

    fn is_concave(&self, prev: Point, cur: Point, next: Point) -> bool {
        let u = cur.to_vector() - prev.to_vector();
        let v = next.to_vector() - cur.to_vector();
        let turn = u.x * v.y - u.y * v.x;
        turn < -self.cfg.eps_turn * u.norm() * v.norm()
    }

    /// Close the reflex corner `b` with triangle `abc` and re-legalize.
    fn fill_corner(&mut self, a: Point, b: Point, c: Point) -> Result<(), DiagramError> {
        let ac = Edge::new(a, c);
        if self.pairs.contains_key(&ac) {
            return Err(DiagramError::broken(ac, "corner chord already exists"));
        }
        tracing::trace!(corner = %b, "fill concave hull corner");
        self.queue.clear();
        self.replace_apex(Edge::new(a, b), c)?;
        self.replace_apex(Edge::new(b, c), a)?;
        self.put_pair(TrianglePair::single(ac, b));
        self.triangles.insert(Triangle::new(a, b, c));
        self.queue.extend([Edge::new(a, b), Edge::new(b, c)]);
        self.legalize()
    }

    /// Publish the result; every surviving edge must have a consistent pair.
    pub(crate) fn finalize(
        mut self,
        sites: Vec<Point>,
        hull: Polygon,
    ) -> Result<Triangulation, DiagramError> {
        let edges: BTreeSet<Edge> = self.triangles.iter().flat_map(|t| t.edges()).collect();
        let mut pairs = HashMap::with_capacity(edges.len());
        for &edge in &edges {
            let pair = self
                .pairs
                .remove(&edge)
                .ok_or(DiagramError::MissingAdjacency { edge })?;
            if pair.triangles().any(|t| !self.triangles.contains(&t)) {
                return Err(DiagramError::StaleAdjacency { edge });
            }
            pairs.insert(edge, pair);
        }
        Ok(Triangulation {
            sites,
            triangles: self.triangles,
            edges,
            pairs,
            hull,
        })
    }
}

/// `(prev, current, next)` around hull vertex `i`.
fn corner(hull: &Polygon, i: usize) -> (Point, Point, Point) {
    let pts = hull.points();
    let n = pts.len();
    (pts[(i + n - 1) % n], pts[i], pts[(i + 1) % n])
}

/// The two apexes lie on opposite sides of the edge and vice versa, so the
/// other diagonal exists.
fn is_convex_quad(pair: &TrianglePair) -> bool {
    let Some(p2) = pair.point2() else {
        return false;
    };
    let p1 = pair.point1();
    let e = pair.edge();
    let old = Line::new(e.a(), e.b());
    let new = Line::new(p1, p2);
    old.side(p1) * old.side(p2) < 0.0 && new.side(e.a()) * new.side(e.b()) < 0.0
}
