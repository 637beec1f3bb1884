//! Incremental Delaunay triangulation (Lawson flips inside a container triangle).
//!
//! Purpose
//! - Triangulate a finite planar point set restricted to its convex hull and
//!   publish triangles, edges and the edge → `TrianglePair` adjacency map.
//!
//! Algorithm
//! - Bootstrap an oversized container triangle from the border rectangle.
//! - Insert sites one at a time in caller order: locate by linear scan, split
//!   the containing triangle (or the two triangles sharing the edge the site
//!   lies on), then legalize by Lawson flipping.
//! - Strip container-touching triangles; the edges they leave behind form
//!   the hull. Normalize it to counterclockwise and fill concave corners left
//!   over from the finite container.
//!
//! Lifecycle
//! - `DelaunayDiagram` (unsplit) → `split` consumes it and drives a private
//!   `SplitContext` → `Triangulation` (final, immutable). A diagram cannot be
//!   split twice.
//!
//! Code cross-refs: `geom::{Rectangle::container, PolygonBuilder, Triangle}`.

mod error;
mod split;
mod types;

use std::collections::HashSet;
use std::time::Instant;

use crate::geom::{all_collinear_eps, Planar, Point, Rectangle};

pub use error::{DiagramError, ErrorKind};
pub use types::{SplitCfg, TrianglePair, Triangulation};

use split::SplitContext;

/// Margin used by [`DelaunayDiagram::split_auto`], as a fraction of the larger
/// bounding-box side.
const AUTO_MARGIN_FRAC: f64 = 0.05;

/// Unsplit set of sites.
///
/// Duplicate coordinates collapse onto their first occurrence; otherwise the
/// caller's order is kept and is the insertion order.
#[derive(Clone, Debug, Default)]
pub struct DelaunayDiagram {
    sites: Vec<Point>,
    seen: HashSet<Point>,
}

impl DelaunayDiagram {
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Planar,
    {
        let mut diagram = Self::default();
        diagram.extend(points);
        diagram
    }

    /// Add a site; `false` if an equal site is already present.
    pub fn push<P: Planar>(&mut self, point: P) -> bool {
        let p = point.to_point();
        if self.seen.insert(p) {
            self.sites.push(p);
            true
        } else {
            false
        }
    }

    /// Deduplicated sites in insertion order.
    #[inline]
    pub fn sites(&self) -> &[Point] {
        &self.sites
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Triangulate with default tolerances. Every site must lie strictly inside `border`.
    ///
    /// The diagram is consumed, so it cannot be split twice:
    ///
    /// ```compile_fail
    /// use diagram::prelude::*;
    /// let d = DelaunayDiagram::new([(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
    /// let border = Rectangle::new(-1.0, -1.0, 2.0, 2.0);
    /// let _first = d.split(border);
    /// let _second = d.split(border);
    /// ```
    pub fn split(self, border: Rectangle) -> Result<Triangulation, DiagramError> {
        self.split_with(border, SplitCfg::default())
    }

    /// Triangulate inside the sites' bounding box grown by a small margin.
    pub fn split_auto(self) -> Result<Triangulation, DiagramError> {
        let degenerate = |reason| DiagramError::DegenerateInput {
            distinct: self.sites.len(),
            reason,
        };
        let tight = Rectangle::bounding(self.sites.iter().copied(), 0.0)
            .ok_or_else(|| degenerate("no finite bounding box"))?;
        let margin = AUTO_MARGIN_FRAC * tight.width().max(tight.height()).max(f64::MIN_POSITIVE);
        let border = Rectangle::bounding(self.sites.iter().copied(), margin)
            .ok_or_else(|| degenerate("no finite bounding box"))?;
        self.split(border)
    }

    /// Triangulate with explicit tolerances.
    pub fn split_with(self, border: Rectangle, cfg: SplitCfg) -> Result<Triangulation, DiagramError> {
        let started = Instant::now();
        let sites = self.sites;
        if let Some(&point) = sites.iter().find(|p| !border.contains_strict(**p)) {
            return Err(DiagramError::OutsideBorder { point, border });
        }
        if sites.len() < 3 {
            return Err(DiagramError::DegenerateInput {
                distinct: sites.len(),
                reason: "fewer than three distinct points",
            });
        }
        if all_collinear_eps(&sites, cfg.eps_on_edge) {
            return Err(DiagramError::DegenerateInput {
                distinct: sites.len(),
                reason: "all points are (nearly) collinear",
            });
        }
        tracing::debug!(sites = sites.len(), ?border, "calculating delaunay diagram");

        let mut ctx = SplitContext::new(border.container(), cfg);
        let total = sites.len();
        for (k, &p) in sites.iter().enumerate() {
            ctx.insert(p)?;
            tracing::trace!(
                done = k + 1,
                total,
                triangles = ctx.triangle_count(),
                "site inserted"
            );
        }

        let mut hull = ctx.strip_container()?;
        let filled = ctx.fill_concave_corners(&mut hull)?;
        let flips = ctx.flips;
        let out = ctx.finalize(sites, hull)?;

        tracing::debug!(
            triangles = out.triangles().len(),
            edges = out.edges().len(),
            hull = out.hull().len(),
            flips,
            filled,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "delaunay diagram done"
        );
        Ok(out)
    }
}

impl<P: Planar> Extend<P> for DelaunayDiagram {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for p in iter {
            self.push(p);
        }
    }
}

impl<P: Planar> FromIterator<P> for DelaunayDiagram {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests;
