//! Planar Delaunay diagrams.
//!
//! Build a Delaunay triangulation of a finite point set by incremental
//! insertion into a bootstrap container triangle, Lawson edge flips, and
//! convex-hull extraction.
//!
//! ```
//! use diagram::prelude::*;
//!
//! let sites = [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0), (5.0, 3.0)];
//! let tri = DelaunayDiagram::new(sites)
//!     .split(Rectangle::new(-1.0, -1.0, 11.0, 9.0))
//!     .unwrap();
//! assert_eq!(tri.triangles().len(), 3);
//! assert_eq!(tri.hull().len(), 3);
//! ```
//!
//! Layout
//! - `geom`: value types and predicates (points, edges, triangles, circles,
//!   rectangles, polygons), plus a reproducible site sampler.
//! - `delaunay`: the single-use `DelaunayDiagram` and its `Triangulation`.

pub mod delaunay;
pub mod geom;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use delaunay::{DelaunayDiagram, DiagramError, ErrorKind, SplitCfg, TrianglePair, Triangulation};
pub use geom::{Circle, Edge, Planar, Point, Polygon, Rectangle, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::delaunay::{
        DelaunayDiagram, DiagramError, ErrorKind, SplitCfg, TrianglePair, Triangulation,
    };
    pub use crate::geom::rand::{draw_sites, ReplayToken, SiteCfg, SiteCount, SiteLayout};
    pub use crate::geom::{
        convex_hull, Circle, Edge, InCircle, Line, Planar, Point, Polygon, PolygonBuilder, Rectangle,
        Triangle,
    };
}
