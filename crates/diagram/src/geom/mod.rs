//! Planar primitives for the triangulation engine.
//!
//! Purpose
//! - Immutable value types (`Point`, `Edge`, `Triangle`, `Circle`, `Rectangle`)
//!   with structural equality, so they can key the adjacency maps directly.
//! - Keep every predicate numerically explicit: each tolerance-sensitive test
//!   has an `_eps` form and a default form using `cfg`.
//!
//! Code cross-refs: `delaunay::DelaunayDiagram` (consumer), `cfg` (tolerances).

pub mod cfg;
mod circle;
mod edge;
mod hull;
mod point;
mod polygon;
mod predicates;
pub mod rand;
mod rect;
mod triangle;

pub use circle::Circle;
pub use edge::{Edge, Line};
pub use hull::{all_collinear, all_collinear_eps, convex_hull};
pub use point::{cross, Planar, Point};
pub use polygon::{Polygon, PolygonBuilder};
pub use predicates::{incircle, incircle_eps, InCircle};
pub use rect::{Container, ContainerLabel, Corner, Rectangle};
pub use triangle::Triangle;
