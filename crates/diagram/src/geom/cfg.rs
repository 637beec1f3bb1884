//! Tolerance defaults for 2D predicates.
//!
//! Policy
//! - All tolerances are relative to the local scale of the configuration being
//!   tested (squared edge length, determinant permanent, product of edge
//!   lengths), so the same constants work for unit squares and for map
//!   coordinates.
//! - `delaunay::SplitCfg` starts from these values; callers override per split.

/// Collinearity slack for `on_edge` and point-in-triangle: `|cross| <= eps * |ab|²`.
pub const ON_EDGE_EPS: f64 = 1e-10;
/// Incircle slack relative to the permanent of the lifted determinant.
pub const CIRCLE_EPS: f64 = 1e-12;
/// Relative slack for hull corner turns: `cross < -eps * |u| |v|` counts as concave.
pub const TURN_EPS: f64 = 1e-10;
/// Relative determinant floor for the circumcenter solve.
pub(crate) const DET_EPS: f64 = 1e-12;
