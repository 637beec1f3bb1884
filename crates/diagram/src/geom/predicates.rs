//! Orientation-signed incircle test with a scale-aware tolerance.
//!
//! The lifted determinant
//!
//! ```text
//! | ax-dx  ay-dy  (ax-dx)²+(ay-dy)² |
//! | bx-dx  by-dy  (bx-dx)²+(by-dy)² |
//! | cx-dx  cy-dy  (cx-dx)²+(cy-dy)² |
//! ```
//!
//! is positive when `d` lies inside the circle through a counterclockwise
//! `(a, b, c)`. It depends on all four points symmetrically (up to sign), so
//! the verdict for an edge does not depend on which of its two triangles is
//! asked. The tolerance is `eps` times the permanent of the same matrix,
//! which bounds the rounding error of the expansion.

use nalgebra::Matrix3;

use super::point::{cross, Point};

/// Where a point lies relative to a circumcircle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InCircle {
    Outside,
    /// Within tolerance of the circle (cocircular).
    Boundary,
    Inside,
}

/// Lifted determinant (positive = `d` inside, for counterclockwise `abc`) and
/// its permanent.
fn lifted(a: Point, b: Point, c: Point, d: Point) -> (f64, f64) {
    let o = d.to_vector();
    let [u, v, w] = [a, b, c].map(|p| {
        let r = p.to_vector() - o;
        (r.x, r.y, r.norm_squared())
    });
    let m = Matrix3::new(u.0, u.1, u.2, v.0, v.1, v.2, w.0, w.1, w.2);
    let minor = |(x1, y1): (f64, f64), (x2, y2): (f64, f64)| (x1 * y2).abs() + (x2 * y1).abs();
    let permanent = u.2 * minor((v.0, v.1), (w.0, w.1))
        + v.2 * minor((w.0, w.1), (u.0, u.1))
        + w.2 * minor((u.0, u.1), (v.0, v.1));
    (m.determinant(), permanent)
}

/// Raw incircle value, positive when `d` is inside the circle through
/// `a`, `b`, `c` in either orientation. Zero for collinear `abc`.
pub fn incircle(a: Point, b: Point, c: Point, d: Point) -> f64 {
    let (det, _) = lifted(a, b, c, d);
    det * cross(a, b, c).signum()
}

/// Classify `d` against the circle through `a`, `b`, `c`.
///
/// Values within `eps * permanent` of zero are `Boundary`, as are collinear
/// `abc`.
pub fn incircle_eps(a: Point, b: Point, c: Point, d: Point, eps: f64) -> InCircle {
    let orient = cross(a, b, c);
    if orient == 0.0 || !orient.is_finite() {
        return InCircle::Boundary;
    }
    let (det, permanent) = lifted(a, b, c, d);
    let signed = det * orient.signum();
    let tol = eps * permanent;
    if signed > tol {
        InCircle::Inside
    } else if signed < -tol {
        InCircle::Outside
    } else {
        InCircle::Boundary
    }
}
