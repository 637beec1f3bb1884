//! Immutable 2D points and the `Planar` capability.
//!
//! `Point` compares and hashes by coordinate bits (with `-0.0` folded onto
//! `0.0`), so it can key hash maps and sets directly. The total order
//! (x first, then y, via `f64::total_cmp`) is what `Edge` and `Triangle` use to
//! store their endpoints canonically.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::Vector2;

/// Anything that exposes planar coordinates.
pub trait Planar {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    #[inline]
    fn to_point(&self) -> Point {
        Point::new(self.x(), self.y())
    }
}

/// Immutable 2D coordinate.
#[derive(Clone, Copy, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Euclidean distance.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.to_vector() - other.to_vector()).norm()
    }

    #[inline]
    fn key(&self) -> (u64, u64) {
        (fold_zero(self.x).to_bits(), fold_zero(self.y).to_bits())
    }
}

#[inline]
fn fold_zero(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Twice the signed area of `(a, b, c)`; positive when counterclockwise.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b.to_vector() - a.to_vector();
    let ac = c.to_vector() - a.to_vector();
    ab.x * ac.y - ab.y * ac.x
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        fold_zero(self.x)
            .total_cmp(&fold_zero(other.x))
            .then_with(|| fold_zero(self.y).total_cmp(&fold_zero(other.y)))
    }
}

impl PartialOrd for Point {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Planar for Point {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn to_point(&self) -> Point {
        *self
    }
}

impl Planar for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl Planar for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }
    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl Planar for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }
    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl<P: Planar + ?Sized> Planar for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }
    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vector()
    }
}
