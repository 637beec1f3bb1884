use super::point::Point;

/// Circle given by center and radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Strict interior test: points exactly on the circle are not contained.
    #[inline]
    pub fn contains_point(&self, p: Point) -> bool {
        p.distance(&self.center) < self.radius
    }

    /// Interior test with relative slack: `dist < r * (1 - eps)`.
    ///
    /// `eps > 0` shrinks the disc, so near-cocircular points count as outside.
    #[inline]
    pub fn contains_point_eps(&self, p: Point, eps: f64) -> bool {
        p.distance(&self.center) < self.radius * (1.0 - eps)
    }
}
