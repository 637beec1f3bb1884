//! Axis-aligned border rectangle and the bootstrap container triangle.

use std::fmt;

use super::point::Point;
use super::triangle::Triangle;

/// Axis-aligned rectangle `(left, top, right, bottom)`.
///
/// `top` may lie above or below `bottom`; every query works on the
/// normalized extent, so screen-style (y down) and math-style (y up)
/// rectangles behave the same.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rectangle {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Smallest rectangle containing all points, grown by `margin` on every side.
    ///
    /// `None` for an empty input or non-finite coordinates.
    pub fn bounding<I>(points: I, margin: f64) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut it = points.into_iter();
        let first = it.next()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x(), first.y(), first.x(), first.y());
        for p in it {
            x0 = x0.min(p.x());
            y0 = y0.min(p.y());
            x1 = x1.max(p.x());
            y1 = y1.max(p.y());
        }
        let r = Self::new(x0 - margin, y0 - margin, x1 + margin, y1 + margin);
        (r.width().is_finite() && r.height().is_finite()).then_some(r)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.right - self.left).abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.top - self.bottom).abs()
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Strictly inside; points on the border are outside.
    pub fn contains_strict(&self, p: Point) -> bool {
        let (x0, x1) = (self.left.min(self.right), self.left.max(self.right));
        let (y0, y1) = (self.top.min(self.bottom), self.top.max(self.bottom));
        x0 < p.x() && p.x() < x1 && y0 < p.y() && p.y() < y1
    }

    /// Oversized triangle strictly enclosing the rectangle.
    ///
    /// Equilateral, centered on the rectangle, with inradius equal to the
    /// full diagonal `r`; the rectangle itself fits in a disc of radius `r / 2`.
    pub fn container(&self) -> Container {
        let center = self.center();
        let (x, y) = (center.x(), center.y());
        let r = self.diagonal();
        let s = 3.0_f64.sqrt() * r;
        Container {
            corners: [
                Point::new(x - s, y + r),
                Point::new(x + s, y + r),
                Point::new(x, y - 2.0 * r),
            ],
        }
    }
}

/// Label of a container corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    A,
    B,
    C,
}

impl Corner {
    pub const ALL: [Corner; 3] = [Corner::A, Corner::B, Corner::C];

    #[inline]
    pub fn symbol(self) -> &'static str {
        match self {
            Corner::A => "A",
            Corner::B => "B",
            Corner::C => "C",
        }
    }
}

/// Bootstrap triangle with labeled corners; exists only during a split.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    corners: [Point; 3],
}

impl Container {
    #[inline]
    pub fn point(&self, corner: Corner) -> Point {
        self.corners[corner as usize]
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        self.corners
    }

    #[inline]
    pub fn triangle(&self) -> Triangle {
        let [a, b, c] = self.corners;
        Triangle::new(a, b, c)
    }

    /// Which corner `p` is, if any.
    #[inline]
    pub fn corner_of(&self, p: Point) -> Option<Corner> {
        Corner::ALL.into_iter().find(|&k| self.point(k) == p)
    }

    #[inline]
    pub fn is_corner(&self, p: Point) -> bool {
        self.corner_of(p).is_some()
    }

    /// Container corners among the triangle's vertices.
    pub fn corners_of(&self, t: &Triangle) -> Vec<Corner> {
        Corner::ALL
            .into_iter()
            .filter(|&k| t.is_vertex(self.point(k)))
            .collect()
    }

    /// Human-readable label for a corner, e.g. `Container{A,pos:(-3.4641,2.0000)}`.
    pub fn label(&self, corner: Corner) -> ContainerLabel {
        ContainerLabel {
            corner,
            pos: self.point(corner),
        }
    }
}

/// Display adapter for a labeled container corner.
pub struct ContainerLabel {
    corner: Corner,
    pos: Point,
}

impl fmt::Display for ContainerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Container{{{},pos:({:.4},{:.4})}}",
            self.corner.symbol(),
            self.pos.x(),
            self.pos.y()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_strictly_encloses_rectangle() {
        for rect in [
            Rectangle::new(-10.0, -10.0, 10.0, 10.0),
            Rectangle::new(0.0, 5.0, 100.0, -5.0),
            Rectangle::new(3.0, 3.0, 3.5, 40.0),
        ] {
            let tri = rect.container().triangle();
            let corners = [
                Point::new(rect.left, rect.top),
                Point::new(rect.right, rect.top),
                Point::new(rect.left, rect.bottom),
                Point::new(rect.right, rect.bottom),
            ];
            for c in corners {
                // Strictly inside: well away from the sides, not just within tolerance.
                assert!(tri.contains_point_eps(c, -1e-3), "{c:?} escapes {tri:?}");
            }
            for k in rect.container().points() {
                assert!(!rect.contains_strict(k));
            }
        }
    }

    #[test]
    fn border_is_not_strictly_inside() {
        let r = Rectangle::new(-10.0, -10.0, 10.0, 10.0);
        assert!(r.contains_strict(Point::new(0.0, 9.99)));
        assert!(!r.contains_strict(Point::new(10.0, 0.0)));
        assert!(!r.contains_strict(Point::new(0.0, -10.0)));
        assert!(!r.contains_strict(Point::new(f64::NAN, 0.0)));
        assert!((r.width() - 20.0).abs() < 1e-12);
        assert!((r.height() - 20.0).abs() < 1e-12);
        assert_eq!(r.center(), Point::new(0.0, 0.0));
    }

    #[test]
    fn corner_labels() {
        let c = Rectangle::new(-1.0, -1.0, 1.0, 1.0).container();
        let a = c.point(Corner::A);
        assert_eq!(c.corner_of(a), Some(Corner::A));
        assert_eq!(c.corner_of(Point::new(0.0, 0.0)), None);
        assert!(c.label(Corner::B).to_string().starts_with("Container{B,pos:("));
    }

    #[test]
    fn bounding_grows_by_margin() {
        let pts = [Point::new(1.0, 2.0), Point::new(-1.0, 5.0)];
        let r = Rectangle::bounding(pts, 1.0).unwrap();
        assert_eq!((r.left, r.top, r.right, r.bottom), (-2.0, 1.0, 2.0, 6.0));
        assert!(pts.iter().all(|p| r.contains_strict(*p)));
        assert!(Rectangle::bounding(std::iter::empty(), 1.0).is_none());
    }
}
