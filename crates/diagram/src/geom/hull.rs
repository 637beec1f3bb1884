use super::cfg::ON_EDGE_EPS;
use super::point::{cross, Point};
use super::polygon::Polygon;

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Points strictly between two hull corners are dropped. Exact duplicates are
/// collapsed. `None` if fewer than three non-collinear points remain.
pub fn convex_hull(points: &[Point]) -> Option<Polygon> {
    if points.len() < 3 {
        return None;
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0
        {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0
        {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    (hull.len() >= 3).then(|| Polygon::new(hull))
}

/// All points lie within `ON_EDGE_EPS` of one line (or there are fewer than
/// three distinct points). See [`all_collinear_eps`].
pub fn all_collinear(points: &[Point]) -> bool {
    all_collinear_eps(points, ON_EDGE_EPS)
}

/// All points lie within `eps * |pq|` of the line through `p`, the first
/// point, and `q`, the point farthest from it.
pub fn all_collinear_eps(points: &[Point], eps: f64) -> bool {
    let Some(&p) = points.first() else {
        return true;
    };
    let Some(q) = points
        .iter()
        .copied()
        .max_by(|a, b| p.distance(a).total_cmp(&p.distance(b)))
    else {
        return true;
    };
    let span = p.distance(&q);
    if span == 0.0 {
        return true;
    }
    points.iter().all(|&r| cross(p, q, r).abs() <= eps * span * span)
}
