//! Line-circle intersection
//!
//! The chain advances by placing each successor at the point where the ray's
//! line leaves the current circle. Roots are taken on the infinite line through
//! the segment, so hits past `end` are still reported.

use glam::Vec2;

use super::sdf::length;
use crate::consts::DEGENERATE_SEGMENT_EPSILON;

/// Raw result of intersecting a line with a circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineCircleHit {
    /// Degenerate segment or the line misses the circle
    Miss,
    /// Line is tangent to the circle
    Tangent(Vec2),
    /// Line crosses the circle; `.0` is the larger root, `.1` the smaller
    Secant(Vec2, Vec2),
}

/// Solve `A·t² + B·t + C = 0` for the line through `p1 → p2` against a circle
pub fn line_circle_intersections(center: Vec2, radius: f32, p1: Vec2, p2: Vec2) -> LineCircleHit {
    let d = p2 - p1;
    let f = p1 - center;

    let a = d.x * d.x + d.y * d.y;
    let b = 2.0 * (d.x * f.x + d.y * f.y);
    let c = f.x * f.x + f.y * f.y - radius * radius;

    let det = b * b - 4.0 * a * c;
    // Overflowed terms resolve to a miss, same as a negative discriminant
    if !a.is_finite() || !det.is_finite() || a <= DEGENERATE_SEGMENT_EPSILON || det < 0.0 {
        return LineCircleHit::Miss;
    }

    if det == 0.0 {
        let t = -b / (2.0 * a);
        let p = p1 + d * t;
        if !p.is_finite() {
            return LineCircleHit::Miss;
        }
        return LineCircleHit::Tangent(p);
    }

    let sqrt_det = det.sqrt();
    let t1 = (-b + sqrt_det) / (2.0 * a);
    let t2 = (-b - sqrt_det) / (2.0 * a);
    let (first, second) = (p1 + d * t1, p1 + d * t2);
    if !first.is_finite() || !second.is_finite() {
        return LineCircleHit::Miss;
    }
    LineCircleHit::Secant(first, second)
}

/// Intersection of the segment's line with a circle, biased forward along the ray
///
/// With two roots the one farther from `segment_start` wins; on an exact tie
/// the first computed root (larger t) is kept. Returns `None` for a miss or a
/// degenerate segment.
pub fn closest_intersection(
    circle_center: Vec2,
    radius: f32,
    segment_start: Vec2,
    segment_end: Vec2,
) -> Option<Vec2> {
    match line_circle_intersections(circle_center, radius, segment_start, segment_end) {
        LineCircleHit::Miss => None,
        LineCircleHit::Tangent(p) => Some(p),
        LineCircleHit::Secant(first, second) => {
            let dist_first = length(first - segment_start);
            let dist_second = length(second - segment_start);
            if dist_first < dist_second {
                Some(second)
            } else {
                Some(first)
            }
        }
    }
}
