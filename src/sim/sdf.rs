//! SDF-based distance queries
//!
//! Distance fields used to size each circle of the chain so it just touches
//! the nearest obstacle.

use glam::Vec2;

use super::shapes::Obstacle;

/// Euclidean norm of a vector. NaN/Inf propagate.
#[inline]
pub fn length(v: Vec2) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Exterior distance to an axis-aligned box
///
/// Zero anywhere inside the box or on its boundary; interior depth is not reported.
#[inline]
pub fn sd_box(p: Vec2, center: Vec2, half_extent: Vec2) -> f32 {
    let offset = (p - center).abs() - half_extent.abs();
    length(offset.max(Vec2::ZERO))
}

/// Distance from a point to an obstacle's surface (0 when inside)
#[inline]
pub fn distance_to_box(point: Vec2, obstacle: &Obstacle) -> f32 {
    sd_box(point, obstacle.center, obstacle.half_extent)
}

/// Distance to the nearest obstacle, capped at `max_radius`
///
/// An empty obstacle set yields `max_radius` unchanged.
pub fn distance_to_nearest_box(point: Vec2, max_radius: f32, obstacles: &[Obstacle]) -> f32 {
    obstacles
        .iter()
        .map(|obstacle| distance_to_box(point, obstacle))
        .fold(max_radius, f32::min)
}
