//! Value types consumed and produced by the chain builder
//!
//! - `Obstacle`: axis-aligned box (center + half extent) that circles shrink to touch
//! - `Circle`: a generated chain link (center + radius)
//! - `RaySegment`: the finite directed segment the chain advances along

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::polar_to_cartesian;

/// An axis-aligned box obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Box center
    pub center: Vec2,
    /// Distance from center to each edge (always non-negative when built via `new`)
    pub half_extent: Vec2,
}

impl Obstacle {
    /// Create an obstacle. Negative extents (mirrored boxes) are folded to their absolute value.
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent: half_extent.abs(),
        }
    }

    /// Create an obstacle from its full size, as scene objects report it
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size.abs() / 2.0)
    }

    /// Minimum corner
    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extent.abs()
    }

    /// Maximum corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extent.abs()
    }

    /// Check if a point is inside the box or on its boundary
    pub fn contains_point(&self, point: Vec2) -> bool {
        let min = self.min();
        let max = self.max();
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.center.is_finite() && self.half_extent.is_finite()
    }
}

/// A generated circle of the chain
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    /// Distance to the nearest obstacle, capped at the build's max radius
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sample points along the circle for a line renderer
    ///
    /// `density` is the angular step as a fraction of a full turn. Produces
    /// `1 / density + 1` points, the first one step past angle zero, so the
    /// outline closes on itself.
    pub fn sample_outline(&self, density: f32) -> Vec<Vec2> {
        if !density.is_finite() || density <= 0.0 {
            return Vec::new();
        }

        let count = (1.0 / density + 1.0) as usize;
        let step = TAU * density;

        (1..=count)
            .map(|i| self.center + polar_to_cartesian(self.radius, step * i as f32))
            .collect()
    }
}

/// A finite directed segment from `start` to `end`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaySegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl RaySegment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Unnormalized direction (`end - start`)
    #[inline]
    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }
}
