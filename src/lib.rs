//! Circle Chain - obstacle-touching circles spawned along a 2D ray
//!
//! Core modules:
//! - `sim`: Deterministic geometry kernel and chain construction
//! - `scene`: Caller-side helpers (tag filtering, ray casting, spawn placement)
//! - `settings`: JSON-backed configuration

pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::{Scene, SceneObject};
pub use settings::{ChainSettings, SettingsError};
pub use sim::{
    Chain, ChainBuilder, ChainError, Circle, Obstacle, RaySegment, Termination, build_chain,
};

use glam::Vec2;

/// Chain configuration constants
pub mod consts {
    /// Segments shorter than this (squared length) have no intersection
    pub const DEGENERATE_SEGMENT_EPSILON: f32 = 1e-7;

    /// Default upper bound for a circle's radius
    pub const DEFAULT_MAX_RADIUS: f32 = 2.0;
    /// Default maximum chain length
    pub const DEFAULT_CIRCLE_AMOUNT: usize = 10;
    /// Default ray length when the ray cast hits nothing
    pub const DEFAULT_MAX_RAY_LENGTH: f32 = 5.0;
    /// Default outline sampling step (fraction of a full turn)
    pub const DEFAULT_CIRCLE_DENSITY: f32 = 0.01;
    /// Default ray rotation per frame (radians)
    pub const DEFAULT_ROTATION_SPEED: f32 = 0.05;
    /// Default half-range of the random spawn grid
    pub const DEFAULT_SPAWN_RANGE: i32 = 3;

    /// Finest accepted outline sampling step (bounds outline point count)
    pub const MIN_CIRCLE_DENSITY: f32 = 1e-4;

    /// Tag registered as interactable when none are configured
    pub const DEFAULT_INTERACTABLE_TAG: &str = "Interactable";
}

/// Normalized angle to [-π, π)
///
/// Non-finite input stays non-finite (NaN).
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid may round up to exactly TAU
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
