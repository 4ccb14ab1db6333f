//! Deterministic chain construction module
//!
//! All geometry lives here. This module must be pure and deterministic:
//! - No RNG
//! - Stable iteration order (obstacles in caller order)
//! - No rendering, scene or platform dependencies

pub mod chain;
pub mod error;
pub mod intersect;
pub mod sdf;
pub mod shapes;

pub use chain::{Chain, ChainBuilder, ChainSteps, Termination, build_chain, build_chains};
pub use error::ChainError;
pub use intersect::{LineCircleHit, closest_intersection, line_circle_intersections};
pub use sdf::{distance_to_box, distance_to_nearest_box, length, sd_box};
pub use shapes::{Circle, Obstacle, RaySegment};
