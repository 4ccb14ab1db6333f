//! Chain construction
//!
//! Each circle is sized to touch the nearest obstacle, then its successor is
//! spawned where the ray's line leaves it. Construction stops when the line
//! misses a circle or the chain reaches its limit.
//!
//! The build is an explicit bounded loop: `ChainSteps` yields one circle per
//! step and never more than `limit` circles, so a ray that keeps re-hitting
//! the same spot cannot run away.

use std::iter::FusedIterator;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::error::ChainError;
use super::intersect::closest_intersection;
use super::sdf::distance_to_nearest_box;
use super::shapes::{Circle, Obstacle, RaySegment};

/// Why a chain stopped growing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// The ray's line missed the last circle (or the ray is degenerate)
    Exhausted,
    /// The chain reached its configured limit; the last intersection was discarded
    LimitReached,
}

/// A finished chain of circles in generation order
///
/// Never empty: the origin circle is always present. Deserialized chains are
/// checked against this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawChain")]
pub struct Chain {
    circles: Vec<Circle>,
    termination: Termination,
}

/// Unchecked wire form of `Chain`
#[derive(Deserialize)]
struct RawChain {
    circles: Vec<Circle>,
    termination: Termination,
}

impl TryFrom<RawChain> for Chain {
    type Error = ChainError;

    fn try_from(raw: RawChain) -> Result<Self, ChainError> {
        if raw.circles.is_empty() {
            return Err(ChainError::EmptyChain);
        }
        Ok(Self {
            circles: raw.circles,
            termination: raw.termination,
        })
    }
}

impl Chain {
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// The origin circle
    pub fn first(&self) -> Option<&Circle> {
        self.circles.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
        self.circles.iter()
    }
}

impl<'c> IntoIterator for &'c Chain {
    type Item = &'c Circle;
    type IntoIter = std::slice::Iter<'c, Circle>;

    fn into_iter(self) -> Self::IntoIter {
        self.circles.iter()
    }
}

/// Validated inputs for one chain build
///
/// Obstacles are borrowed as an immutable snapshot for the whole build.
#[derive(Debug, Clone, Copy)]
pub struct ChainBuilder<'a> {
    origin: Vec2,
    max_radius: f32,
    obstacles: &'a [Obstacle],
    ray: RaySegment,
    limit: usize,
}

impl<'a> ChainBuilder<'a> {
    /// Validate inputs. Fails on `limit == 0`, a negative max radius or any
    /// non-finite coordinate.
    pub fn new(
        origin: Vec2,
        max_radius: f32,
        obstacles: &'a [Obstacle],
        ray: RaySegment,
        limit: usize,
    ) -> Result<Self, ChainError> {
        if limit < 1 {
            return Err(ChainError::InvalidLimit(limit));
        }
        if !origin.is_finite() {
            return Err(ChainError::NonFinite { what: "origin" });
        }
        if !max_radius.is_finite() {
            return Err(ChainError::NonFinite { what: "max radius" });
        }
        if max_radius < 0.0 {
            return Err(ChainError::NegativeMaxRadius(max_radius));
        }
        if !ray.is_finite() {
            return Err(ChainError::NonFinite { what: "ray" });
        }
        if !obstacles.iter().all(Obstacle::is_finite) {
            return Err(ChainError::NonFinite { what: "obstacle" });
        }

        Ok(Self {
            origin,
            max_radius,
            obstacles,
            ray,
            limit,
        })
    }

    /// Step-by-step construction; dropping the iterator abandons the build
    pub fn steps(&self) -> ChainSteps<'a> {
        ChainSteps {
            builder: *self,
            next_center: Some(self.origin),
            produced: 0,
            termination: None,
        }
    }

    /// Run the build to completion
    pub fn build(&self) -> Chain {
        let mut steps = self.steps();
        let circles: Vec<Circle> = steps.by_ref().collect();
        // The origin step always runs and always records a termination
        let termination = steps.termination.unwrap_or(Termination::Exhausted);

        log::debug!(
            "Chain finished: {} circle(s), {:?}",
            circles.len(),
            termination
        );

        Chain {
            circles,
            termination,
        }
    }
}

/// Iterator over the circles of a chain as they are generated
#[derive(Debug, Clone)]
pub struct ChainSteps<'a> {
    builder: ChainBuilder<'a>,
    next_center: Option<Vec2>,
    produced: usize,
    termination: Option<Termination>,
}

impl ChainSteps<'_> {
    /// Set once the last circle has been yielded
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Circles yielded so far
    pub fn produced(&self) -> usize {
        self.produced
    }
}

impl Iterator for ChainSteps<'_> {
    type Item = Circle;

    fn next(&mut self) -> Option<Circle> {
        let center = self.next_center.take()?;
        let b = &self.builder;

        let radius = distance_to_nearest_box(center, b.max_radius, b.obstacles);
        self.produced += 1;

        match closest_intersection(center, radius, b.ray.start, b.ray.end) {
            None => self.termination = Some(Termination::Exhausted),
            Some(p) if self.produced < b.limit => self.next_center = Some(p),
            Some(_) => self.termination = Some(Termination::LimitReached),
        }

        log::trace!(
            "Circle {}: center={:?} radius={}",
            self.produced - 1,
            center,
            radius
        );

        Some(Circle::new(center, radius))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next_center.is_some() {
            (1, Some(self.builder.limit - self.produced))
        } else {
            (0, Some(0))
        }
    }
}

impl FusedIterator for ChainSteps<'_> {}

/// Build a chain starting at `origin` along `ray`
///
/// Returns at least the origin circle. Invalid input fails before any circle
/// is produced.
pub fn build_chain(
    origin: Vec2,
    max_radius: f32,
    obstacles: &[Obstacle],
    ray: RaySegment,
    limit: usize,
) -> Result<Chain, ChainError> {
    Ok(ChainBuilder::new(origin, max_radius, obstacles, ray, limit)?.build())
}

/// Build one independent chain per ray, each starting at its ray's start
///
/// All builds share the same obstacle snapshot. Fails on the first invalid ray.
pub fn build_chains(
    max_radius: f32,
    obstacles: &[Obstacle],
    rays: &[RaySegment],
    limit: usize,
) -> Result<Vec<Chain>, ChainError> {
    rays.iter()
        .map(|ray| build_chain(ray.start, max_radius, obstacles, *ray, limit))
        .collect()
}
