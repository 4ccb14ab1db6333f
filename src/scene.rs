//! Caller-side scene helpers
//!
//! The chain builder never looks at a scene. These helpers turn tagged scene
//! objects into obstacles, cast the ray that the chain follows and pick a
//! seeded spawn point for it.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::ChainSettings;
use crate::sim::{Obstacle, RaySegment};

/// Directions shorter than this are treated as zero
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// A tagged axis-aligned object in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub tag: String,
    pub position: Vec2,
    /// Full size; negative components mean the object is mirrored
    pub scale: Vec2,
}

impl SceneObject {
    pub fn new(tag: impl Into<String>, position: Vec2, scale: Vec2) -> Self {
        Self {
            tag: tag.into(),
            position,
            scale,
        }
    }

    pub fn to_obstacle(&self) -> Obstacle {
        Obstacle::from_size(self.position, self.scale)
    }
}

/// A flat list of scene objects
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Small fixed layout used by the demo binary
    pub fn demo() -> Self {
        Self::new(vec![
            SceneObject::new("Interactable", Vec2::new(4.0, 1.0), Vec2::new(1.0, 2.0)),
            SceneObject::new("Interactable", Vec2::new(-3.5, 3.0), Vec2::new(2.0, 1.0)),
            SceneObject::new("Interactable", Vec2::new(1.0, -4.0), Vec2::new(-3.0, 1.0)),
            SceneObject::new("Interactable", Vec2::new(-5.0, -2.5), Vec2::new(1.5, 1.5)),
            SceneObject::new("Background", Vec2::ZERO, Vec2::new(20.0, 20.0)),
        ])
    }

    /// Obstacles for every object whose tag is registered as interactable
    pub fn interactable_obstacles(&self, settings: &ChainSettings) -> Vec<Obstacle> {
        self.objects
            .iter()
            .filter(|o| settings.is_interactable(&o.tag))
            .map(SceneObject::to_obstacle)
            .collect()
    }
}

/// Entry distance of a ray into a box, ignoring boxes that contain the origin
fn ray_box_entry(origin: Vec2, dir: Vec2, obstacle: &Obstacle) -> Option<f32> {
    let min = obstacle.min();
    let max = obstacle.max();
    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..2 {
        if dir[axis].abs() < MIN_DIRECTION_LENGTH {
            // Parallel to this slab
            if origin[axis] < min[axis] || origin[axis] > max[axis] {
                return None;
            }
            continue;
        }
        let t1 = (min[axis] - origin[axis]) / dir[axis];
        let t2 = (max[axis] - origin[axis]) / dir[axis];
        t_near = t_near.max(t1.min(t2));
        t_far = t_far.min(t1.max(t2));
    }

    if t_near > t_far || t_near <= 0.0 {
        return None;
    }
    Some(t_near)
}

/// Cast a ray against obstacles
///
/// The segment ends at the nearest hit, or `max_length` along `direction` when
/// nothing is hit. Obstacles containing the origin are ignored. A zero
/// direction yields a degenerate segment at `origin`.
pub fn cast_ray(origin: Vec2, direction: Vec2, max_length: f32, obstacles: &[Obstacle]) -> RaySegment {
    let dir = direction.normalize_or_zero();
    if dir.length_squared() < MIN_DIRECTION_LENGTH {
        return RaySegment::new(origin, origin);
    }

    let hit = obstacles
        .iter()
        .filter(|o| !o.contains_point(origin))
        .filter_map(|o| ray_box_entry(origin, dir, o))
        .filter(|t| *t <= max_length)
        .fold(None, |best: Option<f32>, t| Some(best.map_or(t, |b| b.min(t))));

    match hit {
        Some(distance) => {
            log::trace!("Ray hit at distance {}", distance);
            RaySegment::new(origin, origin + dir * distance)
        }
        None => RaySegment::new(origin, origin + dir * max_length),
    }
}

/// Integer-valued spawn point with both coordinates in `[-range, range)`
///
/// A non-positive range spawns at the world origin.
pub fn random_origin<R: Rng>(rng: &mut R, range: i32) -> Vec2 {
    if range <= 0 {
        return Vec2::ZERO;
    }
    let x = rng.random_range(-range..range);
    let y = rng.random_range(-range..range);
    Vec2::new(x as f32, y as f32)
}
