//! Circle Chain entry point
//!
//! Builds a seeded demo scene, sweeps the ray for a number of frames and
//! prints each frame's chain as JSON.
//!
//! Usage: `circle-chain [settings.json] [frames]`

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use circle_chain::scene::{cast_ray, random_origin};
use circle_chain::{Chain, ChainSettings, RaySegment, Scene, normalize_angle, polar_to_cartesian};

/// One frame of the sweep
#[derive(Debug, Serialize)]
struct Frame {
    frame: u32,
    angle: f32,
    ray: RaySegment,
    chain: Chain,
    /// Sampled outline per circle, for an external line renderer
    outlines: Vec<Vec<Vec2>>,
}

fn main() {
    env_logger::init();
    log::info!("Circle Chain starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => ChainSettings::load(path),
        None => ChainSettings::default(),
    };
    let frames: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(1);

    let scene = Scene::demo();
    let obstacles = scene.interactable_obstacles(&settings);
    log::info!("Scene has {} interactable obstacle(s)", obstacles.len());

    let mut rng = Pcg32::seed_from_u64(settings.seed);
    let origin = random_origin(&mut rng, settings.spawn_range);
    log::info!("Spawned at {:?} with seed {}", origin, settings.seed);

    let mut angle = 0.0_f32;
    let mut output = Vec::with_capacity(frames as usize);

    for frame in 0..frames {
        let direction = polar_to_cartesian(1.0, angle);
        let ray = cast_ray(origin, direction, settings.max_ray_length, &obstacles);
        log::debug!("Frame {}: ray length {}", frame, ray.length());

        let chain = match settings
            .builder_for(origin, ray, &obstacles)
            .map(|builder| builder.build())
        {
            Ok(chain) => chain,
            Err(e) => {
                log::error!("Frame {}: chain build failed: {}", frame, e);
                std::process::exit(1);
            }
        };
        log::info!(
            "Frame {}: {} circle(s), {:?}",
            frame,
            chain.len(),
            chain.termination()
        );

        let outlines = chain
            .iter()
            .map(|circle| circle.sample_outline(settings.circle_density))
            .collect();

        output.push(Frame {
            frame,
            angle,
            ray,
            chain,
            outlines,
        });
        angle = normalize_angle(angle + settings.rotation_speed);
    }

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize chains: {}", e);
            std::process::exit(1);
        }
    }
}
