//! Chain settings
//!
//! Persisted as JSON. Missing fields fall back to their defaults.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::{ChainBuilder, ChainError, Obstacle, RaySegment};

/// Failure to read or write a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Chain and demo-scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainSettings {
    // === Chain ===
    /// Upper bound for every circle's radius
    pub max_radius: f32,
    /// Maximum number of circles in a chain
    pub circle_amount: usize,

    // === Ray ===
    /// Ray length when the cast hits nothing
    pub max_ray_length: f32,
    /// Ray rotation per frame (radians)
    pub rotation_speed: f32,

    // === Outline ===
    /// Angular sampling step for circle outlines (fraction of a turn)
    pub circle_density: f32,

    // === Scene ===
    /// Tags whose objects count as obstacles
    pub interactable_tags: Vec<String>,
    /// Origin is spawned on the integer grid [-range, range)
    pub spawn_range: i32,
    /// Seed for spawn placement
    pub seed: u64,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            max_radius: DEFAULT_MAX_RADIUS,
            circle_amount: DEFAULT_CIRCLE_AMOUNT,

            max_ray_length: DEFAULT_MAX_RAY_LENGTH,
            rotation_speed: DEFAULT_ROTATION_SPEED,

            circle_density: DEFAULT_CIRCLE_DENSITY,

            interactable_tags: vec![DEFAULT_INTERACTABLE_TAG.to_string()],
            spawn_range: DEFAULT_SPAWN_RANGE,
            seed: 0,
        }
    }
}

impl ChainSettings {
    /// Whether objects carrying `tag` are obstacles
    pub fn is_interactable(&self, tag: &str) -> bool {
        self.interactable_tags.iter().any(|t| t == tag)
    }

    /// Validated builder using this configuration's radius cap and limit
    pub fn builder_for<'a>(
        &self,
        origin: Vec2,
        ray: RaySegment,
        obstacles: &'a [Obstacle],
    ) -> Result<ChainBuilder<'a>, ChainError> {
        ChainBuilder::new(origin, self.max_radius, obstacles, ray, self.circle_amount)
    }

    /// Check every field is finite and within its usable range
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |field: &'static str, reason: &'static str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        };

        if !self.max_radius.is_finite() || self.max_radius < 0.0 {
            return invalid("max_radius", "must be finite and non-negative");
        }
        if self.circle_amount < 1 {
            return invalid("circle_amount", "must be at least 1");
        }
        if !self.max_ray_length.is_finite() || self.max_ray_length < 0.0 {
            return invalid("max_ray_length", "must be finite and non-negative");
        }
        if !self.rotation_speed.is_finite() {
            return invalid("rotation_speed", "must be finite");
        }
        if !(MIN_CIRCLE_DENSITY..=1.0).contains(&self.circle_density) {
            return invalid("circle_density", "must be between 1e-4 and 1");
        }
        if self.spawn_range < 0 {
            return invalid("spawn_range", "must not be negative");
        }
        Ok(())
    }

    /// Load and validate settings from a JSON file
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ChainSettings::default();
        assert_eq!(settings.max_ray_length, 5.0);
        assert_eq!(settings.circle_amount, DEFAULT_CIRCLE_AMOUNT);
        assert!(settings.is_interactable("Interactable"));
        assert!(!settings.is_interactable("Background"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ChainSettings =
            serde_json::from_str(r#"{ "max_radius": 7.5, "interactable_tags": ["Wall"] }"#)
                .unwrap();
        assert_eq!(settings.max_radius, 7.5);
        assert_eq!(settings.circle_amount, DEFAULT_CIRCLE_AMOUNT);
        assert!(settings.is_interactable("Wall"));
        assert!(!settings.is_interactable("Interactable"));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!(
            "circle_chain_settings_{}.json",
            std::process::id()
        ));
        let settings = ChainSettings {
            circle_amount: 4,
            seed: 42,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = ChainSettings::try_load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = ChainSettings::load("/nonexistent/circle_chain.json");
        assert_eq!(settings, ChainSettings::default());
    }

    #[test]
    fn test_try_load_reports_bad_json() {
        let path = std::env::temp_dir().join(format!(
            "circle_chain_bad_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").unwrap();
        let result = ChainSettings::try_load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(result, Err(SettingsError::Json(_))));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ChainSettings::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_fields() {
        let cases = [
            (
                ChainSettings {
                    rotation_speed: f32::INFINITY,
                    ..Default::default()
                },
                "rotation_speed",
            ),
            (
                ChainSettings {
                    max_ray_length: -1.0,
                    ..Default::default()
                },
                "max_ray_length",
            ),
            (
                ChainSettings {
                    circle_density: 0.0,
                    ..Default::default()
                },
                "circle_density",
            ),
            (
                ChainSettings {
                    circle_density: f32::NAN,
                    ..Default::default()
                },
                "circle_density",
            ),
            (
                ChainSettings {
                    spawn_range: -2,
                    ..Default::default()
                },
                "spawn_range",
            ),
            (
                ChainSettings {
                    max_radius: f32::NAN,
                    ..Default::default()
                },
                "max_radius",
            ),
            (
                ChainSettings {
                    circle_amount: 0,
                    ..Default::default()
                },
                "circle_amount",
            ),
        ];

        for (settings, expected) in cases {
            match settings.validate() {
                Err(SettingsError::Invalid { field, .. }) => assert_eq!(field, expected),
                other => panic!("{} not rejected: {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_large_rotation_speed_is_accepted_and_wraps() {
        // Finite but huge speeds still make progress through normalize_angle
        let settings = ChainSettings {
            rotation_speed: 1e10,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        let angle = crate::normalize_angle(settings.rotation_speed);
        assert!(angle.abs() <= std::f32::consts::PI);
    }

    #[test]
    fn test_try_load_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!(
            "circle_chain_invalid_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "circle_density": -0.5 }"#).unwrap();
        let result = ChainSettings::try_load(&path);
        let fallback = ChainSettings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert!(matches!(
            result,
            Err(SettingsError::Invalid {
                field: "circle_density",
                ..
            })
        ));
        assert_eq!(fallback, ChainSettings::default());
    }

    #[test]
    fn test_builder_for_rejects_zero_amount() {
        let settings = ChainSettings {
            circle_amount: 0,
            ..Default::default()
        };
        let ray = RaySegment::new(Vec2::ZERO, Vec2::X);
        let err = settings.builder_for(Vec2::ZERO, ray, &[]).unwrap_err();
        assert_eq!(err, ChainError::InvalidLimit(0));
    }
}
