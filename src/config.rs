/*
 * Configuration Module
 *
 * This module defines the adjustable parameters for both simulation
 * variants. Parameters can come from a TOML file (every field is optional
 * and falls back to its default), be adjusted through the UI at runtime, or
 * be used as-is via Default. Validation runs before a simulation is
 * constructed; the simulations themselves assume validated values.
 */

use glam::Vec2;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

// Parameters for the flocking variant
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    pub width: f32,
    pub height: f32,
    pub num_boids: usize,
    pub max_speed: f32,
    pub max_force: f32,
    pub max_force_wall: f32,
    // Radius inside which neighbors feed alignment and cohesion. Zero is a
    // valid setting and leaves only separation active.
    pub neighbor_radius: f32,
    pub avoid_radius: f32,
    pub wall_margin: f32,
    pub parallel: bool,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            num_boids: 1000,
            max_speed: 20.0,
            max_force: 0.2,
            max_force_wall: 0.25,
            neighbor_radius: 50.0,
            avoid_radius: 50.0,
            wall_margin: 50.0,
            parallel: false,
        }
    }
}

impl FlockParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "world bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.num_boids == 0 {
            return Err(ConfigError::Validation("num_boids must be at least 1".into()));
        }
        if self.max_speed <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "max_speed must be positive, got {}",
                self.max_speed
            )));
        }
        if self.max_force <= 0.0 || self.max_force_wall <= 0.0 {
            return Err(ConfigError::Validation(
                "max_force and max_force_wall must be positive".into(),
            ));
        }
        if self.neighbor_radius < 0.0 || self.avoid_radius < 0.0 || self.wall_margin < 0.0 {
            return Err(ConfigError::Validation(
                "radii and wall_margin must not be negative".into(),
            ));
        }
        Ok(())
    }
}

// Parameters for the firefighting variant
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FirefightParams {
    pub width: f32,
    pub height: f32,
    pub num_boids: usize,
    pub num_fires: usize,
    pub boid_speed: f32,
    pub extinguish_radius: f32,
    pub water_capacity: u32,
    pub fire_shrink_amount: f32,
    pub fire_size_min: f32,
    pub fire_size_max: f32,
    pub home_base: [f32; 2],
    pub refill_radius: f32,
}

impl Default for FirefightParams {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            num_boids: 20,
            num_fires: 5,
            boid_speed: 2.5,
            extinguish_radius: 15.0,
            water_capacity: 3,
            fire_shrink_amount: 1.0,
            fire_size_min: 20.0,
            fire_size_max: 40.0,
            home_base: [100.0, 100.0],
            refill_radius: 10.0,
        }
    }
}

impl FirefightParams {
    pub fn home(&self) -> Vec2 {
        Vec2::from(self.home_base)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "world bounds must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.num_boids == 0 {
            return Err(ConfigError::Validation("num_boids must be at least 1".into()));
        }
        if self.boid_speed <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "boid_speed must be positive, got {}",
                self.boid_speed
            )));
        }
        if self.extinguish_radius <= 0.0 || self.refill_radius <= 0.0 {
            return Err(ConfigError::Validation(
                "extinguish_radius and refill_radius must be positive".into(),
            ));
        }
        if self.water_capacity == 0 {
            return Err(ConfigError::Validation("water_capacity must be at least 1".into()));
        }
        if self.fire_shrink_amount <= 0.0 {
            return Err(ConfigError::Validation(
                "fire_shrink_amount must be positive".into(),
            ));
        }
        if self.fire_size_min <= 0.0 || self.fire_size_max < self.fire_size_min {
            return Err(ConfigError::Validation(format!(
                "fire size range [{}, {}] is not valid",
                self.fire_size_min, self.fire_size_max
            )));
        }
        Ok(())
    }
}

// Top-level configuration holding both variants
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub flock: FlockParams,
    pub firefight: FirefightParams,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flock.validate()?;
        self.firefight.validate()
    }
}

// Load and validate a configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&text)?;
    config.validate()?;
    Ok(config)
}
