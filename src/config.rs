// config.rs - Scene and rig tuning loaded from JSON
use anyhow::{bail, Context, Result};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::math::CatmullRomCurve;
use crate::rig::MovementMode;

/// Literal values for the walk, with defaults matching the hiking trail scene.
///
/// Every field may be omitted from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Control points of the trail, forest through winter to the fireplace
    pub path_points: Vec<[f64; 3]>,
    /// Progress gained per tick while walking the path
    pub path_speed: f64,
    /// World units moved per tick in free roam
    pub free_speed: f64,
    /// Camera position in the actor's local frame (+Z is forward)
    pub camera_offset: [f64; 3],
    /// Fraction of the remaining distance the camera covers each tick
    pub camera_smoothing: f64,
    /// Camera offset while roaming freely, pulled further back
    pub free_camera_offset: [f64; 3],
    pub free_camera_smoothing: f64,
    /// How far ahead along the path the camera looks
    pub lookahead: f64,
    pub initial_camera: [f64; 3],
    /// Trees scattered in each of the forest and winter areas
    pub tree_count: usize,
    pub seed: u64,
    /// Uniform scale applied to a loaded actor model
    pub model_scale: f32,
    /// Optional glTF model placed beside the fireplace
    pub camp_model: Option<PathBuf>,
    pub camp_model_scale: f32,
    pub camp_model_position: [f64; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            path_points: vec![
                [0.0, 0.0, 0.0],
                [10.0, 0.0, -10.0],
                [20.0, 0.0, 0.0],
                [30.0, 0.0, 10.0],
                [50.0, 0.0, 10.0],
                [70.0, 0.0, 0.0],
                [90.0, 0.0, -10.0],
                [110.0, 0.0, 0.0],
            ],
            path_speed: 0.002,
            free_speed: 0.1,
            camera_offset: [0.0, 5.0, -10.0],
            camera_smoothing: 0.1,
            free_camera_offset: [0.0, 10.0, -40.0],
            free_camera_smoothing: 0.05,
            lookahead: 0.01,
            initial_camera: [0.0, 10.0, -20.0],
            tree_count: 50,
            seed: 0,
            model_scale: 0.01,
            camp_model: None,
            camp_model_scale: 0.02,
            camp_model_position: [100.0, 0.0, 5.0],
        }
    }
}

impl SceneConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: SceneConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.path_points.len() < 2 {
            bail!("path needs at least 2 points, got {}", self.path_points.len());
        }
        if !(self.path_speed >= 0.0 && self.free_speed >= 0.0) {
            bail!(
                "speeds must be non-negative (path {}, free {})",
                self.path_speed,
                self.free_speed
            );
        }
        for (name, smoothing) in [
            ("camera_smoothing", self.camera_smoothing),
            ("free_camera_smoothing", self.free_camera_smoothing),
        ] {
            if !(smoothing > 0.0 && smoothing <= 1.0) {
                bail!("{} must be in (0, 1], got {}", name, smoothing);
            }
        }
        for (name, point) in [
            ("camera_offset", self.camera_offset),
            ("free_camera_offset", self.free_camera_offset),
            ("initial_camera", self.initial_camera),
            ("camp_model_position", self.camp_model_position),
        ] {
            if !point.iter().all(|c| c.is_finite()) {
                bail!("{} must be finite, got {:?}", name, point);
            }
        }
        if !(0.0..=1.0).contains(&self.lookahead) {
            bail!("lookahead must be in [0, 1], got {}", self.lookahead);
        }
        if !(self.model_scale > 0.0 && self.camp_model_scale > 0.0) {
            bail!(
                "model scales must be positive (actor {}, camp {})",
                self.model_scale,
                self.camp_model_scale
            );
        }
        Ok(())
    }

    pub fn curve(&self) -> Result<CatmullRomCurve> {
        CatmullRomCurve::from_arrays(&self.path_points).context("Invalid path")
    }

    pub fn camera_offset(&self) -> DVec3 {
        DVec3::from_array(self.camera_offset)
    }

    pub fn initial_camera(&self) -> DVec3 {
        DVec3::from_array(self.initial_camera)
    }

    pub fn camp_model_position(&self) -> DVec3 {
        DVec3::from_array(self.camp_model_position)
    }

    /// Camera offset and smoothing for the given movement mode
    pub fn camera_for(&self, mode: MovementMode) -> (DVec3, f64) {
        match mode {
            MovementMode::FollowPath => (self.camera_offset(), self.camera_smoothing),
            MovementMode::FreeRoam => (
                DVec3::from_array(self.free_camera_offset),
                self.free_camera_smoothing,
            ),
        }
    }
}
