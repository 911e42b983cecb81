use anyhow::Result;
use glam::Vec3;
use serde::Serialize;

use super::actor::{spawn_actor_load, ActorModel, ActorSource, PendingActor};
use crate::config::SceneConfig;

/// Decorative model standing at a fixed spot in the scene
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedModel {
    pub name: String,
    pub position: [f32; 3],
    pub scale: f32,
    pub height: f32,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl PlacedModel {
    pub fn new(model: &ActorModel, position: Vec3) -> Self {
        Self {
            name: model.name.clone(),
            position: position.to_array(),
            scale: model.scale,
            height: model.height(),
            cast_shadow: true,
            receive_shadow: true,
        }
    }

    /// Places a finished load. Failures are logged and the scene carries on without the model.
    pub fn from_load(result: Result<ActorModel>, position: Vec3) -> Option<Self> {
        match result {
            Ok(model) => {
                log::info!("Placed {} at {:?}", model.name, position);
                Some(Self::new(&model, position))
            }
            Err(err) => {
                log::error!("Error loading scenery model: {:#}", err);
                None
            }
        }
    }
}

/// Camp model load in flight, if the config names one
#[derive(Debug)]
pub struct PendingScenery {
    pending: Option<PendingActor>,
    position: Vec3,
}

impl PendingScenery {
    pub fn none() -> Self {
        Self {
            pending: None,
            position: Vec3::ZERO,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Non-blocking; yields the placed model once, after a successful load
    pub fn poll(&mut self) -> Option<PlacedModel> {
        let result = self.pending.as_mut()?.poll()?;
        self.pending = None;
        PlacedModel::from_load(result, self.position)
    }

    /// Blocks until the load finishes
    pub fn wait(self) -> Option<PlacedModel> {
        let pending = self.pending?;
        PlacedModel::from_load(pending.wait(), self.position)
    }
}

/// Starts loading the camp model named in `config` on a worker thread
pub fn spawn_scenery_load(config: &SceneConfig) -> PendingScenery {
    let Some(path) = config.camp_model.clone() else {
        return PendingScenery::none();
    };

    PendingScenery {
        pending: Some(spawn_actor_load(
            ActorSource::Model(path),
            config.camp_model_scale,
        )),
        position: config.camp_model_position().as_vec3(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_no_camp_model_configured() {
        let mut scenery = spawn_scenery_load(&SceneConfig::default());
        assert!(!scenery.is_pending());
        assert!(scenery.poll().is_none());
        assert!(scenery.wait().is_none());
    }

    #[test]
    fn test_missing_camp_model_is_skipped() {
        let config = SceneConfig {
            camp_model: Some("/nonexistent/camp.glb".into()),
            ..Default::default()
        };
        let scenery = spawn_scenery_load(&config);
        assert!(scenery.is_pending());
        assert!(scenery.wait().is_none());
    }

    #[test]
    fn test_placed_model_keeps_position_and_scale() {
        let placed = PlacedModel::from_load(Ok(ActorModel::hiker()), Vec3::new(100.0, 0.0, 5.0)).unwrap();
        assert_eq!(placed.position, [100.0, 0.0, 5.0]);
        assert_eq!(placed.name, "hiker");
        assert!(placed.cast_shadow && placed.receive_shadow);

        assert!(PlacedModel::from_load(Err(anyhow!("bad file")), Vec3::ZERO).is_none());
    }
}
