use anyhow::{anyhow, bail, Result};
use futures::channel::oneshot;
use std::path::PathBuf;

use super::gltf::load_actor_model;
use super::hiker::hiker_parts;
use crate::math::AABB;
use crate::types::Prop;

/// Where the walking character comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ActorSource {
    /// Built from primitives, available immediately
    Hiker,
    /// glTF file loaded on a worker thread
    Model(PathBuf),
}

impl ActorSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(ActorSource::Hiker, ActorSource::Model)
    }
}

/// Measured actor ready to be placed in the world
#[derive(Debug, Clone, PartialEq)]
pub struct ActorModel {
    pub name: String,
    /// Bounds in model space, before `scale`
    pub bounds: AABB,
    pub scale: f32,
    /// Primitive parts for procedural actors; empty for loaded models
    pub parts: Vec<Prop>,
}

impl ActorModel {
    pub fn hiker() -> Self {
        let parts = hiker_parts();
        let bounds = parts
            .iter()
            .map(Prop::bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| AABB::new(glam::Vec3::ZERO, glam::Vec3::ZERO));

        Self {
            name: "hiker".to_string(),
            bounds,
            scale: 1.0,
            parts,
        }
    }

    /// Lift applied to the actor so its lowest point rests on y = 0
    pub fn ground_offset(&self) -> f64 {
        -(self.bounds.min.y * self.scale) as f64
    }

    pub fn height(&self) -> f32 {
        self.bounds.height() * self.scale
    }
}

/// One-shot load in flight. The result is delivered exactly once.
#[derive(Debug)]
pub struct PendingActor {
    receiver: Option<oneshot::Receiver<Result<ActorModel>>>,
}

/// Starts loading the actor; model files are read on a worker thread
pub fn spawn_actor_load(source: ActorSource, scale: f32) -> PendingActor {
    let (sender, receiver) = oneshot::channel();

    match source {
        ActorSource::Hiker => {
            let _ = sender.send(Ok(ActorModel::hiker()));
        }
        ActorSource::Model(path) => {
            let spawned = std::thread::Builder::new()
                .name("actor-loader".to_string())
                .spawn(move || {
                    let _ = sender.send(load_actor_model(&path, scale));
                });
            // A failed spawn drops the sender, which surfaces as a load failure on poll
            if let Err(err) = spawned {
                log::error!("Failed to start actor loader thread: {}", err);
            }
        }
    }

    PendingActor {
        receiver: Some(receiver),
    }
}

impl PendingActor {
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }

    /// Non-blocking check for the load result
    pub fn poll(&mut self) -> Option<Result<ActorModel>> {
        let receiver = self.receiver.as_mut()?;
        match receiver.try_recv() {
            Ok(Some(result)) => {
                self.receiver = None;
                Some(result)
            }
            Ok(None) => None,
            Err(oneshot::Canceled) => {
                self.receiver = None;
                Some(Err(anyhow!("Actor loader exited without a result")))
            }
        }
    }

    /// Blocks until the load finishes
    pub fn wait(mut self) -> Result<ActorModel> {
        let Some(receiver) = self.receiver.take() else {
            bail!("Actor load result was already taken");
        };
        pollster::block_on(receiver)
            .unwrap_or_else(|_| Err(anyhow!("Actor loader exited without a result")))
    }
}

/// Single slot for the actor, filled at most once
#[derive(Debug, Default)]
pub struct ActorSlot {
    actor: Option<ActorModel>,
}

impl ActorSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a successful load. Failures are logged and leave the slot empty.
    pub fn fill_from(&mut self, result: Result<ActorModel>) -> bool {
        match result {
            Ok(model) if self.actor.is_none() => {
                log::info!(
                    "Actor ready: {} (height {:.2}, ground offset {:.2})",
                    model.name,
                    model.height(),
                    model.ground_offset()
                );
                self.actor = Some(model);
                true
            }
            Ok(model) => {
                log::warn!("Actor already loaded, ignoring {}", model.name);
                false
            }
            Err(err) => {
                log::error!("Error loading actor model: {:#}", err);
                false
            }
        }
    }

    pub fn get(&self) -> Option<&ActorModel> {
        self.actor.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.actor.is_some()
    }
}
