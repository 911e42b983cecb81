use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::loaders::{ActorModel, PlacedModel};
use crate::types::{FrameUniform, Prop, StagedScene};

/// Render collaborator - receives the scene once and frame state every tick
pub trait RenderSink {
    /// Register static scene content before the first frame
    fn stage(&mut self, scene: &StagedScene) -> Result<()>;

    /// Called once when the actor finishes loading
    fn actor_ready(&mut self, _actor: &ActorModel) -> Result<()> {
        Ok(())
    }

    /// Called once per decorative model that finished loading
    fn model_ready(&mut self, _model: &PlacedModel) -> Result<()> {
        Ok(())
    }

    /// Publish the state of one tick
    fn submit(&mut self, frame: &FrameUniform) -> Result<()>;
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Record<'a> {
    Scene(&'a StagedScene),
    Actor {
        name: &'a str,
        height: f32,
        ground_offset: f64,
        parts: &'a [Prop],
    },
    Model(&'a PlacedModel),
    Frame(&'a FrameUniform),
}

/// Headless sink writing one JSON object per line
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, record: &Record) -> Result<()> {
        serde_json::to_writer(&mut self.out, record).context("Failed to encode record")?;
        self.out.write_all(b"\n").context("Failed to write record")?;
        Ok(())
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn stage(&mut self, scene: &StagedScene) -> Result<()> {
        self.write(&Record::Scene(scene))
    }

    fn actor_ready(&mut self, actor: &ActorModel) -> Result<()> {
        self.write(&Record::Actor {
            name: &actor.name,
            height: actor.height(),
            ground_offset: actor.ground_offset(),
            parts: &actor.parts,
        })
    }

    fn model_ready(&mut self, model: &PlacedModel) -> Result<()> {
        self.write(&Record::Model(model))
    }

    fn submit(&mut self, frame: &FrameUniform) -> Result<()> {
        self.write(&Record::Frame(frame))
    }
}
