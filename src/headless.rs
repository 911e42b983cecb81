// headless.rs - Scripted runs without a window
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::core::{InputState, RenderSink};
use crate::loaders::{PendingActor, PendingScenery};
use crate::world::World;

/// Held buttons for a run of consecutive frames
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScriptStep {
    pub frames: u32,
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    /// Switch movement mode on the first frame of this step
    pub toggle: bool,
}

/// Input timeline replayed one frame per tick
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct InputScript {
    pub steps: Vec<ScriptStep>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input script: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse input script: {:?}", path))
    }

    /// Walk forward for `frames` ticks
    pub fn hold_forward(frames: u32) -> Self {
        Self {
            steps: vec![ScriptStep {
                frames,
                forward: true,
                ..Default::default()
            }],
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.steps.iter().map(|s| s.frames as u64).sum()
    }

    /// Expands the steps into per-tick input
    pub fn inputs(&self) -> impl Iterator<Item = InputState> + '_ {
        self.steps.iter().flat_map(|step| {
            (0..step.frames).map(move |i| InputState {
                forward: step.forward,
                backward: step.backward,
                left: step.left,
                right: step.right,
                toggle_mode: step.toggle && i == 0,
            })
        })
    }
}

/// Replays the script against the world. Blocks on the scenery and actor loads first so runs are repeatable.
///
/// Returns the number of frames submitted.
pub fn run_headless(
    world: &mut World,
    pending: PendingActor,
    scenery: PendingScenery,
    script: &InputScript,
    sink: &mut dyn RenderSink,
) -> Result<u64> {
    sink.stage(&world.stage())?;

    if let Some(model) = scenery.wait() {
        sink.model_ready(&model)?;
    }

    if let Some(actor) = world.receive_actor(pending.wait()) {
        sink.actor_ready(actor)?;
    }

    let mut submitted = 0;
    for input in script.inputs() {
        let Some(state) = world.tick(&input) else {
            continue;
        };
        sink.submit(&state.to_uniform())?;
        submitted += 1;
    }

    log::info!(
        "Headless run finished: {} frames, progress {:.3}, mode {:?}",
        submitted,
        world.progress(),
        world.mode()
    );
    Ok(submitted)
}
