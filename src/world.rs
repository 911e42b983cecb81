use anyhow::Result;
use glam::DVec3;

use crate::config::SceneConfig;
use crate::core::InputState;
use crate::loaders::{ActorModel, ActorSlot};
use crate::math::CatmullRomCurve;
use crate::rig::{pose_at, CameraRig, Movement, MovementMode, Pose};
use crate::scenes::build_environments;
use crate::types::{FrameUniform, StagedScene};

/// Snapshot of one advanced tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    pub frame: u64,
    pub mode: MovementMode,
    pub progress: f64,
    /// Actor pose including the lift that puts its feet on the ground
    pub actor: Pose,
    pub camera_position: DVec3,
    pub camera_look_at: DVec3,
}

impl FrameState {
    pub fn to_uniform(&self) -> FrameUniform {
        FrameUniform {
            actor_position: self.actor.position.as_vec3().to_array(),
            progress: self.progress as f32,
            actor_rotation: self.actor.orientation.as_quat().to_array(),
            camera_position: self.camera_position.as_vec3().to_array(),
            mode: self.mode.as_u32(),
            camera_target: self.camera_look_at.as_vec3().to_array(),
            frame: self.frame as u32,
        }
    }
}

/// All mutable walk state, advanced once per tick
pub struct World {
    config: SceneConfig,
    curve: CatmullRomCurve,
    movement: Movement,
    camera: CameraRig,
    actor: ActorSlot,
    /// Pose on the ground plane, before the actor's lift
    pose: Pose,
    frame: u64,
}

impl World {
    pub fn new(config: SceneConfig, mode: MovementMode) -> Result<Self> {
        config.validate()?;
        let curve = config.curve()?;
        let pose = pose_at(&curve, 0.0);
        let movement = Movement::new(mode, &config);
        let (offset, smoothing) = config.camera_for(mode);
        let camera = CameraRig::new(config.initial_camera(), offset, smoothing);

        Ok(Self {
            config,
            curve,
            movement,
            camera,
            actor: ActorSlot::new(),
            pose,
            frame: 0,
        })
    }

    /// Static content for the renderer
    pub fn stage(&self) -> StagedScene {
        build_environments(&self.config, &self.curve)
    }

    /// Hands a finished actor load to the world; returns the actor if it was stored
    pub fn receive_actor(&mut self, result: Result<ActorModel>) -> Option<&ActorModel> {
        if self.actor.fill_from(result) {
            self.actor.get()
        } else {
            None
        }
    }

    /// Advances one tick. Does nothing until an actor has been loaded.
    pub fn tick(&mut self, input: &InputState) -> Option<FrameState> {
        let lift = DVec3::Y * self.actor.get()?.ground_offset();

        let step = self.movement.step(input, &self.curve, self.pose);
        self.pose = step.pose;

        let actor = Pose {
            position: step.pose.position + lift,
            ..step.pose
        };
        let look_at = step.look_at + lift;
        let (offset, smoothing) = self.config.camera_for(self.movement.mode);
        self.camera.retune(offset, smoothing);
        self.camera.follow(&actor, look_at);

        let state = FrameState {
            frame: self.frame,
            mode: self.movement.mode,
            progress: self.movement.progress,
            actor,
            camera_position: self.camera.position,
            camera_look_at: self.camera.look_at,
        };
        self.frame += 1;

        log::trace!(
            "frame {} {:?} progress {:.4} actor {:?}",
            state.frame,
            state.mode,
            state.progress,
            state.actor.position
        );
        Some(state)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn curve(&self) -> &CatmullRomCurve {
        &self.curve
    }

    pub fn mode(&self) -> MovementMode {
        self.movement.mode
    }

    pub fn progress(&self) -> f64 {
        self.movement.progress
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn actor(&self) -> Option<&ActorModel> {
        self.actor.get()
    }
}
