use clap::ValueEnum;
use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::pose::{pose_at, Pose};
use super::progress::advance;
use crate::config::SceneConfig;
use crate::core::InputState;
use crate::math::CatmullRomCurve;

/// How forward/backward input moves the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// Walk along the trail; progress stops at either end
    #[value(name = "path")]
    FollowPath,
    /// Walk the ground plane with the arrow keys
    #[value(name = "free")]
    FreeRoam,
}

impl MovementMode {
    pub fn toggled(self) -> Self {
        match self {
            MovementMode::FollowPath => MovementMode::FreeRoam,
            MovementMode::FreeRoam => MovementMode::FollowPath,
        }
    }

    /// Tag used in the frame uniform
    pub fn as_u32(self) -> u32 {
        match self {
            MovementMode::FollowPath => 0,
            MovementMode::FreeRoam => 1,
        }
    }
}

/// Result of one movement tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub pose: Pose,
    /// Where the camera should aim
    pub look_at: DVec3,
}

/// Movement state that survives mode switches
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub mode: MovementMode,
    pub progress: f64,
    pub path_speed: f64,
    pub free_speed: f64,
    pub lookahead: f64,
}

impl Movement {
    pub fn new(mode: MovementMode, config: &SceneConfig) -> Self {
        Self {
            mode,
            progress: 0.0,
            path_speed: config.path_speed,
            free_speed: config.free_speed,
            lookahead: config.lookahead,
        }
    }

    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        log::info!("Movement mode: {:?} (progress {:.3})", self.mode, self.progress);
    }

    /// Applies a pending toggle, then moves once in the current mode
    pub fn step(&mut self, input: &InputState, curve: &CatmullRomCurve, current: Pose) -> Step {
        if input.toggle_mode {
            self.toggle();
        }

        match self.mode {
            MovementMode::FollowPath => self.follow_path(input, curve),
            MovementMode::FreeRoam => self.free_roam(input, current),
        }
    }

    /// Advance along the curve and face the direction of travel; the camera looks slightly ahead
    pub fn follow_path(&mut self, input: &InputState, curve: &CatmullRomCurve) -> Step {
        self.progress = advance(self.progress, input.forward_axis(), self.path_speed);

        let pose = pose_at(curve, self.progress);
        let look_at = curve.point_at((self.progress + self.lookahead).min(1.0));
        Step { pose, look_at }
    }

    /// Forward is -Z and right is +X in world space; facing is left untouched
    pub fn free_roam(&self, input: &InputState, current: Pose) -> Step {
        let displacement =
            DVec3::new(input.strafe_axis(), 0.0, -input.forward_axis()) * self.free_speed;
        let pose = Pose {
            position: current.position + displacement,
            ..current
        };
        Step {
            pose,
            look_at: pose.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CatmullRomCurve {
        CatmullRomCurve::from_arrays(&[[0.0, 0.0, 0.0], [10.0, 0.0, 0.0]]).unwrap()
    }

    fn movement(mode: MovementMode) -> Movement {
        Movement {
            mode,
            progress: 0.0,
            path_speed: 0.1,
            free_speed: 0.5,
            lookahead: 0.01,
        }
    }

    #[test]
    fn test_toggled_round_trips() {
        assert_eq!(MovementMode::FollowPath.toggled(), MovementMode::FreeRoam);
        assert_eq!(MovementMode::FreeRoam.toggled().toggled(), MovementMode::FreeRoam);
    }

    #[test]
    fn test_follow_path_moves_forward() {
        let mut movement = movement(MovementMode::FollowPath);
        let input = InputState { forward: true, ..Default::default() };
        let step = movement.follow_path(&input, &line());

        assert!((movement.progress - 0.1).abs() < 1e-12);
        assert!((step.pose.position - DVec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert!(step.look_at.x > step.pose.position.x);
    }

    #[test]
    fn test_follow_path_lookahead_clamped_at_end() {
        let mut movement = movement(MovementMode::FollowPath);
        movement.progress = 1.0;
        let step = movement.follow_path(&InputState::default(), &line());
        assert_eq!(step.look_at, DVec3::new(10.0, 0.0, 0.0));
    }

    #[test]
    fn test_free_roam_axes() {
        let movement = movement(MovementMode::FreeRoam);
        let input = InputState { forward: true, right: true, ..Default::default() };
        let step = movement.free_roam(&input, Pose::IDENTITY);

        assert_eq!(step.pose.position, DVec3::new(0.5, 0.0, -0.5));
        assert_eq!(step.pose.orientation, Pose::IDENTITY.orientation);
        assert_eq!(step.look_at, step.pose.position);
    }

    #[test]
    fn test_step_toggle_keeps_progress() {
        let mut movement = movement(MovementMode::FollowPath);
        movement.progress = 0.4;
        let input = InputState { toggle_mode: true, forward: true, ..Default::default() };
        movement.step(&input, &line(), Pose::IDENTITY);

        assert_eq!(movement.mode, MovementMode::FreeRoam);
        assert_eq!(movement.progress, 0.4);
    }
}
