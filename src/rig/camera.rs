use glam::{DAffine3, DVec3};

use super::pose::Pose;

/// World-space point the camera should approach: `offset` expressed in the actor's local frame
pub fn camera_target(actor_transform: &DAffine3, offset: DVec3) -> DVec3 {
    actor_transform.transform_point3(offset)
}

/// Exponential smoothing toward `target`.
///
/// Each call covers `factor` of the remaining distance. The factor is clamped
/// to [0, 1] so the camera can never overshoot.
pub fn update_camera(current: DVec3, target: DVec3, factor: f64) -> DVec3 {
    current + (target - current) * factor.clamp(0.0, 1.0)
}

/// Trailing camera that chases a fixed offset behind the actor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: DVec3,
    pub look_at: DVec3,
    pub offset: DVec3,
    pub smoothing: f64,
}

impl CameraRig {
    pub fn new(position: DVec3, offset: DVec3, smoothing: f64) -> Self {
        Self {
            position,
            look_at: DVec3::ZERO,
            offset,
            smoothing,
        }
    }

    /// Switch to another offset and smoothing; the current position is kept so the change eases in
    pub fn retune(&mut self, offset: DVec3, smoothing: f64) {
        self.offset = offset;
        self.smoothing = smoothing;
    }

    /// One tick of following: ease toward the offset behind `actor`, then aim at `look_at`
    pub fn follow(&mut self, actor: &Pose, look_at: DVec3) {
        let target = camera_target(&actor.transform(), self.offset);
        self.position = update_camera(self.position, target, self.smoothing);
        self.look_at = look_at;
    }

    /// Unit vector from the camera toward its look-at point
    pub fn forward(&self) -> DVec3 {
        (self.look_at - self.position).normalize_or_zero()
    }
}
