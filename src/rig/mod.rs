//! Per-tick movement: progress along the trail, the actor's pose, and the
//! camera that trails behind it.

pub mod camera;
pub mod movement;
mod pose;
mod progress;

pub use camera::{camera_target, update_camera, CameraRig};
pub use movement::{Movement, MovementMode, Step};
pub use pose::{look_rotation, pose_at, Pose};
pub use progress::advance;
