pub mod cli;
pub mod config;
pub mod core;
pub mod headless;
pub mod loaders;
pub mod math;
pub mod rig;
pub mod scenes;
pub mod types;
pub mod window;
pub mod world;

pub use config::SceneConfig;
pub use rig::{advance, camera_target, pose_at, update_camera, MovementMode};
pub use world::{FrameState, World};
