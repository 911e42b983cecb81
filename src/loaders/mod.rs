mod actor;
pub mod gltf;
mod hiker;
mod scenery;

pub use actor::{spawn_actor_load, ActorModel, ActorSlot, ActorSource, PendingActor};
pub use self::gltf::load_actor_model;
pub use hiker::hiker_parts;
pub use scenery::{spawn_scenery_load, PendingScenery, PlacedModel};
