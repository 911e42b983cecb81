pub mod clock;
pub mod controller;
pub mod input;
pub mod input_adapter;
pub mod sink;

pub use clock::{Clock, FpsCounter, FrameInfo};
pub use controller::{Button, Controller};
pub use input::InputState;
pub use input_adapter::WinitController;
pub use sink::{JsonLinesSink, RenderSink};
