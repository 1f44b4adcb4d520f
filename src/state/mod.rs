pub mod camera;
pub mod controller;
pub mod engine;
pub mod gesture;

pub use camera::{CameraAction, CameraSession};
pub use controller::{ControlCommand, OverlayController};
pub use engine::{EngineAction, TransformEngine};
pub use gesture::{Contact, PointerInput};
