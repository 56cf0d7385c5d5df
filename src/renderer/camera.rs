mod basis;
mod bounds;
mod controller;
mod state;

pub use basis::Basis;
pub use bounds::*;
pub use controller::{CameraController, Movement, Profile};
pub use state::*;
