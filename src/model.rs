mod mesh;
mod model;

pub use mesh::*;
pub use model::*;
