use nalgebra_glm::{self as glm, Vec3};

/// Camera-local axes derived from a pair of Euler angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Builds the basis for `yaw`/`pitch` (degrees) around `world_up`.
    ///
    /// `right` is undefined when `front` is parallel to `world_up`, so callers
    /// keep pitch strictly inside (-90, 90).
    pub fn from_angles(yaw: f32, pitch: f32, world_up: &Vec3) -> Self {
        let (yaw, pitch) = (yaw.to_radians(), pitch.to_radians());
        let front = glm::normalize(&glm::vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ));
        let right = glm::normalize(&glm::cross(&front, world_up));
        let up = glm::normalize(&glm::cross(&right, &front));

        Self { front, right, up }
    }
}
