use nalgebra_glm::{self as glm, Vec3};

use super::Basis;

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 6.0;
pub const DEFAULT_SENSITIVITY: f32 = 0.25;
pub const DEFAULT_ZOOM: f32 = 45.0;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Camera state with position and orientation
#[derive(Debug, Clone)]
pub struct CameraState {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub world_up: Vec3,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    pub zoom: f32,
    basis: Basis,
}

impl CameraState {
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch,
            world_up,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            basis: Basis::from_angles(yaw, pitch, &world_up),
        }
    }

    /// Camera at `position` with the default orientation and a +Y world up.
    pub fn at(position: Vec3) -> Self {
        Self::new(position, glm::vec3(0.0, 1.0, 0.0), DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Recomputes front/right/up. Must follow every change to yaw or pitch.
    pub fn update_basis(&mut self) {
        self.basis = Basis::from_angles(self.yaw, self.pitch, &self.world_up);
    }

    pub fn front(&self) -> Vec3 {
        self.basis.front
    }

    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    pub fn view_matrix(&self) -> glm::Mat4 {
        glm::look_at(&self.position, &(self.position + self.basis.front), &self.basis.up)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::at(glm::vec3(0.0, 0.0, 0.0))
    }
}
