use nalgebra_glm::{self as glm, Vec3};

/// Horizontal extent of the town, shared by the day and night copies.
pub const MAP_MIN_X: f32 = -56.0;
pub const MAP_MAX_X: f32 = 56.0;
pub const MAP_MIN_Z: f32 = -70.0;
pub const MAP_MAX_Z: f32 = 70.0;

pub const DAY_MIN_Y: f32 = -1.5;
pub const DAY_MAX_Y: f32 = 25.0;
pub const NIGHT_MIN_Y: f32 = 139.5;
pub const NIGHT_MAX_Y: f32 = 165.7;

/// Vertical distance between the day map and its night copy.
pub const NIGHT_OFFSET: f32 = 141.0;

/// Heights from which a switch to night is accepted.
pub const NIGHT_TOGGLE_MIN_Y: f32 = -1.6;
pub const NIGHT_TOGGLE_MAX_Y: f32 = 68.0;
/// Heights from which a switch back to day is accepted.
pub const DAY_TOGGLE_MIN_Y: f32 = 139.1;
pub const DAY_TOGGLE_MAX_Y: f32 = 208.8;

/// Corner of the map the camera is pushed out of.
pub const STRIKE_X: f32 = -16.0;
pub const STRIKE_Z: f32 = -30.0;

/// Axis-aligned box the camera position is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl MapBounds {
    pub fn day() -> Self {
        Self {
            min: glm::vec3(MAP_MIN_X, DAY_MIN_Y, MAP_MIN_Z),
            max: glm::vec3(MAP_MAX_X, DAY_MAX_Y, MAP_MAX_Z),
        }
    }

    pub fn night() -> Self {
        Self {
            min: glm::vec3(MAP_MIN_X, NIGHT_MIN_Y, MAP_MIN_Z),
            max: glm::vec3(MAP_MAX_X, NIGHT_MAX_Y, MAP_MAX_Z),
        }
    }

    pub fn clamp(&self, point: &Vec3) -> Vec3 {
        glm::vec3(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
            point.z.clamp(self.min.z, self.max.z),
        )
    }

    pub fn contains(&self, point: &Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= self.max[i])
    }
}

/// Single rectangular carve-out: anything below both thresholds gets its z
/// pinned to `strike_z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExclusionZone {
    pub strike_x: f32,
    pub strike_z: f32,
}

impl ExclusionZone {
    pub fn apply(&self, point: &mut Vec3) {
        if point.x < self.strike_x && point.z < self.strike_z {
            point.z = self.strike_z;
        }
    }
}

impl Default for ExclusionZone {
    fn default() -> Self {
        Self {
            strike_x: STRIKE_X,
            strike_z: STRIKE_Z,
        }
    }
}
