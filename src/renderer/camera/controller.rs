use nalgebra_glm::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::{
    CameraState, DAY_TOGGLE_MAX_Y, DAY_TOGGLE_MIN_Y, ExclusionZone, MAX_ZOOM, MIN_ZOOM,
    MapBounds, NIGHT_OFFSET, NIGHT_TOGGLE_MAX_Y, NIGHT_TOGGLE_MIN_Y, PITCH_LIMIT,
};

/// How the controller treats the world around the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Clamped to the town, with the exclusion corner and the day/night
    /// copies. Scroll zoom is ignored.
    #[default]
    Bounded,
    /// Unclamped free flight with scroll zoom.
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Handles camera input and transformations
pub struct CameraController {
    state: CameraState,
    profile: Profile,
    bounds: MapBounds,
    exclusion: ExclusionZone,
}

impl CameraController {
    pub fn new(state: CameraState, profile: Profile) -> Self {
        let bounds = MapBounds::day();
        // The start is not clamped; the first move pulls it back in.
        if profile == Profile::Bounded && !bounds.contains(&state.position) {
            log::warn!(
                "camera starts outside the map at {:?}",
                state.position.as_slice()
            );
        }
        Self {
            state,
            profile,
            bounds,
            exclusion: ExclusionZone::default(),
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Box currently applied to the position. Only enforced by the bounded
    /// profile.
    pub fn bounds(&self) -> &MapBounds {
        &self.bounds
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn position(&self) -> Vec3 {
        self.state.position
    }

    pub fn front(&self) -> Vec3 {
        self.state.front()
    }

    pub fn up(&self) -> Vec3 {
        self.state.up()
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.state.view_matrix()
    }

    /// Translate the camera along its local axes by `speed * delta_time`.
    pub fn move_camera(&mut self, direction: Movement, delta_time: f32, speed: f32) {
        let velocity = speed * delta_time;
        let offset = match direction {
            Movement::Forward => self.state.front() * velocity,
            Movement::Backward => -self.state.front() * velocity,
            Movement::Left => -self.state.right() * velocity,
            Movement::Right => self.state.right() * velocity,
        };
        self.state.position += offset;

        if self.profile == Profile::Bounded {
            self.state.position = self.bounds.clamp(&self.state.position);
            self.exclusion.apply(&mut self.state.position);
        }
    }

    /// Same as [`Self::move_camera`] at the camera's own movement speed.
    pub fn step(&mut self, direction: Movement, delta_time: f32) {
        let speed = self.state.movement_speed;
        self.move_camera(direction, delta_time, speed);
    }

    /// Turn the camera by a pointer offset. Positive `y_offset` looks up.
    pub fn look(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.state.yaw += x_offset * self.state.mouse_sensitivity;
        self.state.pitch += y_offset * self.state.mouse_sensitivity;

        if constrain_pitch {
            self.state.pitch = self.state.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.state.update_basis();
    }

    /// Narrow (positive offset) or widen the field of view.
    pub fn zoom_by(&mut self, scroll_offset: f32) {
        if self.profile == Profile::Bounded {
            return;
        }
        self.state.zoom = (self.state.zoom - scroll_offset).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Lift the camera into the night copy of the map. Returns whether the
    /// switch happened.
    pub fn toggle_night_mode(&mut self) -> bool {
        if self.profile != Profile::Bounded {
            return false;
        }
        let y = self.state.position.y;
        if !(NIGHT_TOGGLE_MIN_Y..=NIGHT_TOGGLE_MAX_Y).contains(&y) {
            return false;
        }
        self.state.position.y += NIGHT_OFFSET;
        self.bounds = MapBounds::night();
        self.state.position = self.bounds.clamp(&self.state.position);
        log::info!("night mode, camera at {:?}", self.state.position.as_slice());
        true
    }

    /// Drop the camera back into the day map. Returns whether the switch
    /// happened.
    pub fn toggle_day_mode(&mut self) -> bool {
        if self.profile != Profile::Bounded {
            return false;
        }
        let y = self.state.position.y;
        if !(DAY_TOGGLE_MIN_Y..=DAY_TOGGLE_MAX_Y).contains(&y) {
            return false;
        }
        self.state.position.y -= NIGHT_OFFSET;
        self.bounds = MapBounds::day();
        self.state.position = self.bounds.clamp(&self.state.position);
        log::info!("day mode, camera at {:?}", self.state.position.as_slice());
        true
    }
}
