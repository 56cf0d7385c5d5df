use crate::CONFY_APP_NAME;
use crate::renderer::camera::Profile;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "COOKIE TOWN".to_string(),
            width: 600,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSettings {
    pub model_path: String,
    pub profile: Profile,
    /// Distance per second covered while a movement key is held.
    pub key_speed: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    pub clear_color: [f32; 3],
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            model_path: "CT.obj".to_string(),
            profile: Profile::Bounded,
            key_speed: 12.0,
            near_plane: 0.1,
            far_plane: 100.0,
            clear_color: [0.0, 0.0, 0.0],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub window: WindowSettings,
    pub view: ViewSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            window: load_or_default("window"),
            view: load_or_default("view"),
        }
    }
}

fn load_or_default<T>(name: &str) -> T
where
    T: Serialize + serde::de::DeserializeOwned + Default,
{
    confy::load(CONFY_APP_NAME, name).unwrap_or_else(|e| {
        log::warn!("Could not read '{name}' settings, using defaults: {e}");
        T::default()
    })
}
