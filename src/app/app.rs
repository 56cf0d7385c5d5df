use crate::app::frame_timing::FrameClock;
use crate::app::input::{Command, HeldMoves, PointerTracker, command_for_key, drag_rotation};
use crate::error::ViewerError;
use crate::parser::load::load_or_empty;
use crate::renderer::camera::{CameraController, CameraState};
use crate::renderer::renderer::Renderer;
use crate::settings::Settings;
use nalgebra_glm as glm;
use std::path::Path;
use std::sync::Arc;
use winit::dpi::PhysicalPosition;
use winit::event::{DeviceEvent, ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::window::{CursorGrabMode, Window};

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

impl EventResponse {
    const IDLE: Self = Self {
        repaint: false,
        exit: false,
    };
    const REPAINT: Self = Self {
        repaint: true,
        exit: false,
    };
    const EXIT: Self = Self {
        repaint: false,
        exit: true,
    };
}

pub struct App {
    pub window: Arc<Window>,
    renderer: Renderer,
    camera_controller: CameraController,
    settings: Settings,
    clock: FrameClock,
    held_moves: HeldMoves,
    pointer: PointerTracker,
    left_mouse_pressed: bool,
    /// Spin of the model about the world Y axis, in degrees.
    model_rotation: f32,
}

impl App {
    pub fn new(window: Arc<Window>, settings: Settings, model_path: &Path) -> Result<Self, ViewerError> {
        let mut renderer =
            pollster::block_on(Renderer::new(window.clone(), settings.view.clear_color))
                .map_err(|e| ViewerError::new("renderer-init").push_viewer(e))?;

        let model = load_or_empty(model_path);
        if model.is_empty() {
            log::warn!("No meshes to draw, showing an empty scene");
        }
        renderer.upload_model(&model);

        window.set_cursor_visible(false);

        let mut camera_state = CameraState::at(glm::vec3(0.0, 0.0, 3.0));
        camera_state.movement_speed = settings.view.key_speed;
        let camera_controller = CameraController::new(camera_state, settings.view.profile);
        log::info!("Camera profile: {:?}", camera_controller.profile());

        let pointer = PointerTracker::new(window_centre(&window));

        Ok(Self {
            window,
            renderer,
            camera_controller,
            settings,
            clock: FrameClock::new(),
            held_moves: HeldMoves::default(),
            pointer,
            left_mouse_pressed: false,
            model_rotation: 0.0,
        })
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        match event {
            WindowEvent::CloseRequested => EventResponse::EXIT,
            WindowEvent::KeyboardInput { event, .. } => {
                match (command_for_key(&event.logical_key), event.state) {
                    (Some(command), ElementState::Pressed) => self.apply(command),
                    (Some(Command::Move(direction)), ElementState::Released) => {
                        self.held_moves.release(direction);
                        EventResponse::IDLE
                    }
                    _ => EventResponse::IDLE,
                }
            }
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never reach us.
                self.held_moves.clear();
                EventResponse::IDLE
            }
            WindowEvent::Resized(size) => {
                self.renderer.resize(*size);
                self.pointer.set_origin(window_centre(&self.window));
                EventResponse::REPAINT
            }
            WindowEvent::MouseInput { state, button, .. } => {
                if *button == MouseButton::Left {
                    self.left_mouse_pressed = *state == ElementState::Pressed;
                }
                EventResponse::IDLE
            }
            WindowEvent::CursorMoved { position, .. } => {
                if self.left_mouse_pressed {
                    let width = self.window.inner_size().width as f64;
                    self.model_rotation += drag_rotation(position.x, width);
                } else if !self.pointer.is_locked() {
                    let (x_offset, y_offset) = self.pointer.offsets((position.x, position.y));
                    self.camera_controller.look(x_offset, y_offset, true);
                    self.recentre_cursor();
                }
                EventResponse::REPAINT
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.1,
                };
                self.camera_controller.zoom_by(scroll);
                EventResponse::REPAINT
            }
            _ => EventResponse::IDLE,
        }
    }

    /// Raw mouse motion drives the look once the cursor could not be warped.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) -> EventResponse {
        let DeviceEvent::MouseMotion { delta } = event else {
            return EventResponse::IDLE;
        };
        if self.left_mouse_pressed {
            return EventResponse::IDLE;
        }
        match self.pointer.motion(*delta) {
            Some((x_offset, y_offset)) => {
                self.camera_controller.look(x_offset, y_offset, true);
                EventResponse::REPAINT
            }
            None => EventResponse::IDLE,
        }
    }

    fn apply(&mut self, command: Command) -> EventResponse {
        match command {
            Command::Quit => return EventResponse::EXIT,
            Command::Move(direction) => self.held_moves.press(direction),
            Command::NightMode => {
                if !self.camera_controller.toggle_night_mode() {
                    log::debug!("night mode ignored at {:?}", self.camera_controller.position().as_slice());
                }
            }
            Command::DayMode => {
                if !self.camera_controller.toggle_day_mode() {
                    log::debug!("day mode ignored at {:?}", self.camera_controller.position().as_slice());
                }
            }
        }
        EventResponse::REPAINT
    }

    fn recentre_cursor(&mut self) {
        let (x, y) = self.pointer.origin();
        let Err(e) = self.window.set_cursor_position(PhysicalPosition::new(x, y)) else {
            return;
        };
        log::warn!("Cursor warp unavailable ({e}), switching to raw mouse motion");
        self.pointer.lock();
        let grab = self
            .window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grab {
            log::warn!("Cursor grab unavailable: {e}");
        }
    }

    /// Rebuilds the surface after it was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.renderer.reconfigure();
    }

    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        self.clock.tick();
        self.held_moves
            .drive(&mut self.camera_controller, self.clock.delta_time());

        let view = &self.settings.view;
        let projection = glm::perspective_rh_zo(
            self.renderer.aspect_ratio(),
            self.camera_controller.zoom().to_radians(),
            view.near_plane,
            view.far_plane,
        );
        let model_matrix = glm::rotate_y(&glm::Mat4::identity(), self.model_rotation.to_radians());
        let model_view = self.camera_controller.view_matrix() * model_matrix;

        self.renderer.render(&projection, &model_view)
    }
}

fn window_centre(window: &Window) -> (f64, f64) {
    let size = window.inner_size();
    (size.width as f64 / 2.0, size.height as f64 / 2.0)
}
