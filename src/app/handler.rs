use crate::app::app::App;
use crate::error::ViewerError;
use crate::settings::Settings;
use std::path::PathBuf;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

pub struct AppHandler {
    pub app: Option<App>,
    pub model_path: PathBuf,
    pub settings: Settings,
    /// Set when start-up failed; the loop exits and `main` reports it.
    pub error: Option<ViewerError>,
}

impl AppHandler {
    pub fn new(settings: Settings, model_path: PathBuf) -> Self {
        Self {
            app: None,
            model_path,
            settings,
            error: None,
        }
    }

    fn start(&self, event_loop: &ActiveEventLoop) -> Result<App, ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.settings.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.settings.window.width,
                self.settings.window.height,
            ));

        let window = event_loop.create_window(window_attrs)?;
        App::new(Arc::new(window), self.settings.clone(), &self.model_path)
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_some() {
            return;
        }
        match self.start(event_loop) {
            Ok(app) => self.app = Some(app),
            Err(e) => {
                log::error!("Failed to start viewer: {e}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(app) = &mut self.app {
            if app.handle_device_event(&event).repaint {
                app.window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            match app.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => app.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Render error: out of memory");
                    event_loop.exit();
                }
                Err(e) => log::warn!("Render error: {e:?}"),
            }
            app.window.request_redraw();
        }
    }
}
