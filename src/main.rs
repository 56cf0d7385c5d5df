use std::path::PathBuf;
use winit::event_loop::{ControlFlow, EventLoop};

mod app;
mod error;
mod model;
mod parser;
mod renderer;
mod settings;

pub const CONFY_APP_NAME: &str = "cookie-town";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = settings::Settings::load();

    // First command line argument overrides the configured model
    let model_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&settings.view.model_path));

    let event_loop = EventLoop::new().map_err(error::ViewerError::from)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut handler = app::handler::AppHandler::new(settings, model_path);
    event_loop
        .run_app(&mut handler)
        .map_err(error::ViewerError::from)?;

    if let Some(e) = handler.error {
        return Err(e.into());
    }

    Ok(())
}
