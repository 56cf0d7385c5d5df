pub mod app;
pub mod frame_timing;
pub mod handler;
pub mod input;
