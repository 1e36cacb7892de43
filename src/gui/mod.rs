mod app;
mod config;
mod draw;
mod fps_limit;
mod input;

pub use app::App;
use config::GuiConfig;
use fps_limit::FpsLimiter;
