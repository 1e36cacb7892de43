mod config;
mod engine;
mod event;
mod grid;
mod gui;
pub mod pattern;

pub use config::Config;
pub use engine::{Cells, Engine, RunState};
pub use event::Event;
pub use grid::Grid;
pub use gui::App;
pub use pattern::Pattern;
