use eframe::egui::Color32;

pub struct GuiConfig;

impl GuiConfig {
    pub const WINDOW_SIZE: [f32; 2] = [800., 600.];
    pub const MIN_WINDOW_SIZE: [f32; 2] = [480., 320.];
    pub const TITLE: &'static str = "Game of Life";

    pub const FRAME_MARGIN: f32 = 10.;
    pub const CONTROL_PANEL_WIDTH: f32 = 200.;
    pub const BACKGROUND_COLOR: Color32 = Color32::GRAY;
    pub const TEXT_SIZE: f32 = 16.;
    pub const LABEL_SIZE: f32 = 22.;
    pub const TEXT_COLOR: Color32 = Color32::BLACK;
    pub const WIDGET_GAP: f32 = 20.;

    pub const FPS_SMOOTHING: f64 = 0.1;

    pub const ALIVE_GRAY: u8 = 0;
    pub const DEAD_GRAY: u8 = u8::MAX;
}
