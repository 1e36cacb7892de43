use super::{input, FpsLimiter, GuiConfig};
use crate::Engine;
use eframe::egui::{
    vec2, CentralPanel, ColorImage, Context, Frame, Margin, Rect, SidePanel, TextureHandle,
    TextureOptions, ViewportBuilder, ViewportCommand,
};

pub struct App {
    pub(super) engine: Engine, // Conway's GoL engine.
    pub(super) texture: TextureHandle, // Texture handle of the field.
    pub(super) field_buf: Vec<u8>, // Grayscale pixels of the field, one per cell.
    pub(super) field_rect: Option<Rect>, // Part of the window displaying the field.
    pub(super) fps_limiter: FpsLimiter, // Limits the frame rate to a certain value.
}

impl App {
    pub fn new(ctx: &Context, engine: Engine, max_fps: f64) -> Self {
        let n = engine.size();
        Self {
            engine,
            texture: ctx.load_texture(
                "Conway's GoL field",
                ColorImage::default(),
                TextureOptions::NEAREST,
            ),
            field_buf: vec![GuiConfig::DEAD_GRAY; n * n],
            field_rect: None,
            fps_limiter: FpsLimiter::new(max_fps),
        }
    }

    pub fn title() -> &'static str {
        GuiConfig::TITLE
    }

    pub fn native_options() -> eframe::NativeOptions {
        let [w, h] = GuiConfig::WINDOW_SIZE;
        let [min_w, min_h] = GuiConfig::MIN_WINDOW_SIZE;
        eframe::NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(GuiConfig::TITLE)
                .with_inner_size(vec2(w, h))
                .with_min_inner_size(vec2(min_w, min_h)),
            ..Default::default()
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        let n = self.engine.size();
        let events = ctx.input(|i| input::collect_events(i, self.field_rect, n));
        if self.engine.tick(events).is_break() {
            log::info!("Closing the window");
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }

        SidePanel::left("instructions")
            .exact_width(GuiConfig::CONTROL_PANEL_WIDTH)
            .resizable(false)
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(GuiConfig::FRAME_MARGIN))
                    .fill(GuiConfig::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| self.draw_instructions(ui));

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(GuiConfig::FRAME_MARGIN))
                    .fill(GuiConfig::BACKGROUND_COLOR),
            )
            .show(ctx, |ui| self.draw_field(ui));

        self.fps_limiter.delay();
    }
}
