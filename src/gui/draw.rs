use super::{App, GuiConfig};
use crate::RunState;
use eframe::egui::{load::SizedTexture, ColorImage, Image, RichText, TextureOptions, Ui};

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text)
            .color(GuiConfig::TEXT_COLOR)
            .size(GuiConfig::TEXT_SIZE)
    }

    fn new_label(text: &str) -> RichText {
        RichText::new(text)
            .color(GuiConfig::TEXT_COLOR)
            .size(GuiConfig::LABEL_SIZE)
            .underline()
    }

    pub(super) fn draw_instructions(&mut self, ui: &mut Ui) {
        ui.label(Self::new_label("MOUSE"));
        ui.label(Self::new_text("Left Click: Add Tiles"));

        ui.add_space(GuiConfig::WIDGET_GAP);

        ui.label(Self::new_label("KEYBOARD"));
        for line in [
            "C: Clear Board",
            "R: Randomize Board",
            "S: Start Animation",
            "Esc: Exit Game",
        ] {
            ui.label(Self::new_text(line));
        }

        ui.add_space(GuiConfig::WIDGET_GAP);

        let state = match self.engine.state() {
            RunState::Running => "Running",
            RunState::Stopped => "Stopped",
        };
        ui.label(Self::new_text(&format!("State: {state}")));
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            self.engine.generation()
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            self.engine.population()
        )));
        ui.label(Self::new_text(&format!(
            "FPS: {:3} ({:.1} ms)",
            self.fps_limiter.fps().round() as u32,
            self.fps_limiter.frametime_ms()
        )));
    }

    /// Uploads the current generation as a texture, one texel per cell.
    fn refresh_texture(&mut self) {
        let n = self.engine.size();
        for (row, col, alive) in self.engine.iterate() {
            self.field_buf[row * n + col] = if alive {
                GuiConfig::ALIVE_GRAY
            } else {
                GuiConfig::DEAD_GRAY
            };
        }
        let image = ColorImage::from_gray([n, n], &self.field_buf);
        self.texture.set(image, TextureOptions::NEAREST);
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        self.refresh_texture();

        let area = ui.available_size();
        let size_px = area.x.min(area.y).max(1.);
        let source = SizedTexture::new(self.texture.id(), [size_px; 2]);
        let response = ui.add(Image::from_texture(source));
        self.field_rect.replace(response.rect);
    }
}
