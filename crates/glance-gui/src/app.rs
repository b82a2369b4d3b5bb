use tracing::debug;

use glance_core::config::ViewerConfig;
use glance_core::pixmap::Pixmap;
use glance_core::viewport::ViewportTransform;

use crate::convert::pixmap_to_color_image;
use crate::input::{self, ViewAction};

pub struct GlanceApp {
    transform: ViewportTransform,
    config: ViewerConfig,
    texture: egui::TextureHandle,
    background: egui::Color32,
    /// Last inner size sent to the window, to resize only on change.
    applied_size: Option<egui::Vec2>,
}

impl GlanceApp {
    pub fn new(
        ctx: &egui::Context,
        pixmap: &Pixmap,
        transform: ViewportTransform,
        config: ViewerConfig,
    ) -> Self {
        let image = pixmap_to_color_image(pixmap);
        let texture = ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST);
        let [r, g, b] = config.background;

        Self {
            transform,
            config,
            texture,
            background: egui::Color32::from_rgb(r, g, b),
            applied_size: None,
        }
    }

    fn apply_action(&mut self, ctx: &egui::Context, action: ViewAction) {
        debug!("applying {action:?}");
        match action {
            ViewAction::SetScale(factor) => self.transform.set_scale(factor),
            ViewAction::ScaleBy(multiplier) => self.transform.scale_by(multiplier),
            ViewAction::Rotate(direction) => self.transform.rotate(direction),
            ViewAction::Reset => self.transform.reset(),
            ViewAction::Quit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }

    /// Resize the window to the current display bounding box when it
    /// changed since the last pass.
    fn sync_window_size(&mut self, ctx: &egui::Context) {
        let display = self.transform.projection().display;
        let size = egui::vec2(
            (display.width as f32).max(1.0),
            (display.height as f32).max(1.0),
        );
        if self.applied_size != Some(size) {
            debug!("window size {}x{}", size.x, size.y);
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(size));
            self.applied_size = Some(size);
        }
    }

    /// Paint the texture rotated about its center at the projection
    /// rectangle, the way a copy-with-rotation blit would.
    fn draw_image(&self, ui: &egui::Ui) {
        let projection = self.transform.projection();
        let rect = egui::Rect::from_min_size(
            egui::pos2(projection.rect.x as f32, projection.rect.y as f32),
            egui::vec2(projection.rect.width as f32, projection.rect.height as f32),
        );
        let angle = (self.transform.rotation() as f32).to_radians();

        egui::Image::new(&self.texture)
            .rotate(angle, egui::Vec2::splat(0.5))
            .paint_at(ui, rect);
    }
}

impl eframe::App for GlanceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for action in input::collect_actions(ctx, &self.config) {
            self.apply_action(ctx, action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(self.background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());

                if response.double_clicked() {
                    // Restores the scale but keeps the rotation.
                    self.apply_action(ctx, ViewAction::SetScale(self.config.initial_scale));
                }
                if response.secondary_clicked() {
                    self.apply_action(ctx, ViewAction::Quit);
                }
                if response.drag_started_by(egui::PointerButton::Primary) {
                    // Frameless window: holding the left button moves it.
                    ctx.send_viewport_cmd(egui::ViewportCommand::StartDrag);
                }

                self.draw_image(ui);
            });

        self.sync_window_size(ctx);
    }
}
