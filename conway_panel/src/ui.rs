// ui.rs - eframe front end: drives the loop and draws the front buffer

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use std::time::Instant;

use crate::PanelApp;

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shutdown.is_set() {
            if !self.closing {
                tracing::info!(epochs = self.epochs, frames = self.pacer.frames(), "closing panel");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                self.closing = true;
            }
            return;
        }

        let interval = self.epoch.context().frame_interval();
        let now = Instant::now();
        if self.pacer.is_due(now, interval) {
            self.pacer.begin_frame(now);
            self.advance_frame(now);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(Color32::BLACK))
            .show(ctx, |ui| {
                let context = self.epoch.context();
                ui.horizontal(|ui| {
                    ui.colored_label(
                        Color32::GRAY,
                        format!(
                            "epoch {}  gen {}  {}  1/{}  {} Hz  live {}",
                            self.epochs,
                            self.shown.generation,
                            context.topology(),
                            context.divider(),
                            context.refresh_hz(),
                            self.shown.population,
                        ),
                    );
                });

                let canvas = self.buffers.front();
                let panel = canvas.panel();
                let pixel = self.config.pixel_size;
                let total_size = Vec2::new(panel.width as f32 * pixel, panel.height as f32 * pixel);

                let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
                let origin = response.rect.min;

                for y in 0..panel.height {
                    for x in 0..panel.width {
                        let rect = Rect::from_min_size(
                            egui::pos2(origin.x + x as f32 * pixel, origin.y + y as f32 * pixel),
                            Vec2::splat(pixel),
                        );
                        painter.rect_filled(rect, 0.0, canvas.pixel(x, y));
                    }
                }
            });

        // Sleep out the rest of the frame.
        let interval = self.epoch.context().frame_interval();
        ctx.request_repaint_after(self.pacer.remaining(Instant::now(), interval));
    }
}
