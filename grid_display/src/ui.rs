// ui.rs - Paints the canvas and advances one generation per interval

use eframe::egui;
use egui::{Color32, Rect, Vec2, pos2};
use std::time::Instant;

use crate::LifeApp;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.last_update.elapsed() >= self.update_interval {
            self.life.render();
            self.last_update = Instant::now();
        }

        // Upload the surface only when the automaton drew on it
        if self.life.view_mut().take_dirty() {
            let image = self.life.view().image().clone();
            match &mut self.texture {
                Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
                None => {
                    self.texture = Some(ctx.load_texture("life", image, egui::TextureOptions::NEAREST));
                }
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Statistics
            let layout = *self.life.view().layout();
            let total = layout.columns() * layout.rows();
            let live_cells = self.life.population();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.life.generation()));
                ui.separator();
                ui.label(format!("Rule: {}", self.life.rule()));
                ui.separator();
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });

            ui.separator();

            let (width, height) = layout.surface_size();
            let (response, painter) =
                ui.allocate_painter(Vec2::new(width as f32, height as f32), egui::Sense::hover());

            if let Some(texture) = &self.texture {
                painter.image(
                    texture.id(),
                    response.rect,
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        });

        ctx.request_repaint_after(self.update_interval);
    }
}
