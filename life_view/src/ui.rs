// ui.rs - egui front end: controls, grid painter, statistics

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life::PATTERNS;

use crate::app::LifeApp;
use crate::config::interval_for;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.config.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                let session = self.session();
                let generation = session.generation();
                match session.max_generations() {
                    Some(max) => ui.label(format!("Generation: {generation} / {max}")),
                    None => ui.label(format!("Generation: {generation}")),
                };
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.config.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.config.update_interval = interval_for(speed);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.config.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.config.dead_color);
            });

            ui.horizontal(|ui| {
                ui.label("Save to:");
                ui.text_edit_singleline(&mut self.save_path);
                if ui.button("💾 Save").clicked() {
                    self.save();
                }
            });

            if !self.message.is_empty() {
                ui.label(self.message.as_str());
            }

            ui.separator();
            ui.label("Click cells to toggle them alive/dead while paused.");
            ui.separator();

            egui::ScrollArea::both().show(ui, |ui| self.draw_grid(ui));

            ui.separator();

            let grid = self.session().current();
            let total = grid.rows() * grid.cols();
            let live_cells = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", (live_cells as f32 / total as f32) * 100.0));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn draw_grid(&mut self, ui: &mut egui::Ui) {
        let box_size = self.config.cell_size;
        let spacing = self.config.spacing;
        let pitch = box_size + spacing;
        let (rows, cols) = (self.session().rows(), self.session().cols());

        let total_size = Vec2::new(pitch * cols as f32 - spacing, pitch * rows as f32 - spacing);
        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        // Fill background
        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        let grid = self.session().current();
        for (row, cells) in grid.cells().iter().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                    Vec2::splat(box_size),
                );
                let cell_color =
                    if alive { self.config.live_color } else { self.config.dead_color };

                painter.rect_filled(rect, 1.0, cell_color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if offset.x >= 0.0 && offset.y >= 0.0 {
                    self.toggle_cell((offset.y / pitch) as usize, (offset.x / pitch) as usize);
                }
            }
        }
    }
}
