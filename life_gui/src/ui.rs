// ui.rs - egui rendering and input for the simulator window

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life::patterns;

use crate::LifeApp;

/// Edge length of the square board canvas, in points.
const CANVAS_SIZE: f32 = 800.0;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.check_lifetime();

        if !self.paused && self.last_update.elapsed() >= self.update_interval {
            self.step_generation();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");

            ui.horizontal(|ui| {
                let button_text = if self.paused { "▶ Start" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.toggle_pause();
                }

                if ui
                    .add_enabled(self.paused, egui::Button::new("⏭ Step"))
                    .clicked()
                {
                    self.step_generation();
                }

                if ui.button("🔄 Reset").clicked() {
                    self.reseed();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.paused = true;
                    self.clear_board();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis() as f32;
                if ui
                    .add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);

                ui.separator();

                ui.checkbox(&mut self.show_debug, "Neighbor counts");
            });

            ui.label("Space pause/resume, → step, R reset, Q quit, -/= speed. Click cells to toggle them.");

            ui.separator();

            self.draw_board(ui);

            ui.separator();

            let dimension = self.grid.dimension();
            let live = self.grid.live_count();
            let total = dimension * dimension;
            ui.horizontal(|ui| {
                ui.label(format!("Cycles remaining: {}", self.lifetime));
                ui.label(format!("Generation: {}", self.generation));
                ui.label(format!("Live cells: {live}"));
                ui.label(format!(
                    "Population: {:.1}%",
                    live as f32 / total as f32 * 100.0
                ));
            });
        });

        // Keep the animation smooth while running
        if !self.paused {
            ctx.request_repaint();
        }
    }
}

impl LifeApp {
    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pause, step, reset, quit, slower, faster) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::Space),
                i.key_pressed(egui::Key::ArrowRight),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::Q),
                i.key_pressed(egui::Key::Minus),
                i.key_pressed(egui::Key::PlusEquals),
            )
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if pause {
            self.toggle_pause();
        }
        if step && self.paused {
            self.step_generation();
        }
        if reset {
            self.reseed();
        }
        if slower {
            self.slow_down();
        }
        if faster {
            self.speed_up();
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui) {
        let dimension = self.grid.dimension();
        let cell_size = CANVAS_SIZE / dimension as f32;
        let total_size = Vec2::splat(cell_size * dimension as f32);

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        // Fill background with the dead color, then paint live cells on top
        painter.rect_filled(Rect::from_min_size(origin, total_size), 0.0, self.dead_color);

        let draw_borders = cell_size >= 6.0;
        for cell in self.grid.cells() {
            let rect = Rect::from_min_size(
                egui::pos2(
                    origin.x + cell.col as f32 * cell_size,
                    origin.y + cell.row as f32 * cell_size,
                ),
                Vec2::splat(cell_size),
            );

            if cell.alive {
                painter.rect_filled(rect, 0.0, self.live_color);

                if self.show_debug {
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        cell.live_neighbors.to_string(),
                        egui::FontId::monospace((cell_size * 0.6).max(6.0)),
                        Color32::WHITE,
                    );
                }
            }

            if draw_borders {
                painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Map a click back to grid coordinates; the grid's bounds guard
        // covers positions past the last full cell
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let rel = pos - origin;
                if rel.x >= 0.0 && rel.y >= 0.0 {
                    let row = (rel.y / cell_size) as usize;
                    let col = (rel.x / cell_size) as usize;
                    self.toggle_at(row, col);
                }
            }
        }
    }
}
