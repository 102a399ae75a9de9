// ui.rs - egui rendering and input translation for the session

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::LifeApp;
use life::PointerButton;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drive the playback schedule once per frame
        self.session.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.session.is_paused() { "▶ Play" } else { "⏸ Pause" };
                if ui.button(button_text).clicked() {
                    self.session.toggle_play(Instant::now());
                }

                if ui.button("⏹ Restart").clicked() {
                    self.session.restart();
                }

                if ui.button("🎲 Random Fill").clicked() {
                    self.session.random_fill();
                }

                let mut show_grid = self.session.grid_visibility();
                if ui.checkbox(&mut show_grid, "Show grid").changed() {
                    self.session.set_grid_visibility(show_grid);
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.session.generation()));
            });

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let millis = self.session.speed().as_millis().max(1) as f32;
                let mut per_second = 1000.0 / millis;
                if ui
                    .add(egui::Slider::new(&mut per_second, 0.5..=60.0).suffix(" gen/sec"))
                    .changed()
                {
                    self.session
                        .set_speed(Duration::from_millis((1000.0 / per_second) as u64));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Left-drag paints cells, right-drag erases. Hovering highlights the cell under the pointer.");

            ui.separator();

            // Grid canvas
            let cell_size = self.session.cell_size();
            let cols = self.session.grid().width();
            let rows = self.session.grid().height();

            let canvas_size = Vec2::new(cols as f32 * cell_size, rows as f32 * cell_size);
            let (response, painter) = ui.allocate_painter(canvas_size, egui::Sense::click_and_drag());
            let origin = response.rect.min;

            // Pointer translation: hover highlight plus press/drag painting
            match response.hover_pos() {
                Some(pos) => {
                    let local = pos - origin;
                    self.session.hover(local.x, local.y);

                    let (primary, secondary) =
                        ctx.input(|i| (i.pointer.primary_down(), i.pointer.secondary_down()));
                    if primary {
                        self.session.paint(local.x, local.y, PointerButton::Primary);
                    } else if secondary {
                        self.session.paint(local.x, local.y, PointerButton::Secondary);
                    }
                }
                // Pointer left the canvas: drop the highlight
                None => self.session.hover(-1.0, -1.0),
            }

            // Draw the board
            painter.rect_filled(Rect::from_min_size(origin, canvas_size), 0.0, self.dead_color);

            let grid_line = Color32::from_rgba_unmultiplied(255, 255, 255, 77);
            let highlight = Color32::from_gray(150);
            let show_grid = self.session.grid_visibility();
            let grid = self.session.grid();

            grid.for_each(|cell, row, col| {
                let rect = Rect::from_min_size(
                    egui::pos2(
                        origin.x + col as f32 * cell_size,
                        origin.y + row as f32 * cell_size,
                    ),
                    Vec2::splat(cell_size),
                );

                if cell.alive {
                    painter.rect_filled(rect, 0.0, self.live_color);
                } else if show_grid {
                    painter.rect_stroke(rect, 0.0, Stroke::new(0.5, grid_line));
                }

                if cell.highlighted {
                    painter.rect_stroke(rect, 0.0, Stroke::new(1.0, highlight));
                }
            });

            ui.separator();

            // Statistics
            let mut live_cells = 0usize;
            grid.for_each(|cell, _, _| live_cells += cell.alive as usize);
            let total = cols * rows;

            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / total as f32 * 100.0
                ));
                ui.label(if self.session.is_paused() { "Paused" } else { "Running" });
            });
        });

        // Keep frames coming while running; otherwise only when state changed
        if self.session.take_redraw() || !self.session.is_paused() {
            ctx.request_repaint();
        }
    }
}
