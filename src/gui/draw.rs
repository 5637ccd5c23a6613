use super::{App, Config};
use crate::PATTERNS;
use eframe::egui::{pos2, ComboBox, Rect, Sense, Slider, Ui, Vec2};
use std::time::{Duration, Instant};

impl App {
    fn draw_run_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let label = if self.runner.is_started() {
                "Stop"
            } else {
                "Start"
            };
            if ui.button(label).clicked() {
                self.runner.toggle(Instant::now());
            }

            ui.add_enabled_ui(!self.runner.is_started(), |ui| {
                if ui.button("Next step").clicked() {
                    self.board.step();
                    self.generation += 1;
                }
            });
        });

        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.runner.stop();
                self.board.clear();
                self.generation = 0;
            }
            if ui.button("Random").clicked() {
                self.runner.stop();
                self.board.randomize(None, Config::RANDOM_FILL_RATE);
                self.generation = 0;
            }
        });
    }

    fn draw_pattern_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ComboBox::from_id_source("pattern")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });

            if ui.button("Apply").clicked() {
                self.runner.stop();
                self.board.apply_pattern(&PATTERNS[self.selected_pattern]);
                self.generation = 0;
            }
        });
    }

    fn draw_speed_control(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label("Speed:");
            let mut gens_per_sec = 1000. / self.runner.period().as_millis().max(1) as f64;
            let slider = Slider::new(
                &mut gens_per_sec,
                Config::MIN_GENS_PER_SEC..=Config::MAX_GENS_PER_SEC,
            )
            .logarithmic(true)
            .suffix(" gen/s");
            if ui.add(slider).changed() {
                self.runner
                    .set_period(Duration::from_millis((1000. / gens_per_sec) as u64));
            }
        });
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        ui.label(format!("Generation: {}", self.generation));
        ui.label(format!("Population: {}", self.board.population()));
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let pitch = Config::CELL_SIZE + Config::CELL_GAP;
        let size = Vec2::new(
            self.board.width() as f32 * pitch - Config::CELL_GAP,
            self.board.height() as f32 * pitch - Config::CELL_GAP,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0., Config::BOARD_BACKGROUND);
        self.board.for_each_cell(|row, column, alive| {
            let min = pos2(
                origin.x + column as f32 * pitch,
                origin.y + row as f32 * pitch,
            );
            let rect = Rect::from_min_size(min, Vec2::splat(Config::CELL_SIZE));
            let color = if alive {
                Config::ALIVE_COLOR
            } else {
                Config::DEAD_COLOR
            };
            painter.rect_filled(rect, Config::CELL_ROUNDING, color);
        });

        // Click to toggle, only while editing; the board is locked while
        // the simulation runs.
        if !self.runner.is_started() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let column = ((pos.x - origin.x) / pitch).floor() as i32;
                let row = ((pos.y - origin.y) / pitch).floor() as i32;
                self.board.toggle_cell(row, column);
            }
        }
    }

    pub fn draw(&mut self, ui: &mut Ui) {
        ui.horizontal_top(|ui| {
            ui.vertical(|ui| {
                ui.set_width(Config::CONTROL_PANEL_WIDTH);
                ui.heading("Game of Life");
                ui.separator();
                self.draw_run_controls(ui);
                self.draw_pattern_controls(ui);
                self.draw_speed_control(ui);
                ui.separator();
                self.draw_stats(ui);
            });

            self.draw_board(ui);
        });
    }
}
