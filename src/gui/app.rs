use super::Config;
use crate::{Board, Runner};
use eframe::egui::{CentralPanel, Context, Frame, Margin};
use std::time::Instant;

pub struct App {
    pub(super) board: Board,
    pub(super) runner: Runner,
    pub(super) generation: u64,         // Generations since the last reset.
    pub(super) selected_pattern: usize, // Index into PATTERNS for the combo box.
}

impl App {
    pub fn new() -> Self {
        Self::with_board(Board::new(Config::BOARD_WIDTH, Config::BOARD_HEIGHT))
    }

    /// Wraps an already-seeded board, e.g. one built from an initial
    /// live-cell set.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            runner: Runner::new(Config::UPDATE_PERIOD),
            generation: 0,
            selected_pattern: 0,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // One poll per frame: a due tick advances the automaton exactly one
        // generation, late frames coalesce the backlog inside the runner.
        if self.runner.poll(Instant::now()) {
            self.board.step();
            self.generation += 1;
        }

        CentralPanel::default()
            .frame(Frame::default().inner_margin(Margin::same(Config::FRAME_MARGIN)))
            .show(ctx, |ui| {
                self.draw(ui);
            });

        if let Some(wait) = self.runner.time_until_due(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
