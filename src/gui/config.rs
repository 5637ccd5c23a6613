use eframe::egui::Color32;
use std::time::Duration;

pub struct Config;

impl Config {
    pub const BOARD_WIDTH: usize = 30;
    pub const BOARD_HEIGHT: usize = 30;
    pub const UPDATE_PERIOD: Duration = Duration::from_millis(500);
    pub const RANDOM_FILL_RATE: f64 = 0.3;

    pub const FRAME_MARGIN: f32 = 12.;
    pub const CONTROL_PANEL_WIDTH: f32 = 260.;

    pub const CELL_SIZE: f32 = 18.;
    pub const CELL_GAP: f32 = 1.;
    pub const CELL_ROUNDING: f32 = 1.;
    pub const ALIVE_COLOR: Color32 = Color32::from_rgb(0x39, 0xd3, 0x53);
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(36, 36, 36);
    pub const BOARD_BACKGROUND: Color32 = Color32::BLACK;

    pub const MIN_GENS_PER_SEC: f64 = 0.5;
    pub const MAX_GENS_PER_SEC: f64 = 20.;
}
