// main.rs - Desktop front-end for the life engine

use eframe::egui;
use std::time::Duration;

mod ui;

use life::{Session, Settings};

const GRID_COLS: usize = 96;
const GRID_ROWS: usize = 64;
const CELL_SIZE: f32 = 10.0;
const CONTROLS_HEIGHT: f32 = 130.0;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            GRID_COLS as f32 * CELL_SIZE + 20.0,
            GRID_ROWS as f32 * CELL_SIZE + CONTROLS_HEIGHT,
        ]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeApp::default())),
    )
}

pub struct LifeApp {
    session: Session,
    live_color: egui::Color32,
    dead_color: egui::Color32,
}

impl Default for LifeApp {
    fn default() -> Self {
        let settings = Settings {
            resolution: CELL_SIZE,
            density: 1.4,
            speed: Duration::from_millis(50),
            grid_visibility: false,
        };
        let session = Session::new(settings, GRID_COLS, GRID_ROWS)
            .expect("grid dimensions are positive");

        Self {
            session,
            live_color: egui::Color32::WHITE,
            dead_color: egui::Color32::BLACK,
        }
    }
}
