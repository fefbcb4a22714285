// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use wattpad_mate::{config::consts::LOG_FILE, config::state::GuiState, gui};

fn main() {
    if let Err(e) = wattpad_mate::log::init(LOG_FILE) {
        eprintln!("Log init failed: {e}");
    }

    let win = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Wattpad Mate")
            .with_inner_size([win.window_w as f32, win.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
