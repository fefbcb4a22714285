// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex, mpsc::Receiver},
    time::Duration,
};

use eframe::egui;

use crate::{
    config::state::AppState,
    data::ResultTable,
    error::ScrapeError,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Wattpad Mate",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::new())))),
    )?;
    Ok(())
}

pub type ScrapeOutcome = Result<ResultTable, ScrapeError>;

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (mapped onto ExportOptions on export)
    pub out_path_dirty: bool,

    // last finished run; None until the first one ends
    pub table: Option<ResultTable>,

    // status/progress (the scrape thread writes here)
    pub status: Arc<Mutex<String>>,
    pub running: Option<Receiver<ScrapeOutcome>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: url={}", state.options.scrape.url);
        Self {
            state,
            out_path_dirty: false,
            table: None,
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Pick up a finished run, if any.
    fn poll_scrape(&mut self) {
        let Some(rx) = &self.running else { return };
        match rx.try_recv() {
            Ok(Ok(table)) => {
                logf!("Scrape: OK rows={}", table.len());
                self.status(if table.is_empty() {
                    s!("No results")
                } else {
                    format!("Ready: {} authors", table.len())
                });
                self.table = Some(table);
                self.running = None;
            }
            Ok(Err(e)) => {
                loge!("Scrape: Error: {e}");
                self.status(format!("Error: {e}"));
                self.table = None;
                self.running = None;
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {}
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                loge!("Scrape: worker ended without a result");
                self.status("Error: scrape stopped unexpectedly");
                self.running = None;
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_scrape();
        if self.is_running() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }

        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading("Wattpad Mate"));
        });

        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                crate::gui::components::controls::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            crate::gui::components::data_table::draw(ui, self);
        });
    }
}
