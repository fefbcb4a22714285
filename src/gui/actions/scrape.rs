// src/gui/actions/scrape.rs
use std::{sync::mpsc, thread};

use eframe::egui;

use crate::{
    gui::{app::App, progress::GuiProgress},
    runner::{self, ScrapeContext},
};

/// Start one run on a worker thread. The run itself is sequential;
/// the thread only keeps the window responsive.
pub fn scrape(app: &mut App, ui_ctx: &egui::Context) {
    if app.is_running() {
        return;
    }

    let opts = app.state.options.clone();
    logf!(
        "Scrape: Begin url={} limit_users={} filter={:?}",
        opts.scrape.url,
        opts.filter.limit_users,
        opts.filter
    );

    let (tx, rx) = mpsc::channel();
    let mut prog = GuiProgress::new(app.status.clone(), ui_ctx.clone());
    let repaint = ui_ctx.clone();

    // → This is where the scrape happens ←
    thread::spawn(move || {
        let outcome = ScrapeContext::live().and_then(|ctx| runner::run(&ctx, &opts, &mut prog));
        let _ = tx.send(outcome);
        repaint.request_repaint();
    });

    app.running = Some(rx);
    app.status("Scraping…");
}
