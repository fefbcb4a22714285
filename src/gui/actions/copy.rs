// src/gui/actions/copy.rs
use eframe::egui;

use crate::{config::options::ExportFormat, file, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(table) = super::current_table(app) else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    // Clipboard is always TSV; spreadsheets paste it into columns.
    let include_headers = app.state.options.export.include_headers;
    let txt = file::render(table, app.state.options.locale, ExportFormat::Tsv, include_headers);
    logf!("Copy: rows={}", table.len());

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
