// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.state.gui.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }

    let status_msg = match super::current_table(app) {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(table) => {
            let opts = &app.state.options;
            match file::export_table(&opts.export, opts.locale, table) {
                Ok(path) => format!("Exported {} rows to {}", table.len(), path.display()),
                Err(e) => {
                    loge!("Export: Failed: {e}");
                    format!("Export failed: {e}")
                }
            }
        }
    };
    app.status(status_msg);
}
