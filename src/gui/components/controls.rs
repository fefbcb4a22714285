// src/gui/components/controls.rs
//
// Left panel: listing URL, filter bounds, harvest wait mode, locale, start.

use eframe::egui;

use crate::{
    config::options::{Locale, WaitPolicy},
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let running = app.is_running();

    ui.add_enabled_ui(!running, |ui| {
        let opts = &mut app.state.options;

        ui.label("Listing URL:");
        if ui
            .add(egui::TextEdit::singleline(&mut opts.scrape.url).font(egui::TextStyle::Monospace))
            .lost_focus()
        {
            logf!("UI: url → {}", opts.scrape.url);
        }

        ui.add_space(6.0);
        egui::Grid::new("filter_grid").num_columns(2).spacing([8.0, 4.0]).show(ui, |ui| {
            let f = &mut opts.filter;
            bound_row(ui, "Min visits:", &mut f.min_visits);
            bound_row(ui, "Max visits:", &mut f.max_visits);
            bound_row(ui, "Min votes:", &mut f.min_votes);
            bound_row(ui, "Max votes:", &mut f.max_votes);

            ui.label("Limit users:");
            if ui
                .add(egui::DragValue::new(&mut f.limit_users).range(1..=usize::MAX))
                .changed()
            {
                logd!("UI: limit_users → {}", f.limit_users);
            }
            ui.end_row();
        });

        ui.add_space(6.0);
        let mut wait_growth = matches!(opts.scrape.wait, WaitPolicy::UntilGrowth { .. });
        if ui
            .checkbox(&mut wait_growth, "Wait for page growth")
            .on_hover_text("Poll the page height after each scroll instead of a fixed pause")
            .changed()
        {
            opts.scrape.wait = if wait_growth { WaitPolicy::until_growth() } else { WaitPolicy::default() };
            logf!("UI: wait → {:?}", opts.scrape.wait);
        }

        ui.horizontal(|ui| {
            ui.label("Columns:");
            let before = opts.locale;
            egui::ComboBox::from_id_salt("locale")
                .selected_text(opts.locale.label())
                .show_ui(ui, |ui| {
                    for loc in [Locale::En, Locale::Es] {
                        ui.selectable_value(&mut opts.locale, loc, loc.label());
                    }
                });
            if opts.locale != before {
                logf!("UI: locale → {:?}", opts.locale);
            }
        });
    });

    ui.add_space(10.0);
    let ui_ctx = ui.ctx().clone();
    if ui
        .add_enabled(!running, egui::Button::new(egui::RichText::new("Start Scraping").strong()))
        .clicked()
    {
        actions::scrape(app, &ui_ctx);
    }

    ui.separator();
    let status = app.status.lock().map(|s| s.clone()).unwrap_or_default();
    ui.horizontal_wrapped(|ui| {
        if running {
            ui.spinner();
        }
        ui.label(status);
    });
}

fn bound_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.label(label);
    if ui
        .add(egui::DragValue::new(value).range(0.0..=f64::MAX).speed(1.0))
        .changed()
    {
        logd!("UI: {} {}", label, value);
    }
    ui.end_row();
}
