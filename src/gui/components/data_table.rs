// src/gui/components/data_table.rs
//
// Read-only view of the last result table. The Links column renders as
// hyperlinks; everything else is plain text.

use eframe::egui::{self, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{data::LINKS_COL, gui::app::App};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(table) = app.table.as_ref() else {
        ui.centered_and_justified(|ui| {
            ui.weak("Set the filters and press Start Scraping");
        });
        return;
    };
    if table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.weak("No authors matched");
        });
        return;
    }

    let headers = table.headers(app.state.options.locale);
    let cells = table.to_cells();

    egui::ScrollArea::horizontal()
        .id_salt("result_table_hscroll")
        .show(ui, |ui| {
            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);

            let avail_h = ui.available_height();
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for ci in 0..headers.len() {
                builder = builder.column(if ci == LINKS_COL {
                    Column::remainder().at_least(220.0)
                } else {
                    Column::auto().at_least(60.0).resizable(true)
                });
            }

            builder
                .header(ROW_H + 4.0, |mut header| {
                    for h in &headers {
                        header.col(|ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, cells.len(), |mut row| {
                        let Some(r) = cells.get(row.index()) else { return };
                        for (ci, cell) in r.iter().enumerate() {
                            row.col(|ui| {
                                if ci == LINKS_COL && !cell.is_empty() {
                                    ui.hyperlink(cell);
                                } else {
                                    ui.label(cell);
                                }
                            });
                        }
                    });
                });
        });
}
