use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::filter::{preview, search};
use crate::data::model::Table;
use crate::state::{AppState, UiEvent};

// ---------------------------------------------------------------------------
// Searchable table
// ---------------------------------------------------------------------------

/// Search box plus the first rows of `table` that match it.
pub fn searchable_table(ui: &mut Ui, state: &mut AppState, table: &Table) {
    let mut query = state.query.clone();
    ui.horizontal(|ui: &mut Ui| {
        ui.label("Cari data:");
        ui.add(egui::TextEdit::singleline(&mut query).desired_width(280.0));
    });
    if query != state.query {
        state.handle(UiEvent::QueryChanged(query));
    }

    if table.is_empty() {
        ui.weak("File ini tidak berisi baris data.");
        return;
    }

    let hits = search(table, &state.query);
    let shown = preview(&hits);
    ui.add_space(4.0);

    // Column layout changes with the table, so give every shape its own id.
    let salt = (state.page, table.columns.join("\u{1f}"));
    ui.push_id(salt, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(false)
            .column(Column::auto())
            .columns(Column::auto().at_least(60.0).clip(true), table.columns.len())
            .header(20.0, |mut header| {
                header.col(|ui: &mut Ui| {
                    ui.strong("");
                });
                for name in &table.columns {
                    header.col(|ui: &mut Ui| {
                        ui.strong(name);
                    });
                }
            })
            .body(|mut body| {
                for &idx in shown {
                    body.row(18.0, |mut row| {
                        row.col(|ui: &mut Ui| {
                            ui.weak(idx.to_string());
                        });
                        for cell in &table.rows[idx].cells {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                }
            });
    });

    ui.add_space(4.0);
    ui.weak(format!(
        "Menampilkan {} dari {} baris",
        shown.len(),
        hits.len()
    ));
}
