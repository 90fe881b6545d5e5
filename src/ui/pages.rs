use eframe::egui::{self, Color32, Image, RichText, ScrollArea, Ui};

use crate::data::evaluation::evaluation_for;
use crate::data::loss::{loss_curves, EPOCH};
use crate::data::model::{CellValue, Table};
use crate::error::{DashboardError, Result};
use crate::state::{AppState, Page, Stage, UiEvent};
use crate::ui::{plot, table};

const HOME_IMAGE: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a/NLP.png/600px-NLP.png";

const HOME_TEXT: &str = "Aplikasi ini digunakan untuk menganalisis sentimen multi-aspek \
pada ulasan wisata Telaga Sarangan.";

const HOME_FEATURES: [&str; 3] = [
    "Menampilkan data awal, setelah labeling, preprocessing, dan binary relevance",
    "Visualisasi Training & Validation Loss",
    "Evaluasi model berdasarkan Precision, Recall, F1-Score, dan Hamming Loss",
];

// ---------------------------------------------------------------------------
// Central panel – page router
// ---------------------------------------------------------------------------

/// Render the selected page. Any error stays on this page.
pub fn current_page(ui: &mut Ui, state: &mut AppState) {
    let page = state.page;
    ui.heading(page.title());
    ui.add_space(6.0);

    if page == Page::Home {
        home(ui);
        return;
    }

    let rendered = match state.current_table() {
        Some(Ok(data)) => match page {
            Page::Preprocessing => preprocessing(ui, state, &data),
            Page::Loss => loss(ui, state, &data),
            Page::Evaluation => evaluation(ui, state, &data),
            _ => {
                table::searchable_table(ui, state, &data);
                Ok(())
            }
        },
        Some(Err(e)) => Err(e),
        None => Ok(()),
    };

    if let Err(e) = rendered {
        error_message(ui, &e);
    }
}

fn error_message(ui: &mut Ui, err: &DashboardError) {
    log::warn!("{err}");
    ui.colored_label(Color32::from_rgb(220, 60, 60), err.to_string());
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

fn home(ui: &mut Ui) {
    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.add(
            Image::new(HOME_IMAGE)
                .max_width(ui.available_width().min(600.0))
                .corner_radius(4.0),
        );
        ui.add_space(8.0);
        ui.label(HOME_TEXT);
        ui.add_space(4.0);
        ui.label(RichText::new("Fitur utama:").strong());
        for feature in HOME_FEATURES {
            ui.label(format!("• {feature}"));
        }
    });
}

fn preprocessing(ui: &mut Ui, state: &mut AppState, data: &Table) -> Result<()> {
    let mut stage = state.stage;
    egui::ComboBox::from_label("Pilih Tahap Preprocessing")
        .selected_text(stage.column())
        .show_ui(ui, |ui: &mut Ui| {
            for s in Stage::ALL {
                ui.selectable_value(&mut stage, s, s.column());
            }
        });
    if stage != state.stage {
        state.handle(UiEvent::StageChanged(stage));
    }

    let projected = data.select_column(state.stage.column())?;
    table::searchable_table(ui, state, &projected);
    Ok(())
}

fn loss(ui: &mut Ui, state: &mut AppState, data: &Table) -> Result<()> {
    let Some(epoch) = epoch_selector(ui, state, data)? else {
        return Ok(());
    };
    let curves = loss_curves(data, &epoch)?;
    plot::loss_plot(ui, &curves);
    Ok(())
}

fn evaluation(ui: &mut Ui, state: &mut AppState, data: &Table) -> Result<()> {
    let Some(epoch) = epoch_selector(ui, state, data)? else {
        return Ok(());
    };
    let summary = evaluation_for(data, &epoch)?;

    ui.add_space(6.0);
    ui.weak(format!("Epoch: {}", summary.epoch));
    for (label, value) in summary.fields() {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(RichText::new(format!("{label}:")).strong());
            ui.label(value.to_string());
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Widgets
// ---------------------------------------------------------------------------

/// Epoch dropdown over the distinct epochs of `data`, in file order.
/// Returns the epoch to show, or `None` when the table has no rows.
fn epoch_selector(ui: &mut Ui, state: &mut AppState, data: &Table) -> Result<Option<CellValue>> {
    let epochs = data.distinct(EPOCH)?;
    let Some(current) = state.selected_epoch(&epochs) else {
        ui.label("Belum ada epoch pada data ini.");
        return Ok(None);
    };

    let mut chosen = current.clone();
    egui::ComboBox::from_label("Pilih Epoch")
        .selected_text(current.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for e in &epochs {
                ui.selectable_value(&mut chosen, e.clone(), e.to_string());
            }
        });
    if chosen != current {
        state.handle(UiEvent::EpochChanged(chosen.clone()));
    }
    Ok(Some(chosen))
}
