use eframe::egui::{self, Ui};

use crate::state::{AppState, Page, UiEvent};

// ---------------------------------------------------------------------------
// Left side panel – page menu
// ---------------------------------------------------------------------------

/// Render the sidebar: title and the single-select page menu.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.add_space(4.0);
    ui.heading("📊 Dashboard Sentimen Analysis");
    ui.separator();

    ui.strong("Pilih Halaman");
    for page in Page::ALL {
        if ui.radio(state.page == page, page.label()).clicked() {
            state.handle(UiEvent::SelectPage(page));
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Pilih folder data…").clicked() {
                pick_data_dir(state);
                ui.close_menu();
            }
            if ui.button("Muat ulang data").clicked() {
                state.handle(UiEvent::ReloadData);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("Folder data: {}", state.data_dir.display()));
    });
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

pub fn pick_data_dir(state: &mut AppState) {
    let folder = rfd::FileDialog::new()
        .set_title("Pilih folder data")
        .set_directory(&state.data_dir)
        .pick_folder();

    if let Some(dir) = folder {
        state.handle(UiEvent::DataDirChanged(dir));
    }
}
