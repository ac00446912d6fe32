use std::collections::BTreeSet;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::config::{ViewerConfig, DATASET_URL, EXPORT_FILE_NAME, LICENSE_URL};
use crate::data::institution::{all_institutions, selector_label, KNOWN_INSTITUTIONS};
use crate::data::years::count_years;
use crate::state::{AppState, SelectionEvent};

const LEGEND: [&str; 5] = [
    "ER - Employment Rate",
    "Perm - Permanent",
    "BMS - Basic Monthly Salary",
    "GMS - Gross Monthly Salary",
    "Pct - Percentile",
];

const EXPORT_TOOLTIP: &str =
    "The exported CSV will follow the exact order in which the table is currently formatted";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, config: &ViewerConfig) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export Table as CSV…"))
                .clicked()
            {
                export_table(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows over {} years loaded, {} visible",
                ds.len(),
                count_years(ds),
                state.visible_indices.len()
            ));
        } else if state.loading {
            ui.label(format!("Loading {}…", config.source_path.display()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Title and attribution
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new("One Stop GES").size(28.0).strong());
    ui.add_space(6.0);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label("Contains information from");
        ui.hyperlink_to(
            "Graduate Employment Survey - NTU, NUS, SIT, SMU, SUSS & SUTD",
            DATASET_URL,
        );
        ui.label(
            ", accessed on 2nd July 2023 from Ministry of Education (MOE), \
             which is made available under the terms of the",
        );
        ui.hyperlink_to("Singapore Open Data Licence version 1.0", LICENSE_URL);
    });
}

// ---------------------------------------------------------------------------
// Year tabs and filters
// ---------------------------------------------------------------------------

/// One tab per year, most recent first.
pub fn year_tabs(ui: &mut Ui, state: &mut AppState) {
    let Some(span) = state.selection.years else {
        return;
    };
    let active = state.selection.active_tab();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for (index, year) in span.tab_years().enumerate() {
            let label = RichText::new(year.to_string()).size(16.0);
            if ui.selectable_label(active == Some(index), label).clicked() {
                state.dispatch(SelectionEvent::SelectTab(index));
            }
        }
    });
}

/// Institution selector, incomplete-row toggle, legend and export.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        institution_menu(ui, state);

        let mut hide = state.selection.hide_incomplete();
        if ui.checkbox(&mut hide, "Remove rows with no data").changed() {
            state.dispatch(SelectionEvent::SetHideIncomplete(hide));
        }
    });

    ui.add_space(4.0);

    ui.horizontal_wrapped(|ui: &mut Ui| {
        for entry in LEGEND {
            ui.label(RichText::new("●").color(Color32::from_rgb(16, 185, 129)));
            ui.weak(entry);
            ui.add_space(8.0);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui: &mut Ui| {
            if ui
                .add_enabled(state.dataset.is_some(), egui::Button::new("Export Table as CSV"))
                .on_hover_text(EXPORT_TOOLTIP)
                .clicked()
            {
                export_table(state);
            }
        });
    });
}

fn institution_menu(ui: &mut Ui, state: &mut AppState) {
    let selected = &state.selection.institutions;
    let title = match selected.len() {
        0 => "Select Universities...".to_string(),
        n if n == KNOWN_INSTITUTIONS.len() => "All universities".to_string(),
        n => format!("{n} universities"),
    };

    ui.menu_button(title, |ui: &mut Ui| {
        ui.horizontal(|ui: &mut Ui| {
            if ui.small_button("All").clicked() {
                state.dispatch(SelectionEvent::SetInstitutions(all_institutions()));
            }
            if ui.small_button("None").clicked() {
                state.dispatch(SelectionEvent::SetInstitutions(BTreeSet::new()));
            }
        });
        ui.separator();

        for (name, _) in KNOWN_INSTITUTIONS {
            let mut checked = state.selection.institutions.contains(name);
            if ui.checkbox(&mut checked, selector_label(name)).changed() {
                state.dispatch(SelectionEvent::ToggleInstitution(name.to_string()));
            }
        }
    });
}

// ---------------------------------------------------------------------------
// Footer
// ---------------------------------------------------------------------------

pub fn footer(ui: &mut Ui, config: &ViewerConfig) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.hyperlink_to("📁 View the Repository", &config.repository_url);
    });
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

/// Serialize the whole projection and save it where the user picks.
pub fn export_table(state: &mut AppState) {
    let bytes = match state.export_csv() {
        Ok(bytes) => bytes,
        Err(e) => {
            log::error!("Failed to build export: {e}");
            state.status_message = Some(format!("Error: {e}"));
            return;
        }
    };

    let Some(path) = rfd::FileDialog::new()
        .set_title("Export table")
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return;
    };

    match std::fs::write(&path, &bytes) {
        Ok(()) => {
            log::info!(
                "Exported {} rows to {}",
                state.visible_indices.len(),
                path.display()
            );
            state.status_message = None;
        }
        Err(e) => {
            log::error!("Failed to write {}: {e}", path.display());
            state.status_message = Some(format!("Error: could not write {}: {e}", path.display()));
        }
    }
}
