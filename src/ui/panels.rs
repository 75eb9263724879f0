use eframe::egui::{self, Color32, RichText, Ui};

use crate::query::{self, QueryResult};
use crate::state::{AppState, ComparisonMode};

// ---------------------------------------------------------------------------
// Left side panel – analysis controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analysis");
    ui.separator();

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the dropdown contents so we can mutate state inside the closures.
    let months = dataset.months.clone();
    let categories = dataset.categories.clone();

    ui.strong("Comparison Type");
    egui::ComboBox::from_id_salt("comparison_type")
        .selected_text(state.mode.label())
        .show_ui(ui, |ui: &mut Ui| {
            for mode in ComparisonMode::ALL {
                if ui.selectable_label(state.mode == mode, mode.label()).clicked() {
                    state.set_mode(mode);
                }
            }
        });
    ui.add_space(8.0);

    match state.mode {
        ComparisonMode::None => {}
        ComparisonMode::SingleMonth => {
            ui.strong("Month");
            let current = state.selected_month.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("single_month")
                .selected_text(&current)
                .show_ui(ui, |ui: &mut Ui| {
                    for month in &months {
                        if ui.selectable_label(current == *month, month).clicked() {
                            state.select_month(month.clone());
                        }
                    }
                });
            ui.add_space(8.0);

            ui.strong("Category");
            let current_category = state
                .selected_category
                .clone()
                .unwrap_or_else(|| "All".to_string());
            egui::ComboBox::from_id_salt("single_category")
                .selected_text(&current_category)
                .show_ui(ui, |ui: &mut Ui| {
                    // "All" lives only here; the filter sees `None`.
                    if ui
                        .selectable_label(state.selected_category.is_none(), "All")
                        .clicked()
                    {
                        state.select_category(None);
                    }
                    for category in &categories {
                        let selected =
                            state.selected_category.as_deref() == Some(category.as_str());
                        if ui.selectable_label(selected, category).clicked() {
                            state.select_category(Some(category.clone()));
                        }
                    }
                });
        }
        ComparisonMode::Comparative => {
            ui.strong("First Month");
            let current_a = state.month_a.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("month_a")
                .selected_text(&current_a)
                .show_ui(ui, |ui: &mut Ui| {
                    for month in &months {
                        if ui.selectable_label(current_a == *month, month).clicked() {
                            state.select_month_a(month.clone());
                        }
                    }
                });
            ui.add_space(8.0);

            ui.strong("Second Month");
            let current_b = state.month_b.clone().unwrap_or_default();
            egui::ComboBox::from_id_salt("month_b")
                .selected_text(&current_b)
                .show_ui(ui, |ui: &mut Ui| {
                    for month in &months {
                        if ui.selectable_label(current_b == *month, month).clicked() {
                            state.select_month_b(month.clone());
                        }
                    }
                });
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
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.dataset {
            ui.label(format!(
                "{} stories loaded across {} months",
                table.len(),
                table.months.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – analytics queries
// ---------------------------------------------------------------------------

/// Render the query input and the last query's result.
pub fn query_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Analytics Queries");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Enter your query:");
        let response = ui.add(
            egui::TextEdit::singleline(&mut state.query_input)
                .desired_width(320.0)
                .hint_text("e.g. top 10 tv stations"),
        );
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Run").clicked() || submitted {
            state.run_query();
        }
    });

    match &state.query_result {
        Some(QueryResult::Report { heading, counts }) => {
            ui.add_space(4.0);
            ui.strong(*heading);
            if counts.is_empty() {
                ui.label("No stories matched.");
            } else {
                egui::Grid::new("query_result")
                    .striped(true)
                    .show(ui, |ui: &mut Ui| {
                        for (value, count) in &counts.entries {
                            ui.label(value);
                            ui.label(count.to_string());
                            ui.end_row();
                        }
                    });
            }
        }
        Some(QueryResult::Unrecognized) => {
            ui.add_space(4.0);
            ui.label(RichText::new(query::HELP_MESSAGE).italics());
        }
        None => {}
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open story dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} stories across {} months",
                    table.len(),
                    table.months.len()
                );
                state.set_dataset(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
