use std::path::Path;

use eframe::egui;

use crate::data::loader;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MediaPulseApp {
    pub state: AppState,
}

impl Default for MediaPulseApp {
    fn default() -> Self {
        let mut state = AppState::default();

        // Pick up the default dataset if it sits in the working directory.
        if Path::new(loader::DEFAULT_DATASET).exists() {
            match loader::load_default() {
                Ok(table) => state.set_dataset(table.clone()),
                Err(e) => {
                    log::error!("Failed to load {}: {e}", loader::DEFAULT_DATASET);
                    state.status_message = Some(format!("Error: {e}"));
                }
            }
        } else {
            log::info!(
                "{} not found, waiting for File → Open…",
                loader::DEFAULT_DATASET
            );
        }

        Self { state }
    }
}

impl eframe::App for MediaPulseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: analysis controls ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: analytics queries ----
        egui::TopBottomPanel::bottom("query_panel")
            .resizable(true)
            .default_height(180.0)
            .show(ctx, |ui| {
                panels::query_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            charts::dashboard(ui, &self.state);
        });
    }
}
