use eframe::egui;

use crate::state::{AppState, PersistedSettings, SETTINGS_KEY};
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ProgressPandaApp {
    pub state: AppState,
}

impl ProgressPandaApp {
    /// Restore persisted settings, if any.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: PersistedSettings = cc
            .storage
            .and_then(|s| eframe::get_value(s, SETTINGS_KEY))
            .unwrap_or_default();
        Self {
            state: AppState::with_settings(settings),
        }
    }
}

impl eframe::App for ProgressPandaApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, SETTINGS_KEY, &self.state.settings());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: components and summary ----
        egui::SidePanel::left("component_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::progress_charts(ui, &self.state);
        });
    }
}
