use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::component_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – component selection and series summary
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Components");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No log loaded.");
        return;
    }

    let n_components = state.components.component_count();
    if n_components == 0 {
        ui.label("Samples carry no vector components.");
    } else {
        ui.horizontal(|ui: &mut Ui| {
            if ui.small_button("All").clicked() {
                state.components.show_all();
            }
            if ui.small_button("None").clicked() {
                state.components.hide_all();
            }
            ui.label(format!(
                "{}/{n_components} shown",
                state.components.visible_indices().len()
            ));
        });

        ScrollArea::vertical()
            .id_salt("component_list")
            .max_height(ui.available_height() * 0.5)
            .auto_shrink([false, true])
            .show(ui, |ui: &mut Ui| {
                for idx in 0..n_components {
                    let text = RichText::new(component_label(idx))
                        .color(state.component_colors.color_for(idx));
                    let mut checked = state.components.is_visible(idx);
                    if ui.checkbox(&mut checked, text).changed() {
                        state.components.set_visible(idx, checked);
                    }
                }
            });
    }

    ui.add_space(8.0);
    ui.heading("Summary");
    ui.separator();
    summary_table(ui, state);
}

fn summary_table(ui: &mut Ui, state: &AppState) {
    if state.columns.is_empty() {
        ui.label("Log is empty.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto())
        .columns(Column::auto().at_least(48.0), 3)
        .header(18.0, |mut header| {
            for title in ["Series", "Min", "Max", "Last"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (label, s) in &state.summary {
                body.row(16.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(label.as_str());
                    });
                    for value in [s.min, s.max, s.last] {
                        row.col(|ui: &mut Ui| {
                            ui.monospace(format_value(value));
                        });
                    }
                });
            }
        });
}

/// Integers without decimals, everything else with three.
fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{v:.0}")
    } else {
        format!("{v:.3}")
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
            let can_reload = state.source_path.is_some();
            if ui
                .add_enabled(can_reload, egui::Button::new("Reload"))
                .clicked()
            {
                // Errors are already logged and kept in the status message.
                let _ = state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(name)) = (&state.dataset, state.source_name()) {
            ui.label(format!(
                "{name}: {} samples, {} vector components",
                ds.len(),
                ds.component_count()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open simulation progress log")
        .add_filter("Progress logs", &["csv", "log", "txt"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = &state.last_open_dir {
        dialog = dialog.set_directory(dir);
    }

    if let Some(path) = dialog.pick_file() {
        let _ = state.open(&path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(500.0), "500");
        assert_eq!(format_value(-3.0), "-3");
        assert_eq!(format_value(0.25), "0.250");
        assert_eq!(format_value(1e20), "100000000000000000000.000");
    }
}
