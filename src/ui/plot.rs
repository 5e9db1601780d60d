use eframe::egui::{Ui, Vec2};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::SCALAR_SERIES_COLOR;
use crate::data::model::component_label;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Progress charts (central panel)
// ---------------------------------------------------------------------------

/// Render the 2×2 grid: points, pps / vector components, point cap.
pub fn progress_charts(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a progress log to view it  (File → Open…)");
        });
        return;
    }

    let spacing = ui.spacing().item_spacing;
    let cell = cell_size(ui.available_size(), spacing);
    let cols = &state.columns;

    ui.columns(2, |ui: &mut [Ui]| {
        scalar_chart(&mut ui[0], "points_plot", "Points", cols.xy(&cols.points), cell.y);
        scalar_chart(
            &mut ui[1],
            "pps_plot",
            "Points Per Second",
            cols.xy(&cols.ppss),
            cell.y,
        );
    });
    ui.columns(2, |ui: &mut [Ui]| {
        vector_chart(&mut ui[0], state, cell.y);
        scalar_chart(
            &mut ui[1],
            "point_cap_plot",
            "Point Cap",
            cols.xy(&cols.point_caps),
            cell.y,
        );
    });
}

/// Size of one chart so that two rows and two columns fill `available`.
fn cell_size(available: Vec2, spacing: Vec2) -> Vec2 {
    Vec2::new(
        ((available.x - spacing.x) / 2.0).max(0.0),
        ((available.y - spacing.y) / 2.0).max(0.0),
    )
}

fn scalar_chart(ui: &mut Ui, id: &str, y_label: &str, points: Vec<[f64; 2]>, height: f32) {
    Plot::new(id)
        .x_axis_label("Time")
        .y_axis_label(y_label)
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(PlotPoints::from(points))
                .name("Value")
                .color(SCALAR_SERIES_COLOR)
                .width(1.5);
            plot_ui.line(line);
        });
}

/// One line per visible vector component, coloured by component index.
fn vector_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let cols = &state.columns;

    Plot::new("vector_plot")
        .legend(Legend::default())
        .x_axis_label("Time")
        .y_axis_label("Vector Component Value")
        .height(height)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for idx in state.components.visible_indices() {
                let line = Line::new(PlotPoints::from(cols.component_xy(idx)))
                    .name(component_label(idx))
                    .color(state.component_colors.color_for(idx))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}
