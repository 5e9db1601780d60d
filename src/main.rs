mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use app::ProgressPandaApp;
use clap::Parser;
use config::Cli;
use data::model::{summarize, Dataset, SeriesColumns};
use eframe::egui;

/// Load the log named on the command line, logging the outcome.
fn load_startup(path: &Path) -> Result<Dataset> {
    let dataset = data::loader::load_file(path)
        .with_context(|| format!("loading {}", path.display()))
        .inspect_err(|e| log::error!("Failed to load file: {e:#}"))?;
    log::info!(
        "Loaded {} samples with {} vector components from {}",
        dataset.len(),
        dataset.component_count(),
        path.display()
    );
    if dataset.is_empty() {
        log::warn!("{} contains no samples", path.display());
    }
    Ok(dataset)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Fail before opening a window: a log that does not parse is never plotted.
    let dataset = load_startup(&cli.path)?;

    if cli.check {
        let columns = SeriesColumns::from_dataset(&dataset);
        println!(
            "{}: {} samples, {} vector components",
            cli.path.display(),
            columns.len(),
            columns.component_count()
        );
        for (label, s) in summarize(&columns) {
            println!("  {label:<10} min {:>12} max {:>12} last {:>12}", s.min, s.max, s.last);
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([cli.width, cli.height])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let title = match cli.path.file_name() {
        Some(name) => format!("Progress Panda – {}", name.to_string_lossy()),
        None => "Progress Panda".to_string(),
    };
    let path = cli.path.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let mut app = ProgressPandaApp::new(cc);
            app.state.set_dataset(&path, dataset);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow!("window error: {e}"))
}
