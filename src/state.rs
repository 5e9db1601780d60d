use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::color::ComponentColors;
use crate::data::filter::ComponentFilter;
use crate::data::loader::load_file;
use crate::data::model::{summarize, Dataset, SeriesColumns, SeriesSummary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Path of the currently loaded log.
    pub source_path: Option<PathBuf>,

    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<Dataset>,

    /// Column view of `dataset`, rebuilt on every load.
    pub columns: SeriesColumns,

    /// Min / max / last per series (cached).
    pub summary: Vec<(String, SeriesSummary)>,

    /// Which vector components are drawn.
    pub components: ComponentFilter,

    /// Colour per vector component.
    pub component_colors: ComponentColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Directory the Open dialog starts in.
    pub last_open_dir: Option<PathBuf>,
}

/// Settings persisted across application sessions.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PersistedSettings {
    pub last_open_dir: Option<PathBuf>,
}

pub const SETTINGS_KEY: &str = "progress_panda_settings";

impl AppState {
    pub fn with_settings(settings: PersistedSettings) -> Self {
        Self {
            last_open_dir: settings.last_open_dir,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> PersistedSettings {
        PersistedSettings {
            last_open_dir: self.last_open_dir.clone(),
        }
    }

    /// Ingest a newly loaded dataset: columns, summary, colours and
    /// component selection.
    pub fn set_dataset(&mut self, path: &Path, dataset: Dataset) {
        self.columns = SeriesColumns::from_dataset(&dataset);
        self.summary = summarize(&self.columns);

        let n_components = self.columns.component_count();
        self.components.reset_for(n_components);
        if self.component_colors.len() != n_components {
            self.component_colors = ComponentColors::new(n_components);
        }

        self.source_path = Some(path.to_path_buf());
        // A bare file name has an empty parent; keep the restored directory.
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            self.last_open_dir = Some(dir.to_path_buf());
        }
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Load `path` and replace the current dataset.
    ///
    /// On failure the previous dataset stays in place and the error is
    /// kept as the status message.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        match load_file(path).with_context(|| format!("loading {}", path.display())) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} samples with {} vector components from {}",
                    dataset.len(),
                    dataset.component_count(),
                    path.display()
                );
                self.set_dataset(path, dataset);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
                Err(e)
            }
        }
    }

    /// Re-read the current file.
    pub fn reload(&mut self) -> Result<()> {
        let path = self
            .source_path
            .clone()
            .context("no file loaded yet")?;
        self.open(&path)
    }

    /// File name of the loaded log, for the status bar.
    pub fn source_name(&self) -> Option<String> {
        self.source_path
            .as_deref()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_log(tag: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "progress-panda-state-{tag}-{}.csv",
            std::process::id()
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_open_builds_views() {
        let path = temp_log("open", "0:0;10;0;[1, 2, 3]\n1:4;10;4;[2, 3, 4]\n");
        let mut state = AppState::default();
        state.open(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(state.columns.len(), 2);
        assert_eq!(state.components.visible_indices(), vec![0, 1, 2]);
        assert_eq!(state.component_colors.len(), 3);
        assert_eq!(state.summary.len(), 6);
        assert_eq!(state.last_open_dir, path.parent().map(Path::to_path_buf));
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_failed_open_keeps_previous_dataset() {
        let good = temp_log("good", "0:0;10;0;[1]\n");
        let bad = temp_log("bad", "0:0;10;0;[1]\n1:0;10;[1]\n");
        let mut state = AppState::default();
        state.open(&good).unwrap();
        let err = state.open(&bad).unwrap_err();
        std::fs::remove_file(&good).ok();
        std::fs::remove_file(&bad).ok();

        assert!(format!("{err:#}").contains("line 2"));
        assert_eq!(state.source_path.as_deref(), Some(good.as_path()));
        assert_eq!(state.columns.len(), 1);
        assert!(state.status_message.unwrap().starts_with("Error:"));
    }

    #[test]
    fn test_reload_keeps_component_selection() {
        let path = temp_log("reload", "0:0;10;0;[1, 2]\n");
        let mut state = AppState::default();
        state.open(&path).unwrap();
        state.components.set_visible(0, false);

        std::fs::write(&path, "0:0;10;0;[1, 2]\n1:1;10;1;[3, 4]\n").unwrap();
        state.reload().unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(state.columns.len(), 2);
        assert_eq!(state.components.visible_indices(), vec![1]);
    }

    #[test]
    fn test_reload_without_file() {
        assert!(AppState::default().reload().is_err());
    }

    #[test]
    fn test_bare_file_name_keeps_restored_dir() {
        let mut state = AppState::with_settings(PersistedSettings {
            last_open_dir: Some(PathBuf::from("/data/runs")),
        });
        state.set_dataset(Path::new("SIMULATION_PROGRESS_OUT.csv"), Dataset::default());

        assert_eq!(state.source_name().as_deref(), Some("SIMULATION_PROGRESS_OUT.csv"));
        assert!(state.columns.is_empty());
        assert_eq!(
            state.settings(),
            PersistedSettings {
                last_open_dir: Some(PathBuf::from("/data/runs")),
            }
        );

        state.set_dataset(Path::new("other/run.csv"), Dataset::default());
        assert_eq!(state.settings().last_open_dir, Some(PathBuf::from("other")));
    }

    #[test]
    fn test_settings_round_trip() {
        let state = AppState::with_settings(PersistedSettings {
            last_open_dir: Some(PathBuf::from("/tmp/runs")),
        });
        assert_eq!(state.settings().last_open_dir, Some(PathBuf::from("/tmp/runs")));
    }
}
