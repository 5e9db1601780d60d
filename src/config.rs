use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::data::loader::DEFAULT_LOG_FILE;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Plot a simulation progress log", long_about = None)]
pub struct Cli {
    /// Progress log to open (`time:points;point_cap;pps;[vector]` per line)
    #[arg(default_value = DEFAULT_LOG_FILE, value_hint = ValueHint::FilePath)]
    pub path: PathBuf,

    /// Parse the log and print a summary without opening a window
    #[arg(long, action = ArgAction::SetTrue)]
    pub check: bool,

    /// Initial window width
    #[arg(long, default_value_t = 1200.0)]
    pub width: f32,

    /// Initial window height
    #[arg(long, default_value_t = 600.0)]
    pub height: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["progress-panda"]).unwrap();
        assert_eq!(cli.path, PathBuf::from(DEFAULT_LOG_FILE));
        assert!(!cli.check);
        assert_eq!(cli.width, 1200.0);
        assert_eq!(cli.height, 600.0);
    }

    #[test]
    fn test_path_and_flags() {
        let cli =
            Cli::try_parse_from(["progress-panda", "--check", "--width", "800", "run.log"])
                .unwrap();
        assert_eq!(cli.path, PathBuf::from("run.log"));
        assert!(cli.check);
        assert_eq!(cli.width, 800.0);
    }
}
