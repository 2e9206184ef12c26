use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed break subtracted from every row, in minutes
    pub break_minutes: i64,
    pub check_in_cell: usize,
    pub check_out_cell: usize,
    /// Rows with fewer cells are decorative and never annotated
    pub min_row_cells: usize,
    pub summary_colspan: u32,
    pub header_label: String,
    /// Container class of the header and data tables
    pub grid_class: String,
    /// Host attribute dropped from cloned cells
    pub tracking_attribute: String,
    pub settle_delay_ms: u64,
    pub run_cooldown_ms: u64,
    pub schedule_cooldown_ms: u64,
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            break_minutes: 60,
            check_in_cell: 1,
            check_out_cell: 3,
            min_row_cells: 5,
            summary_colspan: 8,
            header_label: "當日工時".to_string(),
            grid_class: "ta_grid_table".to_string(),
            tracking_attribute: "data-reactid".to_string(),
            settle_delay_ms: 300,
            run_cooldown_ms: 500,
            schedule_cooldown_ms: 2000,
            poll_interval_ms: 250,
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    /// Load the configuration from `custom` if given, else from the default
    /// file if it exists, else return the built-in defaults.
    pub fn load(custom: Option<&Path>) -> AppResult<Self> {
        match custom {
            Some(path) => Self::load_from(path),
            None => {
                let path = Self::config_file();
                if path.exists() {
                    Self::load_from(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// List of inconsistencies; empty when the configuration is usable.
    pub fn check(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.summary_colspan == 0 {
            problems.push("summary_colspan must be at least 1".to_string());
        }
        for (name, idx) in [
            ("check_in_cell", self.check_in_cell),
            ("check_out_cell", self.check_out_cell),
        ] {
            if idx >= self.min_row_cells {
                problems.push(format!(
                    "{name} ({idx}) must be lower than min_row_cells ({})",
                    self.min_row_cells
                ));
            }
        }
        if self.poll_interval_ms == 0 {
            problems.push("poll_interval_ms must be greater than 0".to_string());
        }
        if self.header_label.trim().is_empty() {
            problems.push("header_label must not be empty".to_string());
        }

        problems
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    pub fn run_cooldown(&self) -> Duration {
        Duration::from_millis(self.run_cooldown_ms)
    }

    pub fn schedule_cooldown(&self) -> Duration {
        Duration::from_millis(self.schedule_cooldown_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}
