//! Configuration loaded from `.profilemap.toml`.
//!
//! The file is discovered by walking up from the current directory, bounded
//! to a fixed depth. Missing files and invalid values fall back to defaults
//! with a warning; configuration can degrade but never aborts a run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Chart geometry and label settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// X coordinate of the chart center
    #[serde(default = "default_center")]
    pub center_x: f64,

    /// Y coordinate of the chart center
    #[serde(default = "default_center")]
    pub center_y: f64,

    /// Distance of every point from the center
    #[serde(default = "default_radius")]
    pub radius: f64,

    /// Label line budget in display columns
    #[serde(default = "default_label_budget")]
    pub label_budget: usize,
}

fn default_center() -> f64 {
    0.0
}

fn default_radius() -> f64 {
    100.0
}

fn default_label_budget() -> usize {
    12
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            center_x: default_center(),
            center_y: default_center(),
            radius: default_radius(),
            label_budget: default_label_budget(),
        }
    }
}

impl ChartConfig {
    /// Check the settings are renderable
    fn validate(&self) -> Result<(), String> {
        if self.radius <= 0.0 || !self.radius.is_finite() {
            return Err(format!("radius must be positive, got {}", self.radius));
        }
        if self.label_budget == 0 {
            return Err("label_budget must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Top-level configuration file shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilemapConfig {
    pub chart: Option<ChartConfig>,
}

impl ProfilemapConfig {
    /// Chart settings with defaults applied
    pub fn chart_config(&self) -> ChartConfig {
        self.chart.clone().unwrap_or_default()
    }
}

/// Pure function to read config file contents
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
#[cfg(test)]
pub(crate) fn parse_and_validate_config(contents: &str) -> Result<ProfilemapConfig, String> {
    parse_and_validate_config_impl(contents)
}

fn parse_and_validate_config_impl(contents: &str) -> Result<ProfilemapConfig, String> {
    let mut config = toml::from_str::<ProfilemapConfig>(contents)
        .map_err(|e| format!("Failed to parse .profilemap.toml: {}", e))?;

    if let Some(ref chart) = config.chart {
        if let Err(e) = chart.validate() {
            eprintln!("Warning: Invalid chart settings: {}. Using defaults.", e);
            config.chart = Some(ChartConfig::default());
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
fn try_load_config_from_path(config_path: &Path) -> Option<ProfilemapConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config_impl(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

fn directory_ancestors_impl(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

pub fn load_config() -> ProfilemapConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return ProfilemapConfig::default();
        }
    };

    directory_ancestors_impl(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".profilemap.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            ProfilemapConfig::default()
        })
}

static CONFIG: OnceLock<ProfilemapConfig> = OnceLock::new();

/// Get the cached configuration
pub fn get_config() -> &'static ProfilemapConfig {
    CONFIG.get_or_init(load_config)
}
