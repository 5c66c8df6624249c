//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory where dataset files are stored.
    pub datasets_dir: PathBuf,

    /// Default chart layout values.
    pub chart: ChartDefaults,

    /// Default transition values.
    pub transition: TransitionDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default chart layout parameters, in drawing units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartDefaults {
    /// Drawable graph width.
    pub graph_width: f64,

    /// Drawable graph height.
    pub graph_height: f64,

    /// Margin above the highest value.
    pub top_margin: f64,

    /// Extra horizontal room past the last month.
    pub right_pad: f64,
}

/// Default transition parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionDefaults {
    /// Transition duration in milliseconds.
    pub duration_ms: u64,

    /// Easing function name (e.g., "ease-in-out", "linear").
    pub easing: String,

    /// Retrigger policy name ("restart" or "ignore").
    pub retrigger: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "chartmorph=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            datasets_dir: dirs_default_datasets(),
            chart: ChartDefaults::default(),
            transition: TransitionDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            graph_width: 600.0,
            graph_height: 300.0,
            top_margin: 35.0,
            right_pad: 52.0,
        }
    }
}

impl Default for TransitionDefaults {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            easing: "ease-in-out".to_string(),
            retrigger: "restart".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        let config_path = config_file_path();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("chartmorph").join("config.json")
}

/// Default datasets directory.
fn dirs_default_datasets() -> PathBuf {
    let base = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".local").join("share")
        });
    base.join("chartmorph").join("datasets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_layout() {
        let config = AppConfig::default();
        assert_eq!(config.chart.graph_width, 600.0);
        assert_eq!(config.chart.graph_height, 300.0);
        assert_eq!(config.transition.duration_ms, 500);
        assert_eq!(config.transition.easing, "ease-in-out");
    }

    #[test]
    fn test_config_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.chart.top_margin, config.chart.top_margin);
        assert_eq!(parsed.transition.retrigger, config.transition.retrigger);
    }
}
