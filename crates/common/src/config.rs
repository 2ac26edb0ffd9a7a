//! Application configuration.

use framer_model::fit_mode::FitMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramerConfig {
    /// Batch and single export settings.
    pub export: ExportDefaults,

    /// Selection outline drawn around the target region.
    pub outline: OutlineStyle,

    /// Layout mode used when none is given on the command line
    /// (`contain`, `fill-center`, `pannable-cover`, `tile`).
    pub default_mode: FitMode,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default export parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportDefaults {
    /// Pause between rendering an item and capturing it, in milliseconds.
    pub settle_delay_ms: u64,

    /// Encoding used for exported rasters.
    pub format: OutputFormat,

    /// File name prefix; the 1-based item index and extension are appended.
    pub filename_prefix: String,

    /// Directory exports are written to.
    pub output_dir: PathBuf,
}

/// Encoded raster formats an export can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = crate::FramerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            other => Err(crate::FramerError::config(format!(
                "Unknown output format: {other}. Use: png, jpeg"
            ))),
        }
    }
}

/// Stroke used for the target region outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutlineStyle {
    /// RGBA stroke color.
    pub color: [u8; 4],

    /// Line width in backing pixels, centered on the rectangle edge.
    pub width: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "framer=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for FramerConfig {
    fn default() -> Self {
        Self {
            export: ExportDefaults::default(),
            outline: OutlineStyle::default(),
            default_mode: FitMode::Contain,
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            settle_delay_ms: 500,
            format: OutputFormat::Png,
            filename_prefix: "framed-photo".to_string(),
            output_dir: PathBuf::from("."),
        }
    }
}

impl Default for OutlineStyle {
    fn default() -> Self {
        Self {
            // #1e90ff
            color: [0x1e, 0x90, 0xff, 0xff],
            width: 2.0,
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

impl ExportDefaults {
    /// Settle delay as a duration.
    pub fn settle_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.settle_delay_ms)
    }
}

impl FramerConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &std::path::Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
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
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("framer").join("config.json")
}
