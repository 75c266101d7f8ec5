//! Configuration loading.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! defaults so the UI can still launch.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    /// Widths below this are laid out as the compact (feed) presentation.
    #[serde(default = "default_compact_threshold")]
    pub compact_threshold: f32,
    #[serde(default = "default_spin_duration_secs")]
    pub spin_duration_secs: f32,
    /// Net horizontal drag, in logical pixels, that counts as a swipe.
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold: f32,
    /// Feed sections within this index distance of the viewport render full
    /// cards; the rest stay placeholders.
    #[serde(default = "default_feed_window")]
    pub feed_window: usize,
    #[serde(default = "default_scroll_hint_secs")]
    pub scroll_hint_secs: f32,
    #[serde(default = "default_copied_flash_secs")]
    pub copied_flash_secs: f32,
    /// Show name appended to share titles.
    #[serde(default = "default_podcast_name")]
    pub podcast_name: String,
    #[serde(default = "default_assistant_url")]
    pub assistant_url: String,
    #[serde(default = "default_saved_episodes_path")]
    pub saved_episodes_path: String,
    #[serde(default = "default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: default_window_width(),
            window_height: default_window_height(),
            compact_threshold: default_compact_threshold(),
            spin_duration_secs: default_spin_duration_secs(),
            drag_threshold: default_drag_threshold(),
            feed_window: default_feed_window(),
            scroll_hint_secs: default_scroll_hint_secs(),
            copied_flash_secs: default_copied_flash_secs(),
            podcast_name: default_podcast_name(),
            assistant_url: default_assistant_url(),
            saved_episodes_path: default_saved_episodes_path(),
            log_level: default_log_level(),
        }
    }
}

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

fn default_window_width() -> f32 {
    1280.0
}

fn default_window_height() -> f32 {
    800.0
}

fn default_compact_threshold() -> f32 {
    768.0
}

fn default_spin_duration_secs() -> f32 {
    3.0
}

fn default_drag_threshold() -> f32 {
    50.0
}

fn default_feed_window() -> usize {
    2
}

fn default_scroll_hint_secs() -> f32 {
    5.0
}

fn default_copied_flash_secs() -> f32 {
    2.0
}

fn default_podcast_name() -> String {
    "Soluble(s)".to_string()
}

fn default_assistant_url() -> String {
    "https://petitsolu.netlify.app/".to_string()
}

fn default_saved_episodes_path() -> String {
    ".cache/saved_episodes.json".to_string()
}

fn default_log_level() -> LogLevel {
    LogLevel::Info
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
