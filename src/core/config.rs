//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.stufftodo/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub prompt: PromptConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PromptConfig {
    pub page_size: Option<usize>,
    #[serde(rename = "loop")]
    pub loop_navigation: Option<bool>,
    pub help_mode: Option<HelpMode>,
}

/// When the "(Use arrow keys)" hint is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpMode {
    Always,
    Never,
    /// First frame only.
    #[default]
    Auto,
}

impl HelpMode {
    pub fn shows(self, first_render: bool) -> bool {
        match self {
            HelpMode::Always => true,
            HelpMode::Never => false,
            HelpMode::Auto => first_render,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PAGE_SIZE: usize = 7;
pub const DEFAULT_LOOP: bool = true;
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_FILE: &str = "stufftodo-cli.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub api_key: String,
    pub page_size: usize,
    pub loop_navigation: bool,
    pub help_mode: HelpMode,
    pub log_file: PathBuf,
}

impl ResolvedConfig {
    /// One-line description for the log. Leaves the API key out.
    pub fn summary(&self) -> String {
        format!(
            "base_url={} page_size={} loop={} help_mode={:?} log_file={}",
            self.base_url,
            self.page_size,
            self.loop_navigation,
            self.help_mode,
            self.log_file.display()
        )
    }
}

/// Values that came from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub page_size: Option<usize>,
    pub no_loop: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::MissingApiKey => write!(
                f,
                "no API key configured (set STUFFTODO_API_KEY or [api] api_key in ~/.stufftodo/config.toml)"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stufftodo/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stufftodo").join("config.toml"))
}

/// Load config from `~/.stufftodo/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TodoConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TodoConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TodoConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TodoConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: TodoConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    // api_key stays out of the log
    debug!(
        "Config: base_url={:?} prompt={:?} log_file={:?}",
        config.api.base_url, config.prompt, config.general.log_file
    );
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# stufftodo configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "stufftodo-cli.log"

# [api]
# base_url = "http://localhost:3000"   # Or set STUFFTODO_BASE_URL
# api_key = "..."                      # Or set STUFFTODO_API_KEY

# [prompt]
# page_size = 7
# loop = true                          # wrap around at the ends of the list
# help_mode = "auto"                   # "always", "never", "auto"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &TodoConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("STUFFTODO_BASE_URL").ok())
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // API key: env → config, required
    let api_key = std::env::var("STUFFTODO_API_KEY")
        .ok()
        .or_else(|| config.api.api_key.clone())
        .filter(|key| !key.trim().is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    let page_size = cli
        .page_size
        .or(config.prompt.page_size)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    let loop_navigation =
        !cli.no_loop && config.prompt.loop_navigation.unwrap_or(DEFAULT_LOOP);

    let log_file = config
        .general
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    Ok(ResolvedConfig {
        base_url: base_url.trim_end_matches('/').to_string(),
        api_key,
        page_size,
        loop_navigation,
        help_mode: config.prompt.help_mode.unwrap_or_default(),
        log_file: PathBuf::from(log_file),
    })
}
