//! Configuration module for `PlanPath`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Data API configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL the three JSON array loaders are rooted at
    #[serde(default)]
    pub base_url: String,
    /// Endpoint for profile record fetches and field updates
    #[serde(default)]
    pub profile_url: String,
    /// Serve embedded mock data instead of hitting the live API.
    /// The `PLANPATH_USE_MOCK` environment variable overrides this flag.
    #[serde(default)]
    pub use_mock: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Data API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override API base URL
    pub base_url: Option<String>,
    /// Override profile endpoint URL
    pub profile_url: Option<String>,
    /// Override mock-data flag
    pub use_mock: Option<bool>,
}

impl Config {
    /// Get the `$PLANPATH` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/planpath`
    /// - macOS: `~/Library/Application Support/planpath`
    /// - Windows: `%APPDATA%\planpath`
    #[must_use]
    pub fn get_planpath_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("planpath")
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Used on load so that configuration fields added by an upgrade are
    /// populated with their defaults while user settings stay untouched.
    /// Only fields that are empty here and non-empty in defaults change.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.api.base_url.is_empty() && !defaults.api.base_url.is_empty() {
            self.api.base_url.clone_from(&defaults.api.base_url);
            changed = true;
        }
        if self.api.profile_url.is_empty() && !defaults.api.profile_url.is_empty() {
            self.api.profile_url.clone_from(&defaults.api.profile_url);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Command-line arguments override configuration file values for this run
    /// without modifying the persistent file. Only non-`None` values in the
    /// overrides struct replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(base_url) = &overrides.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(profile_url) = &overrides.profile_url {
            self.api.profile_url.clone_from(profile_url);
        }
        if let Some(use_mock) = overrides.use_mock {
            self.api.use_mock = use_mock;
        }
    }

    /// Get the user config file path
    ///
    /// Returns the full path to the configuration file:
    /// - `config.toml` for release builds
    /// - `dconfig.toml` for debug builds (allows separate debug config)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_planpath_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$PLANPATH` variable in a string.
    ///
    /// Replaces occurrences of `$PLANPATH` with the actual planpath config
    /// directory path so file values can reference it dynamically.
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$PLANPATH") {
            let planpath_dir = Self::get_planpath_dir();
            value.replace("$PLANPATH", planpath_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string.
    ///
    /// Parses a TOML configuration string and expands any `$PLANPATH`
    /// variables in the values. Missing fields use their serde defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        // Expand variables in config values
        config.logging.file = Self::expand_variables(&config.logging.file);

        Ok(config)
    }

    /// Load configuration from embedded defaults.
    ///
    /// The defaults differ between debug and release builds:
    /// - Debug: `DefaultCLIConfigDebug.toml` (mock data on)
    /// - Release: `DefaultCLIConfigRelease.toml` (live API)
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// should never happen since the defaults are compiled into the binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found.
    ///
    /// - If the config file exists: loads it, merges missing fields from
    ///   defaults, and saves the updated config.
    /// - On first run: creates the config directory and writes the defaults.
    ///
    /// Falls back to defaults if any error occurs during loading.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    // Merge any missing fields from defaults
                    if config.merge_defaults(&defaults) {
                        // Save the updated config with new fields
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            // First run: create directory and config file from defaults
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to file.
    ///
    /// Serializes to TOML and writes to the platform-specific config file,
    /// creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized, the directory
    /// cannot be created, or the file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key.
    ///
    /// Supported keys:
    /// - `level`: Logging level ("debug", "info", "warn", "error")
    /// - `file`: Log file path
    /// - `verbose`: Verbose logging boolean
    /// - `base_url`: Data API base URL
    /// - `profile_url`: Profile endpoint URL
    /// - `use_mock`: Mock-data flag
    ///
    /// # Returns
    /// - `Some(String)`: The configuration value as a string
    /// - `None`: If the key is not recognized
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "base_url" | "base-url" => Some(self.api.base_url.clone()),
            "profile_url" | "profile-url" => Some(self.api.profile_url.clone()),
            "use_mock" | "use-mock" => Some(self.api.use_mock.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key.
    ///
    /// Boolean keys (`verbose`, `use_mock`) must parse as "true"/"false".
    /// This updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "base_url" | "base-url" => self.api.base_url = value.to_string(),
            "profile_url" | "profile-url" => self.api.profile_url = value.to_string(),
            "use_mock" | "use-mock" => {
                self.api.use_mock = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'use_mock': '{value}'"))?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default).
    ///
    /// This updates the in-memory config; call [`save()`](Config::save) to
    /// persist changes.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "base_url" | "base-url" => self.api.base_url.clone_from(&defaults.api.base_url),
            "profile_url" | "profile-url" => {
                self.api.profile_url.clone_from(&defaults.api.profile_url);
            }
            "use_mock" | "use-mock" => self.api.use_mock = defaults.api.use_mock,
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults.
    ///
    /// Deletes the configuration file, causing the next
    /// [`load()`](Config::load) call to recreate it from defaults. The CLI
    /// asks for confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[api]")?;
        writeln!(f, "  base_url = \"{}\"", self.api.base_url)?;
        writeln!(f, "  profile_url = \"{}\"", self.api.profile_url)?;
        writeln!(f, "  use_mock = {}", self.api.use_mock)?;

        Ok(())
    }
}
