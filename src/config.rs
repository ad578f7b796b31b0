//! Configuration loading.
//!
//! Loads `~/.oldphone/config.toml` (or `$OLDPHONE_CONFIG_PATH`, or an explicit
//! path from the CLI). Precedence: env vars > config file > defaults. A missing
//! file is not an error. Nothing here changes the text a provider emits, only
//! where it goes and how chatty the logs are.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::output::OutputTarget;

/// Env var naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "OLDPHONE_CONFIG_PATH";
/// Env var overriding `[output] target`.
pub const OUTPUT_ENV: &str = "OLDPHONE_OUTPUT";
/// Env var overriding `[logging] level`.
pub const LOG_LEVEL_ENV: &str = "OLDPHONE_LOG_LEVEL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where emitted lines go.
    pub output: OutputConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Stream that receives phone lines.
    pub target: OutputTarget,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback `EnvFilter` directive when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
        }
    }
}

impl Config {
    /// Load with precedence env > file > defaults.
    ///
    /// `explicit` wins over `$OLDPHONE_CONFIG_PATH`, which wins over the
    /// default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or if
    /// no path was given and the home directory cannot be determined.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let env = |key: &str| std::env::var(key).ok();
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => config_path_with(env)?,
        };
        let mut config = load_config(&path)?;
        config.apply_overrides(env);
        Ok(config)
    }

    /// Parse a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or has unknown values.
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("failed to parse config TOML")
    }

    /// Apply environment overrides through a resolver function.
    ///
    /// Invalid values are ignored with a warning.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env(OUTPUT_ENV) {
            match OutputTarget::parse(&v) {
                Some(target) => self.output.target = target,
                None => tracing::warn!(
                    var = OUTPUT_ENV,
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }

        if let Some(v) = env(LOG_LEVEL_ENV) {
            if v.trim().is_empty() {
                tracing::warn!(var = LOG_LEVEL_ENV, "ignoring empty env override");
            } else {
                self.logging.level = v;
            }
        }
    }
}

/// Load a config file, returning defaults when it does not exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    match std::fs::read_to_string(path) {
        Ok(contents) => {
            tracing::debug!(path = %path.display(), "loading config from file");
            toml::from_str(&contents)
                .with_context(|| format!("failed to parse config at {}", path.display()))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(anyhow::anyhow!(
            "failed to read config at {}: {e}",
            path.display()
        )),
    }
}

/// Resolve the default config directory (`~/.oldphone/`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn config_dir() -> anyhow::Result<PathBuf> {
    let home = directories::BaseDirs::new()
        .ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
    Ok(home.home_dir().join(".oldphone"))
}

/// Resolve the config file path using a custom env resolver.
///
/// # Errors
///
/// Returns an error if the env var is unset and the home directory cannot be
/// determined.
pub fn config_path_with(env: impl Fn(&str) -> Option<String>) -> anyhow::Result<PathBuf> {
    if let Some(p) = env(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(p));
    }
    Ok(config_dir()?.join("config.toml"))
}
