use crate::types::{User, UserPreferences};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// User-facing application configuration, persisted as config.toml.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub intake: IntakeConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

impl AppConfig {
    /// Returns the config file path within the given data directory.
    pub fn path(data_dir: &Path) -> std::path::PathBuf {
        data_dir.join("config.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.profile.name.trim().is_empty() {
            errors.push("profile.name must not be empty".to_string());
        }

        if self.intake.accepted_host.trim().is_empty() {
            errors.push("intake.accepted_host must not be empty".to_string());
        }

        if self.resolver.delay_ms > MAX_RESOLVER_DELAY_MS {
            errors.push(format!(
                "resolver.delay_ms must be at most {MAX_RESOLVER_DELAY_MS}"
            ));
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        Self {
            profile: ProfileConfig {
                name: if self.profile.name.trim().is_empty() {
                    defaults.profile.name
                } else {
                    self.profile.name.clone()
                },
                ..self.profile.clone()
            },
            intake: IntakeConfig {
                accepted_host: if self.intake.accepted_host.trim().is_empty() {
                    defaults.intake.accepted_host
                } else {
                    self.intake.accepted_host.clone()
                },
            },
            resolver: ResolverConfig {
                delay_ms: if self.resolver.delay_ms > MAX_RESOLVER_DELAY_MS {
                    defaults.resolver.delay_ms
                } else {
                    self.resolver.delay_ms
                },
            },
        }
    }
}

const MAX_RESOLVER_DELAY_MS: u64 = 60_000;

/// Profile seeded on first run, before anything has been saved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    #[serde(default = "default_user_id")]
    pub id: String,
    #[serde(default = "default_user_name")]
    pub name: String,
    #[serde(default = "default_user_email")]
    pub email: String,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            id: default_user_id(),
            name: default_user_name(),
            email: default_user_email(),
            dark_mode: false,
        }
    }
}

impl ProfileConfig {
    pub fn to_user(&self) -> User {
        User {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            preferences: UserPreferences {
                dark_mode: self.dark_mode,
                ..User::default().preferences
            },
        }
    }
}

fn default_user_id() -> String {
    "1".to_string()
}

fn default_user_name() -> String {
    "User".to_string()
}

fn default_user_email() -> String {
    "user@example.com".to_string()
}

/// Rules applied to pasted links before they are resolved.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default = "default_accepted_host")]
    pub accepted_host: String,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            accepted_host: default_accepted_host(),
        }
    }
}

fn default_accepted_host() -> String {
    "tiktok.com".to_string()
}

/// Metadata resolver settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResolverConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
        }
    }
}

impl ResolverConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

fn default_delay_ms() -> u64 {
    1000
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
