//! Environment-driven settings.

use thiserror::Error;

use crate::keys::ExpandOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Workspace settings read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Frequency dataset path or URL, if configured.
    pub frequency_source: Option<String>,
    /// Affect dataset path or URL, if configured.
    pub affect_source: Option<String>,
    /// Maximum number of search results returned per query.
    pub result_cap: usize,
    /// Whether match-key expansion folds `آ` to `ا`.
    pub alef_fold: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Settings {
    /// Expansion options implied by these settings.
    #[must_use]
    pub fn expand_options(&self) -> ExpandOptions {
        ExpandOptions {
            alef_fold: self.alef_fold,
        }
    }
}

/// Load settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading
/// env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_settings() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    load_settings_from_env()
}

/// Load settings from environment variables already in the process.
///
/// Unlike [`load_settings`], this does NOT load `.env` files — useful
/// for testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an invalid value.
pub fn load_settings_from_env() -> Result<Settings, ConfigError> {
    build_settings(|key| std::env::var(key))
}

/// Build settings using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_settings<F>(lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let optional = |var: &str| -> Option<String> { lookup(var).ok() };

    let parse_usize = |var: &str, default: usize| -> Result<usize, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw.parse::<usize>().map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    };

    let parse_bool = |var: &str, default: bool| -> Result<bool, ConfigError> {
        match lookup(var) {
            Ok(raw) => match raw.as_str() {
                "true" | "1" => Ok(true),
                "false" | "0" => Ok(false),
                other => Err(ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: format!("expected true/false/1/0, got '{other}'"),
                }),
            },
            Err(_) => Ok(default),
        }
    };

    let frequency_source = optional("PARSILEX_FREQUENCY_SOURCE");
    let affect_source = optional("PARSILEX_AFFECT_SOURCE");
    let result_cap = parse_usize("PARSILEX_RESULT_CAP", 250)?;
    let alef_fold = parse_bool("PARSILEX_ALEF_FOLD", true)?;
    let log_level = optional("PARSILEX_LOG_LEVEL").unwrap_or_else(|| "info".to_string());

    Ok(Settings {
        frequency_source,
        affect_source,
        result_cap,
        alef_fold,
        log_level,
    })
}
