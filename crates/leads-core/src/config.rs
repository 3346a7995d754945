use crate::app_config::{AppConfig, DEFAULT_USER_AGENT, DEFAULT_WEBHOOK_URL};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a
/// `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            _ => Ok(None),
        }
    };

    let webhook_url = or_default("LEADS_WEBHOOK_URL", DEFAULT_WEBHOOK_URL);
    if !(webhook_url.starts_with("http://") || webhook_url.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADS_WEBHOOK_URL".to_string(),
            reason: format!("expected an http(s) URL, got '{webhook_url}'"),
        });
    }

    let log_level = or_default("LEADS_LOG_LEVEL", "info");
    let request_timeout_secs = parse_optional_u64("LEADS_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("LEADS_USER_AGENT", DEFAULT_USER_AGENT);
    let output_dir = PathBuf::from(or_default("LEADS_OUTPUT_DIR", "."));

    let placeholder_interval_ms = parse_u64("LEADS_PLACEHOLDER_INTERVAL_MS", "3000")?;
    if placeholder_interval_ms == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "LEADS_PLACEHOLDER_INTERVAL_MS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        webhook_url,
        log_level,
        request_timeout_secs,
        user_agent,
        output_dir,
        placeholder_interval_ms,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
