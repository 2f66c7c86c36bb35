use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_SERPAPI_BASE_URL: &str = "https://serpapi.com/search.json";
pub const DEFAULT_SERPAPI_ENGINE: &str = "google_shopping";
pub const DEFAULT_USER_AGENT: &str = "snipestyle/0.1 (shopping-search)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
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
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing is decoupled from the process environment so tests can feed a
/// plain `HashMap` instead of mutating env vars.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_opt_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let serpapi_api_key = require("SERPAPI_API_KEY")?;
    let serpapi_base_url = or_default("SNIPESTYLE_SERPAPI_BASE_URL", DEFAULT_SERPAPI_BASE_URL);
    let serpapi_engine = or_default("SNIPESTYLE_SERPAPI_ENGINE", DEFAULT_SERPAPI_ENGINE);
    let log_level = or_default("SNIPESTYLE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_opt_u64("SNIPESTYLE_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("SNIPESTYLE_USER_AGENT", DEFAULT_USER_AGENT);

    if request_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidEnvVar {
            var: "SNIPESTYLE_REQUEST_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        serpapi_api_key,
        serpapi_base_url,
        serpapi_engine,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
