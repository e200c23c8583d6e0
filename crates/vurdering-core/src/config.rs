use crate::scraper_config::ScraperConfig;
use crate::ConfigError;

/// Load scraper configuration, applying any environment overrides.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
/// Every variable is optional; unset ones keep the [`ScraperConfig::default`]
/// value.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but cannot be parsed.
pub fn load_scraper_config() -> Result<ScraperConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_scraper_config_from_env()
}

/// Load scraper configuration from environment variables already in the process.
///
/// Unlike [`load_scraper_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an override is present but cannot be parsed.
pub fn load_scraper_config_from_env() -> Result<ScraperConfig, ConfigError> {
    build_scraper_config(|key| std::env::var(key))
}

/// Build configuration using the provided env-var lookup function, so the
/// parsing rules can be tested against a plain `HashMap`.
fn build_scraper_config<F>(lookup: F) -> Result<ScraperConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    fn parse_or<T>(raw: Option<String>, var: &str, default: T) -> Result<T, ConfigError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        match raw {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    let defaults = ScraperConfig::default();
    let get = |var: &str| lookup(var).ok();

    let base_url = match get("VURDERING_BASE_URL") {
        Some(raw) if raw.trim().is_empty() => {
            return Err(ConfigError::InvalidEnvVar {
                var: "VURDERING_BASE_URL".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Some(raw) => raw.trim().to_string(),
        None => defaults.base_url,
    };
    let user_agent = get("VURDERING_USER_AGENT").unwrap_or(defaults.user_agent);

    let request_timeout_secs = parse_or(
        get("VURDERING_REQUEST_TIMEOUT_SECS"),
        "VURDERING_REQUEST_TIMEOUT_SECS",
        defaults.request_timeout_secs,
    )?;
    let connect_timeout_secs = parse_or(
        get("VURDERING_CONNECT_TIMEOUT_SECS"),
        "VURDERING_CONNECT_TIMEOUT_SECS",
        defaults.connect_timeout_secs,
    )?;
    let max_retries = parse_or(
        get("VURDERING_MAX_RETRIES"),
        "VURDERING_MAX_RETRIES",
        defaults.max_retries,
    )?;
    let retry_backoff_base_ms = parse_or(
        get("VURDERING_RETRY_BACKOFF_BASE_MS"),
        "VURDERING_RETRY_BACKOFF_BASE_MS",
        defaults.retry_backoff_base_ms,
    )?;
    let max_pages = parse_or(
        get("VURDERING_MAX_PAGES"),
        "VURDERING_MAX_PAGES",
        defaults.max_pages,
    )?;

    if max_pages == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "VURDERING_MAX_PAGES".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(ScraperConfig {
        base_url,
        request_timeout_secs,
        connect_timeout_secs,
        user_agent,
        max_retries,
        retry_backoff_base_ms,
        max_pages,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
