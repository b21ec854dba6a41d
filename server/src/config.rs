//! Server configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_COOKIE_NAME: &str = "session_token";
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required env var {var}")]
    Missing { var: String },

    /// An environment variable is set but cannot be parsed.
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub auth_url: String,
    pub auth_api_key: String,
    pub cookie_name: String,
    pub cookie_secure: bool,
    pub auth_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `AUTH_URL`: base URL of the auth backend
    /// - `AUTH_API_KEY`: project key sent with every auth request
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_COOKIE_NAME`: default `session_token`
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `COOKIE_SECURE`: inferred from the `AUTH_URL` scheme when absent
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| ConfigError::Missing { var: var.to_owned() })
        };

        let auth_url = required("AUTH_URL")?.trim_end_matches('/').to_owned();
        let auth_api_key = required("AUTH_API_KEY")?;
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let auth_timeout_secs = parse_or(
            "AUTH_REQUEST_TIMEOUT_SECS",
            lookup("AUTH_REQUEST_TIMEOUT_SECS"),
            DEFAULT_AUTH_REQUEST_TIMEOUT_SECS,
        )?;
        let cookie_name = lookup("AUTH_COOKIE_NAME")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_COOKIE_NAME.to_owned());
        let cookie_secure = lookup("COOKIE_SECURE")
            .as_deref()
            .and_then(parse_bool)
            .unwrap_or_else(|| auth_url.starts_with("https://"));

        Ok(Self { port, auth_url, auth_api_key, cookie_name, cookie_secure, auth_timeout_secs })
    }
}

/// Parse a loose boolean: `1/true/yes/on` or `0/false/no/off`, any case.
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var: var.to_owned(), value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
