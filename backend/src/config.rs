//! Process configuration, read once at startup.
//!
//! Values come from the environment, optionally seeded from `.env.local` and
//! `.env` in the working directory. Variables already set in the process
//! environment always win over the files.

use crate::error::AppError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where the todos are stored. Required.
    pub database_uri: String,
    pub host: String,
    pub port: u16,
    /// Open the UI in the default browser once the server is listening.
    pub open_browser: bool,
    /// Upper bound for JSON request bodies.
    pub max_body_bytes: usize,
}

impl Config {
    /// Loads the dotenv files and resolves the configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        // dotenvy never overrides variables that are already set, so the more
        // specific file is loaded first.
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_uri = lookup("DATABASE_URI")
            .map(|uri| uri.trim().to_string())
            .filter(|uri| !uri.is_empty())
            .ok_or_else(|| {
                AppError::Config("DATABASE_URI is not set; add it to the environment or .env.local".into())
            })?;

        let host = lookup("HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| AppError::Config(format!("PORT '{}' is not a valid port: {}", raw, e)))?,
            None => DEFAULT_PORT,
        };

        let open_browser = lookup("OPEN_BROWSER")
            .map(|raw| matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let max_body_bytes = match lookup("MAX_BODY_BYTES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("MAX_BODY_BYTES '{}' is not a valid size: {}", raw, e))
            })?,
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            database_uri,
            host,
            port,
            open_browser,
            max_body_bytes,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_database_uri_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));

        let err = Config::from_lookup(lookup_from(&[("DATABASE_URI", "   ")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn defaults_apply_when_only_the_uri_is_set() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URI", "todos.sqlite")])).unwrap();
        assert_eq!(config.database_uri, "todos.sqlite");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(!config.open_browser);
        assert_eq!(config.max_body_bytes, 1024 * 1024);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_honoured() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URI", "sqlite://data/todos.sqlite"),
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("OPEN_BROWSER", "true"),
            ("MAX_BODY_BYTES", "2048"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.open_browser);
        assert_eq!(config.max_body_bytes, 2048);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("DATABASE_URI", "x.sqlite"), ("PORT", "http")]))
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
