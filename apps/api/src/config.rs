use thiserror::Error;

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{0}' is not set")]
    Missing(&'static str),

    #[error("Environment variable '{key}' is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Application configuration loaded from environment variables.
/// Fails at startup if the completion-service credential is missing.
#[derive(Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub port: u16,
    pub rust_log: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("openai_api_key", &"<redacted>")
            .field("openai_base_url", &self.openai_base_url)
            .field("port", &self.port)
            .field("rust_log", &self.rust_log)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                key: "PORT",
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            openai_api_key: require_env(&lookup, "OPENAI_API_KEY")?,
            openai_base_url: non_empty(&lookup, "OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            port,
            rust_log: non_empty(&lookup, "RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).ok_or(ConfigError::Missing(key))
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}
