use std::path::PathBuf;

use poshujan_shared::session::StaticCredentials;

const DEFAULT_PORT: &str = "3000";
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_USERNAME: &str = "gaw97094";
const DEFAULT_PASSWORD: &str = "97094";

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: String,
    pub assets_dir: PathBuf,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults for unset or empty keys.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Config {
            port: get("PORT", DEFAULT_PORT),
            assets_dir: PathBuf::from(get("ASSETS_DIR", DEFAULT_ASSETS_DIR)),
            username: get("AUTH_USERNAME", DEFAULT_USERNAME),
            password: get("AUTH_PASSWORD", DEFAULT_PASSWORD),
        }
    }

    pub fn credentials(&self) -> StaticCredentials {
        StaticCredentials::new(&self.username, &self.password)
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
