//! Runtime settings resolved from the environment.

use std::env;

use super::constants::{DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT};

/// Resolved application configuration.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Read settings from the environment, falling back to development
    /// defaults. A `.env` file is honored when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            server_host: env_or("SERVER_HOST", DEFAULT_SERVER_HOST),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// The database URL carries credentials, so Debug keeps it out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}
