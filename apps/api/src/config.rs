use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Panics at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_pool_size_defaults_and_overrides() {
        std::env::set_var("DATABASE_URL", "postgres://localhost/joblander");
        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
        assert_eq!(Config::from_env().unwrap().db_max_connections, 10);

        std::env::set_var("DATABASE_MAX_CONNECTIONS", "25");
        assert_eq!(Config::from_env().unwrap().db_max_connections, 25);

        std::env::set_var("DATABASE_MAX_CONNECTIONS", "plenty");
        assert!(Config::from_env().is_err());
        std::env::remove_var("DATABASE_MAX_CONNECTIONS");
    }
}
