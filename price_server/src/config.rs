use std::env;

/// Server configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    /// Path of the SQLite cache database.
    pub database_url: String,
    pub db_pool_size: u32,
}

fn env_str(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn env_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

fn env_u32(name: &str, default: u32) -> u32 {
    env::var(name)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("PRICE_SERVER_BIND", "127.0.0.1"),
            port: env_u16("PRICE_SERVER_PORT", 8080),
            database_url: env_str("DATABASE_URL", "price_cache.db"),
            db_pool_size: env_u32("PRICE_SERVER_DB_POOL_SIZE", 4),
        }
    }
}
