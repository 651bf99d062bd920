use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub base_url: String,
    pub max_body_size: usize,
    pub db_max_connections: u32,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_required("DATABASE_URL")?;

        let host: IpAddr = env_or("RPT_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid RPT_HOST: {e}"))?;

        let port: u16 = env_or("RPT_PORT", "8080")
            .parse()
            .map_err(|e| format!("Invalid RPT_PORT: {e}"))?;

        let base_url = env_or("RPT_BASE_URL", &format!("http://{host}:{port}"))
            .trim_end_matches('/')
            .to_string();

        let max_body_size: usize = env_or("RPT_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid RPT_MAX_BODY_SIZE: {e}"))?;

        let db_max_connections: u32 = env_or("RPT_DB_MAX_CONNECTIONS", "10")
            .parse()
            .map_err(|e| format!("Invalid RPT_DB_MAX_CONNECTIONS: {e}"))?;

        let log_level = env_or("RPT_LOG_LEVEL", "info");

        Ok(Config {
            database_url,
            host,
            port,
            base_url,
            max_body_size,
            db_max_connections,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
