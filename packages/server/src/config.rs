use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use common::config::CacheConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Allowed origins. `"*"` allows any origin (without credentials).
    pub allow_origins: Vec<String>,
    pub max_age: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL. Takes precedence over the individual fields.
    #[serde(default)]
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}",
                self.user, self.password, self.host, self.port, self.name
            ),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config_path =
            std::env::var("CFSTATS_CONFIG").unwrap_or_else(|_| "config/config".to_string());
        Self::load_from(&config_path, |key| std::env::var(key).ok())
    }

    /// Load from `config_path` (extension optional) and the environment.
    ///
    /// `var` resolves the flat deployment variables (`DB_USER`, `DB_PASSWORD`,
    /// `DB_HOST`, `DB_PORT`, `DB_NAME`, `ALLOWED_ORIGINS`), which override
    /// everything else.
    pub fn load_from(
        config_path: &str,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::load_with(config_path, environment(), var)
    }

    fn load_with(
        config_path: &str,
        env: Environment,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000_i64)?
            .set_default("server.cors.allow_origins", Vec::<String>::new())?
            .set_default("server.cors.max_age", 3600_i64)?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "")?
            .set_default("database.host", "localhost")?
            .set_default("database.port", 5432_i64)?
            .set_default("database.name", "postgres")?
            .set_default("database.max_connections", 10_i64)?
            .set_default("database.min_connections", 1_i64)?
            .set_default("database.connect_timeout_secs", 8_i64)?
            .set_default("database.sqlx_logging", false)?
            .set_default("cache.ttl_secs", 86400_i64)?
            // Load from config/config.toml
            .add_source(File::with_name(config_path).required(false))
            // Override from environment (e.g., CFSTATS__CACHE__TTL_SECS)
            .add_source(env)
            .set_override_option("database.user", var("DB_USER"))?
            .set_override_option("database.password", var("DB_PASSWORD"))?
            .set_override_option("database.host", var("DB_HOST"))?
            .set_override_option("database.port", var("DB_PORT"))?
            .set_override_option("database.name", var("DB_NAME"))?
            .set_override_option(
                "server.cors.allow_origins",
                var("ALLOWED_ORIGINS").map(|origins| parse_origins(&origins)),
            )?
            .build()?;

        s.try_deserialize()
    }
}

/// `CFSTATS__*` variables; `CFSTATS__SERVER__CORS__ALLOW_ORIGINS` is comma separated.
fn environment() -> Environment {
    Environment::with_prefix("CFSTATS")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("server.cors.allow_origins")
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
