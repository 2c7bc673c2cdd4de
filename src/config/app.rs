use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_EVENT_CREATOR_ID: &str = "5c4a26803d2f3c49a8108e1e";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// User that every created event is attributed to.
    pub event_creator_id: String,
    pub graphiql: bool,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = current_environment();
        let is_production = environment == "production";

        let port = match env::var("PORT") {
            Ok(value) if !value.is_empty() => {
                value
                    .parse::<u16>()
                    .map_err(|_| ConfigError::InvalidValue { key: "PORT", value })?
            }
            _ => DEFAULT_PORT,
        };

        Ok(AppConfig {
            database_url: database_url(),
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            event_creator_id: env::var("EVENT_CREATOR_ID")
                .ok()
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| DEFAULT_EVENT_CREATOR_ID.to_string()),
            graphiql: env_flag("GRAPHIQL").unwrap_or(!is_production),
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// `DATABASE_URL` wins; otherwise the file is `<DB_DIR>/<DB_NAME>.db`.
fn database_url() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        if !url.is_empty() {
            return url;
        }
    }

    let dir = env::var("DB_DIR").unwrap_or_else(|_| "data".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "events".to_string());
    format!("sqlite://{}/{}.db", dir.trim_end_matches('/'), name)
}

fn current_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key)
        .ok()
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "True"))
}
