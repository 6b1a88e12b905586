use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::round_service::DEFAULT_WINNING_SCORE;
use crate::services::session_service::DEFAULT_SESSION_TTL_HOURS;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    DynamoDb,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dynamodb" | "dynamo" => Ok(StorageBackend::DynamoDb),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

/// Settings handed to the browser by `GET /config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    #[serde(rename = "databaseURL")]
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub poll_interval_ms: u64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub games_table: Option<String>,
    pub jwt_secret: String,
    pub session_ttl_hours: i64,
    pub winning_score: u32,
    pub bind_addr: String,
    pub client: ClientConfig,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => {
                write!(f, "{} environment variable must be set", key)
            }
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let storage = match get("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => StorageBackend::DynamoDb,
        };

        let games_table = get("GAMES_TABLE");
        if storage == StorageBackend::DynamoDb && games_table.is_none() {
            return Err(ConfigError::Missing("GAMES_TABLE"));
        }

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        let session_ttl_hours =
            parse_or("SESSION_TTL_HOURS", get("SESSION_TTL_HOURS"), DEFAULT_SESSION_TTL_HOURS)?;
        if session_ttl_hours < 1 {
            return Err(ConfigError::Invalid {
                key: "SESSION_TTL_HOURS",
                value: session_ttl_hours.to_string(),
            });
        }

        let winning_score = parse_or("WINNING_SCORE", get("WINNING_SCORE"), DEFAULT_WINNING_SCORE)?;
        if winning_score < 1 {
            return Err(ConfigError::Invalid {
                key: "WINNING_SCORE",
                value: winning_score.to_string(),
            });
        }

        let client = ClientConfig {
            api_key: get("CLIENT_API_KEY"),
            auth_domain: get("CLIENT_AUTH_DOMAIN"),
            database_url: get("CLIENT_DATABASE_URL"),
            project_id: get("CLIENT_PROJECT_ID"),
            poll_interval_ms: parse_or(
                "CLIENT_POLL_INTERVAL_MS",
                get("CLIENT_POLL_INTERVAL_MS"),
                DEFAULT_POLL_INTERVAL_MS,
            )?,
        };

        Ok(AppConfig {
            storage,
            games_table,
            jwt_secret,
            session_ttl_hours,
            winning_score,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            client,
        })
    }
}

fn parse_or<T: FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}
