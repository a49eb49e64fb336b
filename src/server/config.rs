use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_TICKET_CONFIG_PATH: &str = "data/ticket_config.json";
const DEFAULT_WEB_ACCOUNTS_PATH: &str = "data/webaccounts.json";
const DEFAULT_ACCOUNT_SERVICE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SESSION_INACTIVITY_DAYS: i64 = 7;
const DEFAULT_VIEWS_DIR: &str = "views";
const DEFAULT_PUBLIC_DIR: &str = "public";

/// Where panel accounts are looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountSource {
    /// JSON account table on local disk.
    File(PathBuf),
    /// Remote account service returning the same table shape.
    Remote { url: String, timeout: Duration },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,

    pub ticket_config_path: PathBuf,
    pub account_source: AccountSource,

    pub session_inactivity_days: i64,
    pub session_secure_cookie: bool,

    pub views_dir: PathBuf,
    pub public_dir: PathBuf,
}

impl Config {
    /// Reads the configuration from environment variables, applying defaults for
    /// everything except `ACCOUNT_SERVICE_URL` when the remote backend is selected.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present and valid
    /// - `Err(AppError::ConfigErr(_))` - A variable is missing or cannot be parsed
    pub fn from_env() -> Result<Self, AppError> {
        let account_source = match env_or("ACCOUNT_BACKEND", "file").as_str() {
            "file" => AccountSource::File(PathBuf::from(env_or(
                "WEB_ACCOUNTS_PATH",
                DEFAULT_WEB_ACCOUNTS_PATH,
            ))),
            "remote" => AccountSource::Remote {
                url: std::env::var("ACCOUNT_SERVICE_URL")
                    .map_err(|_| ConfigError::MissingEnvVar("ACCOUNT_SERVICE_URL".to_string()))?,
                timeout: Duration::from_secs(parse_env(
                    "ACCOUNT_SERVICE_TIMEOUT_SECS",
                    DEFAULT_ACCOUNT_SERVICE_TIMEOUT_SECS,
                )?),
            },
            other => {
                return Err(ConfigError::InvalidEnvVar {
                    name: "ACCOUNT_BACKEND".to_string(),
                    value: other.to_string(),
                    reason: "expected 'file' or 'remote'".to_string(),
                }
                .into())
            }
        };

        Ok(Self {
            host: env_or("HOST", DEFAULT_HOST),
            port: parse_env("PORT", DEFAULT_PORT)?,
            ticket_config_path: PathBuf::from(env_or(
                "TICKET_CONFIG_PATH",
                DEFAULT_TICKET_CONFIG_PATH,
            )),
            account_source,
            session_inactivity_days: parse_env(
                "SESSION_INACTIVITY_DAYS",
                DEFAULT_SESSION_INACTIVITY_DAYS,
            )?,
            session_secure_cookie: parse_env("SESSION_SECURE_COOKIE", false)?,
            views_dir: PathBuf::from(env_or("VIEWS_DIR", DEFAULT_VIEWS_DIR)),
            public_dir: PathBuf::from(env_or("PUBLIC_DIR", DEFAULT_PUBLIC_DIR)),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => match value.parse::<T>() {
            Ok(parsed) => Ok(parsed),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
                value,
            }),
        },
        Err(_) => Ok(default),
    }
}
