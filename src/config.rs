use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const RELEASE_API_URL: &str = "https://api.github.com/repos/CorwinDev/Discord-Bot/releases/latest";
const DEFAULT_WEBHOOK_CONFIG_PATH: &str = "./config/webhooks.json";
const DEFAULT_SHARD_COUNT: u32 = 1;

/// Configuration of the bot process.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub shard_count: u32,
    pub webhook_config_path: PathBuf,
    pub release_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// `from_env` passes the process environment; tests pass a map.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DISCORD_TOKEN".to_string()))?;

        let shard_count = match lookup("SHARD_COUNT") {
            Some(value) => parse_shard_count(&value)?,
            None => DEFAULT_SHARD_COUNT,
        };

        let webhook_config_path = lookup("WEBHOOK_CONFIG_PATH")
            .unwrap_or_else(|| DEFAULT_WEBHOOK_CONFIG_PATH.to_string())
            .into();

        Ok(Self {
            discord_token,
            shard_count,
            webhook_config_path,
            release_api_url: RELEASE_API_URL.to_string(),
        })
    }
}

fn parse_shard_count(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: "SHARD_COUNT".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("at least one shard is required")),
        Ok(count) => Ok(count),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

/// Configuration of the developer badge tool.
#[derive(Debug, Clone)]
pub struct BadgeConfig {
    pub database_url: String,
}

impl BadgeConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Reads the connection string from `MONGO_TOKEN`, falling back to `DATABASE_URL`.
    ///
    /// The variable keeps its historical name even though it now holds a SeaORM URL.
    pub fn from_vars<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("MONGO_TOKEN")
            .filter(|url| !url.is_empty())
            .or_else(|| lookup("DATABASE_URL").filter(|url| !url.is_empty()))
            .ok_or_else(|| ConfigError::MissingEnvVar("MONGO_TOKEN".to_string()))?;

        Ok(Self { database_url })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_vars(lookup(&[("DISCORD_TOKEN", "token")])).unwrap();

        assert_eq!(config.discord_token, "token");
        assert_eq!(config.shard_count, 1);
        assert_eq!(
            config.webhook_config_path,
            PathBuf::from("./config/webhooks.json")
        );
        assert_eq!(config.release_api_url, RELEASE_API_URL);
    }

    #[test]
    fn reads_optional_overrides() {
        let config = Config::from_vars(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SHARD_COUNT", "4"),
            ("WEBHOOK_CONFIG_PATH", "/etc/bot/webhooks.json"),
        ]))
        .unwrap();

        assert_eq!(config.shard_count, 4);
        assert_eq!(
            config.webhook_config_path,
            PathBuf::from("/etc/bot/webhooks.json")
        );
    }

    #[test]
    fn rejects_missing_token() {
        let result = Config::from_vars(lookup(&[("SHARD_COUNT", "2")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DISCORD_TOKEN"
        ));
    }

    #[test]
    fn rejects_empty_token() {
        let result = Config::from_vars(lookup(&[("DISCORD_TOKEN", "")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn rejects_zero_shards() {
        let result = Config::from_vars(lookup(&[("DISCORD_TOKEN", "token"), ("SHARD_COUNT", "0")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { name, .. })) if name == "SHARD_COUNT"
        ));
    }

    #[test]
    fn rejects_non_numeric_shards() {
        let result = Config::from_vars(lookup(&[
            ("DISCORD_TOKEN", "token"),
            ("SHARD_COUNT", "many"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { value, .. })) if value == "many"
        ));
    }

    #[test]
    fn badge_reads_mongo_token() {
        let config = BadgeConfig::from_vars(lookup(&[("MONGO_TOKEN", "sqlite::memory:")])).unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn badge_prefers_mongo_token_over_database_url() {
        let config = BadgeConfig::from_vars(lookup(&[
            ("MONGO_TOKEN", "sqlite://badges.db"),
            ("DATABASE_URL", "postgres://localhost/badges"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite://badges.db");
    }

    #[test]
    fn badge_falls_back_to_database_url() {
        let config =
            BadgeConfig::from_vars(lookup(&[("DATABASE_URL", "postgres://localhost/badges")]))
                .unwrap();

        assert_eq!(config.database_url, "postgres://localhost/badges");
    }

    #[test]
    fn badge_rejects_missing_connection_string() {
        let result = BadgeConfig::from_vars(lookup(&[("DISCORD_TOKEN", "token")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "MONGO_TOKEN"
        ));
    }
}
