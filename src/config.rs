//! Configuration from the process environment.

use crate::client_error::ClientError;
use std::env;
use std::path::PathBuf;

const DEFAULT_TOKEN_CACHE_PATH: &str = "token_cache.json";

/// Everything a run needs, resolved once at startup and immutable after.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_key: String,
    pub refresh_token: String,
    pub sensor_id: String,
    pub receiver_host: String,
    pub token_cache_path: PathBuf,
}

impl Config {
    /// Load the configuration from environment variables.
    ///
    /// `TOKEN_CACHE_PATH` is optional and defaults to `token_cache.json` in
    /// the working directory; every other variable is required.
    pub fn from_env() -> Result<Config, ClientError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Config, ClientError> {
        let require = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ClientError::Config(format!("{} is not set", key)))
        };

        Ok(Config {
            api_key: require("ECOBEE_API_KEY")?,
            refresh_token: require("ECOBEE_REFRESH_TOKEN")?,
            sensor_id: require("ECOBEE_SENSOR_ID")?,
            receiver_host: require("RECEIVER_HOST")?,
            token_cache_path: lookup("TOKEN_CACHE_PATH")
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| String::from(DEFAULT_TOKEN_CACHE_PATH))
                .into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::client_error::ClientError;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn vars() -> HashMap<&'static str, &'static str> {
        vec![
            ("ECOBEE_API_KEY", "key"),
            ("ECOBEE_REFRESH_TOKEN", "refresh"),
            ("ECOBEE_SENSOR_ID", "rs:100"),
            ("RECEIVER_HOST", "http://192.168.1.20"),
        ]
        .into_iter()
        .collect()
    }

    fn load(vars: &HashMap<&str, &str>) -> Result<Config, ClientError> {
        Config::from_lookup(|key| vars.get(key).map(|value| String::from(*value)))
    }

    #[test]
    fn loads_a_complete_environment() {
        let config = load(&vars()).unwrap();

        assert_eq!(config.api_key, "key");
        assert_eq!(config.sensor_id, "rs:100");
        assert_eq!(config.receiver_host, "http://192.168.1.20");
    }

    #[test]
    fn cache_path_defaults_when_unset() {
        let config = load(&vars()).unwrap();

        assert_eq!(config.token_cache_path, PathBuf::from("token_cache.json"));
    }

    #[test]
    fn cache_path_can_be_overridden() {
        let mut vars = vars();
        vars.insert("TOKEN_CACHE_PATH", "/var/lib/ecobee/token.json");

        let config = load(&vars).unwrap();

        assert_eq!(
            config.token_cache_path,
            PathBuf::from("/var/lib/ecobee/token.json")
        );
    }

    #[test]
    fn missing_variable_names_itself() {
        let mut vars = vars();
        vars.remove("ECOBEE_SENSOR_ID");

        match load(&vars) {
            Err(ClientError::Config(message)) => {
                assert_eq!(message, "ECOBEE_SENSOR_ID is not set")
            }
            other => panic!("expected a config error, got {:?}", other),
        }
    }

    #[test]
    fn empty_variable_counts_as_missing() {
        let mut vars = vars();
        vars.insert("ECOBEE_API_KEY", "");

        assert!(load(&vars).is_err());
    }
}
