use std::{collections::HashMap, time::Duration};

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request deadline for CRL downloads, in seconds.
    pub timeout_secs: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Filename extensions used in the hashed certificate directory, without the
/// leading dot. The defaults match the OpenSSL hash-dir convention
/// (`<hash>.0` identity links, `<ca>.crl_url` URL files, `<ca>.r0` CRLs).
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    pub ca_ext: String,
    pub url_ext: String,
    pub crl_ext: String,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("fetch.timeout_secs", 30)?
            .set_default("store.ca_ext", "0")?
            .set_default("store.url_ext", "crl_url")?
            .set_default("store.crl_ext", "r0")?
            .add_source(File::with_name("config/settings").required(false));

        // If env_vars is provided, we use it instead of system environment
        // This is to avoid systems variables pollution across tests
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // Use system environment variables
            // Should be in the format CRLSYNC_FETCH__TIMEOUT_SECS
            builder = builder.add_source(
                Environment::with_prefix("CRLSYNC")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = Config::load().expect("Failed to load config");

        assert_eq!(config.fetch.timeout_secs, 30);
        assert_eq!(config.store.ca_ext, "0");
        assert_eq!(config.store.url_ext, "crl_url");
        assert_eq!(config.store.crl_ext, "r0");
    }

    #[test]
    fn test_env_config() {
        let mut env_vars = HashMap::new();
        env_vars.insert("fetch.timeout_secs".to_string(), "5".to_string());
        env_vars.insert("store.crl_ext".to_string(), "r1".to_string());

        let config = Config::load_with_sources(Some(env_vars)).expect("Failed to load config");

        assert_eq!(config.fetch.timeout_secs, 5);
        assert_eq!(config.fetch.timeout(), Duration::from_secs(5));
        assert_eq!(config.store.crl_ext, "r1");
    }

    #[test]
    fn test_partial_env_override() {
        let mut env_vars = HashMap::new();
        // We just override the URL extension
        env_vars.insert("store.url_ext".to_string(), "urls".to_string());

        let config = Config::load_with_sources(Some(env_vars)).expect("Failed to load config");

        assert_eq!(config.store.url_ext, "urls");
        // The other values should use default
        assert_eq!(config.store.ca_ext, "0");
        assert_eq!(config.fetch.timeout_secs, 30);
    }
}
