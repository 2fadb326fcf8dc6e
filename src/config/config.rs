use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::store::StoreConfig;

/// Token used when neither the config file nor `TOKEN` provide one.
/// Kept for compatibility with existing deployments; it is not a secret.
pub const DEFAULT_TOKEN: &str = "passwd";

/// Environment variable pointing at an alternative config file.
pub const CONFIG_PATH_ENV: &str = "TEXT2KV_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0: listener, shared token, store backend and logging.
#[derive(Deserialize, Serialize, Debug, JsonSchema, Clone)]
pub struct ConfigV1 {
    pub bind_address: String,
    /// Shared secret expected as the first path segment.
    #[serde(default = "default_token")]
    pub token: String,
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigV1 {
    /// True when the built-in fallback token is in effect.
    pub fn uses_default_token(&self) -> bool {
        self.token == DEFAULT_TOKEN
    }
}

fn default_token() -> String {
    DEFAULT_TOKEN.to_string()
}

/// Builds the figment used at startup: the YAML file, then `TOKEN` from the environment.
pub fn config_figment() -> Figment {
    let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    Figment::new()
        .merge(Yaml::file(path))
        .merge(Env::raw().only(&["token"]))
}

/// Extracts a versioned config from any figment.
///
/// An empty `token` (for example `TOKEN=""`) falls back to [`DEFAULT_TOKEN`].
pub fn parse_config(figment: Figment) -> Result<ConfigV1, figment::Error> {
    let mut config = match figment.extract::<Config>()? {
        Config::ConfigV1(c) => c,
    };
    // handle configuration migration between versions here when necessary

    if config.token.is_empty() {
        config.token = default_token();
    }
    Ok(config)
}

/// Load config from the YAML file and environment, exiting on failure.
pub fn load_config() -> ConfigV1 {
    match parse_config(config_figment()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON schema for the configuration to stdout.
pub fn print_schema() -> Result<(), serde_json::Error> {
    let schema = schema_for!(Config);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
