//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::cache::DEFAULT_PET_TYPES_TTL_SECS;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Directory holding the pre-built frontend bundle. Skipped when missing.
    #[serde(default)]
    pub static_dir: Option<String>,
    #[serde(default = "default_pet_types_cache_ttl_secs")]
    pub pet_types_cache_ttl_secs: u64,
}

fn default_pet_types_cache_ttl_secs() -> u64 {
    DEFAULT_PET_TYPES_TTL_SECS.unsigned_abs()
}

impl ServerConfig {
    /// Freshness window of the cached pet-type list.
    pub fn pet_types_cache_ttl(&self) -> chrono::Duration {
        let secs = i64::try_from(self.pet_types_cache_ttl_secs).unwrap_or(i64::MAX);
        chrono::Duration::try_seconds(secs)
            .unwrap_or_else(|| chrono::Duration::seconds(DEFAULT_PET_TYPES_TTL_SECS))
    }

    /// Layers `config/default.yaml`, the optional `config/{APP_ENV}.yaml`
    /// profile (defaults to `local`) and `APP_*` environment variables.
    #[cfg(feature = "server")]
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}
