//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_site_url() -> String {
    "https://www.saaspertise.com".to_string()
}

fn default_sitemap_limit() -> i64 {
    5000
}

fn default_pool_size() -> u32 {
    8
}

#[derive(Clone, Debug, Deserialize)]
/// Settings shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Public origin used in `robots.txt`, the sitemap and breadcrumbs.
    #[serde(default = "default_site_url")]
    pub site_url: String,
    /// Maximum number of companies listed in `sitemap.xml`.
    #[serde(default = "default_sitemap_limit")]
    pub sitemap_limit: i64,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl ServerConfig {
    /// Site origin without a trailing slash.
    pub fn site_origin(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Loads `config/default`, the optional `config/{APP_ENV}` profile
    /// (`local` when unset) and `APP_*` environment overrides.
    #[cfg(feature = "server")]
    pub fn load() -> Result<Self, config::ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize::<ServerConfig>()
    }
}
