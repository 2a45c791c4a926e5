use crate::core::Normalizer;
use crate::error::CoreError;
use crate::models::FilterCriteria;
use crate::services::ResultCache;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Library configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub cache: CacheSettings,
    #[serde(default)]
    pub normalizer: NormalizerSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Results per page for the pagination window.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Optional maximum distance in kilometers. No default radius is
    /// assumed; absent means unbounded.
    #[serde(default)]
    pub radius_cap_km: Option<f64>,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            radius_cap_km: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            max_entries: default_cache_max_entries(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerSettings {
    /// Override for the name-validity regex; `None` keeps the default
    /// letters-and-whitespace pattern.
    #[serde(default)]
    pub name_pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_page_size() -> usize { 6 }
fn default_cache_ttl_secs() -> u64 { 300 }
fn default_cache_max_entries() -> u64 { 10_000 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with MEDMATCH__,
    ///    e.g. MEDMATCH__CACHE__TTL_SECS -> cache.ttl_secs)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("MEDMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("MEDMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Normalizer honoring the configured name pattern.
    pub fn build_normalizer(&self) -> Result<Normalizer, CoreError> {
        match &self.normalizer.name_pattern {
            Some(pattern) => Normalizer::with_pattern(pattern),
            None => Ok(Normalizer::new()),
        }
    }

    /// Result cache sized per the cache settings.
    pub fn build_cache(&self) -> ResultCache {
        ResultCache::new(self.cache.max_entries, self.cache.ttl_secs)
    }

    /// Baseline criteria carrying the configured radius cap; callers layer
    /// their search/filter/sort choices on top.
    pub fn base_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            radius_cap_km: self.matching.radius_cap_km,
            ..FilterCriteria::default()
        }
    }
}
