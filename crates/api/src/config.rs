//! Server configuration.

use advisor::AdvicePolicy;
use serde::{Deserialize, Serialize};

/// Rate limit settings for the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Seconds to replenish one request
    pub per_second: u64,
    /// Requests that may arrive back to back
    pub burst_size: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            per_second: 2,
            burst_size: 5,
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Socket address the server listens on
    pub bind_addr: String,
    /// Path to the model artifact
    pub model_path: String,
    /// When counselling output accompanies a prediction
    pub advice_policy: AdvicePolicy,
    pub rate_limit: RateLimitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            model_path: "models/dropout_gbdt.json".to_string(),
            advice_policy: AdvicePolicy::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl AppConfig {
    /// Layered load: built-in defaults overridden by an optional
    /// `retention.toml` in the working directory.
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name("retention").required(false))
            .build()?;
        settings.try_deserialize()
    }
}
