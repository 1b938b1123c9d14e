//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::HttpStoreConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: HttpStoreConfig,
    pub telemetry: TelemetryConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct TelemetryConfig {
    /// Emit JSON log lines instead of the pretty format.
    pub json_logs: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            store: HttpStoreConfig::from_env(),
            telemetry: TelemetryConfig {
                json_logs: env::var("LOG_FORMAT")
                    .map(|v| v.eq_ignore_ascii_case("json"))
                    .unwrap_or(false),
            },
        }
    }

    /// Apply command-line overrides on top of the environment.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.store.base_url = url;
        }
        self
    }
}
