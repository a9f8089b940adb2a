use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
    /// Delay applied to search submission and to the results loading view.
    #[serde(default = "default_simulated_latency_ms")]
    pub simulated_latency_ms: u64,
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,
    #[serde(default = "default_site_name")]
    pub site_name: String,
}

fn default_http_port() -> u16 {
    3000
}

fn default_simulated_latency_ms() -> u64 {
    1500
}

fn default_results_per_page() -> usize {
    10
}

fn default_site_name() -> String {
    "cryptofind".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            simulated_latency_ms: default_simulated_latency_ms(),
            results_per_page: default_results_per_page(),
            site_name: default_site_name(),
        }
    }
}

impl AppConfig {
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

pub fn get_config() -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(Environment::default())
        .build()?;

    config.try_deserialize()
}
