//! Application configuration

use clap::Parser;
use pulse_client::GatewayConfig;
use std::path::PathBuf;

/// PeoplePulse terminal HRMS client
#[derive(Debug, Clone, Parser)]
#[command(name = "peoplepulse", version, about)]
pub struct AppConfig {
    /// Record backend base URL
    #[arg(long, env = "PULSE_BACKEND_URL", default_value = "http://127.0.0.1:8080")]
    pub backend_url: String,

    /// Project identifier for the record backend
    #[arg(long, env = "PULSE_PROJECT_ID", default_value = "demo-project")]
    pub project_id: String,

    /// Public API key for the record backend
    #[arg(long, env = "PULSE_PUBLIC_KEY", default_value = "pk-demo")]
    pub public_key: String,

    /// Data directory for logs and preferences
    #[arg(long, env = "PULSE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, env = "PULSE_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,
}

impl AppConfig {
    /// Effective data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(".peoplepulse"))
    }

    /// Gateway configuration for the record backend
    pub fn gateway_config(&self) -> GatewayConfig {
        GatewayConfig::new(&self.backend_url)
            .with_credentials(&self.project_id, &self.public_key)
            .with_timeout(self.timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::parse_from(["peoplepulse"]);
        assert_eq!(config.backend_url, "http://127.0.0.1:8080");
        assert_eq!(config.data_dir(), PathBuf::from(".peoplepulse"));

        let gateway = config.gateway_config();
        assert_eq!(gateway.project_id, "demo-project");
        assert_eq!(gateway.timeout, 30);
    }

    #[test]
    fn test_flag_overrides() {
        let config = AppConfig::parse_from([
            "peoplepulse",
            "--backend-url",
            "http://10.0.0.2:9000",
            "--data-dir",
            "/tmp/pp",
        ]);
        assert_eq!(config.backend_url, "http://10.0.0.2:9000");
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/pp"));
    }
}
