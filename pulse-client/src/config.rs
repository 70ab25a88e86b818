//! Gateway client configuration

/// Configuration for connecting to the record backend
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Project identifier sent with every request
    pub project_id: String,

    /// Public API key sent with every request
    pub public_key: String,

    /// Session token, once authenticated
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl GatewayConfig {
    /// Create a new configuration for the given backend URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            project_id: String::new(),
            public_key: String::new(),
            token: None,
            timeout: 30,
        }
    }

    /// Set the project credentials
    pub fn with_credentials(
        mut self,
        project_id: impl Into<String>,
        public_key: impl Into<String>,
    ) -> Self {
        self.project_id = project_id.into();
        self.public_key = public_key.into();
        self
    }

    /// Set the session token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> crate::error::GatewayResult<crate::RecordHttpClient> {
        crate::RecordHttpClient::new(self)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = GatewayConfig::new("http://localhost:9000/")
            .with_credentials("proj-1", "pk-abc")
            .with_timeout(5);

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.project_id, "proj-1");
        assert_eq!(config.public_key, "pk-abc");
        assert_eq!(config.timeout, 5);
        assert!(config.token.is_none());
    }
}
