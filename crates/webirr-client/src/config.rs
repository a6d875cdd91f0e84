//! # Gateway Configuration
//!
//! Configuration for the WeBirr client: the merchant API key and the
//! target environment. Secrets can be loaded from environment variables.

use std::env;
use std::fmt;
use webirr_core::GatewayError;

/// Base address of the WeBirr test environment
pub const TEST_BASE_URL: &str = "https://api.webirr.com";

/// Base address of the WeBirr production environment
pub const PRODUCTION_BASE_URL: &str = "https://api.webirr.com:8080";

/// Target gateway environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox environment for integration testing
    Test,
    /// Live environment processing real payments
    Production,
}

impl Environment {
    /// The fixed base address for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Test => TEST_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// WeBirr API configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Merchant API key issued by WeBirr
    pub api_key: String,

    /// Target environment
    pub environment: Environment,

    /// API base URL (overridable for testing/mocking)
    pub base_url: String,
}

impl GatewayConfig {
    /// Create a config for the given environment. No network activity.
    pub fn new(api_key: impl Into<String>, environment: Environment) -> Self {
        Self {
            api_key: api_key.into(),
            environment,
            base_url: environment.base_url().to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `WEBIRR_API_KEY`
    ///
    /// Optional:
    /// - `WEBIRR_ENV` - `production`/`prod`/`live` selects the live
    ///   gateway; anything else (or unset) selects the test gateway
    pub fn from_env() -> Result<Self, GatewayError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("WEBIRR_API_KEY")
            .map_err(|_| GatewayError::Configuration("WEBIRR_API_KEY not set".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(GatewayError::Configuration(
                "WEBIRR_API_KEY is empty".to_string(),
            ));
        }

        let environment = match env::var("WEBIRR_ENV") {
            Ok(value) => match value.to_lowercase().as_str() {
                "production" | "prod" | "live" => Environment::Production,
                _ => Environment::Test,
            },
            Err(_) => Environment::Test,
        };

        Ok(Self::new(api_key, environment))
    }

    /// Check if targeting the test environment
    pub fn is_test_mode(&self) -> bool {
        self.environment == Environment::Test
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}
