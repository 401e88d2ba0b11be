//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::health::report::EndpointSpec;

/// Root configuration for the validator.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Target host settings.
    pub target: TargetConfig,

    /// Per-probe timeout settings.
    pub timeouts: TimeoutConfig,

    /// Endpoints to probe, in output order.
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            target: TargetConfig::default(),
            timeouts: TimeoutConfig::default(),
            endpoints: default_endpoints(),
        }
    }
}

/// Target host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Base URL every endpoint path is appended to.
    pub base_url: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Per-probe timeout for basic checks, in seconds.
    pub probe_secs: u64,

    /// Per-probe timeout for the comprehensive variant, in seconds.
    pub comprehensive_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            probe_secs: 5,
            comprehensive_secs: 10,
        }
    }
}

/// One endpoint to validate.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    /// Path on the target host, e.g. "/health".
    pub path: String,

    /// Human label used in output.
    pub name: String,
}

impl From<&EndpointConfig> for EndpointSpec {
    fn from(endpoint: &EndpointConfig) -> Self {
        EndpointSpec::new(endpoint.path.clone(), endpoint.name.clone())
    }
}

fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig {
            path: "/".to_string(),
            name: "Root".to_string(),
        },
        EndpointConfig {
            path: "/health".to_string(),
            name: "Health".to_string(),
        },
        EndpointConfig {
            path: "/api/status".to_string(),
            name: "API Status".to_string(),
        },
        EndpointConfig {
            path: "/users".to_string(),
            name: "Users".to_string(),
        },
    ]
}
