//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the base URL and endpoint paths
//! - Validate value ranges (timeouts > 0, endpoint list non-empty)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ValidatorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;
use url::Url;

use crate::config::schema::ValidatorConfig;

/// A single semantic problem found in a config.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },

    #[error("no endpoints configured")]
    NoEndpoints,

    #[error("endpoint '{name}': path '{path}' must start with '/'")]
    BadEndpointPath { name: String, path: String },

    #[error("timeout '{0}' must be greater than zero")]
    ZeroTimeout(&'static str),
}

/// Validate a config, collecting every problem found.
pub fn validate_config(config: &ValidatorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(source) = Url::parse(&config.target.base_url) {
        errors.push(ValidationError::InvalidBaseUrl {
            url: config.target.base_url.clone(),
            source,
        });
    }

    if config.endpoints.is_empty() {
        errors.push(ValidationError::NoEndpoints);
    }
    for endpoint in &config.endpoints {
        if !endpoint.path.starts_with('/') {
            errors.push(ValidationError::BadEndpointPath {
                name: endpoint.name.clone(),
                path: endpoint.path.clone(),
            });
        }
    }

    if config.timeouts.probe_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("probe_secs"));
    }
    if config.timeouts.comprehensive_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("comprehensive_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
