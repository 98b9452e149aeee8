//! Request context extraction

use std::collections::HashMap;

use crate::{
    constants::REQUIRED_PARAMS,
    error::{AppError, AppResult},
};

/// Per-request mapping of dimension name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    values: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dimension; the name is stored lowercased
    pub fn with(mut self, dimension: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.values
            .insert(dimension.as_ref().to_lowercase(), value.into());
        self
    }

    /// Value for a dimension, looked up case-insensitively
    pub fn get(&self, dimension: &str) -> Option<&str> {
        self.values
            .get(&dimension.to_lowercase())
            .map(|s| s.as_str())
    }
}

/// Builds a [`RequestContext`] from raw query parameters
pub struct ContextExtractor;

impl ContextExtractor {
    /// Require `app`, `country` and `os` to be present and non-empty.
    ///
    /// Parameters are checked in that order and the first missing one is
    /// reported. A repeated key resolves to its first occurrence. Unknown
    /// parameters are ignored.
    pub fn extract(params: &[(String, String)]) -> AppResult<RequestContext> {
        let mut context = RequestContext::new();

        for key in REQUIRED_PARAMS {
            let first = params
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value.as_str());

            match first {
                Some(value) if !value.is_empty() => {
                    context = context.with(key, value);
                }
                _ => return Err(AppError::MissingParameter(key.to_string())),
            }
        }

        Ok(context)
    }
}
