use tracing::debug;
use typesift_core::{CollectionSchema, Registry};

use crate::{Error, Result, filter, sort};

pub const DEFAULT_RECURSION_LIMIT: u32 = 256;

#[derive(Debug, Clone, Copy)]
pub struct ValidatorConfig {
    pub recursion_limit: u32,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

/// Entry point for validating expressions against a registry of collections.
///
/// Validation is pure: the registry is only read, and the same input always
/// yields the same result.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
    config: ValidatorConfig,
}

impl<'r> Validator<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            config: ValidatorConfig::default(),
        }
    }

    /// Maximum combined depth of joins, parentheses and `_eval` payloads.
    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.config.recursion_limit = limit;
        self
    }

    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    pub fn recursion_limit(&self) -> u32 {
        self.config.recursion_limit
    }

    pub fn filter(&self, expression: &str, schema: &CollectionSchema) -> Result<()> {
        debug!(collection = schema.name(), expression, "validating filter");
        filter::validate(self, expression, schema, 0)
    }

    pub fn sort(&self, expression: &str, schema: &CollectionSchema) -> Result<()> {
        debug!(collection = schema.name(), expression, "validating sort");
        sort::validate(self, expression, schema, 0)
    }

    /// Returns the depth one level below `depth`, failing once the limit is reached.
    pub(crate) fn enter(&self, depth: u32) -> Result<u32> {
        if depth >= self.config.recursion_limit {
            return Err(Error::RecursionLimitExceeded(self.config.recursion_limit));
        }
        Ok(depth + 1)
    }
}
