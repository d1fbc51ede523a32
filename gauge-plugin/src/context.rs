//! Evaluation Context

use gauge_core::{ConvertConfig, NonFinitePolicy, Value};
use crate::PluginRegistry;
use std::sync::Arc;

/// Evaluation context passed to plugins
pub struct EvalContext {
    pub config: ConvertConfig,
    pub registry: Arc<PluginRegistry>,
}

impl EvalContext {
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self {
            config: ConvertConfig::default(),
            registry,
        }
    }

    /// Context configured from `GAUGE_NON_FINITE`
    pub fn from_env(registry: Arc<PluginRegistry>) -> Self {
        Self::new(registry).with_config(ConvertConfig::from_env())
    }

    pub fn with_config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.config.non_finite = policy;
        self
    }

    /// Call a function through this context's registry
    pub fn call(&self, name: &str, args: &[Value]) -> Value {
        self.registry.call_function(name, args, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::NON_FINITE_ENV;
    use std::env;

    #[test]
    fn test_from_env_reads_policy() {
        env::set_var(NON_FINITE_ENV, "pass");
        let ctx = EvalContext::from_env(Arc::new(PluginRegistry::new()));
        env::remove_var(NON_FINITE_ENV);
        assert_eq!(ctx.config.non_finite, NonFinitePolicy::Pass);

        let ctx = EvalContext::from_env(Arc::new(PluginRegistry::new()));
        assert_eq!(ctx.config.non_finite, NonFinitePolicy::Reject);
    }

    #[test]
    fn test_new_ignores_environment() {
        let ctx = EvalContext::new(Arc::new(PluginRegistry::new()));
        assert_eq!(ctx.config, ConvertConfig::default());
    }
}
