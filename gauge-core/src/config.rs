//! Conversion configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting the non-finite input policy
pub const NON_FINITE_ENV: &str = "GAUGE_NON_FINITE";

/// What to do with NaN and infinite inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonFinitePolicy {
    /// Fail with a non-finite error
    #[default]
    Reject,
    /// Feed the value to the formula unchanged
    Pass,
}

impl NonFinitePolicy {
    /// Parse a policy name (`reject` or `pass`), case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "reject" => Some(NonFinitePolicy::Reject),
            "pass" | "passthrough" | "pass-through" => Some(NonFinitePolicy::Pass),
            _ => None,
        }
    }
}

/// Settings shared by every conversion made through a context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub non_finite: NonFinitePolicy,
}

impl ConvertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_non_finite(mut self, policy: NonFinitePolicy) -> Self {
        self.non_finite = policy;
        self
    }

    /// Read configuration from the environment
    ///
    /// Unset or unrecognized values keep the default.
    pub fn from_env() -> Self {
        match env::var(NON_FINITE_ENV) {
            Ok(raw) => Self::from_setting(&raw),
            Err(_) => Self::default(),
        }
    }

    fn from_setting(raw: &str) -> Self {
        match NonFinitePolicy::from_name(raw) {
            Some(policy) => Self::default().with_non_finite(policy),
            None => {
                tracing::warn!(
                    value = raw,
                    "unrecognized {} value, expected 'reject' or 'pass'",
                    NON_FINITE_ENV
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects() {
        assert_eq!(ConvertConfig::new().non_finite, NonFinitePolicy::Reject);
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(NonFinitePolicy::from_name("PASS"), Some(NonFinitePolicy::Pass));
        assert_eq!(NonFinitePolicy::from_name(" reject "), Some(NonFinitePolicy::Reject));
        assert_eq!(NonFinitePolicy::from_name("ignore"), None);
    }

    #[test]
    fn test_from_setting() {
        assert_eq!(ConvertConfig::from_setting("pass").non_finite, NonFinitePolicy::Pass);
        assert_eq!(ConvertConfig::from_setting("bogus").non_finite, NonFinitePolicy::Reject);
    }

    // only test in this crate that touches the variable
    #[test]
    fn test_from_env() {
        env::set_var(NON_FINITE_ENV, "pass");
        assert_eq!(ConvertConfig::from_env().non_finite, NonFinitePolicy::Pass);

        env::set_var(NON_FINITE_ENV, "sometimes");
        assert_eq!(ConvertConfig::from_env().non_finite, NonFinitePolicy::Reject);

        env::remove_var(NON_FINITE_ENV);
        assert_eq!(ConvertConfig::from_env().non_finite, NonFinitePolicy::Reject);
    }

    #[test]
    fn test_serialize_lowercase() {
        let config = ConvertConfig::new().with_non_finite(NonFinitePolicy::Pass);
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(json, serde_json::json!({"non_finite": "pass"}));
    }
}
