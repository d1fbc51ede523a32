//! Structured errors for callers
//!
//! Errors never crash the system. They are values that travel back to the
//! caller and carry a machine-readable code plus an actionable suggestion.

use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const ARG_COUNT: &str = "ARG_COUNT";
    pub const ARG_TYPE: &str = "ARG_TYPE";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
    pub const INVALID_UNIT_FOR_CATEGORY: &str = "INVALID_UNIT_FOR_CATEGORY";
    pub const NON_FINITE: &str = "NON_FINITE";
    pub const UNDEFINED_FUNC: &str = "UNDEFINED_FUNC";
    pub const NOT_FOUND: &str = "NOT_FOUND";
}

/// Structured error returned through `Value::Error`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaugeError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl GaugeError {
    /// Create a new error
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    // ========== Common Error Constructors ==========

    pub fn arg_count(func: &str, expected: usize, got: usize) -> Self {
        Self::new(codes::ARG_COUNT,
            format!("{}() expects {} arguments, got {}", func, expected, got))
            .with_suggestion(format!("Use help('{}') for usage", func))
    }

    pub fn arg_type(func: &str, arg: &str, expected: &str, got: &str) -> Self {
        Self::new(codes::ARG_TYPE,
            format!("{}() argument '{}': expected {}, got {}", func, arg, expected, got))
    }

    pub fn unknown_unit(name: &str) -> Self {
        Self::new(codes::UNKNOWN_UNIT, format!("Unknown unit: {}", name))
            .with_suggestion("Use list_units(category) to see valid units")
    }

    pub fn unknown_category(name: &str) -> Self {
        Self::new(codes::UNKNOWN_CATEGORY, format!("Unknown category: {}", name))
            .with_suggestion("Use list_categories() to see valid categories")
    }

    pub fn invalid_unit_for_category(unit: &str, category: &str) -> Self {
        Self::new(codes::INVALID_UNIT_FOR_CATEGORY,
            format!("Unit '{}' does not belong to category '{}'", unit, category))
            .with_suggestion(format!("Use list_units('{}') to see valid units", category))
    }

    pub fn non_finite(value: f64) -> Self {
        Self::new(codes::NON_FINITE, format!("Input must be finite, got {}", value))
            .with_suggestion("Convert with NonFinitePolicy::Pass (ConvertConfig, or EvalContext::from_env with GAUGE_NON_FINITE=pass) to accept NaN and infinities")
    }

    pub fn undefined_func(name: &str) -> Self {
        Self::new(codes::UNDEFINED_FUNC, format!("Unknown function: {}", name))
            .with_suggestion("Use help() to list available functions")
    }
}

impl std::fmt::Display for GaugeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for GaugeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code_and_suggestion() {
        let err = GaugeError::unknown_unit("furlong");
        assert_eq!(
            err.to_string(),
            "[UNKNOWN_UNIT] Unknown unit: furlong (suggestion: Use list_units(category) to see valid units)"
        );
    }

    #[test]
    fn test_non_finite_names_the_policy_switch() {
        let err = GaugeError::non_finite(f64::INFINITY);
        let suggestion = err.suggestion.unwrap();
        assert!(suggestion.contains("NonFinitePolicy::Pass"));
        assert!(suggestion.contains("EvalContext::from_env"));
    }

    #[test]
    fn test_serialize_skips_missing_suggestion() {
        let err = GaugeError::arg_type("convert", "value", "Number", "Text");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "ARG_TYPE");
        assert!(json.get("suggestion").is_none());
    }
}
