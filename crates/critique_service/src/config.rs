//! Service-level configuration
//!
//! Supports loading configuration from environment variables with fallback to defaults.

/// Behavior switches for the analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Reject model output that is valid JSON but not a complete analysis.
    pub enforce_result_shape: bool,
}

/// Load ServiceConfig from environment variables
///
/// Environment variables:
/// - `CRITIC_ENFORCE_SHAPE`: Require the five-part analysis shape (default: false)
pub fn load_service_config() -> ServiceConfig {
    ServiceConfig {
        enforce_result_shape: std::env::var("CRITIC_ENFORCE_SHAPE")
            .ok()
            .map(|v| parse_bool_env(&v))
            .unwrap_or(false),
    }
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bool_env_true_values() {
        for value in ["1", "true", "TRUE", " yes ", "Y", "on"] {
            assert!(parse_bool_env(value), "value {value:?} should be true");
        }
    }

    #[test]
    fn parse_bool_env_false_values() {
        for value in ["0", "false", "no", "off", "", "  "] {
            assert!(!parse_bool_env(value), "value {value:?} should be false");
        }
    }

    #[test]
    fn default_forwards_any_json() {
        assert!(!ServiceConfig::default().enforce_result_shape);
    }
}
