//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default Sankey/turnover trailing window in days.
const DEFAULT_FLOW_WINDOW_DAYS: i64 = 365;
/// Default number of trailing calendar months in the headcount flow series.
const DEFAULT_HEADCOUNT_FLOW_MONTHS: u32 = 6;

/// Default window sizes for the aggregation endpoints.
///
/// Callers may override these per request via query parameters; these values
/// apply when a request leaves them unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDefaults {
    /// Trailing window, in days, for the employee flow Sankey.
    #[serde(default = "default_flow_window_days")]
    pub flow_window_days: i64,
    /// Number of trailing calendar months in the headcount flow series.
    #[serde(default = "default_headcount_flow_months")]
    pub headcount_flow_months: u32,
}

fn default_flow_window_days() -> i64 {
    DEFAULT_FLOW_WINDOW_DAYS
}

fn default_headcount_flow_months() -> u32 {
    DEFAULT_HEADCOUNT_FLOW_MONTHS
}

impl Default for AnalyticsDefaults {
    fn default() -> Self {
        Self {
            flow_window_days: DEFAULT_FLOW_WINDOW_DAYS,
            headcount_flow_months: DEFAULT_HEADCOUNT_FLOW_MONTHS,
        }
    }
}

/// Engine configuration.
///
/// # Example
///
/// ```no_run
/// use workforce_engine::config::EngineConfig;
///
/// let config = EngineConfig::load("./config/engine.yaml")?;
/// assert!(config.analytics.flow_window_days > 0);
/// # Ok::<(), workforce_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Default window sizes for the aggregation endpoints.
    #[serde(default)]
    pub analytics: AnalyticsDefaults,
}

impl EngineConfig {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if the file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.analytics.flow_window_days, 365);
        assert_eq!(config.analytics.headcount_flow_months, 6);
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = "analytics:\n  flow_window_days: 180\n  headcount_flow_months: 12\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.analytics.flow_window_days, 180);
        assert_eq!(config.analytics.headcount_flow_months, 12);
    }

    #[test]
    fn test_parse_partial_yaml_falls_back_to_defaults() {
        let yaml = "analytics:\n  flow_window_days: 90\n";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.analytics.flow_window_days, 90);
        assert_eq!(config.analytics.headcount_flow_months, 6);
    }

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let err = EngineConfig::load("/missing/engine.yaml").unwrap_err();
        assert!(matches!(err, EngineError::ConfigNotFound { .. }));
    }
}
