//! # Match configuration
//!
//! Tuning for a simulated match: over limit, tick cadence, commentary
//! history length and the delivery probability table.
//!
//! ## Usage
//! ```rust
//! use cb_core::engine::config::MatchConfig;
//!
//! let odi = MatchConfig::default();
//! let t20 = MatchConfig::t20();
//! assert_eq!(odi.max_overs, 50);
//! assert_eq!(t20.max_overs, 20);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::commentary::DEFAULT_COMMENTARY_LIMIT;
use super::probability::OutcomeTable;
use super::score::DEFAULT_MAX_OVERS;
use crate::error::{MatchError, Result};

/// Longest innings accepted (timeless-test territory beyond this).
pub const MAX_OVERS_LIMIT: u32 = 90;
/// Slowest tick accepted for live matches.
pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Overs per innings.
    pub max_overs: u32,
    /// Delay between live ticks.
    pub tick_interval_ms: u64,
    /// Entries kept in the commentary history.
    pub commentary_limit: usize,
    pub outcome_table: OutcomeTable,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_overs: DEFAULT_MAX_OVERS,
            tick_interval_ms: 2_500,
            commentary_limit: DEFAULT_COMMENTARY_LIMIT,
            outcome_table: OutcomeTable::default(),
        }
    }
}

impl MatchConfig {
    /// 50-over match at the full-page cadence.
    pub fn odi() -> Self {
        Self::default()
    }

    /// 20-over match at the match-card cadence.
    pub fn t20() -> Self {
        Self { max_overs: 20, tick_interval_ms: 3_000, ..Self::default() }
    }

    /// No delay between ticks.
    pub fn test_fast() -> Self {
        Self { tick_interval_ms: 0, ..Self::default() }
    }

    pub fn with_max_overs(mut self, max_overs: u32) -> Self {
        self.max_overs = max_overs;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn max_balls(&self) -> u32 {
        super::score::max_balls(self.max_overs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_overs == 0 || self.max_overs > MAX_OVERS_LIMIT {
            return Err(MatchError::InvalidOvers { overs: self.max_overs, max: MAX_OVERS_LIMIT });
        }
        if self.tick_interval_ms > MAX_TICK_INTERVAL_MS {
            return Err(MatchError::InvalidTickInterval {
                ms: self.tick_interval_ms,
                max: MAX_TICK_INTERVAL_MS,
            });
        }
        if self.commentary_limit == 0 {
            return Err(MatchError::InvalidHistoryLimit(self.commentary_limit));
        }
        self.outcome_table.validate()
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.json` file, or YAML for any other extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&contents)?,
            _ => Self::from_yaml_str(&contents)?,
        };
        tracing::debug!(path = %path.display(), max_overs = config.max_overs, "loaded match config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_presets_are_valid() {
        assert!(MatchConfig::odi().validate().is_ok());
        assert!(MatchConfig::t20().validate().is_ok());
        assert!(MatchConfig::test_fast().validate().is_ok());
        assert_eq!(MatchConfig::odi().max_balls(), 300);
        assert_eq!(MatchConfig::t20().max_balls(), 120);
    }

    #[test]
    fn test_rejects_zero_overs() {
        let err = MatchConfig::default().with_max_overs(0).validate().unwrap_err();
        assert!(matches!(err, MatchError::InvalidOvers { overs: 0, .. }));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_rejects_slow_tick() {
        let config = MatchConfig { tick_interval_ms: 120_000, ..MatchConfig::default() };
        assert!(matches!(config.validate(), Err(MatchError::InvalidTickInterval { .. })));
    }

    #[test]
    fn test_rejects_empty_history() {
        let config = MatchConfig { commentary_limit: 0, ..MatchConfig::default() };
        assert!(matches!(config.validate(), Err(MatchError::InvalidHistoryLimit(0))));
    }

    #[test]
    fn test_yaml_partial_overrides_use_defaults() {
        let yaml = "max_overs: 20\noutcome_table:\n  six_edge: 0.10\n";
        let config = MatchConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.max_overs, 20);
        assert_eq!(config.tick_interval_ms, 2_500);
        assert_eq!(config.outcome_table.six_edge, 0.10);
        assert_eq!(config.outcome_table.four_edge, 0.17);
    }

    #[test]
    fn test_json_rejects_invalid_table() {
        let json = r#"{"outcome_table": {"one_edge": 0.95}}"#;
        let err = MatchConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, MatchError::InvalidOutcomeTable(_)));
    }

    #[test]
    fn test_from_path_picks_format_by_extension() {
        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"max_overs": 10}}"#).unwrap();
        assert_eq!(MatchConfig::from_path(json.path()).unwrap().max_overs, 10);

        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "max_overs: 5").unwrap();
        assert_eq!(MatchConfig::from_path(yaml.path()).unwrap().max_overs, 5);
    }

    #[test]
    fn test_from_path_missing_file_is_io_error() {
        let err = MatchConfig::from_path("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, MatchError::Io(_)));
    }
}
