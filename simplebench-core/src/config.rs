//! Harness configuration
//!
//! The library never looks for configuration files or environment variables.
//! Callers that keep settings in their own TOML documents can hand the
//! relevant snippet to [`BenchConfig::from_toml_str`]; everyone else builds a
//! [`BenchConfig`] in code.

use crate::error::Result;
use crate::runner::{Runner, TimingMode};
use serde::{Deserialize, Serialize};

/// Simplebench configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Timing mode: "aggregate" or "per-call"
    #[serde(default)]
    pub mode: TimingMode,
    /// Print each run as soon as it completes
    #[serde(default = "default_print")]
    pub print_runs: bool,
    /// Print the comparison block
    #[serde(default = "default_print")]
    pub print_comparison: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            mode: TimingMode::default(),
            print_runs: default_print(),
            print_comparison: default_print(),
        }
    }
}

fn default_print() -> bool {
    true
}

impl BenchConfig {
    /// Parse configuration from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        Ok(config)
    }

    /// Generate the default configuration as a TOML string
    pub fn default_toml() -> String {
        r#"# Simplebench Configuration

# Timing mode: "aggregate" (loop only) or "per-call" (loop + every call)
mode = "aggregate"
# Print each run as soon as it completes
print_runs = true
# Print the comparison block
print_comparison = true
"#
        .to_string()
    }

    /// Runner matching this configuration
    pub fn runner(&self) -> Runner {
        Runner::new(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();
        assert_eq!(config.mode, TimingMode::Aggregate);
        assert!(config.print_runs);
        assert!(config.print_comparison);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            mode = "per-call"
            print_runs = false
        "#;

        let config = BenchConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.mode, TimingMode::PerCall);
        assert!(!config.print_runs);
        // Defaults should still apply
        assert!(config.print_comparison);
        assert_eq!(config.runner().mode(), TimingMode::PerCall);
    }

    #[test]
    fn test_default_toml_parses() {
        let config = BenchConfig::from_toml_str(&BenchConfig::default_toml()).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_unknown_mode_is_config_error() {
        let err = BenchConfig::from_toml_str(r#"mode = "parallel""#).unwrap_err();
        assert!(matches!(err, crate::BenchError::Config(_)));
    }
}
