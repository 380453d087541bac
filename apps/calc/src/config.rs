//! Layered configuration for the `calc` binary.
//!
//! Layers, later wins:
//! 1. defaults
//! 2. YAML file (`--config`)
//! 3. environment (`CALC__*`, nested with `__`)
//! 4. CLI overrides

use std::path::Path;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

pub const ENV_PREFIX: &str = "CALC__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_owned(),
            json: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then `CALC__*` variables.
    ///
    /// # Errors
    /// Fails if `path` is given but is not a file, or if any layer holds a
    /// value of the wrong shape.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    /// Apply `-v` (count) and `--json` on top of the loaded layers.
    pub fn apply_cli_overrides(&mut self, verbose: u8, json: bool) {
        let level = match verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        };
        if let Some(level) = level {
            level.clone_into(&mut self.logging.level);
        }
        if json {
            self.output.format = OutputFormat::Json;
        }
    }

    /// Effective configuration as pretty JSON.
    ///
    /// # Errors
    /// Only if serialization fails, which the plain data model rules out.
    pub fn to_pretty_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use std::io::Write;

    const VARS: [&str; 3] = [
        "CALC__LOGGING__LEVEL",
        "CALC__LOGGING__JSON",
        "CALC__OUTPUT__FORMAT",
    ];

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        temp_env::with_vars_unset(VARS, || {
            let cfg = AppConfig::load(None).unwrap();
            assert_eq!(cfg, AppConfig::default());
            assert_eq!(cfg.logging.level, "warn");
            assert_eq!(cfg.output.format, OutputFormat::Text);
        });
    }

    #[test]
    fn test_missing_file_is_an_error() {
        temp_env::with_vars_unset(VARS, || {
            let err = AppConfig::load(Some(Path::new("/nonexistent/calc.yaml"))).unwrap_err();
            assert!(err.to_string().contains("does not exist"), "{err}");
        });
    }

    #[test]
    fn test_yaml_layer() {
        let file = yaml_file("logging:\n  level: debug\noutput:\n  format: json\n");
        temp_env::with_vars_unset(VARS, || {
            let cfg = AppConfig::load(Some(file.path())).unwrap();
            assert_eq!(cfg.logging.level, "debug");
            assert!(!cfg.logging.json);
            assert_eq!(cfg.output.format, OutputFormat::Json);
        });
    }

    #[test]
    fn test_env_overrides_yaml() {
        let file = yaml_file("logging:\n  level: debug\n");
        temp_env::with_vars(
            [
                ("CALC__LOGGING__LEVEL", Some("error")),
                ("CALC__LOGGING__JSON", Some("true")),
                ("CALC__OUTPUT__FORMAT", None),
            ],
            || {
                let cfg = AppConfig::load(Some(file.path())).unwrap();
                assert_eq!(cfg.logging.level, "error");
                assert!(cfg.logging.json);
            },
        );
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        temp_env::with_vars(
            [
                ("CALC__LOGGING__LEVEL", None),
                ("CALC__LOGGING__JSON", None),
                ("CALC__OUTPUT__FORMAT", Some("xml")),
            ],
            || {
                let err = AppConfig::load(None).unwrap_err();
                assert!(err.to_string().contains("invalid configuration"), "{err}");
            },
        );
    }

    #[test]
    fn test_cli_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_cli_overrides(0, false);
        assert_eq!(cfg, AppConfig::default());

        cfg.apply_cli_overrides(2, true);
        assert_eq!(cfg.logging.level, "debug");
        assert_eq!(cfg.output.format, OutputFormat::Json);

        cfg.apply_cli_overrides(5, false);
        assert_eq!(cfg.logging.level, "trace");
        assert_eq!(cfg.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_pretty_json() {
        let json = AppConfig::default().to_pretty_json().unwrap();
        assert!(json.contains("\"level\": \"warn\""));
        assert!(json.contains("\"format\": \"text\""));
    }
}
