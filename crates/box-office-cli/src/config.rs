//! Harness configuration, read from the environment at startup.

use crate::error::AppError;

/// Selects the log formatter.
pub const LOG_FORMAT_VAR: &str = "BOX_OFFICE_LOG_FORMAT";

/// Selects how the purchase outcome is printed.
pub const OUTPUT_VAR: &str = "BOX_OFFICE_OUTPUT";

/// How log lines are formatted on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable multi-line output.
    Pretty,
}

/// How the purchase outcome is printed on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The three receipt lines.
    #[default]
    Text,
    /// The receipt as a JSON document.
    Json,
}

/// Harness configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HarnessConfig {
    /// Log formatter.
    pub log_format: LogFormat,
    /// Outcome formatter.
    pub output: OutputFormat,
}

impl HarnessConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value
    /// if it is set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an unsupported value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_VAR).as_deref().map(str::trim) {
            None | Some("" | "json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{LOG_FORMAT_VAR} must be json or pretty, got {other:?}"
                )));
            }
        };

        let output = match lookup(OUTPUT_VAR).as_deref().map(str::trim) {
            None | Some("" | "text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => {
                return Err(AppError::Config(format!(
                    "{OUTPUT_VAR} must be text or json, got {other:?}"
                )));
            }
        };

        Ok(Self { log_format, output })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<HarnessConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        HarnessConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_reads_both_variables() {
        let config =
            config_from(&[(LOG_FORMAT_VAR, "pretty"), (OUTPUT_VAR, "json")]).unwrap();
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_values() {
        assert!(matches!(
            config_from(&[(OUTPUT_VAR, "xml")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[(LOG_FORMAT_VAR, "compact")]),
            Err(AppError::Config(_))
        ));
    }
}
