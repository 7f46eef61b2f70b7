//! Configuration management and validation.
//!
//! Provides the portal configuration: preview size and the behaviour of the
//! simulated submission step. Values are layered as defaults, then
//! environment variables, then CLI overrides.

use crate::constants::{DEFAULT_PREVIEW_LINES, DEFAULT_UPLOAD_DELAY_MS, env_vars};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Outcome produced by the simulated submission step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulatedOutcome {
    /// Resolve after the delay (the only outcome the real page ever produces)
    Accept,
    /// Reject after the delay, exercising the `uploading -> error` path
    Reject,
}

/// Main configuration for the portal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Number of non-empty lines kept in an upload preview
    pub preview_lines: usize,

    /// Delay of the simulated submission step in milliseconds
    pub upload_delay_ms: u64,

    /// Outcome of the simulated submission step
    pub submission_outcome: SimulatedOutcome,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            preview_lines: DEFAULT_PREVIEW_LINES,
            upload_delay_ms: DEFAULT_UPLOAD_DELAY_MS,
            submission_outcome: SimulatedOutcome::Accept,
        }
    }
}

impl PortalConfig {
    /// Load defaults overridden by `PORTAL_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an environment lookup function
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(env_vars::UPLOAD_DELAY_MS) {
            self.upload_delay_ms = raw.trim().parse().map_err(|e| {
                Error::configuration(format!(
                    "Invalid {} value '{}': {}",
                    env_vars::UPLOAD_DELAY_MS,
                    raw,
                    e
                ))
            })?;
            debug!("Upload delay overridden from environment: {}ms", self.upload_delay_ms);
        }

        if let Some(raw) = lookup(env_vars::PREVIEW_LINES) {
            self.preview_lines = raw.trim().parse().map_err(|e| {
                Error::configuration(format!(
                    "Invalid {} value '{}': {}",
                    env_vars::PREVIEW_LINES,
                    raw,
                    e
                ))
            })?;
            debug!("Preview lines overridden from environment: {}", self.preview_lines);
        }

        Ok(self)
    }

    /// Set the simulated submission delay
    pub fn with_upload_delay(mut self, delay: Duration) -> Self {
        self.upload_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the number of preview lines
    pub fn with_preview_lines(mut self, lines: usize) -> Self {
        self.preview_lines = lines;
        self
    }

    /// Make the simulated submission step reject
    pub fn with_failing_submission(mut self) -> Self {
        self.submission_outcome = SimulatedOutcome::Reject;
        self
    }

    pub fn upload_delay(&self) -> Duration {
        Duration::from_millis(self.upload_delay_ms)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.preview_lines == 0 {
            return Err(Error::configuration(
                "Preview lines must be greater than 0",
            ));
        }

        if self.upload_delay_ms > 60_000 {
            return Err(Error::configuration(format!(
                "Upload delay {}ms exceeds the 60000ms maximum",
                self.upload_delay_ms
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.preview_lines, 5);
        assert_eq!(config.upload_delay(), Duration::from_millis(1200));
        assert_eq!(config.submission_outcome, SimulatedOutcome::Accept);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let config = PortalConfig::default()
            .with_env_overrides(lookup_from(&[
                ("PORTAL_UPLOAD_DELAY_MS", "250"),
                ("PORTAL_PREVIEW_LINES", " 3 "),
            ]))
            .unwrap();

        assert_eq!(config.upload_delay_ms, 250);
        assert_eq!(config.preview_lines, 3);
    }

    #[test]
    fn test_invalid_env_override() {
        let result = PortalConfig::default()
            .with_env_overrides(lookup_from(&[("PORTAL_UPLOAD_DELAY_MS", "soon")]));

        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_builder_methods() {
        let config = PortalConfig::default()
            .with_upload_delay(Duration::from_millis(10))
            .with_preview_lines(2)
            .with_failing_submission();

        assert_eq!(config.upload_delay_ms, 10);
        assert_eq!(config.preview_lines, 2);
        assert_eq!(config.submission_outcome, SimulatedOutcome::Reject);
    }

    #[test]
    fn test_oversized_delay_saturates_and_fails_validation() {
        let config = PortalConfig::default().with_upload_delay(Duration::MAX);

        assert_eq!(config.upload_delay_ms, u64::MAX);
        assert!(matches!(config.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        assert!(PortalConfig::default().with_preview_lines(0).validate().is_err());
        assert!(
            PortalConfig::default()
                .with_upload_delay(Duration::from_secs(120))
                .validate()
                .is_err()
        );
    }
}
