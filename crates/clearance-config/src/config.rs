// clearance-config/src/config.rs
// ============================================================================
// Module: Clearance Configuration
// Description: Configuration loading and validation for clearance checks.
// Purpose: Provide strict, fail-closed config parsing with safe defaults.
// Dependencies: clearance-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration selects the classification tags, the schema variant, and
//! where advisory diagnostics go. Inputs are untrusted: size and path limits
//! are enforced before parsing and every section validates after parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use clearance_core::ClassifierSettings;
use clearance_core::DiagnosticSink;
use clearance_core::FileDiagnosticSink;
use clearance_core::NoopDiagnosticSink;
use clearance_core::SchemaVariant;
use clearance_core::StderrDiagnosticSink;
use clearance_core::names;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Limits and Defaults
// ============================================================================

/// Default config file name.
const DEFAULT_CONFIG_NAME: &str = "clearance.toml";
/// Environment variable for config path.
pub(crate) const CONFIG_ENV_VAR: &str = "CLEARANCE_CONFIG";
/// Maximum size of a config file in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 64 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum length of a classification tag.
pub(crate) const MAX_TAG_LENGTH: usize = 128;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Clearance configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearanceConfig {
    /// Classifier configuration.
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Diagnostics configuration.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

impl ClearanceConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml_str(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.classifier.validate()?;
        self.diagnostics.validate()?;
        Ok(())
    }

    /// Returns the classifier settings described by this configuration.
    #[must_use]
    pub fn classifier_settings(&self) -> ClassifierSettings {
        self.classifier.settings()
    }

    /// Builds the configured diagnostic sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the sink cannot be opened.
    pub fn build_sink(&self) -> Result<Box<dyn DiagnosticSink>, ConfigError> {
        self.diagnostics.build_sink()
    }
}

/// Classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClassifierConfig {
    /// Tag required on key card tools.
    #[serde(default = "default_key_card_tag")]
    pub key_card_tag: String,
    /// Tag required on gatekeeper instances.
    #[serde(default = "default_gatekeeper_tag")]
    pub gatekeeper_tag: String,
    /// Required configuration shape.
    #[serde(default)]
    pub variant: SchemaVariant,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            key_card_tag: default_key_card_tag(),
            gatekeeper_tag: default_gatekeeper_tag(),
            variant: SchemaVariant::default(),
        }
    }
}

impl ClassifierConfig {
    /// Validates classifier configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        validate_tag("classifier.key_card_tag", &self.key_card_tag)?;
        validate_tag("classifier.gatekeeper_tag", &self.gatekeeper_tag)?;
        if self.key_card_tag == self.gatekeeper_tag {
            return Err(ConfigError::Invalid(
                "classifier.key_card_tag and classifier.gatekeeper_tag must differ".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the classifier settings.
    #[must_use]
    pub fn settings(&self) -> ClassifierSettings {
        ClassifierSettings {
            key_card_tag: self.key_card_tag.clone(),
            gatekeeper_tag: self.gatekeeper_tag.clone(),
            variant: self.variant,
        }
    }
}

/// Destination for advisory diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticsMode {
    /// JSON lines on stderr.
    #[default]
    Stderr,
    /// JSON lines appended to a file.
    File,
    /// Diagnostics discarded.
    #[serde(rename = "none")]
    Disabled,
}

/// Diagnostics configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct DiagnosticsConfig {
    /// Diagnostics destination.
    #[serde(default)]
    pub mode: DiagnosticsMode,
    /// Log file path (required when `mode = "file"`).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl DiagnosticsConfig {
    /// Validates diagnostics configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.mode, &self.path) {
            (DiagnosticsMode::File, None) => Err(ConfigError::Invalid(
                "diagnostics.path must be set when diagnostics.mode = \"file\"".to_string(),
            )),
            (DiagnosticsMode::File, Some(path)) => validate_path(path),
            (_, Some(_)) => Err(ConfigError::Invalid(
                "diagnostics.path is only valid when diagnostics.mode = \"file\"".to_string(),
            )),
            (_, None) => Ok(()),
        }
    }

    /// Builds the configured sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the log file cannot be opened.
    pub fn build_sink(&self) -> Result<Box<dyn DiagnosticSink>, ConfigError> {
        match (self.mode, &self.path) {
            (DiagnosticsMode::Stderr, _) => Ok(Box::new(StderrDiagnosticSink)),
            (DiagnosticsMode::Disabled, _) => Ok(Box::new(NoopDiagnosticSink)),
            (DiagnosticsMode::File, Some(path)) => {
                let sink = FileDiagnosticSink::new(path)
                    .map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Box::new(sink))
            }
            (DiagnosticsMode::File, None) => {
                Err(ConfigError::Invalid("diagnostics.path must be set".to_string()))
            }
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from caller or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates a path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a classification tag.
fn validate_tag(field: &str, tag: &str) -> Result<(), ConfigError> {
    if tag.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be set")));
    }
    if tag.trim() != tag {
        return Err(ConfigError::Invalid(format!("{field} must be trimmed")));
    }
    if tag.len() > MAX_TAG_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    Ok(())
}

/// Default key card tag.
fn default_key_card_tag() -> String {
    names::DEFAULT_KEY_CARD_TAG.to_string()
}

/// Default gatekeeper tag.
fn default_gatekeeper_tag() -> String {
    names::DEFAULT_GATEKEEPER_TAG.to_string()
}
