//! Guard configuration
//!
//! A [`GuardConfig`] describes a guard as data so it can be loaded from JSON:
//!
//! ```json
//! { "pattern": "numeric", "propagate": false }
//! { "pattern": { "custom": "[0-9a-f]+$" }, "error": "default" }
//! ```
//!
//! `propagate` defaults to `true`. `error` defaults to the preset's own
//! failure kind, or [`PatternError::Default`] for custom patterns.

use serde::{Deserialize, Serialize};

use crate::foundation::PatternError;
use crate::guard::Guard;
use crate::validators::{
    AlphaNumericValidator, AlphaValidator, NumericValidator, PatternValidator, PresetPattern,
};

/// Which pattern a configured guard validates with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Digits only.
    Numeric,
    /// Letters and underscores only.
    Alpha,
    /// Identifier.
    AlphaNumeric,
    /// Any regular expression.
    Custom(String),
}

impl PatternKind {
    /// Failure kind a guard on this pattern reports unless overridden.
    #[must_use]
    pub fn failure(&self) -> PatternError {
        match self {
            Self::Numeric => NumericValidator::FAILURE,
            Self::Alpha => AlphaValidator::FAILURE,
            Self::AlphaNumeric => AlphaNumericValidator::FAILURE,
            Self::Custom(_) => PatternError::Default,
        }
    }

    /// Builds the multi-value validator for this pattern.
    pub fn validator(&self) -> Result<PatternValidator, regex::Error> {
        match self {
            Self::Numeric => Ok(NumericValidator::default().into_validator()),
            Self::Alpha => Ok(AlphaValidator::default().into_validator()),
            Self::AlphaNumeric => Ok(AlphaNumericValidator::default().into_validator()),
            Self::Custom(pattern) => PatternValidator::new(pattern),
        }
    }
}

/// Serializable description of a [`Guard`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Pattern every argument must match.
    pub pattern: PatternKind,

    /// Whether the wrapped function's result is handed back.
    #[serde(default = "default_propagate")]
    pub propagate: bool,

    /// Failure kind override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<PatternError>,
}

const fn default_propagate() -> bool {
    true
}

/// Errors raised while loading or building a [`GuardConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid guard configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The custom pattern is not a valid regular expression.
    #[error("invalid guard pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl GuardConfig {
    /// Creates a propagating configuration with the pattern's own failure kind.
    pub fn new(pattern: PatternKind) -> Self {
        Self {
            pattern,
            propagate: default_propagate(),
            error: None,
        }
    }

    /// Sets whether results are propagated.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_propagate(mut self, propagate: bool) -> Self {
        self.propagate = propagate;
        self
    }

    /// Overrides the failure kind.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_error(mut self, error: PatternError) -> Self {
        self.error = Some(error);
        self
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The failure kind the built guard will report.
    #[must_use]
    pub fn failure(&self) -> PatternError {
        self.error.unwrap_or_else(|| self.pattern.failure())
    }

    /// Compiles the configured guard.
    pub fn build(&self) -> Result<Guard, ConfigError> {
        let validator = self.pattern.validator()?;
        Ok(Guard::with_validator(
            validator,
            self.propagate,
            self.failure(),
        ))
    }
}
