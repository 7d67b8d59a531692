// ============================================================================
// domain/error.rs - GENERATION / NAMING / TREE ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry across recipe steps)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("invalid scale parameter '{parameter}': {reason}")]
    InvalidScaleParameter {
        parameter: &'static str,
        reason: String,
    },

    #[error("invalid color '{value}': expected #RGB or #RRGGBB")]
    InvalidColor { value: String },

    #[error("invalid naming request: {0}")]
    InvalidNaming(String),

    #[error("unknown {what}: '{value}'")]
    Unrecognized { what: &'static str, value: String },

    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("name '{name}' already exists at '{node}' and cannot be disambiguated")]
    NameCollision { name: String, node: String },

    #[error("malformed tree insertion at '{path}': {reason}")]
    MalformedTreeInsertion { path: String, reason: String },
}

impl DomainError {
    /// Shorthand for the most common validation failure.
    pub(crate) fn scale(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidScaleParameter {
            parameter,
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidScaleParameter { parameter, .. } => vec![
                format!("Check the '{}' value of the scale", parameter),
                "count must be between 1 and 20".into(),
                "base, step and ratio must be greater than zero".into(),
            ],
            Self::InvalidColor { value } => vec![
                format!("'{}' is not a hex color", value),
                "Use a 3- or 6-digit hex value, e.g. #3B82F6 or #39F".into(),
            ],
            Self::NameCollision { name, node } => vec![
                format!("'{}' is already used under '{}'", name, node),
                "Give the new scale a variant, or pick a different name".into(),
            ],
            Self::MalformedTreeInsertion { path, .. } => vec![
                format!("'{}' is already a token, it cannot also hold tokens", path),
                "Choose a different path or leaf name".into(),
            ],
            Self::Unrecognized { what, value } => vec![
                format!("'{}' is not a known {}", value, what),
                "See --help for the accepted values".into(),
            ],
            Self::InvalidNaming(_) => vec![
                "Check the naming convention and its options".into(),
                "Alphabetical naming supports at most 26 stops".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidScaleParameter { .. }
            | Self::InvalidColor { .. }
            | Self::InvalidNaming(_)
            | Self::Unrecognized { .. } => ErrorCategory::Validation,
            Self::NameCollision { .. } | Self::MalformedTreeInsertion { .. } => {
                ErrorCategory::Conflict
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

pub type DomainResult<T> = Result<T, DomainError>;
