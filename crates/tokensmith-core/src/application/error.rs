//! Application layer errors.
//!
//! These errors represent failures in orchestration, not generation logic.
//! Generation, naming and tree errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while running recipes and exporting artifacts.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A recipe could not be parsed or one of its steps is inconsistent.
    #[error("Recipe '{recipe}' is invalid: {reason}")]
    RecipeInvalid { recipe: String, reason: String },

    /// No recipe with this name is known to the source.
    #[error("Recipe not found: {name}")]
    RecipeNotFound { name: String },

    /// An artifact could not be written.
    #[error("Failed to export {path}: {reason}")]
    ExportFailed { path: PathBuf, reason: String },

    /// Sink access failed (lock poisoned, etc.).
    #[error("Artifact sink error")]
    SinkLockError,

    /// Recipe catalog access failed.
    #[error("Recipe catalog error")]
    CatalogLockError,

    /// A composite entry points at a token that does not exist.
    #[error("Unresolved reference {reference} in {token}")]
    UnresolvedReference { token: String, reference: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::RecipeInvalid { recipe, .. } => vec![
                format!("Check the steps of recipe '{}'", recipe),
                "Every [[steps]] table needs a kind, a path and a name".into(),
            ],
            Self::RecipeNotFound { name } => vec![
                format!("No recipe named '{}'", name),
                "Try: tokensmith list to see the built-in recipes".into(),
                "Or pass the path of a recipe file".into(),
            ],
            Self::ExportFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Use --dry-run to print the artifacts instead".into(),
            ],
            Self::SinkLockError => vec![
                "The artifact sink is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::CatalogLockError => vec![
                "The recipe catalog is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::UnresolvedReference { reference, .. } => vec![
                format!("Nothing is stored at {}", reference),
                "Add the referenced tokens in an earlier step".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::RecipeInvalid { .. } => ErrorCategory::Validation,
            Self::RecipeNotFound { .. } | Self::UnresolvedReference { .. } => {
                ErrorCategory::NotFound
            }
            Self::ExportFailed { .. } | Self::SinkLockError | Self::CatalogLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
