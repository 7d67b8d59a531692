//! Tokensmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Tokensmith, a
//! design-token generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         tokensmith-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │    (TokenSession, RecipeService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: ArtifactSink, RecipeSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   tokensmith-adapters (Infrastructure)  │
//! │  (DirectorySink, TomlRecipeLoader, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (ScaleGenerator, ColorMixer, TokenTree) │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tokensmith_core::prelude::*;
//!
//! let recipe: Recipe = serde_json::from_str(r##"{
//!     "name": "colors",
//!     "steps": [{"kind": "color_ramp", "path": ["color"], "name": "blue",
//!                "base": "#3B82F6", "count": 9}]
//! }"##).unwrap();
//!
//! let mut session = TokenSession::new();
//! session.apply(&recipe).unwrap();
//! println!("{}", session.render(ArtifactFormat::Css));
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ColorDefaults, Inserted, Recipe, RecipeInfo, RecipeService, RecipeStep, TokenSession,
        ports::{ArtifactSink, RecipeSource},
    };
    pub use crate::domain::{
        Algorithm, ArtifactFormat, CanonicalSerializer, HexColor, Naming, NamingConvention,
        ScaleSpec, Token, TokenTree, TokenType,
    };
    pub use crate::error::{TokensmithError, TokensmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
