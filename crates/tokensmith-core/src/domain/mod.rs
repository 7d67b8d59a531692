// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Tokensmith.
//!
//! Pure generation logic: scales, colors, names, the token tree and the
//! serializers. Loading recipes and writing artifacts happen behind ports
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Spans and events belong to the application layer
//! - **Deterministic**: The same input always renders the same bytes
//!
// Public API - what the world sees
pub mod color;
pub mod entities;
pub mod error;
pub mod naming;
pub mod ordering;
pub mod presets;
pub mod scale;
pub mod serialize;
pub mod shadow;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    Algorithm, CompositeValue, NamedPoint, NamedToken, RawValue, ScalePoint, ScaleSpec,
    ScaleSpecBuilder, Token, TokenTree, TokenValue, TreeNode,
};

pub use color::{ColorCache, ColorMixer, HexColor};
pub use error::{DomainError, DomainResult, ErrorCategory};
pub use naming::{
    MidpointChoice, NameAssigner, NameContext, NameTarget, Naming, NamingConvention,
    NamingOptions, TshirtTable, elide_midpoint,
};
pub use ordering::{OrderingTable, OrderingTables, canonical_order};
pub use presets::Preset;
pub use scale::{ScaleGenerator, format_number};
pub use serialize::CanonicalSerializer;

pub use value_objects::{ArtifactFormat, LetterCase, ShadowVariant, TokenType};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn token_type_parses_loosely() {
        assert_eq!(TokenType::from_str("font-size").unwrap(), TokenType::FontSize);
        assert_eq!(TokenType::from_str("BoxShadow").unwrap(), TokenType::BoxShadow);
        assert_eq!(TokenType::from_str("radius").unwrap(), TokenType::BorderRadius);
        assert!(TokenType::from_str("gradient").is_err());
    }

    #[test]
    fn token_type_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&TokenType::BorderRadius).unwrap(),
            "\"borderRadius\""
        );
        assert_eq!(TokenType::LetterSpacing.to_string(), "letterSpacing");
    }

    #[test]
    fn only_font_size_has_a_floor() {
        assert_eq!(TokenType::FontSize.legibility_floor(), Some(12.0));
        assert_eq!(TokenType::Spacing.legibility_floor(), None);
    }

    #[test]
    fn artifact_format_parses() {
        assert_eq!(ArtifactFormat::from_str("CSS").unwrap(), ArtifactFormat::Css);
        assert_eq!(ArtifactFormat::from_str("sass").unwrap(), ArtifactFormat::Scss);
        assert!(matches!(
            ArtifactFormat::from_str("yaml"),
            Err(DomainError::Unrecognized { what: "artifact format", .. })
        ));
        assert_eq!(ArtifactFormat::Scss.file_extension(), "scss");
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn errors_carry_categories_and_suggestions() {
        let err = DomainError::NameCollision {
            name: "card".into(),
            node: "shadow".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.suggestions().iter().any(|s| s.contains("card")));

        let err = DomainError::InvalidColor {
            value: "#12".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("#12"));
    }

    // ========================================================================
    // Pipeline Tests
    // ========================================================================

    #[test]
    fn scale_to_css_pipeline() {
        let spec = ScaleSpec::builder(Algorithm::LinearGrid, 3)
            .step(4.0)
            .unit("px")
            .build()
            .unwrap();
        let points = ScaleGenerator::points(&spec).unwrap();
        let target = NameTarget::new("spacing", "space", TokenType::Spacing);
        let named = NameAssigner::assign(
            &points,
            &Naming::new(NamingConvention::Tshirt),
            &target,
            &NameContext::new(),
        )
        .unwrap();
        let stops = named
            .into_iter()
            .map(|p| NamedToken::new(p.name, Token::new(p.point.raw.render(spec.unit()), TokenType::Spacing)))
            .collect();

        let mut tree = TokenTree::new();
        tree.insert(&["spacing"], "space", stops).unwrap();
        let css = CanonicalSerializer::new().to_css(&tree);
        assert_eq!(
            css,
            ":root {\n  --spacing-space-sm: 4px;\n  --spacing-space-md: 8px;\n  --spacing-space-lg: 12px;\n}\n"
        );
    }
}
