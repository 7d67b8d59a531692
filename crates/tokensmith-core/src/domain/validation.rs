use crate::domain::{
    color::HexColor,
    entities::ScaleSpec,
    error::{DomainError, DomainResult},
    naming::{NameAssigner, Naming},
};

/// Checks run on caller input before any generation work starts.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_scale_spec(spec: &ScaleSpec) -> DomainResult<()> {
        spec.validate()
    }

    pub fn validate_hex(value: &str) -> DomainResult<HexColor> {
        HexColor::parse(value)
    }

    /// The convention must be able to name `count` stops.
    pub fn validate_naming(naming: &Naming, count: usize) -> DomainResult<()> {
        NameAssigner::names(count, naming).map(|_| ())
    }

    /// Tree paths need at least a leaf name and no blank segments.
    pub fn validate_path<S: AsRef<str>>(path: &[S], leaf_name: &str) -> DomainResult<()> {
        let joined = || {
            path.iter()
                .map(AsRef::as_ref)
                .chain(std::iter::once(leaf_name))
                .collect::<Vec<_>>()
                .join(".")
        };
        if leaf_name.trim().is_empty() || path.iter().any(|s| s.as_ref().trim().is_empty()) {
            return Err(DomainError::MalformedTreeInsertion {
                path: joined(),
                reason: "empty segment name".into(),
            });
        }
        Ok(())
    }
}
