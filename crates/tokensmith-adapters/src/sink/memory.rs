//! In-memory sink for testing and previews.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use tokensmith_core::{
    application::{ApplicationError, ports::ArtifactSink},
    domain::ArtifactFormat,
    error::TokensmithResult,
};

/// In-memory sink keyed by file name (`tokens.css`).
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemorySink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read an artifact's contents.
    pub fn read(&self, family: &str, format: ArtifactFormat) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.get(&file_name(family, format)).cloned()
    }

    /// List all file names, sorted.
    pub fn file_names(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|inner| inner.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all contents.
    pub fn clear(&self) -> TokensmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;
        inner.clear();
        Ok(())
    }
}

impl ArtifactSink for MemorySink {
    fn write_artifact(
        &self,
        family: &str,
        format: ArtifactFormat,
        contents: &str,
    ) -> TokensmithResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        inner.insert(file_name(family, format), contents.to_string());
        Ok(())
    }
}

fn file_name(family: &str, format: ArtifactFormat) -> String {
    format!("{family}.{}", format.file_extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let sink = MemorySink::new();
        sink.write_artifact("tokens", ArtifactFormat::Css, "a").unwrap();
        sink.write_artifact("tokens", ArtifactFormat::Css, "b").unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.read("tokens", ArtifactFormat::Css).as_deref(), Some("b"));
        assert_eq!(sink.read("tokens", ArtifactFormat::Json), None);
    }

    #[test]
    fn clones_share_contents() {
        let sink = MemorySink::new();
        let view = sink.clone();
        sink.write_artifact("brand", ArtifactFormat::Scss, "$x: 1;").unwrap();
        assert_eq!(view.file_names(), ["brand.scss"]);

        view.clear().unwrap();
        assert!(sink.is_empty());
    }
}
