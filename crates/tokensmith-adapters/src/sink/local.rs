//! Directory sink writing one file per artifact using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use tokensmith_core::{
    application::{ApplicationError, ports::ArtifactSink},
    domain::ArtifactFormat,
    error::{TokensmithError, TokensmithResult},
};

/// Production sink: writes `<dir>/<family>.<json|css|scss>`.
///
/// The directory is created on first write. Existing files are replaced.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where an artifact ends up.
    pub fn path_for(&self, family: &str, format: ArtifactFormat) -> PathBuf {
        self.dir
            .join(format!("{family}.{}", format.file_extension()))
    }
}

impl ArtifactSink for DirectorySink {
    fn write_artifact(
        &self,
        family: &str,
        format: ArtifactFormat,
        contents: &str,
    ) -> TokensmithResult<()> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| map_io_error(&self.dir, e, "create directory"))?;

        let path = self.path_for(family, format);
        std::fs::write(&path, contents).map_err(|e| map_io_error(&path, e, "write file"))?;
        debug!(path = %path.display(), bytes = contents.len(), "artifact written");
        Ok(())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> TokensmithError {
    ApplicationError::ExportFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_family_file_per_format() {
        let temp = TempDir::new().unwrap();
        let sink = DirectorySink::new(temp.path().join("dist"));

        sink.write_artifact("tokens", ArtifactFormat::Css, ":root {\n}\n")
            .unwrap();
        sink.write_artifact("tokens", ArtifactFormat::Scss, "")
            .unwrap();

        let css = std::fs::read_to_string(temp.path().join("dist/tokens.css")).unwrap();
        assert_eq!(css, ":root {\n}\n");
        assert!(temp.path().join("dist/tokens.scss").exists());
    }

    #[test]
    fn unwritable_target_is_an_export_failure() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let err = DirectorySink::new(&blocker)
            .write_artifact("tokens", ArtifactFormat::Json, "{}")
            .unwrap_err();
        assert!(matches!(
            err,
            TokensmithError::Application(ApplicationError::ExportFailed { .. })
        ));
    }
}
