//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only ever sees the values it needs
//! (for example [`ColorDefaults`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `TOKENSMITH__<SECTION>__<KEY>` environment variables
//! 3. Config file (`--config`, or the platform config path if it exists)
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use ::config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tokensmith_core::application::ColorDefaults;

use crate::cli::FormatChoice;

/// Prefix for environment overrides: `TOKENSMITH__COLOR__MIN_MIX=5`.
pub const ENV_PREFIX: &str = "TOKENSMITH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub color: ColorConfig,
    pub recipes: RecipesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Artifact format used when `generate --format` is absent.
    pub format: FormatChoice,
    /// Directory `generate` writes into when `--out` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Mix bounds for color steps that leave them out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub min_mix: f64,
    pub max_mix: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipesConfig {
    /// Extra recipes; these override built-ins with the same name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: FormatChoice::Css,
            dir: None,
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        let defaults = ColorDefaults::default();
        Self {
            min_mix: defaults.min_mix,
            max_mix: defaults.max_mix,
        }
    }
}

impl ColorConfig {
    pub fn defaults(&self) -> ColorDefaults {
        ColorDefaults {
            min_mix: self.min_mix,
            max_mix: self.max_mix,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the platform default is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        debug!(path = %path.display(), required, "Loading configuration");

        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let loaded: Self = config
            .try_deserialize()
            .context("Configuration has invalid values")?;
        loaded.check()?;
        Ok(loaded)
    }

    /// Render as TOML, the format `init` writes and `config list` prints.
    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialise configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.tokensmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "tokensmith", "tokensmith")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".tokensmith.toml"))
    }

    /// Directory relative config paths are resolved against: the folder of
    /// the config file in use.
    pub fn base_dir(config_file: Option<&PathBuf>) -> PathBuf {
        let file = config_file.cloned().unwrap_or_else(Self::config_path);
        file.parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The recipes directory, resolved against `base` when relative.
    pub fn recipes_dir(&self, base: &Path) -> Option<PathBuf> {
        self.recipes.dir.as_ref().map(|dir| {
            if dir.is_relative() {
                base.join(dir)
            } else {
                dir.clone()
            }
        })
    }

    fn check(&self) -> anyhow::Result<()> {
        let ColorConfig { min_mix, max_mix } = self.color;
        let in_range = |v: f64| (0.0..=100.0).contains(&v);
        if !in_range(min_mix) || !in_range(max_mix) {
            anyhow::bail!("color mix percentages must be within 0..=100 (got {min_mix} and {max_mix})");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_session_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.color.defaults(), ColorDefaults::default());
        assert_eq!(cfg.output.format, FormatChoice::Css);
        assert!(cfg.recipes.dir.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "[output]\nformat = \"scss\"\n\n[color]\nmin_mix = 5.0\n\n[recipes]\ndir = \"recipes\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.output.format, FormatChoice::Scss);
        assert_eq!(cfg.color.min_mix, 5.0);
        assert_eq!(cfg.color.max_mix, 90.0);
        assert_eq!(cfg.recipes_dir(temp.path()), Some(temp.path().join("recipes")));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(AppConfig::load(Some(&temp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn out_of_range_mix_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, "[color]\nmax_mix = 140.0\n").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn toml_round_trips_through_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(&path, AppConfig::default().to_toml().unwrap()).unwrap();
        assert_eq!(AppConfig::load(Some(&path)).unwrap(), AppConfig::default());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
