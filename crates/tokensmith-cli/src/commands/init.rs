//! `tokensmith init`: create a default configuration file, and optionally
//! an editable copy of the starter recipe.

use std::path::{Path, PathBuf};

use tokensmith_adapters::builtin_recipes;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const RECIPES_DIR: &str = "recipes";

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising configuration...")?;

    let config_path = args.path.clone().unwrap_or_else(AppConfig::config_path);

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {}  (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    let base = AppConfig::base_dir(Some(&config_path));
    let mut config = AppConfig::default();

    if args.starter {
        let recipe = base.join(RECIPES_DIR).join("starter.toml");
        write_starter(&recipe, args.force, &output)?;
        config.recipes.dir = Some(PathBuf::from(RECIPES_DIR));
    }

    let toml = config.to_toml().map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: None,
    })?;

    std::fs::create_dir_all(&base)
        .with_cli_context(|| format!("Failed to create config directory '{}'", base.display()))?;
    std::fs::write(&config_path, &toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", config_path.display()))?;

    output.success(&format!(
        "Configuration created at {}",
        config_path.display(),
    ))?;

    Ok(())
}

fn write_starter(path: &Path, force: bool, output: &OutputManager) -> CliResult<()> {
    if path.exists() && !force {
        output.warning(&format!("Keeping existing recipe {}", path.display()))?;
        return Ok(());
    }

    let source = builtin_recipes::source("starter").ok_or_else(|| CliError::Internal {
        message: "starter recipe is not embedded".into(),
    })?;

    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_cli_context(|| format!("Failed to create '{}'", dir.display()))?;
    }
    std::fs::write(path, source)
        .with_cli_context(|| format!("Failed to write '{}'", path.display()))?;

    output.success(&format!("Starter recipe written to {}", path.display()))?;
    Ok(())
}
