//! Implementation of the `tokensmith generate` command.
//!
//! Responsibility: find the recipe, run it through a `TokenSession`, and
//! either print the artifacts or hand them to a `DirectorySink`. No
//! generation logic lives here.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use tokensmith_adapters::{DirectorySink, load_recipe_file};
use tokensmith_core::{
    application::{Recipe, TokenSession},
    domain::ArtifactFormat,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    commands::recipe_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `tokensmith generate` command.
///
/// 1. Resolve the recipe (file or catalog name)
/// 2. Apply it to a fresh session seeded with the configured color defaults
/// 3. Print to stdout, or export into the output directory
#[instrument(skip_all)]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let recipe = resolve_recipe(&args, &global, &config)?;
    let family = match &args.family {
        Some(family) => validate_family(family)?,
        None => recipe.family.clone(),
    };
    let formats = args.format.unwrap_or(config.output.format).formats();

    let mut session = TokenSession::new().with_color_defaults(config.color.defaults());
    let inserted = session.apply(&recipe)?;
    for item in &inserted {
        debug!(node = %item.node(), stops = item.stops.len(), "Namespace generated");
    }
    info!(recipe = %recipe.name, namespaces = inserted.len(), "Recipe applied");

    let out_dir = if args.stdout {
        None
    } else {
        args.out.clone().or_else(|| config.output.dir.clone())
    };

    match out_dir {
        Some(dir) if args.dry_run => {
            let sink = DirectorySink::new(dir);
            output.info(&format!("Dry run: would write {} file(s)", formats.len()))?;
            for &format in &formats {
                let bytes = session.render(format).len();
                output.info(&format!(
                    "  {} ({bytes} bytes)",
                    sink.path_for(&family, format).display()
                ))?;
            }
        }
        Some(dir) => {
            let sink = DirectorySink::new(dir);
            session.export(&family, &formats, &sink)?;
            for &format in &formats {
                output.success(&format!("Wrote {}", sink.path_for(&family, format).display()))?;
            }
            output.print(&format!(
                "{} namespace(s) from recipe '{}'",
                inserted.len(),
                recipe.name
            ))?;
        }
        None if args.dry_run => {
            output.info(&format!(
                "Dry run: recipe '{}' produces {} namespace(s)",
                recipe.name,
                inserted.len()
            ))?;
            for item in &inserted {
                output.info(&format!("  {} ({} tokens)", item.node(), item.stops.len()))?;
            }
        }
        None => print_artifacts(&session, &family, &formats, &output)?,
    }

    Ok(())
}

// ── Recipe resolution ─────────────────────────────────────────────────────────

fn resolve_recipe(args: &GenerateArgs, global: &GlobalArgs, config: &AppConfig) -> CliResult<Recipe> {
    if let Some(path) = &args.recipe {
        return load_file(path);
    }

    let name = args.builtin.as_deref().ok_or_else(|| CliError::InvalidInput {
        message: "pass a recipe file or --builtin <NAME>".into(),
        source: None,
    })?;
    Ok(recipe_service(global, config)?.get(name)?)
}

fn load_file(path: &Path) -> CliResult<Recipe> {
    if !path.is_file() {
        return Err(CliError::RecipeFileNotFound {
            path: PathBuf::from(path),
        });
    }
    Ok(load_recipe_file(path)?)
}

fn validate_family(family: &str) -> CliResult<String> {
    let family = family.trim();
    if family.is_empty() || family.contains(['/', '\\']) {
        return Err(CliError::InvalidInput {
            message: format!("family '{family}' must be a plain file stem"),
            source: None,
        });
    }
    Ok(family.to_string())
}

// ── Printing ──────────────────────────────────────────────────────────────────

/// One format prints as-is; several are separated by `==> tokens.css <==`
/// banners.
fn print_artifacts(
    session: &TokenSession,
    family: &str,
    formats: &[ArtifactFormat],
    output: &OutputManager,
) -> CliResult<()> {
    if let [format] = formats {
        output.artifact(&session.render(*format))?;
        return Ok(());
    }

    for (i, &format) in formats.iter().enumerate() {
        if i > 0 {
            output.artifact("\n")?;
        }
        output.artifact(&format!(
            "==> {family}.{} <==\n",
            format.file_extension()
        ))?;
        output.artifact(&session.render(format))?;
    }
    Ok(())
}
