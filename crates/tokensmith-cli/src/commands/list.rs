//! Implementation of the `tokensmith list` command.

use serde_json::json;

use tokensmith_core::application::RecipeInfo;

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat, global::GlobalArgs},
    commands::recipe_service,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    args: ListArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let recipes = recipe_service(&global, &config)?.list()?;

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Recipes:")?;
            let width = recipes.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for recipe in &recipes {
                output.print(&format!(
                    "  {:<width$}  {:>2} steps  -> {}.*  {}",
                    recipe.name, recipe.steps, recipe.family, recipe.description
                ))?;
            }
        }

        ListFormat::List => {
            for recipe in &recipes {
                println!("{}", recipe.name);
            }
        }

        // JSON goes straight to stdout so it stays parseable under --quiet.
        ListFormat::Json => println!("{}", to_json(&recipes)?),
    }

    Ok(())
}

fn to_json(recipes: &[RecipeInfo]) -> CliResult<String> {
    let rows: Vec<_> = recipes
        .iter()
        .map(|r| {
            json!({
                "name": r.name,
                "description": r.description,
                "family": r.family,
                "steps": r.steps,
                "kinds": r.kinds,
            })
        })
        .collect();

    serde_json::to_string_pretty(&rows).map_err(|e| CliError::Internal {
        message: format!("Failed to serialise recipe list: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_rows_carry_step_kinds() {
        let info = RecipeInfo {
            name: "brand".into(),
            description: "Brand colors".into(),
            family: "brand".into(),
            steps: 2,
            kinds: vec!["color_ramp", "scale"],
        };

        let parsed: serde_json::Value = serde_json::from_str(&to_json(&[info]).unwrap()).unwrap();
        assert_eq!(parsed[0]["name"], "brand");
        assert_eq!(parsed[0]["steps"], 2);
        assert_eq!(parsed[0]["kinds"][1], "scale");
    }
}
