//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums. No generation logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use tokensmith_core::domain::ArtifactFormat;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tokensmith",
    bin_name = "tokensmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Deterministic design-token generation",
    long_about = "Tokensmith turns small recipes (scales, color ramps, presets) \
                  into design tokens and renders them as JSON, CSS and SCSS.",
    after_help = "EXAMPLES:\n\
        \x20 tokensmith generate --builtin starter --format css\n\
        \x20 tokensmith generate my-system.toml --out dist\n\
        \x20 tokensmith list\n\
        \x20 tokensmith completions bash > /usr/share/bash-completion/completions/tokensmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate tokens from a recipe.
    #[command(
        visible_alias = "gen",
        about = "Generate tokens from a recipe",
        after_help = "EXAMPLES:\n\
            \x20 tokensmith generate --builtin starter\n\
            \x20 tokensmith generate --builtin minimal --format json\n\
            \x20 tokensmith generate brand.toml --format all --out dist\n\
            \x20 tokensmith generate brand.toml --out dist --dry-run"
    )]
    Generate(GenerateArgs),

    /// List available recipes.
    #[command(
        visible_alias = "ls",
        about = "List available recipes",
        after_help = "EXAMPLES:\n\
            \x20 tokensmith list\n\
            \x20 tokensmith list --format json"
    )]
    List(ListArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 tokensmith init\n\
            \x20 tokensmith init --starter\n\
            \x20 tokensmith init --path ./tokensmith.toml --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tokensmith completions bash > ~/.local/share/bash-completion/completions/tokensmith\n\
            \x20 tokensmith completions zsh  > ~/.zfunc/_tokensmith\n\
            \x20 tokensmith completions fish > ~/.config/fish/completions/tokensmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Tokensmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 tokensmith config get color.min_mix\n\
            \x20 tokensmith config list\n\
            \x20 tokensmith config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `tokensmith generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Recipe file (TOML).
    #[arg(
        value_name = "RECIPE_FILE",
        required_unless_present = "builtin",
        conflicts_with = "builtin",
        help = "Recipe file to generate from"
    )]
    pub recipe: Option<PathBuf>,

    /// Named recipe from the catalog (built-ins plus the configured recipes dir).
    #[arg(
        short = 'b',
        long = "builtin",
        value_name = "NAME",
        help = "Use a named recipe instead of a file"
    )]
    pub builtin: Option<String>,

    /// Artifact format. Defaults to `output.format` from the config.
    #[arg(short = 'f', long = "format", value_enum, help = "Artifact format")]
    pub format: Option<FormatChoice>,

    /// Write artifacts into this directory instead of stdout.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        conflicts_with = "stdout",
        help = "Output directory"
    )]
    pub out: Option<PathBuf>,

    /// Print to stdout even when `output.dir` is configured.
    #[arg(long = "stdout", help = "Print artifacts to stdout")]
    pub stdout: bool,

    /// Override the artifact file stem from the recipe.
    #[arg(long = "family", value_name = "NAME", help = "Artifact file stem")]
    pub family: Option<String>,

    /// Describe what would be written without writing anything.
    #[arg(long = "dry-run", help = "Show what would be written")]
    pub dry_run: bool,
}

/// Which artifacts to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    Json,
    Css,
    Scss,
    /// All three formats.
    All,
}

impl FormatChoice {
    pub fn formats(self) -> Vec<ArtifactFormat> {
        match self {
            Self::Json => vec![ArtifactFormat::Json],
            Self::Css => vec![ArtifactFormat::Css],
            Self::Scss => vec![ArtifactFormat::Scss],
            Self::All => ArtifactFormat::ALL.to_vec(),
        }
    }
}

impl std::fmt::Display for FormatChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Css => write!(f, "css"),
            Self::Scss => write!(f, "scss"),
            Self::All => write!(f, "all"),
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `tokensmith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tokensmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the config. Defaults to the platform config directory.
    #[arg(long = "path", value_name = "FILE", help = "Config file to create")]
    pub path: Option<PathBuf>,

    /// Also write the starter recipe into a `recipes/` directory next to the
    /// config, and point `recipes.dir` at it.
    #[arg(long = "starter", help = "Write the starter recipe as well")]
    pub starter: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tokensmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `tokensmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `color.min_mix`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_builtin() {
        let cli = Cli::parse_from(["tokensmith", "generate", "--builtin", "starter", "-f", "scss"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.builtin.as_deref(), Some("starter"));
                assert_eq!(args.format, Some(FormatChoice::Scss));
                assert!(args.recipe.is_none());
                assert!(!args.dry_run);
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn parse_generate_file_with_out_dir() {
        let cli = Cli::parse_from(["tokensmith", "gen", "brand.toml", "--out", "dist", "--dry-run"]);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.recipe, Some(PathBuf::from("brand.toml")));
                assert_eq!(args.out, Some(PathBuf::from("dist")));
                assert!(args.dry_run);
                assert!(args.format.is_none());
            }
            _ => panic!("Expected Generate command"),
        }
    }

    #[test]
    fn generate_needs_a_recipe() {
        assert!(Cli::try_parse_from(["tokensmith", "generate"]).is_err());
    }

    #[test]
    fn generate_rejects_file_and_builtin_together() {
        let result =
            Cli::try_parse_from(["tokensmith", "generate", "a.toml", "--builtin", "starter"]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_list_json() {
        let cli = Cli::parse_from(["tokensmith", "ls", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::List(ListArgs {
                format: ListFormat::Json
            })
        ));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["tokensmith", "list", "-vv", "--log-file", "t.log"]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_file, Some(PathBuf::from("t.log")));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["tokensmith", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn format_choice_expands() {
        assert_eq!(FormatChoice::All.formats().len(), 3);
        assert_eq!(FormatChoice::Json.formats(), [ArtifactFormat::Json]);
        assert_eq!(FormatChoice::Scss.to_string(), "scss");
    }
}
