//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "entigen",
    bin_name = "entigen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Template-driven entity code generation",
    long_about = "Entigen renders a set of templates against an entity model \
                  and writes the results into your project.",
    after_help = "EXAMPLES:\n\
        \x20 entigen generate Widget --field title:string --field price:float\n\
        \x20 entigen generate OrderItem -f quantity:integer -t model -t migration\n\
        \x20 entigen list --format json\n\
        \x20 entigen completions bash > /usr/share/bash-completion/completions/entigen",
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
    /// Generate files for an entity from templates.
    #[command(
        visible_alias = "g",
        about = "Generate files for an entity",
        after_help = "EXAMPLES:\n\
            \x20 entigen generate Widget --field title:string --field price:float\n\
            \x20 entigen generate Post -f title:string -f body:string:nullable\n\
            \x20 entigen generate Widget -f title:string --template model --dry-run"
    )]
    Generate(GenerateArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 entigen list\n\
            \x20 entigen list --templates ./my-templates\n\
            \x20 entigen list --format json"
    )]
    List(ListArgs),

    /// Publish a starter configuration and template set.
    #[command(
        about = "Initialise configuration and starter templates",
        after_help = "EXAMPLES:\n\
            \x20 entigen init            # entigen.toml + templates/ in CWD\n\
            \x20 entigen init --force    # overwrite existing files"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 entigen completions bash > ~/.local/share/bash-completion/completions/entigen\n\
            \x20 entigen completions zsh  > ~/.zfunc/_entigen\n\
            \x20 entigen completions fish > ~/.config/fish/completions/entigen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `entigen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Entity name, e.g. `Widget` or `OrderItem`.
    #[arg(value_name = "ENTITY", help = "Entity name (PascalCase recommended)")]
    pub entity: String,

    /// Field declarations, repeatable.
    ///
    /// Format: `name:type` or `name:type:modifier,modifier`.
    /// Types: string, integer, float, boolean, date, reference.
    #[arg(
        short = 'f',
        long = "field",
        value_name = "NAME:TYPE[:MODIFIERS]",
        help = "Field declaration (repeatable)"
    )]
    pub fields: Vec<String>,

    /// Render only the named templates.  Repeatable; omit for all templates.
    #[arg(
        short = 't',
        long = "template",
        value_name = "NAME",
        help = "Template to render (repeatable, default: all)"
    )]
    pub templates: Vec<String>,

    /// Overwrite existing files whose content differs.
    #[arg(long = "force", help = "Overwrite hand-edited files")]
    pub force: bool,

    /// Preview the plan without writing any files.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Output root directory.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output root (default: from config, else current directory)"
    )]
    pub out: Option<PathBuf>,

    /// Templates directory.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Templates directory (default: from config, else ./templates)"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `entigen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Templates directory override.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Templates directory (default: from config, else ./templates)"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Output format.
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
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `entigen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to publish the starter templates into.
    #[arg(
        long = "templates",
        value_name = "DIR",
        help = "Templates directory to create (default: ./templates)"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Overwrite existing config and template files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `entigen completions`.
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

// ── tests ─────────────────────────────────────────────────────────────────────
