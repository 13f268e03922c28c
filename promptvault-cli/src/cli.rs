use clap::{Parser, Subcommand, ValueEnum};
use promptvault_config::MarkupStyle;
use promptvault_templating::Markup;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// Marker style for `pvault show`
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum MarkupArg {
    /// Styled HTML spans
    Html,
    /// Colored terminal text
    Ansi,
    /// Plain text, ready to paste
    Plain,
}

impl From<MarkupArg> for MarkupStyle {
    fn from(arg: MarkupArg) -> Self {
        match arg {
            MarkupArg::Html => MarkupStyle::Html,
            MarkupArg::Ansi => MarkupStyle::Ansi,
            MarkupArg::Plain => MarkupStyle::Plain,
        }
    }
}

/// Marker style the renderer uses for a configured style
pub fn render_markup(style: MarkupStyle) -> Markup {
    match style {
        MarkupStyle::Html => Markup::Html,
        MarkupStyle::Ansi => Markup::Ansi,
        MarkupStyle::Plain => Markup::Plain,
    }
}

#[derive(Parser, Debug)]
#[command(name = "pvault")]
#[command(version)]
#[command(about = "Browse and render a folder-based prompt library")]
#[command(long_about = "
pvault manages a vault: a directory of folders holding Markdown prompt files
with optional YAML front-matter. Prompts may reference variables with
{{name}} and reusable snippets (partials) with {{> name}}.

Global arguments can be used with any command:
  --verbose     Show informational log output
  --format      Set output format (table, json, yaml)
  --debug       Enable debug logging
  --quiet       Suppress all output except errors

Example usage:
  pvault vault set ~/prompts                 # Choose the vault and index it
  pvault folders                             # List indexed folders
  pvault prompts work                        # List prompts in a folder
  pvault show work code-review --markup plain
  pvault var add language Rust
  pvault partial add footer 'Answer in {{language}}.'
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Global output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure the vault directory
    Vault {
        #[command(subcommand)]
        subcommand: VaultSubcommand,
    },
    /// Re-scan the vault and refresh the stored index
    Index,
    /// List indexed folders
    Folders,
    /// List the prompts in a folder
    Prompts {
        /// Folder slug
        folder: String,
    },
    /// Render a prompt with variables and partials substituted
    Show {
        /// Folder slug
        folder: String,
        /// Prompt slug
        prompt: String,
        /// Marker style; defaults to the configured `render.markup`
        #[arg(long, value_enum)]
        markup: Option<MarkupArg>,
        /// Also list the variables and partials the prompt refers to
        #[arg(long)]
        refs: bool,
    },
    /// Manage variables
    Var {
        #[command(subcommand)]
        subcommand: LibrarySubcommand,
    },
    /// Manage partials
    Partial {
        #[command(subcommand)]
        subcommand: LibrarySubcommand,
    },
    /// Write a prompt file and re-index the vault
    #[command(long_about = "
Write a prompt file, replacing its contents, then re-index the vault.

The body is read from --body, or from standard input when --body is not
given. The optional --frontmatter file holds a YAML mapping that is written
as the file's header.
")]
    Save {
        /// Prompt file to write
        path: PathBuf,
        /// YAML file with the header mapping
        #[arg(long, value_name = "FILE")]
        frontmatter: Option<PathBuf>,
        /// File with the prompt body
        #[arg(long, value_name = "FILE")]
        body: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum VaultSubcommand {
    /// Pick the vault directory interactively and index it
    Choose,
    /// Set the vault directory and index it
    Set {
        /// Vault directory
        path: PathBuf,
    },
    /// Print the vault directory
    Show,
}

#[derive(Subcommand, Debug)]
pub enum LibrarySubcommand {
    /// List all entries
    List,
    /// Add a new entry
    Add {
        /// Entry name
        name: String,
        /// Entry value
        value: String,
    },
    /// Change an existing entry's value
    Update {
        /// Entry name
        name: String,
        /// New value
        value: String,
    },
    /// Remove an entry
    Delete {
        /// Entry name
        name: String,
    },
}
