//! Command implementations

pub mod browse;
pub mod library;
pub mod save;
pub mod show;
pub mod vault;

use crate::cli::Commands;
use crate::context::CliContext;
use crate::error::CliResult;
use library::LibraryKind;

/// Run one parsed command
pub async fn run(command: Commands, context: &CliContext) -> CliResult<()> {
    match command {
        Commands::Vault { subcommand } => vault::run(subcommand, context).await,
        Commands::Index => browse::run_index(context).await,
        Commands::Folders => browse::run_folders(context).await,
        Commands::Prompts { folder } => browse::run_prompts(&folder, context).await,
        Commands::Show {
            folder,
            prompt,
            markup,
            refs,
        } => show::run(&folder, &prompt, markup, refs, context).await,
        Commands::Var { subcommand } => {
            library::run(LibraryKind::Variable, subcommand, context).await
        }
        Commands::Partial { subcommand } => {
            library::run(LibraryKind::Partial, subcommand, context).await
        }
        Commands::Save {
            path,
            frontmatter,
            body,
        } => save::run(&path, frontmatter.as_deref(), body.as_deref(), context).await,
    }
}
