//! `pvault var` and `pvault partial` - manage the variable and partial maps

use crate::cli::{LibrarySubcommand, OutputFormat};
use crate::context::CliContext;
use crate::display::{entry_rows, print_rows};
use crate::error::CliResult;
use promptvault_store::NamedValues;

/// Which map a library command works on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryKind {
    Variable,
    Partial,
}

impl LibraryKind {
    fn label(self) -> &'static str {
        match self {
            LibraryKind::Variable => "variable",
            LibraryKind::Partial => "partial",
        }
    }
}

pub async fn run(
    kind: LibraryKind,
    subcommand: LibrarySubcommand,
    context: &CliContext,
) -> CliResult<()> {
    let vault = &context.vault;
    let (values, done) = match (kind, subcommand) {
        (LibraryKind::Variable, LibrarySubcommand::List) => (vault.variables().await?, None),
        (LibraryKind::Partial, LibrarySubcommand::List) => (vault.partials().await?, None),
        (LibraryKind::Variable, LibrarySubcommand::Add { name, value }) => (
            vault.add_variable(&name, &value).await?,
            Some(format!("Added {} '{}'", kind.label(), name.trim())),
        ),
        (LibraryKind::Partial, LibrarySubcommand::Add { name, value }) => (
            vault.add_partial(&name, &value).await?,
            Some(format!("Added {} '{}'", kind.label(), name.trim())),
        ),
        (LibraryKind::Variable, LibrarySubcommand::Update { name, value }) => (
            vault.update_variable(&name, &value).await?,
            Some(format!("Updated {} '{}'", kind.label(), name.trim())),
        ),
        (LibraryKind::Partial, LibrarySubcommand::Update { name, value }) => (
            vault.update_partial(&name, &value).await?,
            Some(format!("Updated {} '{}'", kind.label(), name.trim())),
        ),
        (LibraryKind::Variable, LibrarySubcommand::Delete { name }) => (
            vault.delete_variable(&name).await?,
            Some(format!("Deleted {} '{}'", kind.label(), name.trim())),
        ),
        (LibraryKind::Partial, LibrarySubcommand::Delete { name }) => (
            vault.delete_partial(&name).await?,
            Some(format!("Deleted {} '{}'", kind.label(), name.trim())),
        ),
    };

    match done {
        // Mutations print a status line in table mode and the whole map otherwise
        Some(message) if context.format == OutputFormat::Table => {
            context.status(message);
            Ok(())
        }
        _ => print_map(kind, &values, context.format),
    }
}

fn print_map(kind: LibraryKind, values: &NamedValues, format: OutputFormat) -> CliResult<()> {
    let value_header = match kind {
        LibraryKind::Variable => "Value",
        LibraryKind::Partial => "Content",
    };
    print_rows(
        &entry_rows(values),
        format,
        &format!("No {}s defined", kind.label()),
        vec!["Name", value_header],
        |row| vec![row.name.clone(), row.value.clone()],
    )
}
