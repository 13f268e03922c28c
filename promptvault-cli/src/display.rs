//! Display objects for command output
//!
//! Each listing is turned into plain rows that serialize the same way for
//! JSON and YAML and print as a table otherwise.

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::exit_codes::EXIT_ERROR;
use comfy_table::{presets::UTF8_FULL, Table};
use promptvault_store::{IndexedFolder, NamedValues, PromptFile};
use serde::Serialize;

/// One row of `pvault folders`
#[derive(Serialize, Debug, Clone)]
pub struct FolderRow {
    pub slug: String,
    pub name: String,
    pub prompts: usize,
    pub path: String,
}

impl From<&IndexedFolder> for FolderRow {
    fn from(folder: &IndexedFolder) -> Self {
        Self {
            slug: folder.slug.clone(),
            name: folder.name.clone(),
            prompts: folder.prompts.len(),
            path: folder.path.display().to_string(),
        }
    }
}

/// One row of `pvault prompts`
#[derive(Serialize, Debug, Clone)]
pub struct PromptRow {
    pub slug: String,
    pub title: String,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter_error: Option<String>,
}

impl From<&PromptFile> for PromptRow {
    fn from(prompt: &PromptFile) -> Self {
        Self {
            slug: prompt.slug.clone(),
            title: prompt.title().to_string(),
            file: prompt.name.clone(),
            frontmatter_error: prompt.frontmatter_error.clone(),
        }
    }
}

/// One row of `pvault var list` or `pvault partial list`
#[derive(Serialize, Debug, Clone)]
pub struct EntryRow {
    pub name: String,
    pub value: String,
}

/// Turn a name/value map into rows, in name order
pub fn entry_rows(values: &NamedValues) -> Vec<EntryRow> {
    values
        .iter()
        .map(|(name, value)| EntryRow {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Serialize `value` as JSON or YAML
pub fn to_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)
            .map_err(|e| CliError::with_source("Failed to format JSON", EXIT_ERROR, e)),
        OutputFormat::Yaml | OutputFormat::Table => serde_yaml_ng::to_string(value)
            .map_err(|e| CliError::with_source("Failed to format YAML", EXIT_ERROR, e)),
    }
}

/// Print rows in the requested format; tables use `headers` and `row_mapper`
pub fn print_rows<T, F>(
    items: &[T],
    format: OutputFormat,
    empty_message: &str,
    headers: Vec<&str>,
    row_mapper: F,
) -> CliResult<()>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("{empty_message}");
            } else {
                println!("{}", create_table(items, headers, row_mapper));
            }
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            println!("{}", to_structured(items, format)?);
        }
    }
    Ok(())
}

/// Create a table with given headers and row mapper function
pub fn create_table<T, F>(items: &[T], headers: Vec<&str>, row_mapper: F) -> Table
where
    F: Fn(&T) -> Vec<String>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(headers);

    for item in items {
        table.add_row(row_mapper(item));
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_rows_are_sorted_by_name() {
        let mut values = NamedValues::new();
        values.insert("b".to_string(), "2".to_string());
        values.insert("a".to_string(), "1".to_string());

        let rows = entry_rows(&values);
        assert_eq!(rows[0].name, "a");
        assert_eq!(rows[1].value, "2");
    }

    #[test]
    fn test_table_contains_cells() {
        let rows = vec![EntryRow {
            name: "tone".to_string(),
            value: "formal".to_string(),
        }];
        let table = create_table(&rows, vec!["Name", "Value"], |row| {
            vec![row.name.clone(), row.value.clone()]
        });
        let rendered = table.to_string();
        assert!(rendered.contains("Name"));
        assert!(rendered.contains("formal"));
    }

    #[test]
    fn test_json_output() {
        let rows = vec![EntryRow {
            name: "tone".to_string(),
            value: "formal".to_string(),
        }];
        let json = to_structured(&rows, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["name"], "tone");
    }
}
