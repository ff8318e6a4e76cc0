use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use evschema_validate::Contract;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_json_pretty<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_table(header: Vec<&str>, rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}

/// One leaf of a contract, flattened for tabular display.
#[derive(Debug, PartialEq, Eq)]
pub struct ContractRow {
    pub path: String,
    pub kind: String,
    pub required: bool,
    pub detail: String,
}

/// Flatten a contract into rows, joining nested field names with `.`.
pub fn contract_rows(contract: &Contract) -> Vec<ContractRow> {
    let mut rows = Vec::new();
    collect_rows(contract, "", &mut rows);
    rows
}

fn collect_rows(contract: &Contract, path: &str, rows: &mut Vec<ContractRow>) {
    match contract {
        Contract::Field {
            type_name,
            description,
            required,
        } => rows.push(ContractRow {
            path: path.to_string(),
            kind: type_name.to_string(),
            required: *required,
            detail: description.clone(),
        }),
        Contract::Constant { value } => rows.push(ContractRow {
            path: path.to_string(),
            kind: "Constant".to_string(),
            required: true,
            detail: format!("= {value:?}"),
        }),
        Contract::Schema(fields) => {
            for (name, nested) in fields {
                let nested_path = if path.is_empty() {
                    name.clone()
                } else {
                    format!("{path}.{name}")
                };
                collect_rows(nested, &nested_path, rows);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_rows_flatten_nested_schemas() {
        let contract = Contract::Schema(vec![
            (
                "outer".to_string(),
                Contract::Schema(vec![(
                    "inner".to_string(),
                    Contract::Field {
                        type_name: "Integer",
                        description: "count".to_string(),
                        required: false,
                    },
                )]),
            ),
            (
                "type".to_string(),
                Contract::Constant {
                    value: "SMS".to_string(),
                },
            ),
        ]);

        let rows = contract_rows(&contract);
        assert_eq!(
            rows,
            vec![
                ContractRow {
                    path: "outer.inner".to_string(),
                    kind: "Integer".to_string(),
                    required: false,
                    detail: "count".to_string(),
                },
                ContractRow {
                    path: "type".to_string(),
                    kind: "Constant".to_string(),
                    required: true,
                    detail: "= \"SMS\"".to_string(),
                },
            ]
        );
    }
}
