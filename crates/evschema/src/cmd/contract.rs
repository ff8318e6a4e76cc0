use evschema_registry::EventRegistry;

use crate::cmd::ContractArgs;
use crate::exit::{registry_error, CliResult, SUCCESS};
use crate::output::{contract_rows, print_json, print_json_pretty, print_table, OutputFormat};

const HEADER: [&str; 4] = ["FIELD", "TYPE", "REQUIRED", "DETAIL"];

pub fn run(args: ContractArgs, format: OutputFormat, registry: &EventRegistry) -> CliResult<i32> {
    match args.event {
        Some(name) => {
            let contract = registry
                .contract(&name)
                .map_err(|err| registry_error("contract lookup failed", err))?;
            match format {
                OutputFormat::Json | OutputFormat::Raw => print_json(&contract),
                OutputFormat::Pretty => print_json_pretty(&contract),
                OutputFormat::Table => print_table(
                    HEADER.to_vec(),
                    contract_rows(&contract)
                        .into_iter()
                        .map(|row| {
                            vec![row.path, row.kind, row.required.to_string(), row.detail]
                        })
                        .collect(),
                ),
            }
        }
        None => match format {
            OutputFormat::Json | OutputFormat::Raw => print_json(&registry.contracts()),
            OutputFormat::Pretty => print_json_pretty(&registry.contracts()),
            OutputFormat::Table => {
                let mut rows = Vec::new();
                for event in registry.events() {
                    for row in contract_rows(&event.contract()) {
                        rows.push(vec![
                            format!("{}.{}", event.name(), row.path),
                            row.kind,
                            row.required.to_string(),
                            row.detail,
                        ]);
                    }
                }
                print_table(HEADER.to_vec(), rows);
            }
        },
    }

    Ok(SUCCESS)
}
