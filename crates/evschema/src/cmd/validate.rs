use std::fs;
use std::io::Read;

use evschema_registry::{EventRegistry, RegistryError};
use serde::Serialize;

use crate::cmd::ValidateArgs;
use crate::exit::{io_error, registry_error, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Debug, Serialize)]
struct ValidationReport<'a> {
    schema_id: &'static str,
    event: &'a str,
    valid: bool,
    errors: &'a [String],
}

pub fn run(args: ValidateArgs, format: OutputFormat, registry: &EventRegistry) -> CliResult<i32> {
    if registry.config().fail_on_unknown_event && !registry.has_event(&args.event) {
        return Err(registry_error(
            "validate failed",
            RegistryError::UnknownEvent(args.event),
        ));
    }

    let payload = resolve_payload(&args)?;
    let failure = match registry.validate_payload(&args.event, &payload) {
        Ok(()) => None,
        Err(err @ RegistryError::Validation { .. }) => Some(err),
        Err(err) => return Err(registry_error("validate failed", err)),
    };
    let errors = failure
        .as_ref()
        .map(RegistryError::field_errors)
        .unwrap_or_default();

    let report = ValidationReport {
        schema_id: "https://schemas.3leaps.dev/evschema/cli/v1/validation-report.schema.json",
        event: &args.event,
        valid: errors.is_empty(),
        errors,
    };
    tracing::info!(
        event = %report.event,
        valid = report.valid,
        errors = report.errors.len(),
        "payload validated"
    );
    print_report(&report, format);

    if report.valid {
        Ok(SUCCESS)
    } else {
        Ok(DATA_INVALID)
    }
}

fn resolve_payload(args: &ValidateArgs) -> CliResult<Vec<u8>> {
    if let Some(json) = &args.json {
        return Ok(json.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }

    let mut payload = Vec::new();
    std::io::stdin()
        .read_to_end(&mut payload)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(payload)
}

fn print_report(report: &ValidationReport<'_>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            if report.valid {
                print_table(
                    vec!["EVENT", "RESULT"],
                    vec![vec![report.event.to_string(), "valid".to_string()]],
                );
            } else {
                print_table(
                    vec!["#", "ERROR"],
                    report
                        .errors
                        .iter()
                        .enumerate()
                        .map(|(index, message)| vec![(index + 1).to_string(), message.clone()])
                        .collect(),
                );
            }
        }
        OutputFormat::Pretty => {
            if report.valid {
                println!("{}: valid", report.event);
            } else {
                println!("{}: {} error(s)", report.event, report.errors.len());
                for message in report.errors {
                    println!("  - {message}");
                }
            }
        }
        OutputFormat::Raw => {
            if report.valid {
                println!("valid");
            } else {
                for message in report.errors {
                    println!("{message}");
                }
            }
        }
    }
}
