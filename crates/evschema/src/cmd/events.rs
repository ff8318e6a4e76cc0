use evschema_registry::EventRegistry;
use evschema_validate::EventType;
use serde::Serialize;

use crate::cmd::EventsArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, print_table, OutputFormat};

#[derive(Debug, Serialize)]
struct EventSummary<'a> {
    name: &'a str,
    fields: usize,
    required_fields: usize,
}

#[derive(Debug, Serialize)]
struct EventsOutput<'a> {
    schema_id: &'static str,
    events: Vec<EventSummary<'a>>,
}

pub fn run(_args: EventsArgs, format: OutputFormat, registry: &EventRegistry) -> CliResult<i32> {
    let output = EventsOutput {
        schema_id: "https://schemas.3leaps.dev/evschema/cli/v1/event-list.schema.json",
        events: registry.events().map(summarize).collect(),
    };

    match format {
        OutputFormat::Json => print_json(&output),
        OutputFormat::Table => print_table(
            vec!["EVENT", "FIELDS", "REQUIRED"],
            output
                .events
                .iter()
                .map(|event| {
                    vec![
                        event.name.to_string(),
                        event.fields.to_string(),
                        event.required_fields.to_string(),
                    ]
                })
                .collect(),
        ),
        OutputFormat::Pretty => {
            for event in &output.events {
                println!(
                    "{:<12} {} fields ({} required)",
                    event.name, event.fields, event.required_fields
                );
            }
        }
        OutputFormat::Raw => {
            for event in &output.events {
                println!("{}", event.name);
            }
        }
    }

    Ok(SUCCESS)
}

fn summarize(event: &EventType) -> EventSummary<'_> {
    let schema = event.schema();
    EventSummary {
        name: event.name(),
        fields: schema.len(),
        required_fields: schema
            .fields()
            .filter(|(_, validator)| validator.is_required())
            .count(),
    }
}
