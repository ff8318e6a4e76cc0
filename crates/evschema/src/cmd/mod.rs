use clap::{Args, Subcommand};
use evschema_registry::{EventRegistry, RegistryConfig};
use std::path::PathBuf;

use crate::exit::{registry_error, CliResult};
use crate::output::OutputFormat;

pub mod contract;
pub mod events;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered event types.
    Events(EventsArgs),
    /// Print the contract of one event type, or of all of them.
    Contract(ContractArgs),
    /// Validate a JSON payload against an event type.
    Validate(ValidateArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat, config: RegistryConfig) -> CliResult<i32> {
    match command {
        Command::Events(args) => events::run(args, format, &load_registry(config)?),
        Command::Contract(args) => contract::run(args, format, &load_registry(config)?),
        Command::Validate(args) => validate::run(args, format, &load_registry(config)?),
        Command::Version(args) => version::run(args),
    }
}

fn load_registry(config: RegistryConfig) -> CliResult<EventRegistry> {
    evschema::catalog::builtin_registry_with_config(config)
        .map_err(|err| registry_error("failed loading event catalog", err))
}

#[derive(Args, Debug, Default)]
pub struct EventsArgs {}

#[derive(Args, Debug)]
pub struct ContractArgs {
    /// Event type name. Default: every registered event.
    pub event: Option<String>,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Event type name.
    pub event: String,
    /// JSON payload.
    #[arg(long, conflicts_with = "file")]
    pub json: Option<String>,
    /// Read payload from file. Reads stdin when neither --json nor --file is given.
    #[arg(long, conflicts_with = "json")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
