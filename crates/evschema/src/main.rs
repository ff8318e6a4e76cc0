mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;
use evschema_registry::RegistryConfig;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "evschema", version, about = "Event schema validation CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Largest payload accepted by `validate`, in bytes.
    #[arg(
        long,
        value_name = "BYTES",
        env = "EVSCHEMA_MAX_PAYLOAD_BYTES",
        global = true
    )]
    max_payload_bytes: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn registry_config(&self) -> RegistryConfig {
        let defaults = RegistryConfig::default();
        RegistryConfig {
            max_payload_size: self
                .max_payload_bytes
                .unwrap_or(defaults.max_payload_size),
            ..defaults
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let config = cli.registry_config();
    let result = cmd::run(cli.command, format, config);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_validate_subcommand() {
        let cli = Cli::try_parse_from(["evschema", "validate", "SMS", "--json", "{}"])
            .expect("validate args should parse");

        assert!(matches!(cli.command, Command::Validate(_)));
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from([
            "evschema",
            "validate",
            "SMS",
            "--json",
            "{}",
            "--file",
            "payload.json",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn contract_event_is_optional() {
        let cli = Cli::try_parse_from(["evschema", "contract"]).expect("contract should parse");
        assert!(matches!(cli.command, Command::Contract(ref args) if args.event.is_none()));
    }

    #[test]
    fn max_payload_flag_overrides_default() {
        let cli = Cli::try_parse_from(["evschema", "--max-payload-bytes", "64", "events"])
            .expect("events args should parse");
        assert_eq!(cli.registry_config().max_payload_size, 64);
        assert!(cli.registry_config().fail_on_unknown_event);
    }
}
