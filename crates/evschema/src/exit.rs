use std::fmt;
use std::io;

use evschema_registry::RegistryError;

// Exit code constants aligned with rsfulmen/DDR-0002 semantics.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => USAGE,
        io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => DATA_INVALID,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn registry_error(context: &str, err: RegistryError) -> CliError {
    let code = match &err {
        RegistryError::UnknownEvent(_) => USAGE,
        RegistryError::DuplicateEvent(_) => FAILURE,
        RegistryError::PayloadTooLarge { .. }
        | RegistryError::InvalidJson(_)
        | RegistryError::Validation { .. } => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_errors_map_to_exit_codes() {
        let unknown = registry_error("lookup", RegistryError::UnknownEvent("X".to_string()));
        assert_eq!(unknown.code, USAGE);
        assert_eq!(unknown.to_string(), "lookup: no such event type: X");

        let too_large = registry_error(
            "read",
            RegistryError::PayloadTooLarge { size: 10, max: 1 },
        );
        assert_eq!(too_large.code, DATA_INVALID);
    }

    #[test]
    fn missing_file_is_a_usage_error() {
        let err = io_error(
            "failed reading payload.json",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert_eq!(err.code, USAGE);
    }
}
