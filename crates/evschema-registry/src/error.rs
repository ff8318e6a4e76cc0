use evschema_validate::ValidationError;

/// Errors that can occur while looking up or validating events.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No event registered under the given name.
    #[error("no such event type: {0}")]
    UnknownEvent(String),

    /// An event with the same name is already registered.
    #[error("event type already registered: {0}")]
    DuplicateEvent(String),

    /// The payload exceeds the configured maximum size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },

    /// The payload is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The payload failed validation against the event schema.
    #[error("validation failed for event {event}: {}", .source.field_errors().join("; "))]
    Validation {
        event: String,
        #[source]
        source: ValidationError,
    },
}

impl RegistryError {
    /// Ordered, path-prefixed messages for validation failures; empty for
    /// every other kind of error.
    pub fn field_errors(&self) -> &[String] {
        match self {
            RegistryError::Validation { source, .. } => source.field_errors(),
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
