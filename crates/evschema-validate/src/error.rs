/// Message reported when a required value is absent.
pub const FIELD_REQUIRED: &str = "field is required";

/// Message reported when a present value fails its type predicate.
pub const INVALID_TYPE: &str = "invalid type for field";

/// Message reported when a value differs from a constant literal.
pub const UNMATCHED_CONSTANT: &str = "unmatched constant type";

/// Message reported for an input field with no declared validator.
pub const UNEXPECTED_FIELD: &str = "unexpected field";

/// Ordered list of human-readable validation failures.
///
/// Messages are kept in insertion order and never deduplicated. Nested
/// schema failures arrive already prefixed with their field path, e.g.
/// `"schemaField: stringField: field is required"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed: {}", .errors.join("; "))]
pub struct ValidationError {
    errors: Vec<String>,
}

impl ValidationError {
    /// Create an empty error ready for accumulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error holding a single message.
    pub fn single(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }

    /// Append one message.
    pub fn add_field_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Append every message of `nested`, each prefixed with `"<field>: "`.
    pub fn absorb(&mut self, field: &str, nested: ValidationError) {
        self.errors.extend(
            nested
                .errors
                .into_iter()
                .map(|message| format!("{field}: {message}")),
        );
    }

    /// Messages in the order they were recorded.
    pub fn field_errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the error, yielding its messages.
    pub fn into_field_errors(self) -> Vec<String> {
        self.errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidationError>;
