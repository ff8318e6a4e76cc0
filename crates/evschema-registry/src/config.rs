/// Controls registry lookup and payload handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// When true, validating an unregistered event name returns
    /// `RegistryError::UnknownEvent`. When false such payloads pass.
    pub fail_on_unknown_event: bool,
    /// When true, registering an existing name replaces the old event.
    pub allow_overwrite: bool,
    /// Maximum bytes accepted by `validate_payload`.
    pub max_payload_size: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            fail_on_unknown_event: true,
            allow_overwrite: false,
            max_payload_size: 1024 * 1024,
        }
    }
}
