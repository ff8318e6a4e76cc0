//! Named event registry in front of evschema validators.
//!
//! Maps event names to [`EventType`](evschema_validate::EventType) schemas,
//! produces "no such event type" failures for unknown names, and decodes
//! raw JSON payloads before handing them to the validators.

pub mod config;
pub mod error;
pub mod registry;

pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use registry::EventRegistry;
