//! Declarative event validation with path-qualified error reports.
//!
//! # Crate Structure
//!
//! - [`validate`] — Validator primitives, schemas, events and contracts
//! - [`registry`] — Name-keyed event registry and payload decoding
//! - [`catalog`] — Built-in demonstration events used by the CLI

pub mod catalog;

/// Re-export validator types.
pub mod validate {
    pub use evschema_validate::*;
}

/// Re-export registry types.
pub mod registry {
    pub use evschema_registry::*;
}
