//! Composable field validators with path-qualified error aggregation.
//!
//! Build a schema out of primitive validators, check arbitrary JSON values
//! against it, and get back either success or every failure, each prefixed
//! with the field path that produced it:
//!
//! ```
//! use evschema_validate::{EventType, Validator};
//! use serde_json::json;
//!
//! let sms = EventType::new(
//!     "SMS",
//!     [
//!         ("to", Validator::string()),
//!         ("sentAt", Validator::iso8601().optional()),
//!     ],
//! );
//!
//! let err = sms.validate(&json!({"type": "SMS", "sentAt": "now"})).unwrap_err();
//! assert_eq!(
//!     err.field_errors(),
//!     ["to: field is required", "sentAt: invalid type for field"]
//! );
//! ```
//!
//! Validators never coerce or mutate input, and hold no per-call state.

pub mod constant;
pub mod contract;
pub mod error;
pub mod event;
mod predicate;
pub mod schema;
pub mod validator;

pub use constant::ConstantType;
pub use contract::Contract;
pub use error::{
    Result, ValidationError, FIELD_REQUIRED, INVALID_TYPE, UNEXPECTED_FIELD, UNMATCHED_CONSTANT,
};
pub use event::{EventType, DISCRIMINATOR_FIELD};
pub use schema::SchemaType;
pub use validator::{FieldOptions, Validator};
