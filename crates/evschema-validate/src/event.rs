use std::sync::Arc;

use serde_json::Value;

use crate::constant::ConstantType;
use crate::contract::Contract;
use crate::error::Result;
use crate::schema::SchemaType;
use crate::validator::Validator;

/// Reserved field carrying the event discriminator.
pub const DISCRIMINATOR_FIELD: &str = "type";

/// A schema that also requires `"type": "<event name>"`.
///
/// The discriminator is injected as an ordinary constant field, so its
/// enforcement and error reporting come straight from [`SchemaType`].
#[derive(Debug, Clone, PartialEq)]
pub struct EventType {
    name: String,
    schema: SchemaType,
}

impl EventType {
    pub fn new<I, K, V>(name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Arc<Validator>>,
    {
        let name = name.into();
        let mut schema = SchemaType::new(fields);
        if schema.contains(DISCRIMINATOR_FIELD) {
            tracing::warn!(
                event = %name,
                field = DISCRIMINATOR_FIELD,
                "declared field replaced by event discriminator"
            );
        }
        schema.insert(
            DISCRIMINATOR_FIELD.to_string(),
            Arc::new(Validator::Constant(ConstantType::new(name.clone()))),
        );
        Self { name, schema }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The augmented schema, discriminator included.
    pub fn schema(&self) -> &SchemaType {
        &self.schema
    }

    pub fn into_schema(self) -> SchemaType {
        self.schema
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        self.schema.validate(value)
    }

    pub fn contract(&self) -> Contract {
        self.schema.contract()
    }
}
