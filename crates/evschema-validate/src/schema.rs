use std::sync::Arc;

use serde_json::Value;

use crate::contract::Contract;
use crate::error::{Result, ValidationError, UNEXPECTED_FIELD};
use crate::validator::Validator;

static ABSENT: Value = Value::Null;

/// Composite validator over an ordered set of named fields.
///
/// Validation never stops at the first failing field. Every declared field
/// is checked in declaration order, then every input field that is not
/// declared is reported as unexpected, in input order. Nested failures come
/// back prefixed with the field name, which builds the `a: b: message`
/// paths one level at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaType {
    fields: Vec<(String, Arc<Validator>)>,
}

impl SchemaType {
    /// Build a schema from `(name, validator)` pairs.
    ///
    /// A repeated name replaces the earlier validator but keeps its position.
    pub fn new<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Arc<Validator>>,
    {
        let mut schema = Self::default();
        for (name, validator) in fields {
            schema.insert(name.into(), validator.into());
        }
        schema
    }

    pub(crate) fn insert(&mut self, name: String, validator: Arc<Validator>) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = validator,
            None => self.fields.push((name, validator)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Validator> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, validator)| validator.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Validator)> {
        self.fields
            .iter()
            .map(|(name, validator)| (name.as_str(), validator.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate `value` against every declared field.
    ///
    /// Anything that is not a JSON object, `null` included, is treated as an
    /// object with no fields.
    pub fn validate(&self, value: &Value) -> Result<()> {
        let object = value.as_object();
        let mut errors = ValidationError::new();

        for (name, validator) in &self.fields {
            let field_value = object
                .and_then(|object| object.get(name))
                .unwrap_or(&ABSENT);
            if let Err(nested) = validator.validate(field_value) {
                errors.absorb(name, nested);
            }
        }

        if let Some(object) = object {
            for name in object.keys() {
                if !self.contains(name) {
                    errors.add_field_error(format!("{name}: {UNEXPECTED_FIELD}"));
                }
            }
        }

        if !errors.is_empty() {
            tracing::trace!(
                fields = self.fields.len(),
                errors = errors.len(),
                "schema validation failed"
            );
        }
        errors.into_result()
    }

    pub fn contract(&self) -> Contract {
        Contract::Schema(
            self.fields
                .iter()
                .map(|(name, validator)| (name.clone(), validator.contract()))
                .collect(),
        )
    }
}
