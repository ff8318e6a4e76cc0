use std::sync::Arc;

use serde_json::Value;

use crate::constant::ConstantType;
use crate::contract::Contract;
use crate::error::{Result, ValidationError, FIELD_REQUIRED, INVALID_TYPE};
use crate::event::EventType;
use crate::predicate;
use crate::schema::SchemaType;

/// Options shared by the primitive validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOptions {
    pub description: String,
    pub required: bool,
}

impl Default for FieldOptions {
    fn default() -> Self {
        Self {
            description: String::new(),
            required: true,
        }
    }
}

/// A single validation rule.
///
/// Validators are immutable once built and hold no per-call state, so one
/// instance can be shared (through `Arc`) by any number of schemas.
#[derive(Debug, Clone, PartialEq)]
pub enum Validator {
    String(FieldOptions),
    Integer(FieldOptions),
    Iso8601(FieldOptions),
    Uuid(FieldOptions),
    Constant(ConstantType),
    Schema(SchemaType),
}

impl Validator {
    pub fn string() -> Self {
        Validator::String(FieldOptions::default())
    }

    pub fn integer() -> Self {
        Validator::Integer(FieldOptions::default())
    }

    pub fn iso8601() -> Self {
        Validator::Iso8601(FieldOptions::default())
    }

    pub fn uuid() -> Self {
        Validator::Uuid(FieldOptions::default())
    }

    pub fn constant(value: impl Into<String>) -> Self {
        Validator::Constant(ConstantType::new(value))
    }

    pub fn schema<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Arc<Validator>>,
    {
        Validator::Schema(SchemaType::new(fields))
    }

    /// Allow the value to be absent. Constants and schemas are always
    /// required, so this has no effect on them.
    pub fn optional(mut self) -> Self {
        if let Some(options) = self.options_mut() {
            options.required = false;
        }
        self
    }

    /// Attach free-text documentation. No effect on constants and schemas.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        if let Some(options) = self.options_mut() {
            options.description = description.into();
        }
        self
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Validator::String(_) => "String",
            Validator::Integer(_) => "Integer",
            Validator::Iso8601(_) => "ISO8601",
            Validator::Uuid(_) => "UUID",
            Validator::Constant(_) => "Constant",
            Validator::Schema(_) => "Schema",
        }
    }

    /// Free-text description. For constants this is the expected literal.
    pub fn description(&self) -> &str {
        match self {
            Validator::String(options)
            | Validator::Integer(options)
            | Validator::Iso8601(options)
            | Validator::Uuid(options) => &options.description,
            Validator::Constant(constant) => constant.value(),
            Validator::Schema(_) => "",
        }
    }

    pub fn is_required(&self) -> bool {
        match self.options() {
            Some(options) => options.required,
            None => true,
        }
    }

    /// Check `value`, where `Value::Null` stands for an absent value.
    ///
    /// Primitive variants run a presence check first and only then their
    /// type predicate, so a field is never both missing and invalid.
    pub fn validate(&self, value: &Value) -> Result<()> {
        match self {
            Validator::Constant(constant) => constant.validate(value),
            Validator::Schema(schema) => schema.validate(value),
            _ if value.is_null() => {
                if self.is_required() {
                    Err(ValidationError::single(FIELD_REQUIRED))
                } else {
                    Ok(())
                }
            }
            _ if self.validate_type(value) => Ok(()),
            _ => Err(ValidationError::single(INVALID_TYPE)),
        }
    }

    /// Type-specific predicate, assuming `value` is present.
    pub fn validate_type(&self, value: &Value) -> bool {
        match self {
            Validator::String(_) => predicate::is_string(value),
            Validator::Integer(_) => predicate::is_integer(value),
            Validator::Iso8601(_) => predicate::is_iso8601(value),
            Validator::Uuid(_) => predicate::is_uuid(value),
            Validator::Constant(constant) => constant.matches(value),
            Validator::Schema(schema) => schema.validate(value).is_ok(),
        }
    }

    pub fn contract(&self) -> Contract {
        match self {
            Validator::Constant(constant) => constant.contract(),
            Validator::Schema(schema) => schema.contract(),
            _ => Contract::Field {
                type_name: self.type_name(),
                description: self.description().to_string(),
                required: self.is_required(),
            },
        }
    }

    fn options(&self) -> Option<&FieldOptions> {
        match self {
            Validator::String(options)
            | Validator::Integer(options)
            | Validator::Iso8601(options)
            | Validator::Uuid(options) => Some(options),
            Validator::Constant(_) | Validator::Schema(_) => None,
        }
    }

    fn options_mut(&mut self) -> Option<&mut FieldOptions> {
        match self {
            Validator::String(options)
            | Validator::Integer(options)
            | Validator::Iso8601(options)
            | Validator::Uuid(options) => Some(options),
            Validator::Constant(_) | Validator::Schema(_) => None,
        }
    }
}

impl From<ConstantType> for Validator {
    fn from(constant: ConstantType) -> Self {
        Validator::Constant(constant)
    }
}

impl From<SchemaType> for Validator {
    fn from(schema: SchemaType) -> Self {
        Validator::Schema(schema)
    }
}

impl From<EventType> for Validator {
    fn from(event: EventType) -> Self {
        Validator::Schema(event.into_schema())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn primitives() -> Vec<Validator> {
        vec![
            Validator::string(),
            Validator::integer(),
            Validator::iso8601(),
            Validator::uuid(),
        ]
    }

    #[test]
    fn required_null_reports_field_is_required() {
        for validator in primitives() {
            let err = validator.validate(&Value::Null).unwrap_err();
            assert_eq!(err.field_errors(), [FIELD_REQUIRED], "{}", validator.type_name());
        }
    }

    #[test]
    fn optional_null_skips_type_check() {
        for validator in primitives() {
            assert!(validator.optional().validate(&Value::Null).is_ok());
        }
    }

    #[test]
    fn accepts_values_matching_predicate() {
        assert!(Validator::string().validate(&json!("")).is_ok());
        assert!(Validator::integer().validate(&json!(12)).is_ok());
        assert!(Validator::iso8601()
            .validate(&json!("2020-05-06T07:08:09.010Z"))
            .is_ok());
        assert!(Validator::uuid()
            .validate(&json!("1b4e28ba-2fa1-11d2-883f-0016d3cca427"))
            .is_ok());
    }

    #[test]
    fn counterexample_reports_invalid_type() {
        let cases = [
            (Validator::string(), json!(12)),
            (Validator::integer(), json!("12")),
            (Validator::iso8601(), json!("2020-05-06")),
            (Validator::uuid(), json!("not-a-uuid")),
        ];
        for (validator, value) in cases {
            let err = validator.validate(&value).unwrap_err();
            assert_eq!(err.field_errors(), [INVALID_TYPE], "{}", validator.type_name());
        }
    }

    #[test]
    fn leap_second_timestamp_is_invalid_type() {
        let err = Validator::iso8601()
            .validate(&json!("2021-03-04T05:06:60.000Z"))
            .unwrap_err();
        assert_eq!(err.field_errors(), [INVALID_TYPE]);
    }

    #[test]
    fn optional_present_value_still_type_checked() {
        let err = Validator::integer()
            .optional()
            .validate(&json!(1.5))
            .unwrap_err();
        assert_eq!(err.field_errors(), [INVALID_TYPE]);
    }

    #[test]
    fn contract_reflects_attributes() {
        let validator = Validator::iso8601().describe("when it happened").optional();
        assert_eq!(
            validator.contract().to_value(),
            json!({"type": "ISO8601", "description": "when it happened", "required": false})
        );
        assert_eq!(
            Validator::string().contract().to_value(),
            json!({"type": "String", "description": "", "required": true})
        );
    }

    #[test]
    fn optional_and_describe_ignore_constants() {
        let constant = Validator::constant("X").optional().describe("ignored");
        assert!(constant.is_required());
        assert_eq!(constant.description(), "X");
        assert_eq!(constant.type_name(), "Constant");
    }

    #[test]
    fn validators_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Validator>();
        assert_send_sync::<Arc<Validator>>();
    }
}
