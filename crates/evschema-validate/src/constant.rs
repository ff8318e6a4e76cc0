use serde_json::Value;

use crate::contract::Contract;
use crate::error::{Result, ValidationError, UNMATCHED_CONSTANT};

/// Accepts exactly one string literal.
///
/// Used to pin discriminator fields. Always required: an absent value
/// simply fails the equality check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantType {
    value: String,
}

impl ConstantType {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The expected literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Strict equality: only a JSON string with identical contents matches.
    pub fn matches(&self, value: &Value) -> bool {
        value.as_str() == Some(self.value.as_str())
    }

    pub fn validate(&self, value: &Value) -> Result<()> {
        if self.matches(value) {
            Ok(())
        } else {
            Err(ValidationError::single(UNMATCHED_CONSTANT))
        }
    }

    pub fn contract(&self) -> Contract {
        Contract::Constant {
            value: self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_only_the_literal() {
        let constant = ConstantType::new("SMS");
        assert!(constant.validate(&json!("SMS")).is_ok());

        for other in [json!("sms"), json!("SMS "), json!(null), json!(1), json!(["SMS"])] {
            let err = constant.validate(&other).unwrap_err();
            assert_eq!(err.field_errors(), [UNMATCHED_CONSTANT], "{other}");
        }
    }

    #[test]
    fn contract_exposes_value_not_type() {
        assert_eq!(
            ConstantType::new("EMAIL").contract().to_value(),
            json!({"value": "EMAIL", "required": true})
        );
    }
}
