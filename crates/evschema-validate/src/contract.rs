use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Declarative description of a validator, independent of any input.
///
/// Serializes to:
/// - `{"type", "description", "required"}` for primitive fields,
/// - `{"value", "required": true}` for constants,
/// - a field-name keyed object for schemas, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Contract {
    Field {
        type_name: &'static str,
        description: String,
        required: bool,
    },
    Constant {
        value: String,
    },
    Schema(Vec<(String, Contract)>),
}

impl Contract {
    /// Render the contract as a JSON value, keys in declaration order.
    pub fn to_value(&self) -> Value {
        // string keys only, so serialization cannot fail
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Serialize for Contract {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Contract::Field {
                type_name,
                description,
                required,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", type_name)?;
                map.serialize_entry("description", description)?;
                map.serialize_entry("required", required)?;
                map.end()
            }
            Contract::Constant { value } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("value", value)?;
                map.serialize_entry("required", &true)?;
                map.end()
            }
            Contract::Schema(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (name, contract) in fields {
                    map.serialize_entry(name, contract)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> Contract {
        Contract::Schema(vec![
            (
                "b".to_string(),
                Contract::Field {
                    type_name: "String",
                    description: "second letter".to_string(),
                    required: false,
                },
            ),
            (
                "a".to_string(),
                Contract::Constant {
                    value: "A".to_string(),
                },
            ),
        ])
    }

    #[test]
    fn serialization_matches_to_value() {
        let serialized = serde_json::to_value(sample()).unwrap();
        assert_eq!(serialized, sample().to_value());
        assert_eq!(
            serialized,
            json!({
                "b": {"type": "String", "description": "second letter", "required": false},
                "a": {"value": "A", "required": true}
            })
        );
    }

    #[test]
    fn to_value_keeps_declaration_order() {
        let value = sample().to_value();
        let keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["b", "a"]);

        let leaf: Vec<&str> = value["b"]
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(leaf, ["type", "description", "required"]);
    }

    #[test]
    fn schema_keys_keep_declaration_order() {
        let text = serde_json::to_string(&sample()).unwrap();
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
    }
}
