//! JSON to Firestore typed-value encoding.
//!
//! The REST API does not accept plain JSON documents; every field must be
//! wrapped in its typed form (`stringValue`, `integerValue`, ...). Integers
//! travel as strings per the API contract.

use serde_json::{Map, Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    /// Only JSON objects can become Firestore documents.
    #[error("firestore.document_not_an_object")]
    NotAnObject,
    /// A number outside the i64/f64 representable range.
    #[error("firestore.unrepresentable_number")]
    UnrepresentableNumber,
}

/// Encodes a JSON object into the `fields` map of a Firestore document.
pub fn to_document_fields(item: &Value) -> Result<Value, EncodeError> {
    let object = item.as_object().ok_or(EncodeError::NotAnObject)?;
    encode_fields(object)
}

fn encode_fields(object: &Map<String, Value>) -> Result<Value, EncodeError> {
    let mut fields = Map::new();
    for (name, value) in object {
        fields.insert(name.clone(), encode_value(value)?);
    }
    Ok(Value::Object(fields))
}

fn encode_value(value: &Value) -> Result<Value, EncodeError> {
    let encoded = match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                json!({ "integerValue": i.to_string() })
            } else if let Some(f) = n.as_f64() {
                json!({ "doubleValue": f })
            } else {
                return Err(EncodeError::UnrepresentableNumber);
            }
        }
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(values) => {
            let encoded: Vec<Value> = values
                .iter()
                .map(encode_value)
                .collect::<Result<_, _>>()?;
            json!({ "arrayValue": { "values": encoded } })
        }
        Value::Object(object) => json!({ "mapValue": { "fields": encode_fields(object)? } }),
    };

    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encode_grocery_item_fields() {
        let item = json!({
            "receiptName": "MILK 2L",
            "humanName": "Milk",
            "quantity": 1,
            "cost": 3.49,
            "useByDate": "2024-01-10",
            "storage": "Fridge"
        });

        let fields = to_document_fields(&item).unwrap();

        assert_eq!(fields["receiptName"], json!({ "stringValue": "MILK 2L" }));
        assert_eq!(fields["quantity"], json!({ "integerValue": "1" }));
        assert_eq!(fields["cost"], json!({ "doubleValue": 3.49 }));
        assert_eq!(fields["storage"], json!({ "stringValue": "Fridge" }));
    }

    #[test]
    fn should_encode_null_and_boolean_fields() {
        let item = json!({ "useByDate": null, "opened": true });

        let fields = to_document_fields(&item).unwrap();

        assert_eq!(fields["useByDate"], json!({ "nullValue": null }));
        assert_eq!(fields["opened"], json!({ "booleanValue": true }));
    }

    #[test]
    fn should_encode_nested_arrays_and_maps() {
        let item = json!({
            "tags": ["dairy", "chilled"],
            "origin": { "store": "Corner Shop", "aisle": 4 }
        });

        let fields = to_document_fields(&item).unwrap();

        assert_eq!(
            fields["tags"],
            json!({ "arrayValue": { "values": [
                { "stringValue": "dairy" },
                { "stringValue": "chilled" }
            ]}})
        );
        assert_eq!(
            fields["origin"],
            json!({ "mapValue": { "fields": {
                "store": { "stringValue": "Corner Shop" },
                "aisle": { "integerValue": "4" }
            }}})
        );
    }

    #[test]
    fn should_reject_non_object_items() {
        assert!(matches!(
            to_document_fields(&json!("just a string")).unwrap_err(),
            EncodeError::NotAnObject
        ));
        assert!(matches!(
            to_document_fields(&json!([1, 2, 3])).unwrap_err(),
            EncodeError::NotAnObject
        ));
    }
}
