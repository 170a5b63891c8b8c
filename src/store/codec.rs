//! JSON <-> DynamoDB attribute conversion
//!
//! | JSON    | DynamoDB |
//! |---------|----------|
//! | string  | S        |
//! | number  | N        |
//! | bool    | BOOL     |
//! | null    | NULL     |
//! | array   | L        |
//! | object  | M        |
//!
//! String and number sets read back as arrays. Binary attributes have no
//! JSON form and are rejected.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use super::errors::{StoreError, StoreResult};
use super::record::Attributes;

/// DynamoDB item
pub type Item = HashMap<String, AttributeValue>;

/// Convert a JSON value to an attribute value
pub fn to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(to_item(map)),
    }
}

/// Convert an attribute map to a DynamoDB item
pub fn to_item(attributes: &Attributes) -> Item {
    attributes
        .iter()
        .map(|(k, v)| (k.clone(), to_attribute(v)))
        .collect()
}

/// Convert an attribute value to JSON
pub fn from_attribute(attr: &AttributeValue) -> StoreResult<Value> {
    match attr {
        AttributeValue::Null(_) => Ok(Value::Null),
        AttributeValue::Bool(b) => Ok(Value::Bool(*b)),
        AttributeValue::N(n) => parse_number(n),
        AttributeValue::S(s) => Ok(Value::String(s.clone())),
        AttributeValue::L(values) => values
            .iter()
            .map(from_attribute)
            .collect::<StoreResult<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::M(map) => from_map(map).map(Value::Object),
        AttributeValue::Ss(values) => Ok(Value::Array(
            values.iter().cloned().map(Value::String).collect(),
        )),
        AttributeValue::Ns(values) => values
            .iter()
            .map(|n| parse_number(n))
            .collect::<StoreResult<Vec<_>>>()
            .map(Value::Array),
        AttributeValue::B(_) | AttributeValue::Bs(_) => {
            Err(StoreError::codec("binary attributes are not supported"))
        }
        other => Err(StoreError::codec(format!(
            "unsupported attribute type: {:?}",
            other
        ))),
    }
}

/// Convert a DynamoDB item to an attribute map.
///
/// Attribute order follows the item's hash order.
pub fn from_item(item: Item) -> StoreResult<Attributes> {
    from_map(&item)
}

fn from_map(map: &HashMap<String, AttributeValue>) -> StoreResult<Attributes> {
    map.iter()
        .map(|(k, v)| Ok((k.clone(), from_attribute(v)?)))
        .collect()
}

fn parse_number(n: &str) -> StoreResult<Value> {
    if let Ok(i) = n.parse::<i64>() {
        return Ok(Value::from(i));
    }
    if let Ok(u) = n.parse::<u64>() {
        return Ok(Value::from(u));
    }
    n.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .ok_or_else(|| StoreError::codec(format!("invalid number attribute '{}'", n)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    #[test]
    fn test_scalar_conversion() {
        assert_eq!(to_attribute(&json!("Dune")), AttributeValue::S("Dune".into()));
        assert_eq!(to_attribute(&json!(42)), AttributeValue::N("42".into()));
        assert_eq!(to_attribute(&json!(true)), AttributeValue::Bool(true));
        assert_eq!(to_attribute(&Value::Null), AttributeValue::Null(true));
    }

    #[test]
    fn test_nested_record_survives_conversion() {
        let record = json!({
            "id": "m1",
            "movie_name": "Dune",
            "cast": ["Zendaya", "Rebecca Ferguson"],
            "box_office": {"opening": 41.0, "screens": 4125}
        });
        let attrs = record.as_object().unwrap();

        let back = from_item(to_item(attrs)).unwrap();
        assert_eq!(Value::Object(back), record);
    }

    #[test]
    fn test_number_parsing() {
        assert_eq!(parse_number("-7").unwrap(), json!(-7));
        assert_eq!(parse_number("18446744073709551615").unwrap(), json!(u64::MAX));
        assert_eq!(parse_number("2.5").unwrap(), json!(2.5));
        assert!(parse_number("not-a-number").is_err());
    }

    #[test]
    fn test_sets_read_as_arrays() {
        let ss = AttributeValue::Ss(vec!["a".into(), "b".into()]);
        assert_eq!(from_attribute(&ss).unwrap(), json!(["a", "b"]));

        let ns = AttributeValue::Ns(vec!["1".into(), "2".into()]);
        assert_eq!(from_attribute(&ns).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_binary_is_rejected() {
        let b = AttributeValue::B(Blob::new(vec![1, 2, 3]));
        assert!(matches!(from_attribute(&b), Err(StoreError::Codec(_))));
    }
}
