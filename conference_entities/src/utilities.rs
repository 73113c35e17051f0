use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;


/// Reads a scalar JSON value as text.
///
/// Input files come from an export we do not control, so scalar fields are
/// taken optimistically: numbers and booleans keep their textual form and
/// anything else (null, objects, arrays) collapses to the empty string.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error> where D: Deserializer<'de> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

/// Like [`lenient_string`], but keeps `null` distinguishable from an empty string.
pub fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error> where D: Deserializer<'de> {
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value))
}

/// Reads a list of records. `null` or anything that is not an array yields
/// an empty list, and elements of the wrong shape become default records.
pub fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error> where D: Deserializer<'de>, T: DeserializeOwned + Default {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items.into_iter().map(|item| serde_json::from_value(item).unwrap_or_default()).collect(),
        _ => vec![],
    })
}

/// Reads a nested record, treating `null` and malformed values as absent.
pub fn lenient_optional<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error> where D: Deserializer<'de>, T: DeserializeOwned {
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Text of a scalar JSON value, `None` for `null` and missing values.
pub fn value_text(value: Option<&Value>) -> Option<String> {
    value.cloned().and_then(scalar_to_string)
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        _ => Some(String::new()),
    }
}


#[cfg(test)]
mod test {
    use serde::Deserialize;

    #[derive(Deserialize, Default, Debug, PartialEq)]
    struct Item {
        #[serde(default)]
        id: u32,
    }

    #[derive(Deserialize)]
    struct ListHolder {
        #[serde(default, deserialize_with = "super::lenient_list")]
        items: Vec<Item>,
        #[serde(default, deserialize_with = "super::lenient_optional")]
        single: Option<Item>,
    }

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::lenient_string")]
        text: String,
        #[serde(default, deserialize_with = "super::lenient_optional_string")]
        maybe: Option<String>,
    }

    #[test]
    fn test_numbers_are_kept_as_text() {
        let holder: Holder = serde_json::from_str(r#"{"text": 4131, "maybe": 3}"#).unwrap();
        assert_eq!(holder.text, "4131");
        assert_eq!(holder.maybe, Some("3".into()));
    }

    #[test]
    fn test_null_and_missing_values() {
        let holder: Holder = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(holder.text, "");
        assert_eq!(holder.maybe, None);

        let holder: Holder = serde_json::from_str(r#"{"text": {"nested": 1}, "maybe": null}"#).unwrap();
        assert_eq!(holder.text, "");
        assert_eq!(holder.maybe, None);
    }

    #[test]
    fn test_lists_tolerate_null_and_wrong_shapes() {
        let holder: ListHolder = serde_json::from_str(r#"{"items": null, "single": null}"#).unwrap();
        assert!(holder.items.is_empty());
        assert_eq!(holder.single, None);

        let holder: ListHolder = serde_json::from_str(r#"{"items": "x", "single": [1]}"#).unwrap();
        assert!(holder.items.is_empty());
        assert_eq!(holder.single, None);

        let holder: ListHolder = serde_json::from_str(r#"{"items": [{"id": 2}, null, 7], "single": {"id": 1}}"#).unwrap();
        assert_eq!(holder.items, vec![Item { id: 2 }, Item::default(), Item::default()]);
        assert_eq!(holder.single, Some(Item { id: 1 }));
    }

    #[test]
    fn test_value_text() {
        let value = serde_json::json!({"a": "x", "b": 5, "c": null});
        assert_eq!(super::value_text(value.get("a")), Some("x".into()));
        assert_eq!(super::value_text(value.get("b")), Some("5".into()));
        assert_eq!(super::value_text(value.get("c")), None);
        assert_eq!(super::value_text(value.get("d")), None);
    }
}
