//! Custom field entries and their polymorphic values.
//!
//! YouTrack field values arrive as primitives, objects or arrays of either
//! depending on the field type. The wire shape is kept as an explicit
//! untagged union so downstream code can reduce it without type probing.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// One entry of an issue's `fields(...)` projection.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldEntry {
    pub id: Option<Value>,
    pub project_custom_field: Option<ProjectCustomField>,
    #[serde(default)]
    pub value: Option<FieldValue>,
}

impl CustomFieldEntry {
    /// Display name from the nested field descriptor, defaulting to "Field".
    pub fn display_name(&self) -> &str {
        self.project_custom_field
            .as_ref()
            .and_then(|pcf| pcf.field.as_ref())
            .and_then(|field| field.name.as_deref())
            .filter(|name| !name.is_empty())
            .unwrap_or("Field")
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCustomField {
    pub field: Option<FieldDescriptor>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldType {
    pub value_type: Option<String>,
}

/// A custom field value: primitive, named object, or array of either.
/// Anything that matches none of the known shapes lands in `Other` and
/// reduces to empty display text.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Many(Vec<FieldValue>),
    Item(FieldValueItem),
    Other(Value),
}

/// Object-shaped field value carrying the display name candidates the
/// `fields(value(...))` projection requests.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct FieldValueItem {
    pub presentation: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub login: Option<String>,
    pub localized_name: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::{CustomFieldEntry, FieldValue};

    #[test]
    fn primitive_values_deserialize_as_primitives() {
        let number: FieldValue = serde_json::from_str("42").expect("number value");
        assert!(matches!(number, FieldValue::Number(_)));

        let flag: FieldValue = serde_json::from_str("true").expect("bool value");
        assert!(matches!(flag, FieldValue::Flag(true)));

        let text: FieldValue = serde_json::from_str("\"Major\"").expect("string value");
        assert!(matches!(text, FieldValue::Text(ref s) if s == "Major"));
    }

    #[test]
    fn object_value_captures_name_candidates() {
        let value: FieldValue =
            serde_json::from_str(r#"{"presentation":"P","name":"N","$type":"EnumBundleElement"}"#)
                .expect("object value");
        match value {
            FieldValue::Item(item) => {
                assert_eq!(item.presentation.as_deref(), Some("P"));
                assert_eq!(item.name.as_deref(), Some("N"));
            }
            other => panic!("expected object value, got {other:?}"),
        }
    }

    #[test]
    fn array_value_nests_recursively() {
        let value: FieldValue =
            serde_json::from_str(r#"[{"name":"a"},"b",null]"#).expect("array value");
        match value {
            FieldValue::Many(items) => assert_eq!(items.len(), 3),
            other => panic!("expected array value, got {other:?}"),
        }
    }

    #[test]
    fn entry_display_name_defaults_to_field() {
        let entry: CustomFieldEntry = serde_json::from_str(r#"{"value":"x"}"#).expect("entry");
        assert_eq!(entry.display_name(), "Field");

        let named: CustomFieldEntry = serde_json::from_str(
            r#"{"projectCustomField":{"field":{"name":"Priority"}},"value":"x"}"#,
        )
        .expect("named entry");
        assert_eq!(named.display_name(), "Priority");
    }
}
