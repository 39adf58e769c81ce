//! Total reducer from polymorphic custom-field values to display text.

use youtrack_api::models::{FieldValue, FieldValueItem};

/// Reduces a field value to its display text. Absent and unrecognized
/// values reduce to an empty string, which callers treat as "omit the
/// field" rather than rendering an empty bullet.
pub fn field_value_text(value: Option<&FieldValue>) -> String {
    match value {
        None => String::new(),
        Some(FieldValue::Text(text)) => text.clone(),
        Some(FieldValue::Number(number)) => number.to_string(),
        Some(FieldValue::Flag(flag)) => flag.to_string(),
        Some(FieldValue::Many(items)) => items
            .iter()
            .map(|item| field_value_text(Some(item)))
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
        Some(FieldValue::Item(item)) => item_text(item),
        Some(FieldValue::Other(_)) => String::new(),
    }
}

/// First non-empty display candidate of an object-shaped value.
fn item_text(item: &FieldValueItem) -> String {
    [
        item.presentation.as_deref(),
        item.name.as_deref(),
        item.full_name.as_deref(),
        item.login.as_deref(),
        item.localized_name.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|text| !text.is_empty())
    .map(str::to_string)
    .unwrap_or_default()
}
