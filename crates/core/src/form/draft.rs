//! Initial form values and raw-input normalization.

use serde_json::{Map, Value};

use crate::ad::AdDraft;

use super::config::{FormFieldComponent, FormFieldConfig, MEDIA_ASSETS_FIELD, VIDEO_URLS_FIELD};
use super::evaluator::{coerce_number, Coerced};

/// Initial values for a form session.
///
/// Fields present in `existing` keep their value; otherwise number fields
/// start at `0`, the media list fields at `[]`, and everything else at
/// `""`. The two list keys are always present in the result, whether or
/// not the schema names them, falling back to `existing` or `[]`.
pub fn initial_values(
    schema: &[FormFieldConfig],
    existing: Option<&Map<String, Value>>,
) -> Map<String, Value> {
    let mut values = Map::new();

    for field in schema {
        let value = match existing.and_then(|e| e.get(&field.field)) {
            Some(value) => value.clone(),
            None if field.component == FormFieldComponent::Number => Value::from(0),
            None if is_list_field(&field.field) => Value::Array(Vec::new()),
            None => Value::String(String::new()),
        };
        values.insert(field.field.clone(), value);
    }

    for key in [MEDIA_ASSETS_FIELD, VIDEO_URLS_FIELD] {
        if !values.contains_key(key) {
            let fallback = existing
                .and_then(|e| e.get(key))
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new()));
            values.insert(key.to_string(), fallback);
        }
    }

    values
}

/// Map raw form values into an [`AdDraft`].
///
/// Total and lossy: numeric fields coerce to `0.0` when absent or
/// malformed, text fields default to `""`, and the media list fields are
/// taken from the raw input whether or not the schema names them.
/// Validation is the authoritative gate and must run before the result is
/// trusted.
pub fn normalize(schema: &[FormFieldConfig], raw: &Map<String, Value>) -> AdDraft {
    let mut values = Map::new();

    for field in schema {
        let value = raw.get(&field.field);
        let normalized = match field.component {
            FormFieldComponent::Number => Value::from(lossy_number(value)),
            _ => Value::String(lossy_string(value)),
        };
        values.insert(field.field.clone(), normalized);
    }

    AdDraft {
        title: text_value(&values, "title"),
        author: text_value(&values, "author"),
        description: text_value(&values, "description"),
        url: text_value(&values, "url"),
        price: number_value(&values, "price"),
        media_assets: string_list(raw.get(MEDIA_ASSETS_FIELD)),
        video_urls: string_list(raw.get(VIDEO_URLS_FIELD)),
    }
}

fn is_list_field(field: &str) -> bool {
    field == MEDIA_ASSETS_FIELD || field == VIDEO_URLS_FIELD
}

fn lossy_number(value: Option<&Value>) -> f64 {
    match coerce_number(value) {
        Coerced::Value(n) => n,
        Coerced::Absent | Coerced::Invalid => 0.0,
    }
}

fn lossy_string(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn text_value(values: &Map<String, Value>, key: &str) -> String {
    values
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn number_value(values: &Map<String, Value>, key: &str) -> f64 {
    values.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::config::ad_form_schema;
    use serde_json::json;

    fn raw(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn initial_values_default_by_component() {
        let values = initial_values(&ad_form_schema(), None);

        assert_eq!(values["title"], json!(""));
        assert_eq!(values["author"], json!(""));
        assert_eq!(values["description"], json!(""));
        assert_eq!(values["url"], json!(""));
        assert_eq!(values["price"], json!(0));
    }

    #[test]
    fn initial_values_prefer_existing_values() {
        let existing = raw(&[("title", json!("Summer sale")), ("price", json!(6.8))]);
        let values = initial_values(&ad_form_schema(), Some(&existing));

        assert_eq!(values["title"], json!("Summer sale"));
        assert_eq!(values["price"], json!(6.8));
        assert_eq!(values["author"], json!(""));
    }

    #[test]
    fn initial_values_always_contain_the_list_keys() {
        // The ad schema does not declare the media fields; they must be
        // present anyway.
        let values = initial_values(&ad_form_schema(), None);

        assert_eq!(values["mediaAssets"], json!([]));
        assert_eq!(values["videoUrls"], json!([]));
    }

    #[test]
    fn initial_list_keys_fall_back_to_existing_values() {
        let existing = raw(&[("mediaAssets", json!(["a.png", "b.png"]))]);
        let values = initial_values(&ad_form_schema(), Some(&existing));

        assert_eq!(values["mediaAssets"], json!(["a.png", "b.png"]));
        assert_eq!(values["videoUrls"], json!([]));
    }

    #[test]
    fn normalize_is_total_on_empty_input() {
        let draft = normalize(&ad_form_schema(), &Map::new());

        assert_eq!(draft.title, "");
        assert_eq!(draft.author, "");
        assert_eq!(draft.description, "");
        assert_eq!(draft.url, "");
        assert_eq!(draft.price, 0.0);
        assert!(draft.media_assets.is_empty());
        assert!(draft.video_urls.is_empty());
    }

    #[test]
    fn normalize_coerces_numeric_strings() {
        let values = raw(&[("price", json!("6.8"))]);
        let draft = normalize(&ad_form_schema(), &values);
        assert_eq!(draft.price, 6.8);
    }

    #[test]
    fn normalize_defaults_malformed_numbers_to_zero() {
        let values = raw(&[("price", json!("not a price"))]);
        let draft = normalize(&ad_form_schema(), &values);
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn normalize_passes_fields_through() {
        let values = raw(&[
            ("title", json!("Summer sale")),
            ("author", json!("Acme Ads")),
            ("description", json!("Half price on everything.")),
            ("url", json!("https://example.com/sale")),
            ("price", json!(6.8)),
        ]);
        let draft = normalize(&ad_form_schema(), &values);

        assert_eq!(draft.title, "Summer sale");
        assert_eq!(draft.author, "Acme Ads");
        assert_eq!(draft.description, "Half price on everything.");
        assert_eq!(draft.url, "https://example.com/sale");
        assert_eq!(draft.price, 6.8);
    }

    #[test]
    fn normalize_carries_list_fields_outside_the_schema() {
        let values = raw(&[
            ("mediaAssets", json!(["hero.png"])),
            ("videoUrls", json!(["https://cdn.example.com/spot.mp4"])),
        ]);
        let draft = normalize(&ad_form_schema(), &values);

        assert_eq!(draft.media_assets, vec!["hero.png"]);
        assert_eq!(draft.video_urls, vec!["https://cdn.example.com/spot.mp4"]);
    }
}
