//! Declarative form field configuration.
//!
//! Mirrors the schema served to clients: an ordered list of field
//! descriptors. Order drives form rendering only; validation semantics are
//! order-independent.

use serde::{Deserialize, Serialize};

/// Which widget renders a field, and how its raw value is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormFieldComponent {
    /// Single-line text.
    Input,
    /// Multi-line text.
    Textarea,
    /// Numeric input.
    Number,
    /// Single-line text holding a URL.
    Url,
}

/// Validation spec attached to one field. Every constraint is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFieldValidator {
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Require well-formed absolute URL syntax (implied by the `Url`
    /// component).
    pub url: bool,
}

/// One form field: the draft key it populates, presentation strings, the
/// rendering component, and an optional validation spec.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormFieldConfig {
    pub field: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub component: FormFieldComponent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<FormFieldValidator>,
}

/// Draft key for the media asset list.
pub const MEDIA_ASSETS_FIELD: &str = "mediaAssets";

/// Draft key for the video URL list.
pub const VIDEO_URLS_FIELD: &str = "videoUrls";

/// The advertisement form schema: served to clients by the form-schema
/// endpoint and used to validate create/update payloads.
pub fn ad_form_schema() -> Vec<FormFieldConfig> {
    vec![
        FormFieldConfig {
            field: "title".to_string(),
            label: "Ad title".to_string(),
            placeholder: Some("Enter the ad title".to_string()),
            component: FormFieldComponent::Input,
            validator: Some(FormFieldValidator {
                required: true,
                max_length: Some(30),
                ..Default::default()
            }),
        },
        FormFieldConfig {
            field: "author".to_string(),
            label: "Advertiser".to_string(),
            placeholder: Some("e.g. Acme Ads".to_string()),
            component: FormFieldComponent::Input,
            validator: Some(FormFieldValidator {
                required: true,
                max_length: Some(20),
                ..Default::default()
            }),
        },
        FormFieldConfig {
            field: "description".to_string(),
            label: "Copy".to_string(),
            placeholder: Some("One sentence on the core selling point".to_string()),
            component: FormFieldComponent::Textarea,
            validator: Some(FormFieldValidator {
                required: true,
                max_length: Some(180),
                ..Default::default()
            }),
        },
        FormFieldConfig {
            field: "url".to_string(),
            label: "Landing page".to_string(),
            placeholder: Some("https://example.com/".to_string()),
            component: FormFieldComponent::Url,
            validator: Some(FormFieldValidator {
                required: true,
                url: true,
                ..Default::default()
            }),
        },
        FormFieldConfig {
            field: "price".to_string(),
            label: "Bid".to_string(),
            placeholder: Some("5.00".to_string()),
            component: FormFieldComponent::Number,
            validator: Some(FormFieldValidator {
                required: true,
                min: Some(1.0),
                max: Some(999.0),
                ..Default::default()
            }),
        },
    ]
}
