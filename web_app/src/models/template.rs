//! # WhatsApp Message Template Schemas
//!
//! Data structures for message templates as they travel between this service
//! and the templates backend (which mirrors WhatsApp Business API templates).

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Template category as assigned by the messaging provider.
///
/// Unknown categories are preserved verbatim so they survive a read/write cycle.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateCategory {
    #[default]
    #[display("MARKETING")]
    Marketing,
    #[display("UTILITY")]
    Utility,
    #[display("AUTHENTICATION")]
    Authentication,
    #[display("{_0}")]
    #[serde(untagged)]
    Other(String),
}

/// Review status owned by the messaging provider, read-only for us.
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TemplateStatus {
    #[display("APPROVED")]
    Approved,
    #[default]
    #[display("PENDING")]
    Pending,
    #[display("REJECTED")]
    Rejected,
    #[display("DISABLED")]
    Disabled,
    #[display("{_0}")]
    #[serde(untagged)]
    Other(String),
}

/// Header media format
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HeaderFormat {
    #[default]
    #[display("TEXT")]
    Text,
    #[display("IMAGE")]
    Image,
    #[display("VIDEO")]
    Video,
    #[display("DOCUMENT")]
    Document,
}

/// Button kind inside a BUTTONS component
#[derive(Debug, Display, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ButtonType {
    #[default]
    #[display("QUICK_REPLY")]
    QuickReply,
    #[display("URL")]
    Url,
    #[display("PHONE_NUMBER")]
    PhoneNumber,
    #[display("COPY_CODE")]
    CopyCode,
    #[display("{_0}")]
    #[serde(untagged)]
    Other(String),
}

/// Template stored by the messaging provider
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct MetaTemplate {
    /// Opaque provider id
    pub id: String,
    /// Template name (lowercase, underscores)
    pub name: String,
    /// Language tag, e.g. "es_CO"
    pub language: String,
    pub category: TemplateCategory,
    #[serde(default)]
    pub status: TemplateStatus,
    /// Ordered structural parts of the template
    #[serde(default)]
    pub components: Vec<TemplateComponent>,
}

/// One structural part of a template, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum TemplateComponent {
    Header(HeaderComponent),
    Body(BodyComponent),
    Footer(FooterComponent),
    Buttons(ButtonsComponent),
    /// Component types this service does not edit (carousels, limited offers, ...)
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HeaderComponent {
    #[serde(default)]
    pub format: HeaderFormat,
    /// Only meaningful when `format` is TEXT
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<HeaderExample>,
}

/// Example values for header placeholders, slot `N-1` for `{{N}}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HeaderExample {
    #[serde(default)]
    pub header_text: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BodyComponent {
    /// Empty text is left out of the request body
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<BodyExample>,
}

/// Example values for body placeholders.
///
/// The provider expects a single row: `body_text[0][N-1]` for `{{N}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BodyExample {
    #[serde(default)]
    pub body_text: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct FooterComponent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ButtonsComponent {
    #[serde(default)]
    pub buttons: Vec<TemplateButton>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TemplateButton {
    #[serde(rename = "type")]
    pub button_type: ButtonType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Required for URL buttons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Required for PHONE_NUMBER buttons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Request body to create a template
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CreateTemplatePayload {
    pub name: String,
    pub language: String,
    pub category: String,
    pub components: Vec<TemplateComponent>,
}

/// Updates replace the whole template, same body as a creation.
pub type UpdateTemplatePayload = CreateTemplatePayload;

/// Page of templates returned by the backend
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TemplateListResponse {
    pub data: Vec<MetaTemplate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<serde_json::Value>,
}

/// Backend answer to a create or update request
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TemplateMutationResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TemplateStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<TemplateCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}
