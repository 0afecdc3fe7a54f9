//! # Template Form State
//!
//! Editable representation of a WhatsApp template while the dashboard user
//! creates or edits it, plus the conversions from a fetched template and
//! into the request body sent to the templates backend.
//!
//! Every operation here returns new values and leaves its inputs untouched,
//! the host form keeps its state immutable between renders.

use crate::{consts, models::template as wa, utils};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Component type used to address components in a form
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentKind {
    #[display("HEADER")]
    Header,
    #[display("BODY")]
    Body,
    #[display("FOOTER")]
    Footer,
    #[display("BUTTONS")]
    Buttons,
}

/// Editable button. Blank strings are fine while typing, they are dropped
/// when the payload is built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ButtonForm {
    #[serde(rename = "type")]
    pub button_type: wa::ButtonType,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// Editable component.
///
/// `examples` holds one value per placeholder slot: `examples[N-1]` belongs
/// to `{{N}}` (the header's `header_text` or the body's single example row).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum FormComponent {
    Header {
        #[serde(default)]
        format: wa::HeaderFormat,
        #[serde(default)]
        text: String,
        #[serde(default)]
        examples: Vec<String>,
    },
    Body {
        #[serde(default)]
        text: String,
        #[serde(default)]
        examples: Vec<String>,
    },
    Footer {
        #[serde(default)]
        text: String,
    },
    Buttons {
        #[serde(default)]
        buttons: Vec<ButtonForm>,
    },
}

impl FormComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            FormComponent::Header { .. } => ComponentKind::Header,
            FormComponent::Body { .. } => ComponentKind::Body,
            FormComponent::Footer { .. } => ComponentKind::Footer,
            FormComponent::Buttons { .. } => ComponentKind::Buttons,
        }
    }

    /// Blank component of the given kind, what a form switch adds when enabled
    pub fn empty(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Header => FormComponent::Header {
                format: wa::HeaderFormat::Text,
                text: String::new(),
                examples: Vec::new(),
            },
            ComponentKind::Body => FormComponent::Body {
                text: String::new(),
                examples: Vec::new(),
            },
            ComponentKind::Footer => FormComponent::Footer {
                text: String::new(),
            },
            ComponentKind::Buttons => FormComponent::Buttons {
                buttons: Vec::new(),
            },
        }
    }

    /// Text that may carry placeholders, if the component has any
    pub fn text(&self) -> Option<&str> {
        match self {
            FormComponent::Header { text, .. }
            | FormComponent::Body { text, .. }
            | FormComponent::Footer { text } => Some(text.as_str()),
            FormComponent::Buttons { .. } => None,
        }
    }

    /// Converts the component into its wire shape, see [`build_create_payload`]
    fn to_payload_component(&self) -> wa::TemplateComponent {
        match self {
            FormComponent::Header {
                format,
                text,
                examples,
            } => {
                let indexes = utils::extract_variable_indexes(Some(text.as_str()));
                wa::TemplateComponent::Header(wa::HeaderComponent {
                    format: *format,
                    text: non_blank(text),
                    example: (*format == wa::HeaderFormat::Text && !indexes.is_empty()).then(
                        || wa::HeaderExample {
                            header_text: example_slots(&indexes, examples),
                        },
                    ),
                })
            }
            FormComponent::Body { text, examples } => {
                let indexes = utils::extract_variable_indexes(Some(text.as_str()));
                wa::TemplateComponent::Body(wa::BodyComponent {
                    text: text.trim().to_string(),
                    example: (!indexes.is_empty()).then(|| wa::BodyExample {
                        body_text: vec![example_slots(&indexes, examples)],
                    }),
                })
            }
            FormComponent::Footer { text } => {
                wa::TemplateComponent::Footer(wa::FooterComponent {
                    text: non_blank(text),
                })
            }
            FormComponent::Buttons { buttons } => {
                wa::TemplateComponent::Buttons(wa::ButtonsComponent {
                    buttons: buttons
                        .iter()
                        .map(|button| wa::TemplateButton {
                            button_type: button.button_type.clone(),
                            text: non_blank(&button.text),
                            url: button.url.as_deref().and_then(non_blank),
                            phone_number: button.phone_number.as_deref().and_then(non_blank),
                        })
                        .collect(),
                })
            }
        }
    }
}

/// Explicit defaults for a new template form
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefaults {
    pub language: String,
    pub category: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            language: consts::DEFAULT_TEMPLATE_LANGUAGE.to_string(),
            category: consts::DEFAULT_TEMPLATE_CATEGORY.to_string(),
        }
    }
}

/// In-memory editable representation of a template
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TemplateFormState {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub components: Vec<FormComponent>,
}

impl Default for TemplateFormState {
    fn default() -> Self {
        Self::empty(&FormDefaults::default())
    }
}

impl TemplateFormState {
    /// New blank form. BODY exists from the start and holds empty text.
    pub fn empty(defaults: &FormDefaults) -> Self {
        Self {
            name: String::new(),
            language: defaults.language.clone(),
            category: defaults.category.clone(),
            components: vec![FormComponent::empty(ComponentKind::Body)],
        }
    }

    /// Builds an editable form from a template fetched from the backend.
    ///
    /// Only HEADER, BODY, FOOTER and BUTTONS are kept; their fields are
    /// copied as they come. BODY examples come from the first row of
    /// `body_text`, any further rows are dropped.
    pub fn from_template(template: &wa::MetaTemplate) -> Self {
        Self {
            name: template.name.clone(),
            language: template.language.clone(),
            category: template.category.to_string(),
            components: template
                .components
                .iter()
                .filter_map(form_component_from_template)
                .collect(),
        }
    }

    /// First component of the given kind
    pub fn component(&self, kind: ComponentKind) -> Option<&FormComponent> {
        self.components.iter().find(|c| c.kind() == kind)
    }
}

impl From<&wa::MetaTemplate> for TemplateFormState {
    fn from(template: &wa::MetaTemplate) -> Self {
        Self::from_template(template)
    }
}

fn form_component_from_template(component: &wa::TemplateComponent) -> Option<FormComponent> {
    let form_component = match component {
        wa::TemplateComponent::Header(header) => FormComponent::Header {
            format: header.format,
            text: header.text.clone().unwrap_or_default(),
            examples: header
                .example
                .as_ref()
                .map(|ex| ex.header_text.clone())
                .unwrap_or_default(),
        },
        wa::TemplateComponent::Body(body) => FormComponent::Body {
            text: body.text.clone(),
            examples: body
                .example
                .as_ref()
                .and_then(|ex| ex.body_text.first().cloned())
                .unwrap_or_default(),
        },
        wa::TemplateComponent::Footer(footer) => FormComponent::Footer {
            text: footer.text.clone().unwrap_or_default(),
        },
        wa::TemplateComponent::Buttons(buttons) => FormComponent::Buttons {
            buttons: buttons
                .buttons
                .iter()
                .map(|button| ButtonForm {
                    button_type: button.button_type.clone(),
                    text: button.text.clone().unwrap_or_default(),
                    url: button.url.clone(),
                    phone_number: button.phone_number.clone(),
                })
                .collect(),
        },
        wa::TemplateComponent::Unsupported => return None,
    };

    Some(form_component)
}

/// Replaces the first component of the same kind in place, or appends it.
pub fn upsert_component(components: &[FormComponent], component: FormComponent) -> Vec<FormComponent> {
    let mut updated = components.to_vec();

    match updated.iter().position(|c| c.kind() == component.kind()) {
        Some(pos) => updated[pos] = component,
        None => updated.push(component),
    }

    updated
}

/// Drops every component of the given kind.
pub fn remove_component(components: &[FormComponent], kind: ComponentKind) -> Vec<FormComponent> {
    components
        .iter()
        .filter(|c| c.kind() != kind)
        .cloned()
        .collect()
}

/// Applies an on/off switch from the host form: enabling adds a blank
/// component of that kind, disabling removes it.
pub fn toggle_component(
    components: &[FormComponent],
    kind: ComponentKind,
    enabled: bool,
) -> Vec<FormComponent> {
    if enabled {
        return upsert_component(components, FormComponent::empty(kind));
    }

    remove_component(components, kind)
}

/// Builds the request body to create a template.
///
/// Text is trimmed and blank values are left out. Example values are only
/// attached to TEXT headers and BODY when their text references placeholders, so
/// examples left over from a previous edit never reach the backend.
///
/// This does not validate, run [`super::validation::validate_template_form_state`] first.
pub fn build_create_payload(form: &TemplateFormState) -> wa::CreateTemplatePayload {
    wa::CreateTemplatePayload {
        name: form.name.trim().to_string(),
        language: form.language.trim().to_string(),
        category: form.category.trim().to_string(),
        components: form
            .components
            .iter()
            .map(FormComponent::to_payload_component)
            .collect(),
    }
}

/// Builds the request body to update a template, same shape as a creation.
pub fn build_update_payload(form: &TemplateFormState) -> wa::UpdateTemplatePayload {
    build_create_payload(form)
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Example array covering slots `0..max(indexes)`; referenced slots take the
/// trimmed example, everything else is an empty string.
fn example_slots(indexes: &[u32], examples: &[String]) -> Vec<String> {
    let Some(max) = indexes.last() else {
        return Vec::new();
    };

    let mut slots = vec![String::new(); *max as usize];
    for idx in indexes {
        let slot = (*idx - 1) as usize;
        slots[slot] = examples
            .get(slot)
            .map(|value| value.trim().to_string())
            .unwrap_or_default();
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(text: &str, examples: &[&str]) -> FormComponent {
        FormComponent::Body {
            text: text.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn header(text: &str, examples: &[&str]) -> FormComponent {
        FormComponent::Header {
            format: wa::HeaderFormat::Text,
            text: text.to_string(),
            examples: examples.iter().map(|e| e.to_string()).collect(),
        }
    }

    fn create_test_form(components: Vec<FormComponent>) -> TemplateFormState {
        TemplateFormState {
            name: "bienvenida".into(),
            language: "es_CO".into(),
            category: "MARKETING".into(),
            components,
        }
    }

    #[test]
    fn test_empty_form_state_has_blank_body() {
        let form = TemplateFormState::default();

        assert_eq!(form.name, "");
        assert_eq!(form.language, "es_CO");
        assert_eq!(form.category, "MARKETING");
        assert_eq!(form.components, vec![body("", &[])]);
    }

    #[test]
    fn test_empty_form_state_uses_given_defaults() {
        let defaults = FormDefaults {
            language: "en_US".into(),
            category: "UTILITY".into(),
        };
        let form = TemplateFormState::empty(&defaults);

        assert_eq!(form.language, "en_US");
        assert_eq!(form.category, "UTILITY");
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let components = vec![header("Uno", &[]), body("Hola", &[])];

        let updated = upsert_component(&components, header("Dos", &[]));
        let updated = upsert_component(&updated, header("Tres", &[]));

        assert_eq!(updated.len(), 2);
        assert_eq!(updated[0], header("Tres", &[]));
        assert_eq!(updated[1], body("Hola", &[]));
        // input untouched
        assert_eq!(components[0], header("Uno", &[]));
    }

    #[test]
    fn test_upsert_appends_missing_kind() {
        let components = vec![body("Hola", &[])];
        let footer = FormComponent::Footer {
            text: "Iglesia".into(),
        };

        let updated = upsert_component(&components, footer.clone());

        assert_eq!(updated, vec![body("Hola", &[]), footer]);
    }

    #[test]
    fn test_remove_absent_kind_is_noop() {
        let components = vec![header("Uno", &[]), body("Hola", &[])];

        assert_eq!(remove_component(&components, ComponentKind::Footer), components);
        assert_eq!(
            remove_component(&components, ComponentKind::Header),
            vec![body("Hola", &[])]
        );
    }

    #[test]
    fn test_toggle_component_lifecycle() {
        let components = vec![body("Hola", &[])];

        let enabled = toggle_component(&components, ComponentKind::Buttons, true);
        assert_eq!(enabled.len(), 2);
        assert_eq!(
            enabled[1],
            FormComponent::Buttons {
                buttons: Vec::new()
            }
        );

        let edited = upsert_component(
            &enabled,
            FormComponent::Buttons {
                buttons: vec![ButtonForm {
                    button_type: wa::ButtonType::QuickReply,
                    text: "Asistiré".into(),
                    ..ButtonForm::default()
                }],
            },
        );
        assert_eq!(edited.len(), 2);

        let disabled = toggle_component(&edited, ComponentKind::Buttons, false);
        assert_eq!(disabled, components);
    }

    #[test]
    fn test_payload_without_placeholders_drops_stale_example() {
        let form = create_test_form(vec![body("Hola sin variables", &["Juan"])]);

        let payload = build_create_payload(&form);

        assert_eq!(
            payload.components,
            vec![wa::TemplateComponent::Body(wa::BodyComponent {
                text: "Hola sin variables".into(),
                example: None,
            })]
        );
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["components"][0].get("example").is_none());
    }

    #[test]
    fn test_payload_fills_example_slots_up_to_max_index() {
        let form = create_test_form(vec![
            header("  Hola {{2}}  ", &["", " Ana "]),
            body("Culto {{1}} a las {{3}}", &[" domingo ", "stale", "10am"]),
        ]);

        let payload = build_create_payload(&form);

        assert_eq!(
            payload.components[0],
            wa::TemplateComponent::Header(wa::HeaderComponent {
                format: wa::HeaderFormat::Text,
                text: Some("Hola {{2}}".into()),
                example: Some(wa::HeaderExample {
                    header_text: vec!["".into(), "Ana".into()],
                }),
            })
        );
        assert_eq!(
            payload.components[1],
            wa::TemplateComponent::Body(wa::BodyComponent {
                text: "Culto {{1}} a las {{3}}".into(),
                example: Some(wa::BodyExample {
                    body_text: vec![vec!["domingo".into(), "".into(), "10am".into()]],
                }),
            })
        );
    }

    #[test]
    fn test_payload_missing_examples_become_empty_strings() {
        let form = create_test_form(vec![body("Hola {{1}} {{2}}", &["Juan"])]);

        let payload = build_update_payload(&form);

        assert!(matches!(
            &payload.components[0],
            wa::TemplateComponent::Body(wa::BodyComponent { example: Some(ex), .. })
                if ex.body_text == vec![vec!["Juan".to_string(), String::new()]]
        ));
    }

    #[test]
    fn test_payload_trims_blank_fields_to_absent() {
        let form = create_test_form(vec![
            body("Hola", &[]),
            FormComponent::Footer { text: "   ".into() },
            FormComponent::Buttons {
                buttons: vec![
                    ButtonForm {
                        button_type: wa::ButtonType::Url,
                        text: " Ir ".into(),
                        url: Some(" https://iglesia.co ".into()),
                        phone_number: Some("  ".into()),
                    },
                    ButtonForm {
                        button_type: wa::ButtonType::QuickReply,
                        text: "  ".into(),
                        url: None,
                        phone_number: None,
                    },
                ],
            },
        ]);

        let payload = build_create_payload(&form);

        assert_eq!(
            payload.components[1],
            wa::TemplateComponent::Footer(wa::FooterComponent { text: None })
        );
        assert_eq!(
            payload.components[2],
            wa::TemplateComponent::Buttons(wa::ButtonsComponent {
                buttons: vec![
                    wa::TemplateButton {
                        button_type: wa::ButtonType::Url,
                        text: Some("Ir".into()),
                        url: Some("https://iglesia.co".into()),
                        phone_number: None,
                    },
                    wa::TemplateButton {
                        button_type: wa::ButtonType::QuickReply,
                        text: None,
                        url: None,
                        phone_number: None,
                    },
                ],
            })
        );
    }

    #[test]
    fn test_media_header_and_large_indexes_get_no_example_slots() {
        let form = create_test_form(vec![
            FormComponent::Header {
                format: wa::HeaderFormat::Image,
                text: "{{50000000}}".into(),
                examples: Vec::new(),
            },
            body("Hola {{1}} {{4000000000}}", &["Juan"]),
        ]);

        let payload = build_create_payload(&form);

        assert_eq!(
            payload.components[0],
            wa::TemplateComponent::Header(wa::HeaderComponent {
                format: wa::HeaderFormat::Image,
                text: Some("{{50000000}}".into()),
                example: None,
            })
        );
        assert!(matches!(
            &payload.components[1],
            wa::TemplateComponent::Body(wa::BodyComponent { example: Some(ex), .. })
                if ex.body_text == vec![vec!["Juan".to_string()]]
        ));
    }

    #[test]
    fn test_form_from_template_round_trip() {
        let template = wa::MetaTemplate {
            id: "991".into(),
            name: "recordatorio_evento".into(),
            language: "es_CO".into(),
            category: wa::TemplateCategory::Utility,
            status: wa::TemplateStatus::Approved,
            components: vec![
                wa::TemplateComponent::Header(wa::HeaderComponent {
                    format: wa::HeaderFormat::Text,
                    text: Some("Evento {{1}}".into()),
                    example: Some(wa::HeaderExample {
                        header_text: vec!["Retiro".into()],
                    }),
                }),
                wa::TemplateComponent::Body(wa::BodyComponent {
                    text: "Hola {{1}}, te esperamos el {{2}}".into(),
                    example: Some(wa::BodyExample {
                        body_text: vec![vec!["Juan".into(), "sábado".into()]],
                    }),
                }),
                wa::TemplateComponent::Unsupported,
                wa::TemplateComponent::Footer(wa::FooterComponent {
                    text: Some("Iglesia Central".into()),
                }),
            ],
        };

        let form = TemplateFormState::from_template(&template);
        assert_eq!(form.category, "UTILITY");
        assert_eq!(form.components.len(), 3);

        let payload = build_create_payload(&form);
        assert_eq!(payload.name, template.name);
        assert_eq!(payload.category, "UTILITY");
        let expected: Vec<_> = template
            .components
            .iter()
            .filter(|c| **c != wa::TemplateComponent::Unsupported)
            .cloned()
            .collect();
        assert_eq!(payload.components, expected);
    }

    #[test]
    fn test_form_from_template_keeps_first_example_row() {
        let template = wa::MetaTemplate {
            id: "992".into(),
            name: "saludo".into(),
            language: "es_CO".into(),
            category: wa::TemplateCategory::Marketing,
            status: wa::TemplateStatus::Approved,
            components: vec![wa::TemplateComponent::Body(wa::BodyComponent {
                text: "Hola {{1}}".into(),
                example: Some(wa::BodyExample {
                    body_text: vec![vec!["Juan".into()], vec!["Ana".into()]],
                }),
            })],
        };

        let form = TemplateFormState::from_template(&template);

        assert_eq!(form.components, vec![body("Hola {{1}}", &["Juan"])]);
    }

    #[test]
    fn test_form_state_deserializes_from_dashboard_json() {
        let json = r#"{
            "name": "bienvenida",
            "language": "es_CO",
            "category": "MARKETING",
            "components": [
                {"type": "BODY", "text": "Hola {{1}}", "examples": ["Juan"]},
                {"type": "BUTTONS", "buttons": [{"type": "URL", "text": "Ir", "url": "https://iglesia.co"}]}
            ]
        }"#;

        let form: TemplateFormState = serde_json::from_str(json).unwrap();

        assert_eq!(form.components[0], body("Hola {{1}}", &["Juan"]));
        assert_eq!(form.components[1].kind(), ComponentKind::Buttons);
        assert!(form.component(ComponentKind::Header).is_none());
    }
}
