//! Numeric Text Input
//!
//! A text input with a unit suffix ("Units", "USD", "%") drawn inside its
//! right edge. The input reports raw keystrokes; normalization is the
//! caller's job.

use dioxus::prelude::*;

/// Properties for the NumberInput component
#[derive(Clone, PartialEq, Props)]
pub struct NumberInputProps {
    /// Form control name
    pub name: String,
    /// Current text, displayed as-is
    pub value: String,
    /// Handler called with the raw text on every keystroke
    pub oninput: EventHandler<String>,
    /// Unit label shown inside the input
    #[props(default)]
    pub suffix: Option<String>,
    /// Optional ID for label association
    #[props(default)]
    pub id: Option<String>,
}

/// Text input for numeric values with an inline unit suffix
///
/// # Example
///
/// ```rust,ignore
/// let mut units = use_signal(|| "16".to_string());
///
/// rsx! {
///     NumberInput {
///         name: "units".to_string(),
///         value: units(),
///         oninput: move |s| units.set(s),
///         suffix: "Units".to_string(),
///     }
/// }
/// ```
#[component]
pub fn NumberInput(props: NumberInputProps) -> Element {
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| format!("input-{}", props.name));

    rsx! {
        div { class: "number-input",
            input {
                id: "{id}",
                class: "number-input-field",
                name: "{props.name}",
                r#type: "text",
                "inputmode": "decimal",
                autocomplete: "off",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(suffix) = &props.suffix {
                span { class: "number-input-suffix", "{suffix}" }
            }
        }
    }
}
