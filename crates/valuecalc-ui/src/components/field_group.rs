//! Field Group Component
//!
//! One row of the valuation form: bold label and numeric input on top,
//! slider underneath, helper caption last. Ranges, suffix and caption all
//! come from the field's [`FieldSpec`](valuecalc_core::FieldSpec).

use dioxus::prelude::*;
use valuecalc_core::{Field, FieldValue};

use super::{NumberInput, RangeSlider};

/// Properties for the FieldGroup component
#[derive(Clone, PartialEq, Props)]
pub struct FieldGroupProps {
    /// Which form field this group edits
    pub field: Field,
    /// The field's stored text
    pub value: FieldValue,
    /// Raw keystrokes from the text input
    pub on_text: EventHandler<String>,
    /// Readings from the slider
    pub on_slide: EventHandler<f64>,
}

/// Paired text input and slider for a single form field
///
/// # Example
///
/// ```rust,ignore
/// let mut form = use_signal(FormState::new);
///
/// rsx! {
///     FieldGroup {
///         field: Field::Units,
///         value: form.read().get(Field::Units).clone(),
///         on_text: move |raw: String| form.set(form().with_text(Field::Units, &raw)),
///         on_slide: move |v: f64| form.set(form().with_slider(Field::Units, v)),
///     }
/// }
/// ```
#[component]
pub fn FieldGroup(props: FieldGroupProps) -> Element {
    let spec = props.field.spec();
    let name = props.field.as_str();
    // An empty or partial entry puts the thumb at zero, clamped by the slider
    let position = props.value.numeric_or(0.0);

    rsx! {
        div { class: "field-group",
            div { class: "field-group-header",
                label { class: "field-label", r#for: "input-{name}", "{spec.label}" }
                NumberInput {
                    name: name.to_string(),
                    value: props.value.as_str().to_string(),
                    suffix: spec.suffix.to_string(),
                    oninput: move |raw| props.on_text.call(raw),
                }
            }
            RangeSlider {
                name: name.to_string(),
                value: position,
                min: spec.slider_min,
                max: spec.slider_max,
                step: spec.slider_step,
                oninput: move |reading| props.on_slide.call(reading),
            }
            p { class: "field-caption", "{spec.caption}" }
        }
    }
}
