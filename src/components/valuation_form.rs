//! Valuation Form - the whole calculator
//!
//! Owns the [`FormState`], renders one field group per field plus the
//! result panel, and keeps the host informed of the rendered height.

use dioxus::prelude::*;
use valuecalc_core::{Field, FormState, HostConfig};
use valuecalc_ui::{FieldGroup, ResultPanel};

use crate::host::use_height_reporting;

/// Props for ValuationForm component
#[derive(Props, Clone, PartialEq)]
pub struct ValuationFormProps {
    /// Resize messaging settings
    #[props(default)]
    pub host: HostConfig,
}

/// Valuation Form Component
///
/// Every edit replaces the form state; the value increase is a memo over it.
/// There is no submit step.
#[component]
pub fn ValuationForm(props: ValuationFormProps) -> Element {
    let mut state = use_signal(FormState::new);
    let value_increase = use_memo(move || state.read().value_increase());

    use_height_reporting(props.host.clone());

    rsx! {
        div { class: "widget",
            form {
                class: "valuation-form",
                // Enter in a text field must not reload the frame
                onsubmit: move |e| e.prevent_default(),
                for field in Field::all().iter().copied() {
                    FieldGroup {
                        key: "{field}",
                        field,
                        value: state.read().get(field).clone(),
                        on_text: move |raw: String| {
                            let next = state.peek().with_text(field, &raw);
                            state.set(next);
                        },
                        on_slide: move |reading: f64| {
                            let next = state.peek().with_slider(field, reading);
                            state.set(next);
                        },
                    }
                }
            }
            ResultPanel { amount: value_increase() }
        }
    }
}
