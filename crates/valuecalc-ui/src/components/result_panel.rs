//! Result Panel Component
//!
//! Right-hand column of the widget: a white card on black showing the
//! estimated increase as a dollar amount.

use dioxus::prelude::*;
use valuecalc_core::format_currency;

/// Properties for the ResultPanel component
#[derive(Clone, PartialEq, Props)]
pub struct ResultPanelProps {
    /// Rounded value increase in whole dollars
    pub amount: u64,
    /// Heading above the amount
    #[props(default = "Property Value Increase".to_string())]
    pub title: String,
}

#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let formatted = format_currency(props.amount);

    rsx! {
        div { class: "result-panel",
            div { class: "result-card",
                p { class: "result-title", "{props.title}" }
                p { class: "result-amount", "{formatted}" }
            }
        }
    }
}
