use dioxus::prelude::*;

use crate::components::ValuationForm;
use crate::host_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and mounts the calculator.
#[component]
pub fn App() -> Element {
    let host = use_hook(host_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        ValuationForm { host }
    }
}
