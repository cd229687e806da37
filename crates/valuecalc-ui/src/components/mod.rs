//! Reusable UI components for the valuation widget
//!
//! Class names match the stylesheet shipped with the widget binary.

mod field_group;
mod number_input;
mod range_slider;
mod result_panel;

pub use field_group::*;
pub use number_input::*;
pub use range_slider::*;
pub use result_panel::*;
