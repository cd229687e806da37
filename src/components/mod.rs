//! Application components for the valuation widget.

mod valuation_form;

pub use valuation_form::ValuationForm;
