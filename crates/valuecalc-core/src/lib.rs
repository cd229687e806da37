//! Property Value Increase Calculator - Core Library
//!
//! Target-independent logic behind the embeddable valuation widget.
//!
//! ## Overview
//!
//! A user adjusts four inputs (unit count, monthly rent increase per unit,
//! occupancy and capitalization rate). The widget estimates how much the
//! property's value rises:
//!
//! ```text
//! annual_rent     = units * rent_increase * 12 * (occupancy / 100)
//! value_increase  = round(annual_rent / (cap_rate / 100))
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use valuecalc_core::{format_currency, Field, FormState};
//!
//! let form = FormState::new();
//! assert_eq!(format_currency(form.value_increase()), "$432,000");
//!
//! let form = form.with_text(Field::Units, "10")
//!     .with_text(Field::RentIncrease, "1000")
//!     .with_slider(Field::Occupancy, 100.0)
//!     .with_text(Field::CapRate, "4");
//! assert_eq!(format_currency(form.value_increase()), "$3,000,000");
//! ```

pub mod error;
pub mod field;
pub mod form;
pub mod format;
pub mod host;
pub mod input;
pub mod valuation;

// Re-exports
pub use error::{CalcError, CalcResult};
pub use field::{Field, FieldSpec};
pub use form::{FieldValue, FormState};
pub use format::{format_currency, group_thousands};
pub use host::{
    HeightPayload, HeightReporter, HeightSink, HeightTracker, HostConfig, ResizeMessage,
    SET_HEIGHT,
};
pub use input::{format_number, normalize};
pub use valuation::{value_increase, Valuation};
