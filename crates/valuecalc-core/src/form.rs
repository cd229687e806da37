//! Form state for the valuation form.
//!
//! [`FormState`] is replaced wholesale on every edit: the `with_*` methods
//! return a new state and leave the receiver untouched.

use crate::field::Field;
use crate::input::{format_number, normalize};
use crate::valuation;

/// The stored text of one field.
///
/// Holds normalized text rather than a number so that in-progress edits
/// ("" or "12.") are redisplayed exactly as typed.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct FieldValue(String);

impl FieldValue {
    /// Build from a number, e.g. a slider reading or a default
    pub fn from_number(value: f64) -> Self {
        Self(format_number(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the stored text, or `None` if it is empty or not a finite number
    pub fn numeric(&self) -> Option<f64> {
        self.0.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// The numeric value, with `fallback` standing in for empty text
    pub fn numeric_or(&self, fallback: f64) -> f64 {
        self.numeric().unwrap_or(fallback)
    }
}

/// The four fields of the valuation form
#[derive(Clone, PartialEq, Debug)]
pub struct FormState {
    units: FieldValue,
    rent_increase: FieldValue,
    occupancy: FieldValue,
    cap_rate: FieldValue,
}

impl Default for FormState {
    fn default() -> Self {
        let initial = |field: Field| FieldValue::from_number(field.spec().default);
        Self {
            units: initial(Field::Units),
            rent_increase: initial(Field::RentIncrease),
            occupancy: initial(Field::Occupancy),
            cap_rate: initial(Field::CapRate),
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Units => &self.units,
            Field::RentIncrease => &self.rent_increase,
            Field::Occupancy => &self.occupancy,
            Field::CapRate => &self.cap_rate,
        }
    }

    /// Numeric reading of a field, substituting the field's fallback for empty text
    pub fn value(&self, field: Field) -> f64 {
        self.get(field).numeric_or(field.fallback())
    }

    /// Apply a keystroke edit: the raw text is normalized against the field's max
    pub fn with_text(&self, field: Field, raw: &str) -> Self {
        let text = normalize(raw, field.spec().text_max);
        tracing::debug!(%field, raw, stored = %text, "field text edited");
        self.with_value(field, FieldValue(text))
    }

    /// Apply a slider movement: the reading is snapped onto the slider grid
    pub fn with_slider(&self, field: Field, reading: f64) -> Self {
        let value = field.spec().snap(reading);
        tracing::debug!(%field, reading, stored = value, "field slider moved");
        self.with_value(field, FieldValue::from_number(value))
    }

    /// The rounded property value increase for this state
    pub fn value_increase(&self) -> u64 {
        valuation::value_increase(self)
    }

    fn with_value(&self, field: Field, value: FieldValue) -> Self {
        let mut next = self.clone();
        match field {
            Field::Units => next.units = value,
            Field::RentIncrease => next.rent_increase = value,
            Field::Occupancy => next.occupancy = value,
            Field::CapRate => next.cap_rate = value,
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_holds_widget_defaults() {
        let form = FormState::new();
        assert_eq!(form.get(Field::Units).as_str(), "16");
        assert_eq!(form.get(Field::RentIncrease).as_str(), "150");
        assert_eq!(form.get(Field::Occupancy).as_str(), "90");
        assert_eq!(form.get(Field::CapRate).as_str(), "6");
    }

    #[test]
    fn text_edit_replaces_only_that_field() {
        let form = FormState::new();
        let next = form.with_text(Field::Occupancy, "75");

        assert_eq!(next.get(Field::Occupancy).as_str(), "75");
        assert_eq!(next.get(Field::Units), form.get(Field::Units));
        // The previous state is untouched
        assert_eq!(form.get(Field::Occupancy).as_str(), "90");
    }

    #[test]
    fn text_edit_uses_field_max() {
        let form = FormState::new()
            .with_text(Field::Occupancy, "250")
            .with_text(Field::Units, "250");
        assert_eq!(form.get(Field::Occupancy).as_str(), "100");
        assert_eq!(form.get(Field::Units).as_str(), "250");
    }

    #[test]
    fn slider_value_is_snapped() {
        let form = FormState::new().with_slider(Field::CapRate, 7.1);
        assert_eq!(form.get(Field::CapRate).as_str(), "7");
    }

    #[test]
    fn empty_fields_use_fallbacks() {
        let form = FormState::new()
            .with_text(Field::Units, "")
            .with_text(Field::CapRate, "");
        assert_eq!(form.value(Field::Units), 0.0);
        assert_eq!(form.value(Field::CapRate), 1.0);
    }

    #[test]
    fn field_value_parses_trailing_point() {
        let value = FieldValue("12.".to_string());
        assert_eq!(value.numeric(), Some(12.0));
        assert_eq!(FieldValue::default().numeric(), None);
    }
}
