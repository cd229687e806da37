//! The four calculator fields and their static configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::CalcError;

/// One of the four inputs of the valuation form
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Field {
    /// Number of units in the property
    Units,
    /// Monthly rent increase per unit, in USD
    RentIncrease,
    /// Percentage of units assumed rented
    Occupancy,
    /// Capitalization rate, as a percentage
    CapRate,
}

/// Display and range configuration for a [`Field`]
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldSpec {
    pub label: &'static str,
    /// Unit shown inside the text input ("Units", "USD", "%")
    pub suffix: &'static str,
    /// Helper text under the slider
    pub caption: &'static str,
    pub default: f64,
    /// Largest value accepted from the keyboard
    pub text_max: f64,
    pub slider_min: f64,
    pub slider_max: f64,
    pub slider_step: f64,
}

const UNITS: FieldSpec = FieldSpec {
    label: "Number Of Units:",
    suffix: "Units",
    caption: "Enter the total number of units in the property",
    default: 16.0,
    text_max: 999_999.0,
    slider_min: 1.0,
    slider_max: 500.0,
    slider_step: 1.0,
};

const RENT_INCREASE: FieldSpec = FieldSpec {
    label: "Rent Increase:",
    suffix: "USD",
    caption: "Enter increase in rent charged per unit monthly",
    default: 150.0,
    text_max: 999_999.0,
    slider_min: 1.0,
    slider_max: 2000.0,
    slider_step: 25.0,
};

const OCCUPANCY: FieldSpec = FieldSpec {
    label: "Occupancy:",
    suffix: "%",
    caption: "Enter the rate at which units will be occupied overall",
    default: 90.0,
    text_max: 100.0,
    slider_min: 0.0,
    slider_max: 100.0,
    slider_step: 1.0,
};

const CAP_RATE: FieldSpec = FieldSpec {
    label: "Capitalization Rate:",
    suffix: "%",
    caption: "Enter the Cap Rate you're willing to pay",
    default: 6.0,
    text_max: 100.0,
    slider_min: 1.0,
    slider_max: 100.0,
    slider_step: 0.25,
};

impl Field {
    /// All fields, in display order
    pub fn all() -> &'static [Field] {
        &[
            Field::Units,
            Field::RentIncrease,
            Field::Occupancy,
            Field::CapRate,
        ]
    }

    pub fn spec(&self) -> &'static FieldSpec {
        match self {
            Field::Units => &UNITS,
            Field::RentIncrease => &RENT_INCREASE,
            Field::Occupancy => &OCCUPANCY,
            Field::CapRate => &CAP_RATE,
        }
    }

    /// Name used for the form control and in host-facing payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Units => "units",
            Field::RentIncrease => "rentIncrease",
            Field::Occupancy => "occupancy",
            Field::CapRate => "capRate",
        }
    }

    /// Value substituted when the field is empty or unparseable.
    ///
    /// Cap rate falls back to 1 so the valuation never divides by zero.
    pub fn fallback(&self) -> f64 {
        match self {
            Field::CapRate => 1.0,
            _ => 0.0,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::all()
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CalcError::UnknownField(s.to_string()))
    }
}

impl FieldSpec {
    /// Snap a slider reading onto this field's step grid within its range.
    ///
    /// Mirrors what a native range input does: the result is the nearest
    /// `slider_min + k * slider_step` that does not exceed `slider_max`.
    pub fn snap(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.slider_min;
        }

        let clamped = value.clamp(self.slider_min, self.slider_max);
        let mut steps = ((clamped - self.slider_min) / self.slider_step).round();
        if self.slider_min + steps * self.slider_step > self.slider_max {
            steps -= 1.0;
        }
        let snapped = self.slider_min + steps * self.slider_step;

        // Drop floating point noise from fractional steps (0.25).
        (snapped * 1_000_000.0).round() / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in Field::all() {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), *field);
        }
    }

    #[test]
    fn unknown_field_is_an_error() {
        let err = "vacancy".parse::<Field>().unwrap_err();
        assert!(matches!(err, CalcError::UnknownField(ref name) if name == "vacancy"));
    }

    #[test]
    fn defaults_match_widget() {
        assert_eq!(Field::Units.spec().default, 16.0);
        assert_eq!(Field::RentIncrease.spec().default, 150.0);
        assert_eq!(Field::Occupancy.spec().default, 90.0);
        assert_eq!(Field::CapRate.spec().default, 6.0);
    }

    #[test]
    fn only_cap_rate_falls_back_to_one() {
        assert_eq!(Field::Units.fallback(), 0.0);
        assert_eq!(Field::RentIncrease.fallback(), 0.0);
        assert_eq!(Field::Occupancy.fallback(), 0.0);
        assert_eq!(Field::CapRate.fallback(), 1.0);
    }

    #[test]
    fn snap_clamps_to_range() {
        let units = Field::Units.spec();
        assert_eq!(units.snap(0.0), 1.0);
        assert_eq!(units.snap(9_000.0), 500.0);
        assert_eq!(units.snap(f64::NAN), 1.0);
    }

    #[test]
    fn snap_follows_step_grid() {
        let rent = Field::RentIncrease.spec();
        assert_eq!(rent.snap(150.0), 151.0);
        assert_eq!(rent.snap(2000.0), 1976.0);

        let cap = Field::CapRate.spec();
        assert_eq!(cap.snap(6.3), 6.25);
        assert_eq!(cap.snap(6.4), 6.5);
    }
}
