//! The property value formula.
//!
//! ```text
//! annual_rent     = units * rent_increase * 12 * (occupancy / 100)
//! estimated_value = annual_rent / (cap_rate / 100)
//! value_increase  = round(estimated_value)
//! ```
//!
//! No rounding happens before the final step.

use crate::field::Field;
use crate::form::FormState;

/// Intermediate results of the formula, before rounding
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Valuation {
    pub annual_rent: f64,
    pub estimated_value: f64,
}

impl Valuation {
    pub fn compute(units: f64, rent_increase: f64, occupancy: f64, cap_rate: f64) -> Self {
        let annual_rent = units * rent_increase * 12.0 * (occupancy / 100.0);
        let estimated_value = annual_rent / (cap_rate / 100.0);
        Self {
            annual_rent,
            estimated_value,
        }
    }

    pub fn from_form(form: &FormState) -> Self {
        Self::compute(
            form.value(Field::Units),
            form.value(Field::RentIncrease),
            form.value(Field::Occupancy),
            form.value(Field::CapRate),
        )
    }

    /// The estimate rounded half away from zero.
    ///
    /// A non-finite estimate (explicit cap rate of 0) reads as 0.
    pub fn rounded(&self) -> u64 {
        if !self.estimated_value.is_finite() {
            return 0;
        }
        // `as` saturates at the u64 bounds
        self.estimated_value.round().max(0.0) as u64
    }
}

/// Derive the displayed value increase from a form state
pub fn value_increase(form: &FormState) -> u64 {
    Valuation::from_form(form).rounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_432k() {
        let valuation = Valuation::from_form(&FormState::new());
        assert!((valuation.annual_rent - 25_920.0).abs() < 1e-6);
        assert_eq!(valuation.rounded(), 432_000);
    }

    #[test]
    fn zero_cap_rate_reads_as_zero() {
        let form = FormState::new().with_text(Field::CapRate, "0");
        assert_eq!(value_increase(&form), 0);
    }

    #[test]
    fn zero_everything_is_zero() {
        // 0 / 0 is NaN
        assert_eq!(Valuation::compute(0.0, 0.0, 0.0, 0.0).rounded(), 0);
    }

    #[test]
    fn empty_cap_rate_divides_by_one_percent() {
        let form = FormState::new().with_text(Field::CapRate, "");
        // 25920 / 0.01
        assert_eq!(value_increase(&form), 2_592_000);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 5 * 0.5 * 12 * 1 / 12 = 2.5
        let valuation = Valuation::compute(5.0, 0.5, 100.0, 1200.0);
        assert_eq!(valuation.estimated_value, 2.5);
        assert_eq!(valuation.rounded(), 3);
    }

    #[test]
    fn saturates_huge_estimates() {
        let valuation = Valuation::compute(f64::MAX, 2.0, 100.0, 100.0);
        assert_eq!(valuation.rounded(), 0);

        let valuation = Valuation::compute(1e300, 1.0, 100.0, 100.0);
        assert_eq!(valuation.rounded(), u64::MAX);
    }
}
