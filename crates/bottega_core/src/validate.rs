//! Parameter domain checks.
//!
//! The engine does not require validated input; these checks exist for the
//! layer that collects input, so it can reject or warn about values the
//! business model does not admit (negative volumes, food cost over 100 %, an
//! employer-cost factor below 1.0, ...).

use crate::error::{ParamError, Violation};
use crate::model::ParameterSet;

impl ParameterSet {
    /// Every out-of-domain value, in field declaration order
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        self.values()
            .filter_map(|(field, value)| {
                field.domain().check(value).map(|reason| Violation {
                    field,
                    value,
                    reason,
                })
            })
            .collect()
    }

    /// `Ok` when every field is inside its domain
    pub fn validate(&self) -> Result<(), ParamError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(ParamError::OutOfDomain(violations))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::ParamField;

    use super::*;

    #[test]
    fn test_reference_scenario_is_valid() {
        assert_eq!(ParameterSet::reference().validate(), Ok(()));
    }

    #[test]
    fn test_zeroed_fails_on_cadence_and_ss_factor_only() {
        let fields: Vec<ParamField> = ParameterSet::zeroed()
            .violations()
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec![ParamField::WeeksPerMonth, ParamField::SsFactor]);
    }

    #[test]
    fn test_collects_all_violations() {
        let params = ParameterSet {
            menus_per_day: -1.0,
            cafe_food_cost_pct: 1.5,
            ss_factor: 0.9,
            days_open_per_week: 8,
            ..ParameterSet::reference()
        };
        let Err(ParamError::OutOfDomain(violations)) = params.validate() else {
            panic!("expected out-of-domain error");
        };
        let fields: Vec<ParamField> = violations.iter().map(|v| v.field).collect();
        assert_eq!(
            fields,
            vec![
                ParamField::DaysOpenPerWeek,
                ParamField::MenusPerDay,
                ParamField::CafeFoodCostPct,
                ParamField::SsFactor,
            ]
        );
    }

    #[test]
    fn test_non_finite_values_are_violations() {
        let params = ParameterSet {
            rent: f64::INFINITY,
            ..ParameterSet::reference()
        };
        let violations = params.violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, ParamField::Rent);
    }
}
