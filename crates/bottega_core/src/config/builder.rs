//! Fluent builder for `ParameterSet`

use crate::error::{ParamError, Violation};
use crate::model::{ParamField, ParameterSet};

/// Collects parameter values field by field and refuses to build until every
/// field has been supplied
#[derive(Debug, Clone, Default)]
pub struct ParameterSetBuilder {
    values: [Option<f64>; ParamField::COUNT],
}

impl ParameterSetBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing parameter set, with every field supplied
    #[must_use]
    pub fn from_params(params: &ParameterSet) -> Self {
        let mut builder = Self::new();
        for (field, value) in params.values() {
            builder.values[field.index()] = Some(value);
        }
        builder
    }

    /// Set a single field
    #[must_use]
    pub fn set(mut self, field: ParamField, value: f64) -> Self {
        self.values[field.index()] = Some(value);
        self
    }

    /// Fields that have not been supplied yet
    #[must_use]
    pub fn missing(&self) -> Vec<ParamField> {
        ParamField::ALL
            .into_iter()
            .filter(|f| self.values[f.index()].is_none())
            .collect()
    }

    #[must_use]
    pub fn cadence(self, days_open_per_week: u8, weeks_per_month: f64) -> Self {
        self.set(ParamField::DaysOpenPerWeek, f64::from(days_open_per_week))
            .set(ParamField::WeeksPerMonth, weeks_per_month)
    }

    /// Daily volumes: menus, café tickets, shop tickets
    #[must_use]
    pub fn volumes(self, menus: f64, cafe_tickets: f64, shop_tickets: f64) -> Self {
        self.set(ParamField::MenusPerDay, menus)
            .set(ParamField::CafeTicketsPerDay, cafe_tickets)
            .set(ParamField::ShopTicketsPerDay, shop_tickets)
    }

    /// Menu price and average café and shop tickets
    #[must_use]
    pub fn prices(self, menu: f64, cafe_ticket: f64, shop_ticket: f64) -> Self {
        self.set(ParamField::MenuPrice, menu)
            .set(ParamField::CafeTicketAvg, cafe_ticket)
            .set(ParamField::ShopTicketAvg, shop_ticket)
    }

    /// Menu cost per unit, café and shop cost as fractions of sales
    #[must_use]
    pub fn food_costs(self, menu_per_unit: f64, cafe_pct: f64, shop_pct: f64) -> Self {
        self.set(ParamField::MenuFoodCostPerUnit, menu_per_unit)
            .set(ParamField::CafeFoodCostPct, cafe_pct)
            .set(ParamField::ShopFoodCostPct, shop_pct)
    }

    /// Gross salaries and the employer-cost multiplier applied to them
    #[must_use]
    pub fn salaries(self, cook: f64, partner: f64, ss_factor: f64) -> Self {
        self.set(ParamField::CookGrossSalary, cook)
            .set(ParamField::PartnerGrossSalary, partner)
            .set(ParamField::SsFactor, ss_factor)
    }

    /// Fully-loaded labor costs that are not scaled by the employer factor
    #[must_use]
    pub fn labor_extras(self, partner_cash_extra: f64, other_labor_cost: f64) -> Self {
        self.set(ParamField::PartnerCashExtra, partner_cash_extra)
            .set(ParamField::OtherLaborCost, other_labor_cost)
    }

    #[must_use]
    pub fn fixed_costs(
        self,
        rent: f64,
        utilities: f64,
        insurance: f64,
        accounting: f64,
        pos_and_booking_saas: f64,
        other_fixed_overheads: f64,
    ) -> Self {
        self.set(ParamField::Rent, rent)
            .set(ParamField::Utilities, utilities)
            .set(ParamField::Insurance, insurance)
            .set(ParamField::Accounting, accounting)
            .set(ParamField::PosAndBookingSaas, pos_and_booking_saas)
            .set(ParamField::OtherFixedOverheads, other_fixed_overheads)
    }

    /// Build the parameter set, failing on the first field not supplied.
    ///
    /// The day count is stored as an integer, so a value that would not
    /// survive that conversion (fractional, negative, above 7, non-finite)
    /// is rejected with `OutOfDomain` rather than rounded. Other fields are
    /// taken as given; see [`ParameterSet::validate`].
    pub fn build(&self) -> Result<ParameterSet, ParamError> {
        let days = ParamField::DaysOpenPerWeek;
        if let Some(value) = self.values[days.index()]
            && let Some(reason) = days.domain().check(value)
        {
            return Err(ParamError::OutOfDomain(vec![Violation {
                field: days,
                value,
                reason,
            }]));
        }

        ParamField::ALL
            .into_iter()
            .try_fold(ParameterSet::zeroed(), |params, field| {
                self.values[field.index()]
                    .map(|value| params.with(field, value))
                    .ok_or(ParamError::MissingField(field))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_reports_first_missing_field() {
        let err = ParameterSetBuilder::new().build().unwrap_err();
        assert_eq!(err, ParamError::MissingField(ParamField::DaysOpenPerWeek));
    }

    #[test]
    fn test_missing_lists_unset_fields() {
        let builder = ParameterSetBuilder::new()
            .cadence(5, 4.3)
            .volumes(18.0, 20.0, 5.0)
            .prices(13.0, 5.0, 15.0)
            .food_costs(3.0, 0.30, 0.35)
            .salaries(1300.0, 1300.0, 1.32)
            .fixed_costs(920.0, 450.0, 60.0, 120.0, 80.0, 700.0);
        assert_eq!(
            builder.missing(),
            vec![ParamField::PartnerCashExtra, ParamField::OtherLaborCost]
        );
        assert_eq!(
            builder.build(),
            Err(ParamError::MissingField(ParamField::PartnerCashExtra))
        );
    }

    #[test]
    fn test_from_params_round_trips() {
        let params = ParameterSet::reference();
        let rebuilt = ParameterSetBuilder::from_params(&params).build().unwrap();
        assert_eq!(rebuilt, params);
    }

    #[test]
    fn test_set_overrides_single_field() {
        let params = ParameterSetBuilder::from_params(&ParameterSet::reference())
            .set(ParamField::Rent, 1_100.0)
            .build()
            .unwrap();
        assert_eq!(params.rent, 1_100.0);
        assert_eq!(params.utilities, 450.0);
    }

    #[test]
    fn test_fractional_days_are_rejected_not_rounded() {
        let builder = ParameterSetBuilder::from_params(&ParameterSet::reference());

        for days in [5.5, -1.0, 8.0, f64::NAN] {
            let err = builder.clone().set(ParamField::DaysOpenPerWeek, days).build();
            match err {
                Err(ParamError::OutOfDomain(violations)) => {
                    assert_eq!(violations.len(), 1);
                    assert_eq!(violations[0].field, ParamField::DaysOpenPerWeek);
                }
                other => panic!("expected OutOfDomain for {days}, got {other:?}"),
            }
        }

        let params = builder
            .set(ParamField::DaysOpenPerWeek, 6.0)
            .build()
            .unwrap();
        assert_eq!(params.days_open_per_week, 6);
    }
}
