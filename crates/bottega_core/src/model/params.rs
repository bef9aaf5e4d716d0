//! The parameter set: every operating assumption the engine needs.

use serde::{Deserialize, Serialize};

use super::fields::ParamField;

/// Fully-specified operating assumptions for one month.
///
/// Every field is required; nothing is defaulted. Currency amounts are in the
/// base currency unit, percentages are fractions in [0, 1].
///
/// A `ParameterSet` is `Copy` and never mutated by the engine. Perturbations
/// (see [`ParameterSet::with`]) return a new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSet {
    pub days_open_per_week: u8,
    pub weeks_per_month: f64,

    pub menus_per_day: f64,
    pub cafe_tickets_per_day: f64,
    pub shop_tickets_per_day: f64,

    pub menu_price: f64,
    pub cafe_ticket_avg: f64,
    pub shop_ticket_avg: f64,

    /// Food cost per menu served (unit-cost model)
    pub menu_food_cost_per_unit: f64,
    /// Food cost as a fraction of café revenue
    pub cafe_food_cost_pct: f64,
    /// Food cost as a fraction of shop revenue
    pub shop_food_cost_pct: f64,

    pub cook_gross_salary: f64,
    pub partner_gross_salary: f64,
    /// Already fully loaded; not scaled by `ss_factor`
    pub partner_cash_extra: f64,
    /// Already fully loaded; not scaled by `ss_factor`
    pub other_labor_cost: f64,
    /// Gross salary to total employer cost multiplier
    pub ss_factor: f64,

    pub rent: f64,
    pub utilities: f64,
    pub insurance: f64,
    pub accounting: f64,
    pub pos_and_booking_saas: f64,
    pub other_fixed_overheads: f64,
}

impl ParameterSet {
    /// A parameter set with every field at zero.
    ///
    /// Note `ss_factor` is zero too, which is outside its domain; this is a
    /// starting point for tests and builders, not a meaningful scenario.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self {
            days_open_per_week: 0,
            weeks_per_month: 0.0,
            menus_per_day: 0.0,
            cafe_tickets_per_day: 0.0,
            shop_tickets_per_day: 0.0,
            menu_price: 0.0,
            cafe_ticket_avg: 0.0,
            shop_ticket_avg: 0.0,
            menu_food_cost_per_unit: 0.0,
            cafe_food_cost_pct: 0.0,
            shop_food_cost_pct: 0.0,
            cook_gross_salary: 0.0,
            partner_gross_salary: 0.0,
            partner_cash_extra: 0.0,
            other_labor_cost: 0.0,
            ss_factor: 0.0,
            rent: 0.0,
            utilities: 0.0,
            insurance: 0.0,
            accounting: 0.0,
            pos_and_booking_saas: 0.0,
            other_fixed_overheads: 0.0,
        }
    }

    /// Read a field as `f64`
    #[must_use]
    pub fn get(&self, field: ParamField) -> f64 {
        match field {
            ParamField::DaysOpenPerWeek => f64::from(self.days_open_per_week),
            ParamField::WeeksPerMonth => self.weeks_per_month,
            ParamField::MenusPerDay => self.menus_per_day,
            ParamField::CafeTicketsPerDay => self.cafe_tickets_per_day,
            ParamField::ShopTicketsPerDay => self.shop_tickets_per_day,
            ParamField::MenuPrice => self.menu_price,
            ParamField::CafeTicketAvg => self.cafe_ticket_avg,
            ParamField::ShopTicketAvg => self.shop_ticket_avg,
            ParamField::MenuFoodCostPerUnit => self.menu_food_cost_per_unit,
            ParamField::CafeFoodCostPct => self.cafe_food_cost_pct,
            ParamField::ShopFoodCostPct => self.shop_food_cost_pct,
            ParamField::CookGrossSalary => self.cook_gross_salary,
            ParamField::PartnerGrossSalary => self.partner_gross_salary,
            ParamField::PartnerCashExtra => self.partner_cash_extra,
            ParamField::OtherLaborCost => self.other_labor_cost,
            ParamField::SsFactor => self.ss_factor,
            ParamField::Rent => self.rent,
            ParamField::Utilities => self.utilities,
            ParamField::Insurance => self.insurance,
            ParamField::Accounting => self.accounting,
            ParamField::PosAndBookingSaas => self.pos_and_booking_saas,
            ParamField::OtherFixedOverheads => self.other_fixed_overheads,
        }
    }

    /// Return a copy with `field` replaced by `value`.
    ///
    /// `days_open_per_week` is an integer field: the value is rounded to the
    /// nearest whole day and saturated into `u8` (NaN becomes 0).
    #[must_use]
    pub fn with(self, field: ParamField, value: f64) -> Self {
        let mut next = self;
        match field {
            ParamField::DaysOpenPerWeek => {
                next.days_open_per_week = value.round().clamp(0.0, f64::from(u8::MAX)) as u8;
            }
            ParamField::WeeksPerMonth => next.weeks_per_month = value,
            ParamField::MenusPerDay => next.menus_per_day = value,
            ParamField::CafeTicketsPerDay => next.cafe_tickets_per_day = value,
            ParamField::ShopTicketsPerDay => next.shop_tickets_per_day = value,
            ParamField::MenuPrice => next.menu_price = value,
            ParamField::CafeTicketAvg => next.cafe_ticket_avg = value,
            ParamField::ShopTicketAvg => next.shop_ticket_avg = value,
            ParamField::MenuFoodCostPerUnit => next.menu_food_cost_per_unit = value,
            ParamField::CafeFoodCostPct => next.cafe_food_cost_pct = value,
            ParamField::ShopFoodCostPct => next.shop_food_cost_pct = value,
            ParamField::CookGrossSalary => next.cook_gross_salary = value,
            ParamField::PartnerGrossSalary => next.partner_gross_salary = value,
            ParamField::PartnerCashExtra => next.partner_cash_extra = value,
            ParamField::OtherLaborCost => next.other_labor_cost = value,
            ParamField::SsFactor => next.ss_factor = value,
            ParamField::Rent => next.rent = value,
            ParamField::Utilities => next.utilities = value,
            ParamField::Insurance => next.insurance = value,
            ParamField::Accounting => next.accounting = value,
            ParamField::PosAndBookingSaas => next.pos_and_booking_saas = value,
            ParamField::OtherFixedOverheads => next.other_fixed_overheads = value,
        }
        next
    }

    /// Return a copy with all three daily volumes multiplied by `factor`.
    ///
    /// Prices and cost structure are untouched, so the gross margin
    /// percentage is preserved while revenue scales linearly.
    #[must_use]
    pub fn scale_volumes(self, factor: f64) -> Self {
        Self {
            menus_per_day: self.menus_per_day * factor,
            cafe_tickets_per_day: self.cafe_tickets_per_day * factor,
            shop_tickets_per_day: self.shop_tickets_per_day * factor,
            ..self
        }
    }

    /// Iterate over `(field, value)` pairs in declaration order
    pub fn values(&self) -> impl Iterator<Item = (ParamField, f64)> + '_ {
        ParamField::ALL.into_iter().map(|f| (f, self.get(f)))
    }
}
