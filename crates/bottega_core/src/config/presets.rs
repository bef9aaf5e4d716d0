//! Named scenarios

use crate::model::ParameterSet;

impl ParameterSet {
    /// The reference scenario: a five-day pasta bar with a café counter and a
    /// small deli shop.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            days_open_per_week: 5,
            weeks_per_month: 4.3,
            menus_per_day: 18.0,
            cafe_tickets_per_day: 20.0,
            shop_tickets_per_day: 5.0,
            menu_price: 13.0,
            cafe_ticket_avg: 5.0,
            shop_ticket_avg: 15.0,
            menu_food_cost_per_unit: 3.0,
            cafe_food_cost_pct: 0.30,
            shop_food_cost_pct: 0.35,
            cook_gross_salary: 1_300.0,
            partner_gross_salary: 1_300.0,
            partner_cash_extra: 400.0,
            other_labor_cost: 100.0,
            ss_factor: 1.32,
            rent: 920.0,
            utilities: 450.0,
            insurance: 60.0,
            accounting: 120.0,
            pos_and_booking_saas: 80.0,
            other_fixed_overheads: 700.0,
        }
    }
}
