//! The P&L engine.
//!
//! `compute_pnl` is total: any parameter set, in domain or not, yields a
//! result. Ratios that have no finite meaning come back as `None`, never as
//! NaN, infinity or a sentinel.

use crate::model::{ParameterSet, PnlResult};

/// Revenue and food cost for one sales line
#[derive(Debug, Clone, Copy)]
struct LineFigures {
    revenue: f64,
    food_cost: f64,
}

/// Volume-driven food cost: a fixed cost per unit sold
fn unit_cost_line(volume: f64, price: f64, unit_cost: f64, open_days: f64) -> LineFigures {
    LineFigures {
        revenue: volume * price * open_days,
        food_cost: volume * unit_cost * open_days,
    }
}

/// Revenue-driven food cost: a share of the line's sales
fn pct_of_sales_line(volume: f64, price: f64, cost_pct: f64, open_days: f64) -> LineFigures {
    let revenue = volume * price * open_days;
    LineFigures {
        revenue,
        food_cost: revenue * cost_pct,
    }
}

/// Gross salaries carry the employer-cost loading; cash extras and other
/// labor are already fully loaded.
fn labor_total(params: &ParameterSet) -> f64 {
    (params.cook_gross_salary + params.partner_gross_salary) * params.ss_factor
        + params.partner_cash_extra
        + params.other_labor_cost
}

fn fixed_cost_total(params: &ParameterSet) -> f64 {
    params.rent
        + params.utilities
        + params.insurance
        + params.accounting
        + params.pos_and_booking_saas
        + params.other_fixed_overheads
}

/// Gross profit over revenue, or exactly 0.0 when there is no revenue
fn gross_margin_pct(gross_profit: f64, total_revenue: f64) -> f64 {
    if total_revenue > 0.0 {
        gross_profit / total_revenue
    } else {
        0.0
    }
}

/// Solve `margin * S - costs = 0` for `S`.
///
/// Only defined for a strictly positive margin. A quotient that overflows or
/// is NaN (possible only for out-of-domain inputs) is reported as undefined.
fn break_even_sales(gross_margin_pct: f64, operating_costs: f64) -> Option<f64> {
    if gross_margin_pct > 0.0 {
        Some(operating_costs / gross_margin_pct).filter(|s| s.is_finite())
    } else {
        None
    }
}

/// Revenue over break-even, only for a strictly positive break-even
fn safety_ratio(total_revenue: f64, break_even_sales: Option<f64>) -> Option<f64> {
    break_even_sales
        .filter(|&be| be > 0.0)
        .map(|be| total_revenue / be)
        .filter(|r| r.is_finite())
}

/// Compute the monthly P&L for a parameter set.
///
/// All arithmetic is done in `f64` with no intermediate rounding.
#[must_use]
pub fn compute_pnl(params: &ParameterSet) -> PnlResult {
    let open_days = f64::from(params.days_open_per_week) * params.weeks_per_month;

    let menu = unit_cost_line(
        params.menus_per_day,
        params.menu_price,
        params.menu_food_cost_per_unit,
        open_days,
    );
    let cafe = pct_of_sales_line(
        params.cafe_tickets_per_day,
        params.cafe_ticket_avg,
        params.cafe_food_cost_pct,
        open_days,
    );
    let shop = pct_of_sales_line(
        params.shop_tickets_per_day,
        params.shop_ticket_avg,
        params.shop_food_cost_pct,
        open_days,
    );

    let total_revenue = menu.revenue + cafe.revenue + shop.revenue;
    let total_food_cost = menu.food_cost + cafe.food_cost + shop.food_cost;

    let labor_total = labor_total(params);
    let fixed_cost_total = fixed_cost_total(params);

    let gross_profit = total_revenue - total_food_cost;
    let gross_margin_pct = gross_margin_pct(gross_profit, total_revenue);
    let ebitda = gross_profit - labor_total - fixed_cost_total;

    let break_even_sales = break_even_sales(gross_margin_pct, labor_total + fixed_cost_total);
    let safety_ratio = safety_ratio(total_revenue, break_even_sales);

    PnlResult {
        open_days_per_month: open_days,
        rev_menu: menu.revenue,
        rev_cafe: cafe.revenue,
        rev_shop: shop.revenue,
        total_revenue,
        food_menu: menu.food_cost,
        food_cafe: cafe.food_cost,
        food_shop: shop.food_cost,
        total_food_cost,
        labor_total,
        fixed_cost_total,
        gross_profit,
        gross_margin_pct,
        ebitda,
        break_even_sales,
        safety_ratio,
    }
}
