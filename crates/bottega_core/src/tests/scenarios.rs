//! Worked scenarios
//!
//! Each test builds a parameter set by hand and checks figures computed on
//! paper. Unless a line is under test, its volume is zero.

use super::assert_close;
use crate::compute_pnl;
use crate::model::ParameterSet;

/// Five days a week, 4.3 weeks a month, nothing sold, no costs
fn cadence_only() -> ParameterSet {
    ParameterSet {
        days_open_per_week: 5,
        weeks_per_month: 4.3,
        ss_factor: 1.0,
        ..ParameterSet::zeroed()
    }
}

#[test]
fn test_menu_line_uses_unit_cost() {
    let params = ParameterSet {
        menus_per_day: 18.0,
        menu_price: 13.0,
        menu_food_cost_per_unit: 3.0,
        ..cadence_only()
    };
    let result = compute_pnl(&params);

    assert_close(result.open_days_per_month, 21.5);
    assert_close(result.rev_menu, 5_031.0);
    assert_close(result.food_menu, 1_161.0);
    assert_eq!(result.rev_cafe, 0.0);
    assert_eq!(result.rev_shop, 0.0);
    assert_close(result.total_revenue, 5_031.0);
    assert_close(result.gross_profit, 3_870.0);
}

#[test]
fn test_menu_food_cost_independent_of_price() {
    let cheap = ParameterSet {
        menus_per_day: 18.0,
        menu_price: 10.0,
        menu_food_cost_per_unit: 3.0,
        ..cadence_only()
    };
    let dear = ParameterSet {
        menu_price: 20.0,
        ..cheap
    };
    assert_eq!(compute_pnl(&cheap).food_menu, compute_pnl(&dear).food_menu);
}

#[test]
fn test_cafe_line_uses_share_of_sales() {
    let params = ParameterSet {
        cafe_tickets_per_day: 20.0,
        cafe_ticket_avg: 5.0,
        cafe_food_cost_pct: 0.30,
        ..cadence_only()
    };
    let result = compute_pnl(&params);

    assert_close(result.rev_cafe, 2_150.0);
    assert_close(result.food_cafe, 645.0);
    assert_close(result.gross_margin_pct, 0.70);
}

#[test]
fn test_shop_line_uses_share_of_sales() {
    let params = ParameterSet {
        shop_tickets_per_day: 5.0,
        shop_ticket_avg: 15.0,
        shop_food_cost_pct: 0.35,
        ..cadence_only()
    };
    let result = compute_pnl(&params);

    assert_close(result.rev_shop, 1_612.5);
    assert_close(result.food_shop, 564.375);
}

#[test]
fn test_labor_scales_only_gross_salaries() {
    let params = ParameterSet {
        cook_gross_salary: 1_300.0,
        partner_gross_salary: 1_300.0,
        ss_factor: 1.32,
        partner_cash_extra: 400.0,
        other_labor_cost: 100.0,
        ..cadence_only()
    };
    let result = compute_pnl(&params);

    assert_close(result.labor_total, 3_932.0);
}

#[test]
fn test_fixed_costs_are_summed_unscaled() {
    let params = ParameterSet {
        rent: 920.0,
        utilities: 450.0,
        insurance: 60.0,
        accounting: 120.0,
        pos_and_booking_saas: 80.0,
        other_fixed_overheads: 700.0,
        ..cadence_only()
    };
    assert_close(compute_pnl(&params).fixed_cost_total, 2_330.0);
}

#[test]
fn test_reference_scenario() {
    let result = compute_pnl(&ParameterSet::reference());

    assert_close(result.total_revenue, 8_793.5);
    assert_close(result.total_food_cost, 2_370.375);
    assert_close(result.labor_total, 3_932.0);
    assert_close(result.fixed_cost_total, 2_330.0);
    assert_close(result.gross_profit, 6_423.125);
    assert_close(result.gross_margin_pct, 6_423.125 / 8_793.5);
    assert_close(result.ebitda, 161.125);

    let break_even = result.break_even_sales.expect("positive margin");
    assert_close(break_even, 6_262.0 / (6_423.125 / 8_793.5));
    let safety = result.safety_ratio.expect("positive break-even");
    assert_close(safety, 8_793.5 / break_even);
    assert!(safety > 1.0, "reference scenario trades above break-even");
    assert!(result.is_profitable());
}

#[test]
fn test_no_volume_leaves_only_operating_costs() {
    let params = ParameterSet {
        menus_per_day: 0.0,
        cafe_tickets_per_day: 0.0,
        shop_tickets_per_day: 0.0,
        ..ParameterSet::reference()
    };
    let result = compute_pnl(&params);

    assert_eq!(result.total_revenue, 0.0);
    assert_eq!(result.total_food_cost, 0.0);
    assert_eq!(result.gross_margin_pct, 0.0);
    assert_close(result.operating_costs(), 6_262.0);
    assert_close(result.ebitda, -result.operating_costs());
    assert_eq!(result.break_even_sales, None);
    assert_eq!(result.safety_ratio, None);
    assert_eq!(result.revenue_above_break_even(), None);
}

#[test]
fn test_statement_signs_and_order() {
    let result = compute_pnl(&ParameterSet::reference());
    let statement = result.statement();

    assert_eq!(statement.len(), 12);
    assert_close(statement[0].amount, result.rev_menu);
    assert_close(statement[4].amount, -result.food_menu);
    assert_close(statement[9].amount, -result.labor_total);
    assert_close(statement[11].amount, result.ebitda);

    let totals = statement.iter().filter(|l| l.item.is_total()).count();
    assert_eq!(totals, 4);

    let breakdown = result.cost_breakdown();
    assert_close(
        breakdown.total(),
        result.total_food_cost + result.labor_total + result.fixed_cost_total,
    );
    assert_close(result.total_revenue - breakdown.total(), result.ebitda);
}

#[test]
fn test_revenue_above_break_even_is_an_amount() {
    let result = compute_pnl(&ParameterSet::reference());
    let break_even = result.break_even_sales.unwrap();
    let above = result.revenue_above_break_even().unwrap();

    assert_close(above, result.total_revenue - break_even);
    assert!(above > 200.0 && above < 250.0);
    // Same sign as the safety ratio's distance from 1, different unit
    let ratio = result.safety_ratio.unwrap();
    assert!(ratio > 1.0 && ratio < 1.1);
    assert_close(above, break_even * (ratio - 1.0));
}

#[test]
fn test_below_break_even_is_negative() {
    let params = ParameterSet {
        menus_per_day: 10.0,
        ..ParameterSet::reference()
    };
    let result = compute_pnl(&params);

    assert!(!result.is_profitable());
    assert!(result.revenue_above_break_even().unwrap() < 0.0);
    assert!(result.safety_ratio.unwrap() < 1.0);
}
