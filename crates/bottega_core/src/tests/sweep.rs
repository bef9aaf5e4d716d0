//! Tests for sensitivity sweeps
//!
//! These tests verify:
//! - Cell order and the perturbed values each cell evaluates
//! - Swept fields are floored at zero
//! - The base parameter set is left alone
//! - Parallel and sequential evaluation agree exactly

use crate::analysis::{SweepConfig, SweepParameter, sweep};
use crate::compute_pnl;
use crate::model::{ParamField, ParameterSet};

fn base() -> ParameterSet {
    ParameterSet {
        menus_per_day: 18.0,
        shop_tickets_per_day: 5.0,
        ..ParameterSet::reference()
    }
}

#[test]
fn test_reference_grid_cells() {
    let results = sweep(&base(), &SweepConfig::reference()).unwrap();

    assert_eq!(results.shape(), &[3, 3]);
    assert_eq!(results.total_points(), 9);
    assert_eq!(
        results.fields,
        vec![ParamField::MenusPerDay, ParamField::ShopTicketsPerDay]
    );

    let corner = results.get(&[0, 0]).unwrap();
    assert_eq!(corner.deltas, vec![-2.0, -2.0]);
    assert_eq!(corner.params.menus_per_day, 16.0);
    assert_eq!(corner.params.shop_tickets_per_day, 3.0);

    let deltas: Vec<Vec<f64>> = results.iter().map(|c| c.deltas.clone()).collect();
    assert_eq!(
        deltas,
        vec![
            vec![-2.0, -2.0],
            vec![-2.0, 0.0],
            vec![-2.0, 2.0],
            vec![0.0, -2.0],
            vec![0.0, 0.0],
            vec![0.0, 2.0],
            vec![2.0, -2.0],
            vec![2.0, 0.0],
            vec![2.0, 2.0],
        ]
    );
}

#[test]
fn test_each_cell_matches_direct_evaluation() {
    let base = base();
    let results = sweep(&base, &SweepConfig::reference()).unwrap();
    for cell in results.iter() {
        let expected = base
            .with(ParamField::MenusPerDay, base.menus_per_day + cell.deltas[0])
            .with(
                ParamField::ShopTicketsPerDay,
                base.shop_tickets_per_day + cell.deltas[1],
            );
        assert_eq!(cell.params, expected);
        assert_eq!(cell.result, compute_pnl(&expected));
    }
}

#[test]
fn test_centre_cell_is_the_base_scenario() {
    let base = base();
    let results = sweep(&base, &SweepConfig::reference()).unwrap();
    let centre = results.get(&[1, 1]).unwrap();
    assert_eq!(centre.params, base);
    assert_eq!(centre.result, compute_pnl(&base));
}

#[test]
fn test_swept_fields_floor_at_zero() {
    let base = ParameterSet {
        shop_tickets_per_day: 1.0,
        ..base()
    };
    let results = sweep(&base, &SweepConfig::reference()).unwrap();

    let corner = results.get(&[0, 0]).unwrap();
    assert_eq!(corner.params.menus_per_day, 16.0);
    assert_eq!(corner.params.shop_tickets_per_day, 0.0);

    for cell in results.iter() {
        assert!(cell.params.menus_per_day >= 0.0);
        assert!(cell.params.shop_tickets_per_day >= 0.0);
    }
}

#[test]
fn test_large_negative_delta_floors_every_cell() {
    let config = SweepConfig::new(vec![SweepParameter::new(
        ParamField::Rent,
        vec![-10_000.0, -920.0, -1.0],
    )]);
    let results = sweep(&base(), &config).unwrap();
    let rents: Vec<f64> = results.iter().map(|c| c.params.rent).collect();
    assert_eq!(rents, vec![0.0, 0.0, 919.0]);
}

#[test]
fn test_base_is_not_mutated() {
    let base = base();
    let snapshot = base;
    let _ = sweep(&base, &SweepConfig::reference()).unwrap();
    assert_eq!(base, snapshot);
}

#[test]
fn test_parallel_matches_sequential() {
    let config = SweepConfig::new(vec![
        SweepParameter::symmetric(ParamField::MenusPerDay, 1.0, 10),
        SweepParameter::symmetric(ParamField::CafeTicketsPerDay, 2.0, 5),
        SweepParameter::new(ParamField::SsFactor, vec![0.0, 0.1, 0.2]),
    ]);
    let parallel = sweep(&base(), &config).unwrap();
    let sequential = sweep(&base(), &config.clone().sequential()).unwrap();

    assert_eq!(parallel.shape(), &[21, 11, 3]);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_arbitrary_field_choice() {
    let config = SweepConfig::new(vec![
        SweepParameter::new(ParamField::MenuPrice, vec![-1.0, 1.0]),
        SweepParameter::new(ParamField::CafeFoodCostPct, vec![-0.05, 0.05]),
    ]);
    let results = sweep(&base(), &config).unwrap();
    let cell = results.get(&[1, 0]).unwrap();
    assert_eq!(cell.params.menu_price, 14.0);
    assert!((cell.params.cafe_food_cost_pct - 0.25).abs() < 1e-12);
}
