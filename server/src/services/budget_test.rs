#![allow(clippy::float_cmp)]

use super::*;
use crate::services::calculation::calculate;
use crate::services::catalog;
use heating::{CalculationInput, FloorType};

fn bundled_catalog() -> Catalog {
    catalog::bundled().expect("bundled catalog")
}

fn calc(area: f64, load: f64, floor: FloorType, distance: f64, feed: Option<f64>) -> CalculationOutput {
    calculate(&CalculationInput {
        area,
        thermal_load: load,
        floor_type: floor,
        collector_distance: distance,
        feed_distance: feed,
    })
}

fn quantity(summary: &BudgetSummary, id: &str) -> Option<u32> {
    summary.items.iter().find(|i| i.product_id == id).map(|i| i.quantity)
}

#[test]
fn stone_scenario_quantities() {
    let out = calc(50.0, 80.0, FloorType::Stone, 10.0, None);
    let summary = budget(&out, 50.0, &bundled_catalog()).unwrap();

    assert_eq!(quantity(&summary, PIPE_ID), Some(373)); // 355 * 1.05 = 372.75
    assert_eq!(quantity(&summary, INSULATION_BOARD_ID), Some(50));
    assert_eq!(quantity(&summary, PERIMETER_BAND_ID), Some(34)); // sqrt(50) * 4 * 1.2 = 33.94
    assert_eq!(quantity(&summary, MESH_ID), Some(50));
    assert_eq!(quantity(&summary, CLIPS_ID), Some(4));
    assert_eq!(quantity(&summary, "COL-03"), Some(1));
    assert_eq!(quantity(&summary, VALVE_PAIR_ID), Some(1));
    assert_eq!(quantity(&summary, CABINET_ID), Some(1));
    assert_eq!(quantity(&summary, FEED_PIPE_ID), None);
    assert_eq!(quantity(&summary, FEED_INSULATION_ID), None);
}

#[test]
fn item_order_follows_installation_sequence() {
    let out = calc(30.0, 50.0, FloorType::Stone, 5.0, Some(4.2));
    let summary = budget(&out, 30.0, &bundled_catalog()).unwrap();
    let ids: Vec<&str> = summary.items.iter().map(|i| i.product_id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            PIPE_ID,
            INSULATION_BOARD_ID,
            PERIMETER_BAND_ID,
            MESH_ID,
            CLIPS_ID,
            FEED_PIPE_ID,
            FEED_INSULATION_ID,
            "COL-02",
            VALVE_PAIR_ID,
            CABINET_ID,
        ]
    );
}

#[test]
fn feed_items_round_distance_up() {
    let out = calc(30.0, 50.0, FloorType::Stone, 5.0, Some(4.2));
    let summary = budget(&out, 30.0, &bundled_catalog()).unwrap();
    assert_eq!(quantity(&summary, FEED_PIPE_ID), Some(5));
    assert_eq!(quantity(&summary, FEED_INSULATION_ID), Some(5));
}

#[test]
fn zero_feed_distance_adds_no_feed_items() {
    let out = calc(30.0, 50.0, FloorType::Stone, 5.0, Some(0.0));
    let summary = budget(&out, 30.0, &bundled_catalog()).unwrap();
    assert_eq!(quantity(&summary, FEED_PIPE_ID), None);
}

#[test]
fn manifold_is_smallest_that_fits() {
    let cat = bundled_catalog();
    // 5 circuits: the 6-port manifold is the first fit.
    let out = calc(80.0, 80.0, FloorType::Stone, 10.0, None);
    assert_eq!(out.circuit_count, 5);
    let summary = budget(&out, 80.0, &cat).unwrap();
    assert_eq!(quantity(&summary, "COL-06"), Some(1));
    assert_eq!(quantity(&summary, "COL-08"), None);
}

#[test]
fn too_many_circuits_is_an_error() {
    let out = calc(1000.0, 80.0, FloorType::Stone, 50.0, None);
    let err = budget(&out, 1000.0, &bundled_catalog()).unwrap_err();
    assert_eq!(err, BudgetError::ManifoldCapacityExceeded { circuits: out.circuit_count, max_ports: 12 });
}

#[test]
fn total_is_exact_sum_of_subtotals() {
    let out = calc(42.5, 65.0, FloorType::SolidWood, 7.5, Some(12.3));
    let summary = budget(&out, 42.5, &bundled_catalog()).unwrap();
    let sum: f64 = summary.items.iter().map(|i| i.subtotal).sum();
    assert_eq!(summary.materials_total, sum);
    assert_eq!(summary.total, summary.materials_total);
    for item in &summary.items {
        assert_eq!(item.subtotal, f64::from(item.quantity) * item.unit_price);
    }
}

#[test]
fn quantities_never_fall_below_requirement() {
    let cat = bundled_catalog();
    for area in [1.0, 3.7, 12.25, 49.9, 100.0] {
        let out = calc(area, 75.0, FloorType::Stone, 4.4, Some(2.1));
        let summary = budget(&out, area, &cat).unwrap();
        let pipe = f64::from(quantity(&summary, PIPE_ID).unwrap());
        assert!(pipe >= out.total_length * PIPE_WASTE_FACTOR);
        assert!(pipe < out.total_length * PIPE_WASTE_FACTOR + 1.0);
        let board = f64::from(quantity(&summary, INSULATION_BOARD_ID).unwrap());
        assert!(board >= area && board < area + 1.0);
        let band = f64::from(quantity(&summary, PERIMETER_BAND_ID).unwrap());
        assert!(band >= area.sqrt() * 4.0 * PERIMETER_MARGIN);
        let clips = f64::from(quantity(&summary, CLIPS_ID).unwrap());
        assert!(clips * METRES_PER_CLIP_BAG >= out.total_length);
    }
}

#[test]
fn waste_estimate_is_five_percent_of_pipe() {
    let out = calc(50.0, 80.0, FloorType::Stone, 10.0, None);
    let summary = budget(&out, 50.0, &bundled_catalog()).unwrap();
    assert!((summary.estimated_waste_m - 17.75).abs() < 1e-9);
}

#[test]
fn ceil_units_edge_cases() {
    assert_eq!(ceil_units(0.0), 0);
    assert_eq!(ceil_units(-3.0), 0);
    assert_eq!(ceil_units(f64::NAN), 0);
    assert_eq!(ceil_units(2.0), 2);
    assert_eq!(ceil_units(2.000_1), 3);
}

#[test]
fn estimated_perimeter_of_square() {
    assert_eq!(estimated_perimeter(16.0), 16.0);
    assert_eq!(estimated_perimeter(0.0), 0.0);
}
