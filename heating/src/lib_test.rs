#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn round2_keeps_two_decimals() {
    assert_eq!(round2(1.234_9), 1.23);
    assert_eq!(round2(1.235_1), 1.24);
    assert_eq!(round2(335.0), 335.0);
}

#[test]
fn round2_rounds_halves_away_from_zero() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(-0.125), -0.13);
}

#[test]
fn envelope_validation_failure_shape() {
    let failure = envelope::Failure::validation(vec![envelope::FieldError::new("area", "too small")]);
    let json = serde_json::to_value(&failure).expect("serialize");
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "Validation Error");
    assert_eq!(json["details"][0]["field"], "area");
    assert!(json.get("message").is_none());
}

#[test]
fn envelope_message_failure_omits_details() {
    let failure = envelope::Failure::with_message("Internal Server Error", "boom");
    let json = serde_json::to_value(&failure).expect("serialize");
    assert_eq!(json["message"], "boom");
    assert!(json.get("details").is_none());
}

#[test]
fn calculation_data_flattens_output_next_to_budget() {
    let data = envelope::CalculationData {
        calculation: CalculationOutput {
            step_cm: 20,
            density: 5.0,
            serpentine_length: 50.0,
            feed_run_length: 4.0,
            total_length: 54.0,
            circuit_count: 1,
            max_floor_power: 100.0,
            advisory: None,
            design_note: floor::DESIGN_NOTE.to_owned(),
            feed_distance: None,
        },
        budget: BudgetSummary::default(),
    };
    let json = serde_json::to_value(envelope::Success::new(data)).expect("serialize");
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["pasoSeleccionado"], 20);
    assert_eq!(json["data"]["numeroCircuitos"], 1);
    assert!(json["data"]["presupuesto"]["items"].is_array());
    assert!(json["data"].get("advisoryMessage").is_none());
}
