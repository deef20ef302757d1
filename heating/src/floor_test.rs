#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn floor_table_limits() {
    assert_eq!(FloorType::Stone.spec().max_power_w_m2, 100.0);
    assert_eq!(FloorType::SolidWood.spec().max_power_w_m2, 70.0);
    assert_eq!(FloorType::FloatingWood.spec().max_power_w_m2, 60.0);
    assert_eq!(FloorType::Carpet.spec().max_power_w_m2, 60.0);
}

#[test]
fn only_floating_wood_and_carpet_force_step_15() {
    let forced: Vec<_> = FloorType::ALL.into_iter().filter(|f| f.spec().forces_step_15).collect();
    assert_eq!(forced, vec![FloorType::FloatingWood, FloorType::Carpet]);
}

#[test]
fn wire_names_parse_back() {
    for floor in FloorType::ALL {
        assert_eq!(floor.as_str().parse::<FloorType>(), Ok(floor));
    }
}

#[test]
fn unknown_wire_name_is_rejected() {
    let err = "MARBLE".parse::<FloorType>().unwrap_err();
    assert_eq!(err, UnknownFloorType("MARBLE".into()));
}

#[test]
fn serde_uses_wire_names() {
    let json = serde_json::to_string(&FloorType::Carpet).unwrap();
    assert_eq!(json, "\"MOQUETA\"");
    let parsed: FloorType = serde_json::from_str("\"MADERA_MACIZA\"").unwrap();
    assert_eq!(parsed, FloorType::SolidWood);
}

#[test]
fn wire_names_lists_all_in_order() {
    assert_eq!(FloorType::wire_names(), "PETREO, MADERA_MACIZA, MADERA_FLOTANTE, MOQUETA");
}

#[test]
fn pipe_step_constants() {
    assert_eq!(STEP_15CM, PipeStep { step_cm: 15, density: 6.7 });
    assert_eq!(STEP_20CM, PipeStep { step_cm: 20, density: 5.0 });
}
