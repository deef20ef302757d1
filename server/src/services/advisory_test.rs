use super::*;
use heating::FloorType;

fn input(thermal_load: f64, floor_type: FloorType) -> CalculationInput {
    CalculationInput { area: 20.0, thermal_load, floor_type, collector_distance: 3.0, feed_distance: None }
}

fn max_power(floor: FloorType) -> f64 {
    floor.spec().max_power_w_m2
}

#[test]
fn no_rule_fires_for_short_stone_run() {
    let req = input(50.0, FloorType::Stone);
    assert!(advise(&req, 80.0, max_power(FloorType::Stone)).is_none());
}

#[test]
fn exactly_120m_is_not_an_overflow() {
    let req = input(50.0, FloorType::SolidWood);
    assert!(advise(&req, 120.0, max_power(FloorType::SolidWood)).is_none());
}

#[test]
fn overflow_warns_with_circuit_count() {
    let req = input(50.0, FloorType::Stone);
    let adv = advise(&req, 250.0, max_power(FloorType::Stone)).expect("advisory");
    assert_eq!(adv.level, AdvisoryLevel::Warning);
    assert!(adv.message.contains("3 circuits"));
    assert!(!adv.message.contains("\n\n"));
}

#[test]
fn forced_floor_within_capacity_is_info() {
    let req = input(60.0, FloorType::FloatingWood);
    let adv = advise(&req, 100.0, max_power(FloorType::FloatingWood)).expect("advisory");
    assert_eq!(adv.level, AdvisoryLevel::Info);
    assert!(adv.message.contains("inertia"));
}

#[test]
fn forced_floor_over_capacity_is_critical() {
    let req = input(65.0, FloorType::Carpet);
    let adv = advise(&req, 100.0, max_power(FloorType::Carpet)).expect("advisory");
    assert_eq!(adv.level, AdvisoryLevel::Critical);
    assert!(adv.message.contains("MOQUETA"));
    assert!(adv.message.contains("65 W/m²"));
}

#[test]
fn critical_and_warning_combine_with_critical_level() {
    let req = input(65.0, FloorType::Carpet);
    let adv = advise(&req, 140.0, max_power(FloorType::Carpet)).expect("advisory");
    assert_eq!(adv.level, AdvisoryLevel::Critical);
    let parts: Vec<&str> = adv.message.split("\n\nCRITICAL").collect();
    assert_eq!(parts.len(), 2, "overflow finding first, then the floor finding");
    assert!(parts[0].starts_with("PRESSURE LOSS"));
}

#[test]
fn warning_outranks_info() {
    let req = input(40.0, FloorType::FloatingWood);
    let adv = advise(&req, 300.0, max_power(FloorType::FloatingWood)).expect("advisory");
    assert_eq!(adv.level, AdvisoryLevel::Warning);
    assert!(adv.message.contains("PRESSURE LOSS"));
    assert!(adv.message.contains("TECHNICAL NOTE"));
}

#[test]
fn level_matches_rule_table() {
    for floor in FloorType::ALL {
        for load in [10.0, 60.0, 61.0, 100.0, 150.0] {
            for total in [50.0, 120.0, 121.0, 500.0] {
                let req = input(load, floor);
                let max = max_power(floor);
                let forced = floor.spec().forces_step_15;
                let expected = if forced && load > max {
                    Some(AdvisoryLevel::Critical)
                } else if total > 120.0 {
                    Some(AdvisoryLevel::Warning)
                } else if forced {
                    Some(AdvisoryLevel::Info)
                } else {
                    None
                };
                assert_eq!(advise(&req, total, max).map(|a| a.level), expected, "{floor} load={load} total={total}");
            }
        }
    }
}
