use super::*;

#[test]
fn advisory_levels_are_ordered() {
    assert!(AdvisoryLevel::Info < AdvisoryLevel::Warning);
    assert!(AdvisoryLevel::Warning < AdvisoryLevel::Critical);
    assert_eq!(
        [AdvisoryLevel::Warning, AdvisoryLevel::Critical, AdvisoryLevel::Info].into_iter().max(),
        Some(AdvisoryLevel::Critical)
    );
}

#[test]
fn advisory_level_wire_names() {
    assert_eq!(serde_json::to_string(&AdvisoryLevel::Critical).unwrap(), "\"CRITICAL\"");
    assert_eq!(serde_json::to_string(&AdvisoryLevel::Info).unwrap(), "\"INFO\"");
}

#[test]
fn input_reads_wire_keys() {
    let input: CalculationInput = serde_json::from_value(serde_json::json!({
        "area": 50,
        "cargaTermicaRequerida": 80,
        "tipoDeSuelo": "PETREO",
        "distanciaAlColector": 10
    }))
    .unwrap();
    assert_eq!(input.floor_type, FloorType::Stone);
    assert!((input.thermal_load - 80.0).abs() < f64::EPSILON);
    assert!(input.feed_distance.is_none());
}

#[test]
fn input_omits_absent_feed_distance() {
    let input = CalculationInput {
        area: 20.0,
        thermal_load: 65.0,
        floor_type: FloorType::Carpet,
        collector_distance: 3.0,
        feed_distance: None,
    };
    let json = serde_json::to_value(&input).unwrap();
    assert!(json.get("distanciaAlimentacion").is_none());
    assert_eq!(json["tipoDeSuelo"], "MOQUETA");
}
