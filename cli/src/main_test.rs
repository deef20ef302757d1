use serde_json::json;

use super::*;

fn sample_data() -> CalculationData {
    serde_json::from_value(json!({
        "pasoSeleccionado": 20,
        "densidadTuberia": 5.0,
        "longitudSerpentina": 250.0,
        "longitudAcometida": 105.0,
        "longitudTotal": 355.0,
        "numeroCircuitos": 3,
        "potenciaMaximaSuelo": 100.0,
        "advisoryMessage": { "level": "WARNING", "message": "Check the floor finish" },
        "notaDiseno": "Standard 20 cm step",
        "presupuesto": {
            "items": [{
                "productoId": "TUB-PEX-16",
                "nombre": "PEX pipe 16 mm",
                "cantidad": 373,
                "unidad": "m",
                "precioUnitario": 1.5,
                "subtotal": 559.5
            }],
            "totalMateriales": 559.5,
            "desperdicioEstimado": 17.75,
            "totalFinal": 559.5
        }
    }))
    .unwrap()
}

#[test]
fn api_url_joins_without_double_slash() {
    assert_eq!(api_url("http://localhost:3000/", "/health"), "http://localhost:3000/health");
    assert_eq!(api_url("http://localhost:3000", CALCULATE_PATH), "http://localhost:3000/api/v1/underfloor/calculate");
}

#[test]
fn calculate_args_parse_floor_wire_name() {
    let cli = Cli::try_parse_from([
        "heating-cli",
        "calculate",
        "--area",
        "50",
        "--thermal-load",
        "80",
        "--floor",
        "MADERA_FLOTANTE",
        "--collector-distance",
        "10",
        "--feed-distance",
        "4.5",
    ])
    .unwrap();
    let Command::Calculate(args) = cli.command else {
        panic!("expected calculate");
    };
    let input = args.input();
    assert_eq!(input.floor_type, FloorType::FloatingWood);
    assert_eq!(input.feed_distance, Some(4.5));
    assert!(!args.json);
}

#[test]
fn unknown_floor_is_rejected_by_parser() {
    let result = Cli::try_parse_from([
        "heating-cli",
        "calculate",
        "--area",
        "50",
        "--thermal-load",
        "80",
        "--floor",
        "MARMOL",
        "--collector-distance",
        "10",
    ]);
    assert!(result.is_err());
}

#[test]
fn request_body_uses_wire_keys() {
    let args = CalculateArgs {
        area: 30.0,
        thermal_load: 60.0,
        floor: FloorType::Stone,
        collector_distance: 5.0,
        feed_distance: None,
        json: false,
    };
    let body = serde_json::to_value(args.input()).unwrap();
    assert_eq!(body["tipoDeSuelo"], "PETREO");
    assert_eq!(body["cargaTermicaRequerida"], 60.0);
    assert!(body.get("distanciaAlimentacion").is_none());
}

#[test]
fn summary_lists_results_and_budget() {
    let text = summary(&sample_data()).unwrap();
    assert!(text.contains("Pipe step:          20 cm"));
    assert!(text.contains("Total length:       355.00 m"));
    assert!(text.contains("Circuits:           3"));
    assert!(text.contains("[Warning] Check the floor finish"));
    assert!(text.contains("TUB-PEX-16"));
    assert!(text.contains("Total:              559.50"));
}

#[test]
fn server_error_carries_body() {
    let err = CliError::ServerError { status: 422, body: "{\"error\":\"Unprocessable Entity\"}".to_owned() };
    assert_eq!(err.to_string(), "server returned HTTP 422: {\"error\":\"Unprocessable Entity\"}");
}
