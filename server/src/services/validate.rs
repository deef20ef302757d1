//! Request validation for the calculation endpoint.
//!
//! DESIGN
//! ======
//! Validation runs over the raw JSON value so every failing field is reported
//! at once, each with all the rules it breaks, instead of stopping at the
//! first serde error. Only a fully valid body produces a `CalculationInput`.

use heating::envelope::FieldError;
use heating::{CalculationInput, FloorType};
use serde_json::{Map, Value};

pub const FIELD_AREA: &str = "area";
pub const FIELD_THERMAL_LOAD: &str = "cargaTermicaRequerida";
pub const FIELD_FLOOR_TYPE: &str = "tipoDeSuelo";
pub const FIELD_COLLECTOR_DISTANCE: &str = "distanciaAlColector";
pub const FIELD_FEED_DISTANCE: &str = "distanciaAlimentacion";
/// Pseudo-field used when the body itself is unusable.
pub const FIELD_BODY: &str = "body";

pub const AREA_MIN_M2: f64 = 1.0;
pub const AREA_MAX_M2: f64 = 1000.0;
pub const THERMAL_LOAD_MIN: f64 = 10.0;
pub const THERMAL_LOAD_MAX: f64 = 150.0;
pub const COLLECTOR_DISTANCE_MAX_M: f64 = 50.0;

/// Numeric range rule applied to a single field.
struct NumberRules {
    positive: Option<&'static str>,
    non_negative: Option<&'static str>,
    min: Option<(f64, &'static str)>,
    max: Option<(f64, &'static str)>,
}

const AREA_RULES: NumberRules = NumberRules {
    positive: Some("Area must be a positive number"),
    non_negative: None,
    min: Some((AREA_MIN_M2, "Area must be at least 1 m²")),
    max: Some((AREA_MAX_M2, "Area cannot exceed 1000 m²")),
};

const THERMAL_LOAD_RULES: NumberRules = NumberRules {
    positive: Some("Thermal load must be a positive number"),
    non_negative: None,
    min: Some((THERMAL_LOAD_MIN, "Thermal load must be at least 10 W/m²")),
    max: Some((THERMAL_LOAD_MAX, "Thermal load cannot exceed 150 W/m²")),
};

const COLLECTOR_DISTANCE_RULES: NumberRules = NumberRules {
    positive: None,
    non_negative: Some("Collector distance cannot be negative"),
    min: None,
    max: Some((COLLECTOR_DISTANCE_MAX_M, "Collector distance cannot exceed 50 metres")),
};

/// Validate a calculation request body.
///
/// # Errors
///
/// Returns every field-level failure found in the body.
pub fn calculation_input(body: &Value) -> Result<CalculationInput, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::new(
            FIELD_BODY,
            format!("Expected object, received {}", json_type(body)),
        )]);
    };

    let mut errors = Vec::new();
    let area = required_number(obj, FIELD_AREA, &AREA_RULES, &mut errors);
    let thermal_load = required_number(obj, FIELD_THERMAL_LOAD, &THERMAL_LOAD_RULES, &mut errors);
    let floor_type = floor_type(obj, &mut errors);
    let collector_distance = required_number(obj, FIELD_COLLECTOR_DISTANCE, &COLLECTOR_DISTANCE_RULES, &mut errors);
    let feed_distance = optional_number(obj, FIELD_FEED_DISTANCE, &mut errors);

    match (area, thermal_load, floor_type, collector_distance, feed_distance) {
        (Some(area), Some(thermal_load), Some(floor_type), Some(collector_distance), Ok(feed_distance))
            if errors.is_empty() =>
        {
            Ok(CalculationInput { area, thermal_load, floor_type, collector_distance, feed_distance })
        }
        _ => Err(errors),
    }
}

fn required_number(
    obj: &Map<String, Value>,
    field: &str,
    rules: &NumberRules,
    errors: &mut Vec<FieldError>,
) -> Option<f64> {
    let value = number(obj.get(field), field, errors)?;
    let before = errors.len();

    if let Some(msg) = rules.positive {
        if value <= 0.0 {
            errors.push(FieldError::new(field, msg));
        }
    }
    if let Some(msg) = rules.non_negative {
        if value < 0.0 {
            errors.push(FieldError::new(field, msg));
        }
    }
    if let Some((min, msg)) = rules.min {
        if value < min {
            errors.push(FieldError::new(field, msg));
        }
    }
    if let Some((max, msg)) = rules.max {
        if value > max {
            errors.push(FieldError::new(field, msg));
        }
    }

    (errors.len() == before).then_some(value)
}

/// `Ok(None)` when absent, `Err(())` when present but not a number.
fn optional_number(obj: &Map<String, Value>, field: &str, errors: &mut Vec<FieldError>) -> Result<Option<f64>, ()> {
    match obj.get(field) {
        None => Ok(None),
        Some(value) => number(Some(value), field, errors).map(Some).ok_or(()),
    }
}

fn number(value: Option<&Value>, field: &str, errors: &mut Vec<FieldError>) -> Option<f64> {
    match value {
        None => {
            errors.push(FieldError::new(field, "Required"));
            None
        }
        Some(Value::Number(n)) => {
            let parsed = n.as_f64();
            if parsed.is_none() {
                errors.push(FieldError::new(field, "Expected number, received unrepresentable number"));
            }
            parsed
        }
        Some(other) => {
            errors.push(FieldError::new(field, format!("Expected number, received {}", json_type(other))));
            None
        }
    }
}

fn floor_type(obj: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<FloorType> {
    let parsed = obj
        .get(FIELD_FLOOR_TYPE)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<FloorType>().ok());
    if parsed.is_none() {
        errors.push(FieldError::new(
            FIELD_FLOOR_TYPE,
            format!("Floor type must be one of: {}", FloorType::wire_names()),
        ));
    }
    parsed
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
