//! Calculation request/result and advisory types.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::floor::FloorType;

/// Validated input to a single calculation. Immutable per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Floor area to heat, in m².
    pub area: f64,
    /// Required thermal load, in W/m².
    #[serde(rename = "cargaTermicaRequerida")]
    pub thermal_load: f64,
    /// Floor finish.
    #[serde(rename = "tipoDeSuelo")]
    pub floor_type: FloorType,
    /// Distance from the manifold to the room, in metres.
    #[serde(rename = "distanciaAlColector")]
    pub collector_distance: f64,
    /// Boiler-to-manifold distance for the feed pipe, in metres.
    #[serde(rename = "distanciaAlimentacion", default, skip_serializing_if = "Option::is_none")]
    pub feed_distance: Option<f64>,
}

/// Severity of an advisory. Ordering is significant: the highest level present wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AdvisoryLevel {
    Info,
    Warning,
    Critical,
}

/// Technical advice attached to a calculation.
///
/// `message` is opaque presentation text; several findings are separated by a
/// blank line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub level: AdvisoryLevel,
    pub message: String,
}

/// Result of a calculation. Length fields are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationOutput {
    /// Selected pipe step in cm.
    #[serde(rename = "pasoSeleccionado")]
    pub step_cm: u32,
    /// Pipe density in m/m².
    #[serde(rename = "densidadTuberia")]
    pub density: f64,
    /// In-room coil length.
    #[serde(rename = "longitudSerpentina")]
    pub serpentine_length: f64,
    /// Supply + return run between manifold and room.
    #[serde(rename = "longitudAcometida")]
    pub feed_run_length: f64,
    /// Serpentine + feed run.
    #[serde(rename = "longitudTotal")]
    pub total_length: f64,
    /// Number of 120 m circuits needed.
    #[serde(rename = "numeroCircuitos")]
    pub circuit_count: u32,
    /// Emission limit of the floor finish, W/m².
    #[serde(rename = "potenciaMaximaSuelo")]
    pub max_floor_power: f64,
    #[serde(rename = "advisoryMessage", default, skip_serializing_if = "Option::is_none")]
    pub advisory: Option<Advisory>,
    #[serde(rename = "notaDiseno")]
    pub design_note: String,
    /// Passed through from the input.
    #[serde(rename = "distanciaAlimentacion", default, skip_serializing_if = "Option::is_none")]
    pub feed_distance: Option<f64>,
}
