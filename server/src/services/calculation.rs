//! Calculation service — pipe step, lengths and circuit count.
//!
//! DESIGN
//! ======
//! Pure and deterministic: the input has already passed validation, so this
//! layer never rejects. Circuit count and the advisory are derived from the
//! unrounded total; only the published lengths are rounded to 2 decimals.

use heating::floor::{DESIGN_NOTE, HIGH_LOAD_THRESHOLD_W_M2, MAX_CIRCUIT_LENGTH_M, STEP_15CM, STEP_20CM};
use heating::{CalculationInput, CalculationOutput, FloorType, PipeStep, round2};

use super::advisory;

/// Run the full calculation for one validated input.
#[must_use]
pub fn calculate(input: &CalculationInput) -> CalculationOutput {
    let step = select_pipe_step(input.thermal_load, input.floor_type);

    let serpentine_length = input.area * step.density;
    let feed_run_length = feed_run_length(input.collector_distance);
    let total_length = serpentine_length + feed_run_length;

    let circuit_count = circuit_count(total_length);
    let max_floor_power = input.floor_type.spec().max_power_w_m2;
    let advisory = advisory::advise(input, total_length, max_floor_power);

    CalculationOutput {
        step_cm: step.step_cm,
        density: step.density,
        serpentine_length: round2(serpentine_length),
        feed_run_length: round2(feed_run_length),
        total_length: round2(total_length),
        circuit_count,
        max_floor_power,
        advisory,
        design_note: DESIGN_NOTE.to_owned(),
        feed_distance: input.feed_distance,
    }
}

/// Forced-step finishes win over the thermal-load rule.
#[must_use]
pub fn select_pipe_step(thermal_load: f64, floor_type: FloorType) -> PipeStep {
    if floor_type.spec().forces_step_15 {
        return STEP_15CM;
    }
    if thermal_load > HIGH_LOAD_THRESHOLD_W_M2 {
        return STEP_15CM;
    }
    STEP_20CM
}

/// Supply plus return between the manifold and the room.
#[must_use]
pub fn feed_run_length(collector_distance: f64) -> f64 {
    collector_distance * 2.0
}

/// Number of circuits needed so none exceeds the maximum loop length.
#[must_use]
pub fn circuit_count(total_length: f64) -> u32 {
    if total_length <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let count = (total_length / MAX_CIRCUIT_LENGTH_M).ceil() as u32;
    count
}

#[cfg(test)]
#[path = "calculation_test.rs"]
mod tests;
