//! Advisory service — technical warnings derived from a calculation.
//!
//! Two independent rules:
//! - circuit overflow: total length above the single-loop maximum (WARNING)
//! - floor capacity: only for forced-step finishes; load above the finish
//!   limit is CRITICAL, otherwise an INFO note about thermal inertia.
//!
//! Findings are joined with a blank line; the highest level present wins.

use heating::floor::MAX_CIRCUIT_LENGTH_M;
use heating::{Advisory, AdvisoryLevel, CalculationInput};

use super::calculation::circuit_count;

/// Derive the advisory for a calculation, or `None` when no rule fires.
#[must_use]
pub fn advise(input: &CalculationInput, total_length: f64, max_floor_power: f64) -> Option<Advisory> {
    let mut findings: Vec<(AdvisoryLevel, String)> = Vec::new();

    if total_length > MAX_CIRCUIT_LENGTH_M {
        findings.push((AdvisoryLevel::Warning, circuit_overflow_message(total_length)));
    }

    if input.floor_type.spec().forces_step_15 {
        if input.thermal_load > max_floor_power {
            findings.push((AdvisoryLevel::Critical, floor_overload_message(input, max_floor_power)));
        } else {
            findings.push((AdvisoryLevel::Info, floor_inertia_message(input, max_floor_power)));
        }
    }

    let level = findings.iter().map(|(level, _)| *level).max()?;
    let message = findings
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join("\n\n");

    Some(Advisory { level, message })
}

fn circuit_overflow_message(total_length: f64) -> String {
    format!(
        "PRESSURE LOSS: the total length ({:.0} m) exceeds the recommended {:.0} m per circuit. \
Split the installation into {} circuits to keep pressure loss acceptable and guarantee flow.",
        total_length,
        MAX_CIRCUIT_LENGTH_M,
        circuit_count(total_length)
    )
}

fn floor_overload_message(input: &CalculationInput, max_floor_power: f64) -> String {
    format!(
        "CRITICAL - UNSUITABLE FLOOR FINISH:\n\n\
The selected finish ({floor}) has a high thermal resistance and limits emission to {max_floor_power} W/m². \
The required thermal load ({load} W/m²) EXCEEDS this capacity.\n\n\
TECHNICAL IMPACT:\n\
• Significantly reduced useful output\n\
• Higher thermal inertia (slow response)\n\
• Possible heating shortfall\n\n\
RECOMMENDATIONS:\n\
1. Switch to a stone finish (ceramic, porcelain, natural stone): up to 100 W/m²\n\
2. Consider a radiator system for this space\n\
3. Improve insulation to reduce the required thermal load\n\n\
Do not proceed with the installation under these conditions without changing the design.",
        floor = input.floor_type,
        load = input.thermal_load,
    )
}

fn floor_inertia_message(input: &CalculationInput, max_floor_power: f64) -> String {
    format!(
        "TECHNICAL NOTE:\n\n\
The {floor} finish has a high thermal resistance that limits emission to {max_floor_power} W/m². \
The required load ({load} W/m²) is within range, but expect:\n\n\
• Longer warm-up time (high inertia)\n\
• Slower response to temperature changes\n\
• Better performance from stone finishes in high-use areas",
        floor = input.floor_type,
        load = input.thermal_load,
    )
}

#[cfg(test)]
#[path = "advisory_test.rs"]
mod tests;
