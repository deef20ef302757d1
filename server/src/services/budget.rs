//! Budget service — itemised materials list for a calculation.
//!
//! DESIGN
//! ======
//! Quantities are always rounded up to whole units. Products are looked up by
//! the fixed catalog IDs; the catalog is validated at load so every ID is
//! present. The manifold is the smallest one whose port count covers the
//! circuit count. When none does, the budget fails instead of silently
//! dropping the manifold and its accessories.

use heating::catalog::{
    CABINET_ID, CLIPS_ID, FEED_INSULATION_ID, FEED_PIPE_ID, INSULATION_BOARD_ID, MESH_ID, PERIMETER_BAND_ID, PIPE_ID,
    VALVE_PAIR_ID,
};
use heating::{BudgetItem, BudgetSummary, CalculationOutput, Catalog};

/// Waste margin applied to the heating pipe.
pub const PIPE_WASTE_FACTOR: f64 = 1.05;

/// Share of the pipe length reported as estimated waste.
pub const PIPE_WASTE_SHARE: f64 = 0.05;

/// Margin applied to the estimated perimeter.
pub const PERIMETER_MARGIN: f64 = 1.2;

/// Metres of pipe fixed by one bag of clips.
pub const METRES_PER_CLIP_BAG: f64 = 100.0;

/// Manifolds are priced per unit regardless of the catalog unit.
const MANIFOLD_UNIT: &str = "un";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("{circuits} circuits exceed the largest manifold in the catalog ({max_ports} ports)")]
    ManifoldCapacityExceeded { circuits: u32, max_ports: u32 },
}

/// Build the materials budget for a calculation over `area` m².
///
/// # Errors
///
/// Returns `ManifoldCapacityExceeded` when no catalog manifold has enough ports.
pub fn budget(calc: &CalculationOutput, area: f64, catalog: &Catalog) -> Result<BudgetSummary, BudgetError> {
    let mut items = Vec::new();
    let mut push = |id: &str, quantity: u32| {
        if let Some(product) = catalog.product(id) {
            items.push(BudgetItem::from_product(product, quantity));
        }
    };

    push(PIPE_ID, ceil_units(calc.total_length * PIPE_WASTE_FACTOR));
    push(INSULATION_BOARD_ID, ceil_units(area));
    push(PERIMETER_BAND_ID, ceil_units(estimated_perimeter(area) * PERIMETER_MARGIN));
    push(MESH_ID, ceil_units(area));
    push(CLIPS_ID, ceil_units(calc.total_length / METRES_PER_CLIP_BAG));

    let feed_distance = calc.feed_distance.unwrap_or(0.0);
    if feed_distance > 0.0 {
        push(FEED_PIPE_ID, ceil_units(feed_distance));
        push(FEED_INSULATION_ID, ceil_units(feed_distance));
    }

    let manifold = catalog
        .manifold_for(calc.circuit_count)
        .ok_or(BudgetError::ManifoldCapacityExceeded { circuits: calc.circuit_count, max_ports: catalog.max_ports() })?;
    items.push(BudgetItem::new(&manifold.id, &manifold.name, 1, MANIFOLD_UNIT, manifold.unit_price));
    if let Some(valves) = catalog.product(VALVE_PAIR_ID) {
        items.push(BudgetItem::from_product(valves, 1));
    }
    if let Some(cabinet) = catalog.product(CABINET_ID) {
        items.push(BudgetItem::from_product(cabinet, 1));
    }

    let materials_total: f64 = items.iter().map(|i| i.subtotal).sum();
    Ok(BudgetSummary {
        items,
        materials_total,
        estimated_waste_m: calc.total_length * PIPE_WASTE_SHARE,
        total: materials_total,
    })
}

/// Perimeter of a square with the given area.
#[must_use]
pub fn estimated_perimeter(area: f64) -> f64 {
    area.max(0.0).sqrt() * 4.0
}

/// Round a requirement up to whole units.
#[must_use]
pub fn ceil_units(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let units = value.ceil().min(f64::from(u32::MAX)) as u32;
    units
}

#[cfg(test)]
#[path = "budget_test.rs"]
mod tests;
