//! Shared underfloor-heating model used by `server`, `canvas` and `cli`.
//!
//! This crate owns the wire representation of a calculation request and its
//! result, the floor-finish rules table, and the catalog/budget records. Wire
//! keys follow the public HTTP contract (`cargaTermicaRequerida`,
//! `longitudTotal`, ...) while the Rust names stay descriptive.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`floor`] | Floor finish types, emissive limits, pipe steps and fixed constants |
//! | [`model`] | Calculation input/output and advisory types |
//! | [`catalog`] | Product/manifold catalog records and budget line items |
//! | [`envelope`] | JSON response envelopes shared by the server and its clients |

pub mod catalog;
pub mod envelope;
pub mod floor;
pub mod model;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

pub use catalog::{BudgetItem, BudgetSummary, Catalog, Manifold, Product};
pub use floor::{FloorSpec, FloorType, PipeStep};
pub use model::{Advisory, AdvisoryLevel, CalculationInput, CalculationOutput};

/// Round to two decimal places, halves away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
