//! Product catalog records and budget line items.
//!
//! The catalog document keeps the key names of the supplier price list
//! (`nombre`, `precioUnitario`, `vias`, ...). The budget engine references
//! products by the fixed IDs below.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// 20 mm PE-X heating pipe, per metre.
pub const PIPE_ID: &str = "TUB-PEX-20";
/// EPS insulation board, per m².
pub const INSULATION_BOARD_ID: &str = "PLA-AIS-EPS";
/// Perimeter expansion band, per metre.
pub const PERIMETER_BAND_ID: &str = "BAN-PER-PE";
/// Welded reinforcement mesh, per m².
pub const MESH_ID: &str = "MAL-ELE-42";
/// Bag of pipe clips (one per 100 m of pipe).
pub const CLIPS_ID: &str = "PRE-SUJ-BOL";
/// 1" feed pipe, per metre.
pub const FEED_PIPE_ID: &str = "TUB-ALIM-1P";
/// Insulation sleeve for the 1" feed pipe, per metre.
pub const FEED_INSULATION_ID: &str = "AIS-ALIM-1P";
/// Ball-valve pair fitted to the manifold.
pub const VALVE_PAIR_ID: &str = "VAL-ESF-PAR";
/// Metal manifold cabinet.
pub const CABINET_ID: &str = "GAB-MET-COL";

/// Every product ID the budget engine looks up.
pub const REQUIRED_PRODUCT_IDS: [&str; 9] = [
    PIPE_ID,
    INSULATION_BOARD_ID,
    PERIMETER_BAND_ID,
    MESH_ID,
    CLIPS_ID,
    FEED_PIPE_ID,
    FEED_INSULATION_ID,
    VALVE_PAIR_ID,
    CABINET_ID,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is missing product {0}")]
    MissingProduct(String),
    #[error("catalog has no manifolds")]
    NoManifolds,
    #[error("catalog price for {id} is not a finite non-negative number")]
    InvalidPrice { id: String },
}

/// A priced catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "categoria")]
    pub category: String,
}

/// A distribution manifold with a fixed number of circuit ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifold {
    #[serde(rename = "vias")]
    pub ports: u32,
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
}

/// The full catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "productos")]
    pub products: Vec<Product>,
    #[serde(rename = "colectores")]
    pub manifolds: Vec<Manifold>,
}

impl Catalog {
    /// Sort manifolds ascending by port count so selection can take the first fit.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.manifolds.sort_by_key(|m| m.ports);
        self
    }

    /// Check that every product the budget engine references is present and priced.
    ///
    /// # Errors
    ///
    /// Returns the first missing product, a bad price, or `NoManifolds`.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for id in REQUIRED_PRODUCT_IDS {
            if self.product(id).is_none() {
                return Err(CatalogError::MissingProduct(id.to_owned()));
            }
        }
        let prices = self
            .products
            .iter()
            .map(|p| (&p.id, p.unit_price))
            .chain(self.manifolds.iter().map(|m| (&m.id, m.unit_price)));
        for (id, price) in prices {
            if !price.is_finite() || price < 0.0 {
                return Err(CatalogError::InvalidPrice { id: id.clone() });
            }
        }
        if self.manifolds.is_empty() {
            return Err(CatalogError::NoManifolds);
        }
        Ok(())
    }

    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Cheapest manifold (fewest ports) with at least `circuits` ports.
    #[must_use]
    pub fn manifold_for(&self, circuits: u32) -> Option<&Manifold> {
        self.manifolds
            .iter()
            .filter(|m| m.ports >= circuits)
            .min_by_key(|m| m.ports)
    }

    /// Largest port count on offer, 0 for an empty catalog.
    #[must_use]
    pub fn max_ports(&self) -> u32 {
        self.manifolds.iter().map(|m| m.ports).max().unwrap_or(0)
    }
}

/// One line of a materials budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetItem {
    #[serde(rename = "productoId")]
    pub product_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    /// Whole units, always rounded up.
    #[serde(rename = "cantidad")]
    pub quantity: u32,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "precioUnitario")]
    pub unit_price: f64,
    pub subtotal: f64,
}

impl BudgetItem {
    #[must_use]
    pub fn new(product_id: &str, name: &str, quantity: u32, unit: &str, unit_price: f64) -> Self {
        Self {
            product_id: product_id.to_owned(),
            name: name.to_owned(),
            quantity,
            unit: unit.to_owned(),
            unit_price,
            subtotal: f64::from(quantity) * unit_price,
        }
    }

    #[must_use]
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        Self::new(&product.id, &product.name, quantity, &product.unit, product.unit_price)
    }
}

/// Itemised materials list with totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub items: Vec<BudgetItem>,
    /// Sum of item subtotals.
    #[serde(rename = "totalMateriales")]
    pub materials_total: f64,
    /// Metres of pipe covered by the waste margin (informational).
    #[serde(rename = "desperdicioEstimado")]
    pub estimated_waste_m: f64,
    /// Amount payable. Equal to `materials_total`: no markup is applied.
    #[serde(rename = "totalFinal")]
    pub total: f64,
}
