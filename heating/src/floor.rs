//! Floor finish rules table and pipe-step constants.
//!
//! Each finish limits how much power the floor surface can emit. Finishes with
//! a high thermal resistance (floating wood, carpet) additionally force the
//! denser 15 cm pipe step regardless of the requested load.

#[cfg(test)]
#[path = "floor_test.rs"]
mod floor_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Longest hydraulically acceptable single circuit, in metres.
pub const MAX_CIRCUIT_LENGTH_M: f64 = 120.0;

/// Thermal load above which non-restricted floors switch to the 15 cm step.
pub const HIGH_LOAD_THRESHOLD_W_M2: f64 = 70.0;

/// Design note attached to every calculation result.
pub const DESIGN_NOTE: &str = "Professional design with 20 mm PE-X pipe without oxygen barrier. \
Feed run measured along the real corridor route.";

/// Floor finish laid over the heating screed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloorType {
    /// Ceramic, porcelain or natural stone.
    #[serde(rename = "PETREO")]
    Stone,
    /// Solid hardwood.
    #[serde(rename = "MADERA_MACIZA")]
    SolidWood,
    /// Floating engineered wood.
    #[serde(rename = "MADERA_FLOTANTE")]
    FloatingWood,
    /// Carpet.
    #[serde(rename = "MOQUETA")]
    Carpet,
}

/// Emission limits for one floor finish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorSpec {
    /// Maximum emissive power in W/m².
    pub max_power_w_m2: f64,
    /// Whether the finish forces the 15 cm pipe step.
    pub forces_step_15: bool,
}

/// Pipe spacing and the resulting pipe density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeStep {
    /// Centre-to-centre spacing in centimetres.
    pub step_cm: u32,
    /// Metres of pipe per square metre of floor.
    pub density: f64,
}

/// 15 cm spacing, 6.7 m/m².
pub const STEP_15CM: PipeStep = PipeStep { step_cm: 15, density: 6.7 };

/// 20 cm spacing, 5.0 m/m².
pub const STEP_20CM: PipeStep = PipeStep { step_cm: 20, density: 5.0 };

/// Returned by [`FloorType::from_str`] for an unknown wire name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown floor type: {0}")]
pub struct UnknownFloorType(pub String);

impl FloorType {
    /// Every finish, in wire order.
    pub const ALL: [Self; 4] = [Self::Stone, Self::SolidWood, Self::FloatingWood, Self::Carpet];

    /// Wire name of this finish.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stone => "PETREO",
            Self::SolidWood => "MADERA_MACIZA",
            Self::FloatingWood => "MADERA_FLOTANTE",
            Self::Carpet => "MOQUETA",
        }
    }

    /// Emission limits for this finish.
    #[must_use]
    pub fn spec(self) -> FloorSpec {
        match self {
            Self::Stone => FloorSpec { max_power_w_m2: 100.0, forces_step_15: false },
            Self::SolidWood => FloorSpec { max_power_w_m2: 70.0, forces_step_15: false },
            Self::FloatingWood | Self::Carpet => FloorSpec { max_power_w_m2: 60.0, forces_step_15: true },
        }
    }

    /// Comma-separated list of every wire name, for error messages.
    #[must_use]
    pub fn wire_names() -> String {
        Self::ALL.iter().map(|f| f.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for FloorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FloorType {
    type Err = UnknownFloorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownFloorType(s.to_owned()))
    }
}
