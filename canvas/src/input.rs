//! Input model: editor events, toolbar commands and the interaction mode.
//!
//! `InputEvent` is everything the host forwards to the engine: pointer and
//! key events in canvas pixels, plus toolbar `Command`s. `Mode` is the single
//! active interaction; at most one of calibrating, drawing a room or routing
//! is in progress, and dragging equipment only happens while idle.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geom::Point;
use crate::session::{ObjectKind, PlanImage};

/// A keyboard key as reported by the browser (e.g. `"Enter"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_enter(&self) -> bool {
        self.0 == "Enter"
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Toolbar and form actions.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    StartCalibration,
    /// Confirm calibration with the real distance between the two points, in metres.
    ApplyCalibration { real_distance_m: f64 },
    CancelCalibration,
    StartRoom { name: String },
    StartRouting,
    FinishRouting,
    LoadPlan(PlanImage),
    RemovePlan,
    ClearRooms,
    ClearWaypoints,
    ClearAll,
}

/// Everything the host forwards to [`crate::engine::EngineCore::handle_input`].
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    DoubleClick(Point),
    KeyDown(Key),
    Command(Command),
}

/// Equipment being dragged, with the pointer offset from its anchor at pickup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub object: ObjectKind,
    pub offset: Point,
}

/// Rectangle being dragged out while drawing a room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomDraft {
    pub anchor: Point,
    pub current: Point,
}

/// The active interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Default mode; pointer-down near equipment starts a drag.
    Idle { drag: Option<Drag> },
    /// Collecting two reference points on the plan.
    Calibrating,
    /// Waiting for, or sizing, a rectangle for the room `name`.
    DrawingRoom { name: String, draft: Option<RoomDraft> },
    /// Appending waypoints to the route.
    Routing,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Idle { drag: None }
    }
}

impl Mode {
    /// Short name used in user-facing messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle { .. } => "idle",
            Self::Calibrating => "calibration",
            Self::DrawingRoom { .. } => "room drawing",
            Self::Routing => "routing",
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    /// Same variant, ignoring the data carried.
    #[must_use]
    pub fn same_kind(&self, other: &Mode) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// CSS cursor for the canvas in this mode.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        match self {
            Self::Idle { drag: Some(_) } => "grabbing",
            Self::Idle { drag: None } => "default",
            Self::Calibrating | Self::DrawingRoom { .. } | Self::Routing => "crosshair",
        }
    }
}
