//! Design session model: plan, calibration, placed equipment, route and rooms.
//!
//! A `DesignSession` is the single in-memory document the editor works on. It
//! lives for the whole page and is never persisted. Input handling in
//! [`crate::engine`] mutates it; [`crate::scene`] only reads it.
//!
//! Everything is stored in canvas pixels. Real-world values are derived on
//! demand through `calibration.meters_per_pixel`, so recalibrating rescales
//! every distance without touching stored geometry. Room areas are the one
//! exception: they are accumulated in m² at the scale in force when each
//! rectangle was drawn.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use heating::floor::{MAX_CIRCUIT_LENGTH_M, STEP_15CM};
use heating::{CalculationInput, FloorType};
use serde::{Deserialize, Serialize};

use crate::consts::{BOILER_START, COLLECTOR_START, DEFAULT_METERS_PER_PIXEL, ROOM_COLORS};
use crate::geom::{PixelRect, Point, distance, polyline_length};
use crate::input::Mode;

/// The two pieces of equipment placed on the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Boiler,
    /// Manifold cabinet; the heating circuits start here.
    Collector,
}

impl ObjectKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Boiler => "BOILER",
            Self::Collector => "MANIFOLD",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Boiler => "\u{1f525}",
            Self::Collector => "\u{1f500}",
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Boiler => "#ef4444",
            Self::Collector => "#3b82f6",
        }
    }
}

/// A draggable piece of equipment, anchored at its centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedObject {
    pub kind: ObjectKind,
    pub position: Point,
}

/// Natural size of the loaded floor plan. The pixels themselves stay with the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanImage {
    pub width: f64,
    pub height: f64,
}

/// Pixel-to-metre scale and the reference points used to set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// At most two reference points, oldest first.
    pub points: Vec<Point>,
    pub meters_per_pixel: f64,
    pub is_calibrated: bool,
}

impl Default for Calibration {
    fn default() -> Self {
        Self { points: Vec::new(), meters_per_pixel: DEFAULT_METERS_PER_PIXEL, is_calibrated: false }
    }
}

impl Calibration {
    /// Add a reference point, evicting the oldest once there are more than two.
    pub fn push_point(&mut self, p: Point) {
        self.points.push(p);
        if self.points.len() > 2 {
            self.points.remove(0);
        }
    }

    /// Pixel distance between the two reference points, when both are set.
    #[must_use]
    pub fn pixel_distance(&self) -> Option<f64> {
        match self.points.as_slice() {
            [a, b] => Some(distance(*a, *b)),
            _ => None,
        }
    }
}

/// A named room made of one or more rectangles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub rects: Vec<PixelRect>,
    pub area_m2: f64,
}

/// Per-room loop estimate shown while drawing, before any server calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomEstimate {
    pub name: String,
    pub area_m2: f64,
    /// Pipe inside the room at the 15 cm step.
    pub serpentine_m: f64,
    /// Route from the manifold to the centre of the room's first rectangle.
    pub connection_m: f64,
    /// Serpentine plus supply and return connections.
    pub loop_length_m: f64,
    /// Fractional circuit count, only when the loop exceeds one circuit.
    pub circuits: Option<f64>,
}

impl RoomEstimate {
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        self.circuits
            .map(|c| format!("Room \"{}\" needs MULTIPLE circuits ({c:.1} circuits).", self.name))
    }
}

/// Form fields entered by the user next to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormFields {
    /// Manual area, replaced by the traced room total once rooms exist.
    pub area: f64,
    pub thermal_load: f64,
    pub floor_type: FloorType,
    /// Manual distance, ignored once a route has been traced.
    pub collector_distance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignSession {
    pub plan: Option<PlanImage>,
    pub calibration: Calibration,
    pub objects: Vec<PlacedObject>,
    /// Route from the collector outward; the collector itself is implicit.
    pub waypoints: Vec<Point>,
    pub rooms: Vec<Room>,
    #[serde(skip)]
    pub mode: Mode,
    next_room_id: u32,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self {
            plan: None,
            calibration: Calibration::default(),
            objects: default_objects(),
            waypoints: Vec::new(),
            rooms: Vec::new(),
            mode: Mode::default(),
            next_room_id: 1,
        }
    }
}

fn default_objects() -> Vec<PlacedObject> {
    vec![
        PlacedObject { kind: ObjectKind::Boiler, position: Point::new(BOILER_START.0, BOILER_START.1) },
        PlacedObject { kind: ObjectKind::Collector, position: Point::new(COLLECTOR_START.0, COLLECTOR_START.1) },
    ]
}

impl DesignSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Equipment ---

    #[must_use]
    pub fn position(&self, kind: ObjectKind) -> Option<Point> {
        self.objects.iter().find(|o| o.kind == kind).map(|o| o.position)
    }

    pub fn set_position(&mut self, kind: ObjectKind, position: Point) {
        if let Some(obj) = self.objects.iter_mut().find(|o| o.kind == kind) {
            obj.position = position;
        }
    }

    // --- Plan ---

    pub fn load_plan(&mut self, plan: PlanImage) {
        self.plan = Some(plan);
    }

    /// Drop the plan. The scale no longer refers to anything, so it is marked
    /// uncalibrated and any calibration in progress is abandoned.
    pub fn remove_plan(&mut self) {
        self.plan = None;
        self.calibration.is_calibrated = false;
        if matches!(self.mode, Mode::Calibrating) {
            self.calibration.points.clear();
            self.mode = Mode::default();
        }
    }

    // --- Clearing ---

    pub fn clear_rooms(&mut self) {
        self.rooms.clear();
    }

    pub fn clear_waypoints(&mut self) {
        self.waypoints.clear();
    }

    /// Remove route and rooms and put the equipment back where it started.
    pub fn clear_all(&mut self) {
        self.clear_waypoints();
        self.clear_rooms();
        self.objects = default_objects();
    }

    // --- Rooms ---

    /// Add a drawn rectangle to the room called `name`, creating the room if
    /// needed. Returns the room's accumulated area in m².
    pub fn add_room_rect(&mut self, name: &str, rect: PixelRect) -> f64 {
        let area = rect.to_real(self.calibration.meters_per_pixel).area_m2();

        if let Some(room) = self.rooms.iter_mut().find(|r| r.name == name) {
            room.rects.push(rect);
            room.area_m2 += area;
            return room.area_m2;
        }

        let color = ROOM_COLORS[self.rooms.len() % ROOM_COLORS.len()];
        self.rooms.push(Room {
            id: self.next_room_id,
            name: name.to_owned(),
            color: color.to_owned(),
            rects: vec![rect],
            area_m2: area,
        });
        self.next_room_id += 1;
        area
    }

    #[must_use]
    pub fn total_room_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.area_m2).sum()
    }

    // --- Derived distances ---

    /// Straight-line boiler to collector distance in metres.
    #[must_use]
    pub fn feed_distance(&self) -> f64 {
        match (self.position(ObjectKind::Boiler), self.position(ObjectKind::Collector)) {
            (Some(boiler), Some(collector)) => distance(boiler, collector) * self.calibration.meters_per_pixel,
            _ => 0.0,
        }
    }

    /// Collector followed by the waypoints; empty when there is no route.
    #[must_use]
    pub fn route_points(&self) -> Vec<Point> {
        match self.position(ObjectKind::Collector) {
            Some(collector) if !self.waypoints.is_empty() => {
                std::iter::once(collector).chain(self.waypoints.iter().copied()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Route length in metres, 0 without waypoints.
    #[must_use]
    pub fn route_distance(&self) -> f64 {
        polyline_length(&self.route_points()) * self.calibration.meters_per_pixel
    }

    /// Distance to the collector for a calculation: the traced route when one
    /// exists, otherwise the manually entered value.
    #[must_use]
    pub fn collector_distance(&self, manual: f64) -> f64 {
        if self.waypoints.is_empty() { manual } else { self.route_distance() }
    }

    fn connection_distance(&self, room: &Room) -> f64 {
        let (Some(last), Some(first_rect)) = (self.waypoints.last(), room.rects.first()) else {
            return 0.0;
        };
        self.route_distance() + distance(*last, first_rect.center()) * self.calibration.meters_per_pixel
    }

    #[must_use]
    pub fn room_estimates(&self) -> Vec<RoomEstimate> {
        self.rooms
            .iter()
            .map(|room| {
                let serpentine_m = room.area_m2 * STEP_15CM.density;
                let connection_m = self.connection_distance(room);
                let loop_length_m = serpentine_m + connection_m * 2.0;
                RoomEstimate {
                    name: room.name.clone(),
                    area_m2: room.area_m2,
                    serpentine_m,
                    connection_m,
                    loop_length_m,
                    circuits: (loop_length_m > MAX_CIRCUIT_LENGTH_M).then_some(loop_length_m / MAX_CIRCUIT_LENGTH_M),
                }
            })
            .collect()
    }

    /// Area to heat for a calculation: the traced rooms when any exist,
    /// otherwise the manually entered value.
    #[must_use]
    pub fn heated_area(&self, manual: f64) -> f64 {
        if self.rooms.is_empty() { manual } else { self.total_room_area() }
    }

    /// Calculation request from the form plus the area and distances measured on the plan.
    #[must_use]
    pub fn calculation_request(&self, form: &FormFields) -> CalculationInput {
        CalculationInput {
            area: self.heated_area(form.area),
            thermal_load: form.thermal_load,
            floor_type: form.floor_type,
            collector_distance: self.collector_distance(form.collector_distance),
            feed_distance: Some(self.feed_distance()),
        }
    }
}
