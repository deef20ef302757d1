use heating::CalculationInput;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::consts::MIN_ROOM_RECT_PX;
use crate::geom::{PixelRect, Point};
use crate::hit;
use crate::input::{Command, Drag, InputEvent, Key, Mode, RoomDraft};
use crate::render;
use crate::scene;
use crate::session::{DesignSession, FormFields, PlanImage};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RenderNeeded,
    SetCursor(String),
    /// Two calibration points are set; ask the user for the real distance.
    CalibrationPointsReady { pixel_distance: f64 },
    /// Transient message for the user.
    Notice(String),
    /// `area_m2` is the room's accumulated area, `total_area_m2` the sum over all rooms.
    RoomSaved { name: String, area_m2: f64, total_area_m2: f64 },
    RouteFinished { distance_m: f64 },
}

/// User errors raised by editor commands. Reported to the host as notices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditorError {
    #[error("Calibrate the plan scale before drawing rooms")]
    NotCalibrated,
    #[error("A room name is required")]
    MissingRoomName,
    #[error("No calibration in progress")]
    NotCalibrating,
    #[error("Mark two points on the plan to calibrate")]
    CalibrationIncomplete,
    #[error("Enter a valid real distance")]
    InvalidDistance,
    #[error("The calibration points coincide; mark two distinct points")]
    DegenerateCalibration,
    #[error("Finish {active} before starting something else")]
    ModeBusy { active: &'static str },
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub session: DesignSession,
    /// Last known pointer position, used for the calibration rubber band.
    pub pointer: Point,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one event and report what the host should do.
    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerDown(pt) => self.on_pointer_down(pt),
            InputEvent::PointerMove(pt) => self.on_pointer_move(pt),
            InputEvent::PointerUp(pt) => self.on_pointer_up(pt),
            InputEvent::DoubleClick(_) => self.finish_routing_actions(),
            InputEvent::KeyDown(key) => self.on_key_down(&key),
            InputEvent::Command(cmd) => self.on_command(cmd),
        }
    }

    // --- Modes ---

    /// Reject starting `wanted` while a different mode is active.
    fn ensure_free(&self, wanted: &Mode) -> Result<(), EditorError> {
        let mode = &self.session.mode;
        if mode.is_idle() || mode.same_kind(wanted) {
            Ok(())
        } else {
            Err(EditorError::ModeBusy { active: mode.name() })
        }
    }

    /// Enter calibration, discarding any previous reference points.
    ///
    /// # Errors
    ///
    /// `ModeBusy` while drawing a room or routing.
    pub fn start_calibration(&mut self) -> Result<(), EditorError> {
        self.ensure_free(&Mode::Calibrating)?;
        self.session.calibration.points.clear();
        self.session.mode = Mode::Calibrating;
        Ok(())
    }

    /// Set the scale from the two reference points and `real_distance_m`.
    /// Returns the new metres-per-pixel. On error the mode is unchanged.
    ///
    /// # Errors
    ///
    /// `NotCalibrating`, `CalibrationIncomplete`, `InvalidDistance` for a
    /// missing or non-positive distance, and `DegenerateCalibration` when both
    /// points coincide.
    pub fn apply_calibration(&mut self, real_distance_m: f64) -> Result<f64, EditorError> {
        if !matches!(self.session.mode, Mode::Calibrating) {
            return Err(EditorError::NotCalibrating);
        }
        let pixel_distance = self
            .session
            .calibration
            .pixel_distance()
            .ok_or(EditorError::CalibrationIncomplete)?;
        if !real_distance_m.is_finite() || real_distance_m <= 0.0 {
            return Err(EditorError::InvalidDistance);
        }
        if pixel_distance <= 0.0 {
            return Err(EditorError::DegenerateCalibration);
        }

        let calibration = &mut self.session.calibration;
        calibration.meters_per_pixel = real_distance_m / pixel_distance;
        calibration.is_calibrated = true;
        self.session.mode = Mode::default();
        Ok(calibration.meters_per_pixel)
    }

    /// Leave calibration, dropping the points. The previous scale stays.
    pub fn cancel_calibration(&mut self) {
        if matches!(self.session.mode, Mode::Calibrating) {
            self.session.calibration.points.clear();
            self.session.mode = Mode::default();
        }
    }

    /// Start drawing a rectangle for the room called `name`.
    ///
    /// # Errors
    ///
    /// `ModeBusy`, `NotCalibrated` before the scale is set, `MissingRoomName`
    /// for a blank name.
    pub fn start_room(&mut self, name: &str) -> Result<(), EditorError> {
        let name = name.trim();
        let wanted = Mode::DrawingRoom { name: name.to_owned(), draft: None };
        self.ensure_free(&wanted)?;
        if !self.session.calibration.is_calibrated {
            return Err(EditorError::NotCalibrated);
        }
        if name.is_empty() {
            return Err(EditorError::MissingRoomName);
        }
        self.session.mode = wanted;
        Ok(())
    }

    /// Start a new route, clearing the previous waypoints.
    ///
    /// # Errors
    ///
    /// `ModeBusy` while calibrating or drawing a room.
    pub fn start_routing(&mut self) -> Result<(), EditorError> {
        self.ensure_free(&Mode::Routing)?;
        self.session.clear_waypoints();
        self.session.mode = Mode::Routing;
        Ok(())
    }

    /// Stop routing. Returns the route length in metres, or `None` if not routing.
    pub fn finish_routing(&mut self) -> Option<f64> {
        if !matches!(self.session.mode, Mode::Routing) {
            return None;
        }
        self.session.mode = Mode::default();
        Some(self.session.route_distance())
    }

    /// Abandon whatever is in progress. A cancelled route loses its waypoints.
    pub fn cancel(&mut self) {
        match self.session.mode {
            Mode::Calibrating => self.cancel_calibration(),
            Mode::Routing => {
                self.session.clear_waypoints();
                self.session.mode = Mode::default();
            }
            Mode::DrawingRoom { .. } | Mode::Idle { .. } => self.session.mode = Mode::default(),
        }
    }

    // --- Queries ---

    /// Calculation request for the current form values and design.
    #[must_use]
    pub fn calculation_request(&self, form: &FormFields) -> CalculationInput {
        self.session.calculation_request(form)
    }

    /// JSON body for the calculation endpoint.
    ///
    /// # Errors
    ///
    /// Only fails if serialization itself fails.
    pub fn calculation_body(&self, form: &FormFields) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.calculation_request(form))
    }

    // --- Pointer ---

    fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.pointer = pt;
        let session = &mut self.session;

        match &mut session.mode {
            Mode::Calibrating => {
                session.calibration.push_point(pt);
                let mut actions = vec![Action::RenderNeeded];
                if let Some(pixel_distance) = session.calibration.pixel_distance() {
                    actions.push(Action::CalibrationPointsReady { pixel_distance });
                }
                actions
            }
            Mode::DrawingRoom { draft, .. } => {
                *draft = Some(RoomDraft { anchor: pt, current: pt });
                vec![Action::RenderNeeded]
            }
            Mode::Routing => {
                // A double-click delivers two pointer-downs on the same spot.
                if session.waypoints.last() != Some(&pt) {
                    session.waypoints.push(pt);
                }
                vec![Action::RenderNeeded]
            }
            Mode::Idle { .. } => {
                let Some(object) = hit::hit_object(pt, session) else {
                    return Vec::new();
                };
                let Some(anchor) = session.position(object) else {
                    return Vec::new();
                };
                session.mode = Mode::Idle { drag: Some(Drag { object, offset: pt.minus(anchor) }) };
                vec![Action::SetCursor(session.mode.cursor().to_owned()), Action::RenderNeeded]
            }
        }
    }

    fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.pointer = pt;
        let session = &mut self.session;

        match &mut session.mode {
            Mode::DrawingRoom { draft: Some(draft), .. } => {
                draft.current = pt;
                vec![Action::RenderNeeded]
            }
            Mode::Idle { drag: Some(drag) } => {
                let drag = *drag;
                session.set_position(drag.object, pt.minus(drag.offset));
                vec![Action::RenderNeeded]
            }
            Mode::Calibrating if session.calibration.points.len() == 1 => vec![Action::RenderNeeded],
            _ => Vec::new(),
        }
    }

    fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.pointer = pt;

        match &mut self.session.mode {
            Mode::DrawingRoom { name, draft } => {
                let Some(d) = draft.take() else {
                    return Vec::new();
                };
                let rect = PixelRect::from_corners(d.anchor, pt);
                if !rect.exceeds(MIN_ROOM_RECT_PX) {
                    return vec![Action::RenderNeeded];
                }
                let name = std::mem::take(name);
                self.finish_room(name, rect)
            }
            Mode::Idle { drag } if drag.is_some() => {
                *drag = None;
                vec![Action::SetCursor(self.session.mode.cursor().to_owned()), Action::RenderNeeded]
            }
            _ => Vec::new(),
        }
    }

    fn finish_room(&mut self, name: String, rect: PixelRect) -> Vec<Action> {
        let area_m2 = self.session.add_room_rect(&name, rect);
        self.session.mode = Mode::default();

        let mut actions = vec![
            Action::RoomSaved { name, area_m2, total_area_m2: self.session.total_room_area() },
            Action::SetCursor(self.session.mode.cursor().to_owned()),
            Action::RenderNeeded,
        ];
        let warnings: Vec<String> = self
            .session
            .room_estimates()
            .iter()
            .filter_map(|e| e.warning())
            .collect();
        if !warnings.is_empty() {
            actions.push(Action::Notice(warnings.join("\n")));
        }
        actions
    }

    // --- Keyboard ---

    fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_enter() {
            return self.finish_routing_actions();
        }
        if key.is_escape() && !matches!(self.session.mode, Mode::Idle { drag: None }) {
            self.cancel();
            return vec![Action::SetCursor(self.session.mode.cursor().to_owned()), Action::RenderNeeded];
        }
        Vec::new()
    }

    fn finish_routing_actions(&mut self) -> Vec<Action> {
        match self.finish_routing() {
            Some(distance_m) => vec![
                Action::RouteFinished { distance_m },
                Action::SetCursor(self.session.mode.cursor().to_owned()),
                Action::RenderNeeded,
            ],
            None => Vec::new(),
        }
    }

    // --- Commands ---

    fn on_command(&mut self, cmd: Command) -> Vec<Action> {
        let result = match cmd {
            Command::StartCalibration => self.start_calibration().map(|()| Vec::new()),
            Command::ApplyCalibration { real_distance_m } => self.apply_calibration(real_distance_m).map(|mpp| {
                vec![Action::Notice(format!("Scale calibrated: {:.0} px/m", 1.0 / mpp))]
            }),
            Command::CancelCalibration => {
                self.cancel_calibration();
                Ok(Vec::new())
            }
            Command::StartRoom { name } => self.start_room(&name).map(|()| Vec::new()),
            Command::StartRouting => self.start_routing().map(|()| Vec::new()),
            Command::FinishRouting => return self.finish_routing_actions(),
            Command::LoadPlan(plan) => {
                self.session.load_plan(plan);
                Ok(vec![Action::Notice(
                    "Plan loaded. Calibrate the scale for accurate distances.".to_owned(),
                )])
            }
            Command::RemovePlan => {
                self.session.remove_plan();
                Ok(Vec::new())
            }
            Command::ClearRooms => {
                self.session.clear_rooms();
                Ok(Vec::new())
            }
            Command::ClearWaypoints => {
                self.session.clear_waypoints();
                Ok(Vec::new())
            }
            Command::ClearAll => {
                self.session.clear_all();
                Ok(Vec::new())
            }
        };

        match result {
            Ok(mut actions) => {
                actions.push(Action::SetCursor(self.session.mode.cursor().to_owned()));
                actions.push(Action::RenderNeeded);
                actions
            }
            Err(e) => vec![Action::Notice(e.to_string())],
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    plan: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, plan: None, core: EngineCore::new() }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> Vec<Action> {
        self.core.handle_input(event)
    }

    /// Use a decoded image as the floor plan.
    pub fn load_plan(&mut self, image: HtmlImageElement) -> Vec<Action> {
        let plan = PlanImage { width: f64::from(image.natural_width()), height: f64::from(image.natural_height()) };
        self.plan = Some(image);
        self.core.handle_input(InputEvent::Command(Command::LoadPlan(plan)))
    }

    pub fn remove_plan(&mut self) -> Vec<Action> {
        self.plan = None;
        self.core.handle_input(InputEvent::Command(Command::RemovePlan))
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        let scene = scene::build(&self.core.session, self.core.pointer);
        let size = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        render::paint(&ctx, &scene, self.plan.as_ref(), size)
    }
}
