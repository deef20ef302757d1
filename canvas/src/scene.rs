//! Scene building: turns a design session into a flat list of draw primitives.
//!
//! `build` is pure and read-only. It decides *what* is on screen (layer order,
//! colours, spiral geometry, rubber bands) so that [`crate::render`] only has
//! to replay primitives onto a 2D context.
//!
//! Layer order, bottom first: plan or grid, feed pipe, rooms with spiral
//! previews, the rectangle being drawn, route, equipment, calibration guide.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use heating::floor::STEP_15CM;

use crate::consts::{
    ACTIVE_WAYPOINT_COLOR, DASH_PX, FEED_PIPE_COLOR, GRID_COLOR, GRID_STEP_PX, GUIDE_COLOR, MARKER_RADIUS_PX,
    OBJECT_RADIUS_PX, RETURN_COLOR, RETURN_OFFSET_PX, SPIRAL_INSET_PX, SUPPLY_COLOR, WAYPOINT_COLOR,
};
use crate::geom::{PixelRect, Point};
use crate::input::Mode;
use crate::session::{DesignSession, ObjectKind, Room};

/// Spirals with a smaller step than this are not drawn.
const MIN_SPIRAL_STEP_PX: f64 = 2.0;

/// Pixels per metre used for previews before calibration.
const UNCALIBRATED_PX_PER_M: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub dashed: bool,
}

impl Stroke {
    fn solid(color: &str, width: f64) -> Self {
        Self { color: color.to_owned(), width, dashed: false }
    }

    fn dashed(color: &str, width: f64) -> Self {
        Self { color: color.to_owned(), width, dashed: true }
    }
}

/// One path segment, mirroring the 2D context path API.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    ArcTo { ctrl: Point, to: Point, radius: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// The floor plan image, stretched over the canvas.
    Plan,
    Grid { step: f64, color: String },
    Path { cmds: Vec<PathCmd>, stroke: Stroke },
    Rect { rect: PixelRect, stroke: Option<Stroke>, fill: Option<String> },
    Circle { center: Point, radius: f64, fill: String },
    Text { at: Point, text: String, font: String, color: String, align: TextAlign },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub primitives: Vec<Primitive>,
}

impl Scene {
    fn push(&mut self, p: Primitive) {
        self.primitives.push(p);
    }
}

/// Build the scene for `session`, with the pointer at `pointer`.
#[must_use]
pub fn build(session: &DesignSession, pointer: Point) -> Scene {
    let mut scene = Scene::default();

    if session.plan.is_some() {
        scene.push(Primitive::Plan);
    } else {
        scene.push(Primitive::Grid { step: GRID_STEP_PX, color: GRID_COLOR.to_owned() });
    }

    feed_pipe(&mut scene, session);

    for room in &session.rooms {
        room_layer(&mut scene, session, room);
    }
    if let Mode::DrawingRoom { draft: Some(draft), .. } = &session.mode {
        scene.push(Primitive::Rect {
            rect: PixelRect::from_corners(draft.anchor, draft.current),
            stroke: Some(Stroke::dashed(GUIDE_COLOR, 1.0)),
            fill: None,
        });
    }

    route(&mut scene, session);

    for obj in &session.objects {
        equipment(&mut scene, obj.kind, obj.position);
    }

    if matches!(session.mode, Mode::Calibrating) || !session.calibration.points.is_empty() {
        calibration_guide(&mut scene, session, pointer);
    }

    scene
}

fn polyline(points: &[Point]) -> Vec<PathCmd> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| if i == 0 { PathCmd::MoveTo(*p) } else { PathCmd::LineTo(*p) })
        .collect()
}

/// Supply pipe from boiler to manifold, drawn as a right angle.
fn feed_pipe(scene: &mut Scene, session: &DesignSession) {
    let (Some(boiler), Some(collector)) =
        (session.position(ObjectKind::Boiler), session.position(ObjectKind::Collector))
    else {
        return;
    };
    let corner = Point::new(boiler.x, collector.y);
    scene.push(Primitive::Path { cmds: polyline(&[boiler, corner, collector]), stroke: Stroke::solid(FEED_PIPE_COLOR, 8.0) });
    scene.push(Primitive::Text {
        at: Point::new((boiler.x + collector.x) / 2.0, collector.y - 10.0),
        text: "Feed 1\"".to_owned(),
        font: "italic 10px Arial".to_owned(),
        color: "white".to_owned(),
        align: TextAlign::Left,
    });
}

fn room_layer(scene: &mut Scene, session: &DesignSession, room: &Room) {
    for rect in &room.rects {
        scene.push(Primitive::Rect {
            rect: *rect,
            stroke: Some(Stroke::solid(&room.color, 1.0)),
            fill: Some(format!("{}22", room.color)),
        });
        scene.push(Primitive::Text {
            at: Point::new(rect.x + 5.0, rect.y + 15.0),
            text: room.name.clone(),
            font: "bold 10px Inter".to_owned(),
            color: room.color.clone(),
            align: TextAlign::Left,
        });
        counterflow_spiral(scene, session, rect, &room.color);
    }
}

/// Pipe step in pixels for the preview spiral (15 cm).
#[must_use]
pub fn preview_step_px(session: &DesignSession) -> f64 {
    let px_per_m = if session.calibration.is_calibrated {
        1.0 / session.calibration.meters_per_pixel
    } else {
        UNCALIBRATED_PX_PER_M
    };
    f64::from(STEP_15CM.step_cm) / 100.0 * px_per_m
}

/// Supply spiral in the room colour with the return spiral nested half a step inside.
fn counterflow_spiral(scene: &mut Scene, session: &DesignSession, rect: &PixelRect, color: &str) {
    let step = preview_step_px(session);
    if !step.is_finite() || step < MIN_SPIRAL_STEP_PX || rect.w < step || rect.h < step {
        return;
    }
    let radius = step * 0.4;
    let inset = SPIRAL_INSET_PX;

    let supply = PixelRect { x: rect.x + inset, y: rect.y + inset, w: rect.w - 2.0 * inset, h: rect.h - 2.0 * inset };
    let ret = PixelRect {
        x: supply.x + step / 2.0,
        y: supply.y + step / 2.0,
        w: supply.w - step,
        h: supply.h - step,
    };
    scene.push(Primitive::Path { cmds: spiral_path(supply, step, radius), stroke: Stroke::solid(color, 2.0) });
    scene.push(Primitive::Path { cmds: spiral_path(ret, step, radius), stroke: Stroke::solid(RETURN_COLOR, 2.0) });
}

/// Inward rectangular spiral with rounded corners, one lap per `step` inset.
#[must_use]
pub fn spiral_path(rect: PixelRect, step: f64, radius: f64) -> Vec<PathCmd> {
    let PixelRect { mut x, mut y, mut w, mut h } = rect;
    let mut cmds = vec![PathCmd::MoveTo(Point::new(x, y + h / 2.0))];

    while w > step && h > step {
        cmds.push(PathCmd::ArcTo { ctrl: Point::new(x, y), to: Point::new(x + w, y), radius });
        cmds.push(PathCmd::ArcTo { ctrl: Point::new(x + w, y), to: Point::new(x + w, y + h), radius });
        cmds.push(PathCmd::ArcTo { ctrl: Point::new(x + w, y + h), to: Point::new(x, y + h), radius });
        cmds.push(PathCmd::ArcTo { ctrl: Point::new(x, y + h), to: Point::new(x, y + step), radius });
        x += step;
        y += step;
        w -= step * 2.0;
        h -= step * 2.0;
        cmds.push(PathCmd::LineTo(Point::new(x, y + h / 2.0)));
    }
    cmds
}

/// Supply and offset return lines along the route, plus waypoint markers.
fn route(scene: &mut Scene, session: &DesignSession) {
    let points = session.route_points();
    if points.is_empty() {
        return;
    }
    let returns: Vec<Point> = points.iter().map(|p| p.offset(RETURN_OFFSET_PX, RETURN_OFFSET_PX)).collect();
    scene.push(Primitive::Path { cmds: polyline(&points), stroke: Stroke::solid(SUPPLY_COLOR, 3.0) });
    scene.push(Primitive::Path { cmds: polyline(&returns), stroke: Stroke::solid(RETURN_COLOR, 3.0) });

    let routing = matches!(session.mode, Mode::Routing);
    let last = session.waypoints.len().saturating_sub(1);
    for (i, p) in session.waypoints.iter().enumerate() {
        let fill = if routing && i == last { ACTIVE_WAYPOINT_COLOR } else { WAYPOINT_COLOR };
        scene.push(Primitive::Circle { center: *p, radius: MARKER_RADIUS_PX, fill: fill.to_owned() });
    }
}

fn equipment(scene: &mut Scene, kind: ObjectKind, at: Point) {
    scene.push(Primitive::Circle { center: at, radius: OBJECT_RADIUS_PX, fill: kind.color().to_owned() });
    scene.push(Primitive::Text {
        at,
        text: kind.icon().to_owned(),
        font: "20px Arial".to_owned(),
        color: "white".to_owned(),
        align: TextAlign::Center,
    });
    scene.push(Primitive::Text {
        at: at.offset(0.0, 35.0),
        text: kind.label().to_owned(),
        font: "bold 10px \"Roboto Mono\", monospace".to_owned(),
        color: "white".to_owned(),
        align: TextAlign::Center,
    });
}

/// Reference point markers, with a rubber band to the pointer while the
/// second point is pending and a solid line once both are set.
fn calibration_guide(scene: &mut Scene, session: &DesignSession, pointer: Point) {
    let points = &session.calibration.points;
    for p in points {
        scene.push(Primitive::Circle { center: *p, radius: MARKER_RADIUS_PX, fill: GUIDE_COLOR.to_owned() });
    }
    match points.as_slice() {
        [p1] if matches!(session.mode, Mode::Calibrating) => scene.push(Primitive::Path {
            cmds: polyline(&[*p1, pointer]),
            stroke: Stroke::dashed(GUIDE_COLOR, 2.0),
        }),
        [p1, p2] => scene.push(Primitive::Path { cmds: polyline(&[*p1, *p2]), stroke: Stroke::solid(GUIDE_COLOR, 2.0) }),
        _ => {}
    }
}

/// Dash pattern for dashed strokes, in pixels.
#[must_use]
pub fn dash_pattern() -> [f64; 2] {
    [DASH_PX, DASH_PX]
}
