//! Shared numeric constants for the canvas crate.

// ── Scale ───────────────────────────────────────────────────────

/// Scale before calibration: 50 pixels per metre.
pub const DEFAULT_METERS_PER_PIXEL: f64 = 1.0 / 50.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Pick radius around a draggable object's anchor, in pixels. Strict `<`.
pub const HIT_RADIUS_PX: f64 = 30.0;

/// A room rectangle must be longer than this on both sides to be kept.
pub const MIN_ROOM_RECT_PX: f64 = 10.0;

// ── Default layout ──────────────────────────────────────────────

pub const BOILER_START: (f64, f64) = (50.0, 50.0);
pub const COLLECTOR_START: (f64, f64) = (150.0, 250.0);

// ── Rooms ───────────────────────────────────────────────────────

/// Room colours, assigned by creation order.
pub const ROOM_COLORS: [&str; 5] = ["#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899"];

// ── Drawing ─────────────────────────────────────────────────────

pub const GRID_STEP_PX: f64 = 20.0;
pub const OBJECT_RADIUS_PX: f64 = 20.0;
pub const MARKER_RADIUS_PX: f64 = 4.0;
/// Parallel offset between supply and return route lines.
pub const RETURN_OFFSET_PX: f64 = 4.0;
/// Inset of the supply spiral from the room outline.
pub const SPIRAL_INSET_PX: f64 = 5.0;
pub const DASH_PX: f64 = 5.0;

pub const SUPPLY_COLOR: &str = "#ef4444";
pub const RETURN_COLOR: &str = "#3b82f6";
pub const FEED_PIPE_COLOR: &str = "#94a3b8";
pub const GRID_COLOR: &str = "#1e293b";
pub const WAYPOINT_COLOR: &str = "#64748b";
pub const ACTIVE_WAYPOINT_COLOR: &str = "#fbbf24";
pub const GUIDE_COLOR: &str = "#3b82f6";
