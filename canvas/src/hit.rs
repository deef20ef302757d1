#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HIT_RADIUS_PX;
use crate::geom::Point;
use crate::session::{DesignSession, ObjectKind};

/// The draggable object under `pt`, if any. Later objects are on top and win.
#[must_use]
pub fn hit_object(pt: Point, session: &DesignSession) -> Option<ObjectKind> {
    session
        .objects
        .iter()
        .rev()
        .find(|obj| obj.position.distance_to(pt) < HIT_RADIUS_PX)
        .map(|obj| obj.kind)
}
