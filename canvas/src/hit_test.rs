use super::*;
use crate::geom::Point;

fn session() -> DesignSession {
    DesignSession::new()
}

#[test]
fn hits_boiler_at_anchor() {
    assert_eq!(hit_object(Point::new(50.0, 50.0), &session()), Some(ObjectKind::Boiler));
}

#[test]
fn hits_collector_within_radius() {
    assert_eq!(hit_object(Point::new(150.0, 279.0), &session()), Some(ObjectKind::Collector));
}

#[test]
fn radius_is_strict() {
    assert_eq!(hit_object(Point::new(150.0, 280.0), &session()), None);
    assert_eq!(hit_object(Point::new(80.0, 50.0), &session()), None);
}

#[test]
fn empty_space_misses() {
    assert_eq!(hit_object(Point::new(400.0, 400.0), &session()), None);
}

#[test]
fn topmost_object_wins_when_overlapping() {
    let mut s = session();
    s.set_position(ObjectKind::Collector, Point::new(60.0, 50.0));
    assert_eq!(hit_object(Point::new(55.0, 50.0), &s), Some(ObjectKind::Collector));
}
