//! Floor-plan layout editor for underfloor heating designs.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! design session behind the layout canvas: placing the boiler and manifold,
//! calibrating the plan scale, tracing the corridor route, and drawing rooms.
//! It derives the distances a calculation request needs and renders the scene.
//! The host layer only wires DOM events to the engine and acts on the
//! resulting [`engine::Action`]s (cursor changes, notices, dialogs, requests).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`session`] | Design session model and derived distances |
//! | [`geom`] | Points, polylines and pixel rectangles |
//! | [`input`] | Input events, toolbar commands and the interaction mode |
//! | [`hit`] | Hit-testing against draggable equipment |
//! | [`scene`] | Pure scene building into draw primitives |
//! | [`render`] | Replays a scene onto a 2D canvas context |
//! | [`consts`] | Shared numeric and colour constants |

pub mod consts;
pub mod engine;
pub mod geom;
pub mod hit;
pub mod input;
pub mod render;
pub mod scene;
pub mod session;
