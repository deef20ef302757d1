//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the heating rules and catalog concerns so route
//! handlers can stay focused on protocol translation and error mapping.
//! Everything here is synchronous and pure apart from catalog loading.

pub mod advisory;
pub mod budget;
pub mod calculation;
pub mod catalog;
pub mod validate;
