//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary so that the
//! service and bot layers never handle raw database rows or stringly-typed ids.

pub mod category;
pub mod participation;
pub mod raid_event;
pub mod sheet;
