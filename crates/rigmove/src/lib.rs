//! # Rigmove
//!
//! Mouse-driven multi-object transform gizmo for a 3D viewport:
//! click-to-select with modifier-based multi-select, a movement handle
//! spawned at the group pivot, and axis/plane-constrained dragging that
//! moves the whole selection as a rigid group.
//!
//! The crate is engine-agnostic. The host supplies its camera, scene and
//! replication capabilities through the traits in [`host`]; everything
//! else is plain state and math, so the full gesture lifecycle runs in
//! unit tests without a live renderer.
//!
//! ## Modules
//! - [`math_utils`] - ray/plane intersection and pivot helpers
//! - [`constraint`] - axis/plane drag constraints and delta projection
//! - [`selection`] - multi-select membership
//! - [`select_tool`] - press-time selection transitions
//! - [`move_tool`] - the drag session (capture, per-tick solve, release)
//! - [`handle`] - gizmo widget identity and sub-parts
//! - [`controller`] - ties the tools together behind press/release/update

pub mod constraint;
pub mod controller;
pub mod handle;
pub mod host;
pub mod math_utils;
pub mod move_tool;
pub mod select_tool;
pub mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub mod prelude {
    pub use crate::constraint::DragConstraint;
    pub use crate::controller::{Authority, GizmoController};
    pub use crate::handle::{HandleId, HandlePart};
    pub use crate::host::{ObjectId, PointerHit, ReplicationSink, SceneOps, ViewportCamera};
    pub use crate::move_tool::{MoveToolState, REPLICATION_EPSILON};
    pub use crate::selection::SelectionManager;
}
