//! Host-boundary contracts.
//!
//! The gizmo never reaches for engine singletons. Camera access, scene
//! mutation and replication are explicit capabilities the host passes
//! into the controller each call, which keeps the whole gesture
//! lifecycle runnable in unit tests without a live engine.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::handle::{HandleId, HandlePart};

/// Stable identity of a selectable object, issued by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

/// Result of the host's cursor raycast at press time.
///
/// A hit on the gizmo widget populates `handle_part` and never `object`;
/// the widget itself is not a selectable object.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerHit {
    /// Selectable object under the cursor, if any.
    pub object: Option<ObjectId>,
    /// Gizmo sub-part under the cursor, if the press landed on the widget.
    pub handle_part: Option<HandlePart>,
    /// False when the raycast hit nothing solid.
    pub blocking: bool,
}

impl PointerHit {
    pub fn miss() -> Self {
        Self::default()
    }

    pub fn object(id: ObjectId) -> Self {
        Self {
            object: Some(id),
            handle_part: None,
            blocking: true,
        }
    }

    pub fn handle(part: HandlePart) -> Self {
        Self {
            object: None,
            handle_part: Some(part),
            blocking: true,
        }
    }
}

/// Camera pose and deprojection, provided by the host viewport.
pub trait ViewportCamera {
    /// Deproject the current cursor position to a world-space ray
    /// (origin, unit direction). `None` when the cursor is outside the
    /// viewport.
    fn deproject_cursor(&self) -> Option<(Vec3, Vec3)>;

    /// Camera forward vector in world space.
    fn forward(&self) -> Vec3;
}

/// Mutation surface of the host scene consumed by the tools.
pub trait SceneOps {
    fn position(&self, id: ObjectId) -> Option<Vec3>;

    /// Returns false when the object no longer exists; callers skip it and
    /// keep going.
    fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool;

    /// Idempotent selection highlight toggle.
    fn set_highlight(&mut self, id: ObjectId, enabled: bool);

    /// Spawn the gizmo widget at the given pivot.
    fn spawn_handle(&mut self, at: Vec3) -> HandleId;

    /// Destroying an already-destroyed handle is a no-op.
    fn destroy_handle(&mut self, handle: HandleId);

    fn move_handle(&mut self, handle: HandleId, to: Vec3);

    /// Suppress the host's camera navigation while a drag owns the cursor.
    fn suppress_navigation(&mut self, suppressed: bool);
}

/// Sender side of the one-way authoritative move call. Fire-and-forget:
/// the caller has already applied the move locally.
pub trait ReplicationSink {
    fn move_group(&mut self, new_pivot: Vec3, objects: &[ObjectId]);
}
