// ============================================================================
// Gizmo Controller - ties selection, the widget and the drag session together
// behind the host's press/release/update callbacks
// ============================================================================

use glam::Vec3;
use tracing::debug;

use crate::handle::HandleId;
use crate::host::{PointerHit, ReplicationSink, SceneOps, ViewportCamera};
use crate::move_tool::MoveToolState;
use crate::select_tool;
use crate::selection::SelectionManager;

/// Whether this participant's object positions are canonical. An
/// authoritative controller applies drags directly and never emits
/// replication calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Authority {
    Authoritative,
    Remote,
}

pub struct GizmoController {
    authority: Authority,
    selection: SelectionManager,
    move_tool: MoveToolState,
    group_pivot: Vec3,
    /// The one live gizmo widget, if any. Sole owner: every selection
    /// transition destroys before (maybe) respawning.
    handle: Option<HandleId>,
}

impl GizmoController {
    pub fn new(authority: Authority) -> Self {
        Self {
            authority,
            selection: SelectionManager::new(),
            move_tool: MoveToolState::default(),
            group_pivot: Vec3::ZERO,
            handle: None,
        }
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn group_pivot(&self) -> Vec3 {
        self.group_pivot
    }

    pub fn is_dragging(&self) -> bool {
        self.move_tool.dragging
    }

    pub fn handle(&self) -> Option<HandleId> {
        self.handle
    }

    /// Pointer-press entry point. A press on a widget sub-part starts a drag
    /// session; otherwise the press is routed to selection. Selection never
    /// changes while a drag session is active.
    pub fn on_press(
        &mut self,
        hit: &PointerHit,
        modifier: bool,
        camera: &dyn ViewportCamera,
        scene: &mut dyn SceneOps,
    ) {
        if self.move_tool.dragging {
            return;
        }

        if let Some(part) = hit.handle_part {
            if !self.selection.is_empty() {
                self.move_tool.begin_drag(
                    part.constraint(),
                    self.selection.get_selected(),
                    self.group_pivot,
                    camera,
                    scene,
                );
            }
            return;
        }

        if select_tool::handle_press(&mut self.selection, scene, hit, modifier) {
            self.refresh_handle(scene);
        }
    }

    /// Pointer-release entry point. Ends any drag session; selection is
    /// untouched.
    pub fn on_release(&mut self, scene: &mut dyn SceneOps) {
        self.move_tool.end_drag(scene);
    }

    /// Per-frame update driven by the host loop. Only does work while a drag
    /// session is active.
    pub fn update(
        &mut self,
        camera: &dyn ViewportCamera,
        scene: &mut dyn SceneOps,
        sink: Option<&mut dyn ReplicationSink>,
    ) {
        if !self.move_tool.dragging || self.selection.is_empty() {
            return;
        }
        let sink = match self.authority {
            Authority::Authoritative => None,
            Authority::Remote => sink,
        };
        self.group_pivot = self
            .move_tool
            .update(self.group_pivot, camera, scene, self.handle, sink);
    }

    /// Destroy-then-respawn the widget to match the current selection, and
    /// recompute the group pivot from current positions.
    fn refresh_handle(&mut self, scene: &mut dyn SceneOps) {
        if let Some(handle) = self.handle.take() {
            scene.destroy_handle(handle);
        }
        if self.selection.is_empty() {
            debug!("selection empty, widget removed");
            return;
        }
        self.group_pivot = select_tool::group_pivot(&self.selection, scene);
        self.handle = Some(scene.spawn_handle(self.group_pivot));
    }
}
