// ============================================================================
// Move Tool - constrained drag sessions over a rigid selection group
//
// A session captures everything it needs at grab time: the drag plane, the
// pivot, the cursor anchor on that plane, and each object's offset from the
// pivot. Every tick re-solves the cursor ray against the captured plane and
// places the group at drag_start_pivot + projected delta. Displacement is
// always measured from the drag start, never accumulated frame to frame.
// ============================================================================

use std::collections::HashMap;

use glam::Vec3;
use tracing::{debug, info};

use crate::constraint::DragConstraint;
use crate::handle::HandleId;
use crate::host::{ObjectId, ReplicationSink, SceneOps, ViewportCamera};
use crate::math_utils::ray_plane_point;

/// Minimum pivot displacement, in world units, between two outgoing
/// replication calls. Local positions still update every tick.
pub const REPLICATION_EPSILON: f32 = 0.1;

/// Transient drag-session state. Populated on a successful handle grab,
/// cleared on release.
#[derive(Debug, Default)]
pub struct MoveToolState {
    pub dragging: bool,
    pub constraint: Option<DragConstraint>,
    /// Unit normal of the drag plane, fixed for the whole session.
    drag_plane_normal: Vec3,
    /// Pivot at drag start; all per-tick displacement is measured from here.
    drag_start_pivot: Vec3,
    /// Cursor/plane intersection at press time.
    drag_start_anchor: Vec3,
    /// Offset from the pivot per object, snapshotted exactly once at grab.
    start_offsets: HashMap<ObjectId, Vec3>,
    /// Pivot of the last outgoing replication call.
    last_replicated_pivot: Vec3,
}

impl MoveToolState {
    /// Begin a drag session on the given constraint.
    pub fn begin_drag(
        &mut self,
        constraint: DragConstraint,
        objects: &[ObjectId],
        pivot: Vec3,
        camera: &dyn ViewportCamera,
        scene: &mut dyn SceneOps,
    ) {
        self.dragging = true;
        self.constraint = Some(constraint);
        self.drag_plane_normal = constraint.drag_plane_normal(camera.forward());
        self.drag_start_pivot = pivot;
        self.last_replicated_pivot = pivot;

        // Anchor where the press ray meets the drag plane; a degenerate ray
        // anchors at the pivot so the first tick produces zero delta.
        self.drag_start_anchor = camera
            .deproject_cursor()
            .and_then(|(origin, dir)| ray_plane_point(origin, dir, pivot, self.drag_plane_normal))
            .unwrap_or(pivot);

        self.start_offsets.clear();
        for &id in objects {
            if let Some(position) = scene.position(id) {
                self.start_offsets.insert(id, position - pivot);
            }
        }

        scene.suppress_navigation(true);
        info!(
            ?constraint,
            objects = self.start_offsets.len(),
            "drag session started"
        );
    }

    /// Per-tick drag solve. Applies the new group placement to the scene and
    /// returns the new pivot. When the cursor ray misses the drag plane this
    /// frame the previous pivot is kept and nothing moves.
    pub fn update(
        &mut self,
        current_pivot: Vec3,
        camera: &dyn ViewportCamera,
        scene: &mut dyn SceneOps,
        handle: Option<HandleId>,
        sink: Option<&mut dyn ReplicationSink>,
    ) -> Vec3 {
        let Some(constraint) = self.constraint else {
            return current_pivot;
        };
        let Some((origin, direction)) = camera.deproject_cursor() else {
            return current_pivot;
        };
        let Some(hit) =
            ray_plane_point(origin, direction, self.drag_start_pivot, self.drag_plane_normal)
        else {
            // Parallel or out-of-range ray: no solution this frame.
            return current_pivot;
        };

        let delta = constraint.project(hit - self.drag_start_anchor);
        let new_pivot = self.drag_start_pivot + delta;

        // Replication is thresholded; the local apply below is not.
        if (new_pivot - self.last_replicated_pivot).length() > REPLICATION_EPSILON {
            if let Some(sink) = sink {
                let objects: Vec<ObjectId> = self.start_offsets.keys().copied().collect();
                sink.move_group(new_pivot, &objects);
            }
            self.last_replicated_pivot = new_pivot;
        }

        for (&id, &offset) in &self.start_offsets {
            // Objects destroyed mid-drag are skipped; the rest keep moving.
            if !scene.set_position(id, new_pivot + offset) {
                debug!(?id, "skipping vanished object during drag");
            }
        }

        if let Some(handle) = handle {
            scene.move_handle(handle, new_pivot);
        }

        new_pivot
    }

    /// End the drag session. Safe to call when no session is active.
    pub fn end_drag(&mut self, scene: &mut dyn SceneOps) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.constraint = None;
        self.start_offsets.clear();
        scene.suppress_navigation(false);
        info!("drag session ended");
    }

    /// Offset snapshot captured for an object at drag start.
    pub fn start_offset(&self, id: ObjectId) -> Option<Vec3> {
        self.start_offsets.get(&id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockCamera, MockScene, RecordingSink};

    // Camera on the +Y side looking at the scene: drag plane for an X
    // constraint is the world XY plane (normal -Z after normalization).
    fn camera() -> MockCamera {
        MockCamera {
            ray: Some((Vec3::new(5.0, 0.0, 10.0), Vec3::NEG_Z)),
            forward: Vec3::NEG_Y,
        }
    }

    fn scene() -> MockScene {
        MockScene::with_objects(&[
            (1, Vec3::new(0.0, 0.0, 0.0)),
            (2, Vec3::new(10.0, 0.0, 0.0)),
        ])
    }

    fn begin(state: &mut MoveToolState, camera: &MockCamera, scene: &mut MockScene) {
        state.begin_drag(
            DragConstraint::X,
            &[ObjectId(1), ObjectId(2)],
            Vec3::new(5.0, 0.0, 0.0),
            camera,
            scene,
        );
    }

    #[test]
    fn test_x_drag_moves_group_rigidly() {
        let mut camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();
        let mut sink = RecordingSink::default();
        begin(&mut state, &camera, &mut scene);

        assert_eq!(state.start_offset(ObjectId(1)), Some(Vec3::new(-5.0, 0.0, 0.0)));
        assert_eq!(state.start_offset(ObjectId(2)), Some(Vec3::new(5.0, 0.0, 0.0)));

        // Cursor now over (8, 1, 0): free delta (3, 1, 0), projected (3, 0, 0)
        camera.ray = Some((Vec3::new(8.0, 1.0, 10.0), Vec3::NEG_Z));
        let pivot = state.update(
            Vec3::new(5.0, 0.0, 0.0),
            &camera,
            &mut scene,
            None,
            Some(&mut sink),
        );

        assert_eq!(pivot, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(scene.positions[&ObjectId(1)], Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(scene.positions[&ObjectId(2)], Vec3::new(13.0, 0.0, 0.0));

        // Rigidity: current offset from pivot equals the snapshot
        for id in [ObjectId(1), ObjectId(2)] {
            assert_eq!(scene.positions[&id] - pivot, state.start_offset(id).unwrap());
        }

        assert_eq!(sink.calls.len(), 1);
        assert_eq!(sink.calls[0].0, Vec3::new(8.0, 0.0, 0.0));
    }

    #[test]
    fn test_displacement_is_absolute_not_accumulated() {
        let mut camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();
        begin(&mut state, &camera, &mut scene);

        // Same cursor target two ticks in a row must not double the move
        camera.ray = Some((Vec3::new(8.0, 0.0, 10.0), Vec3::NEG_Z));
        let mut pivot = Vec3::new(5.0, 0.0, 0.0);
        for _ in 0..2 {
            pivot = state.update(pivot, &camera, &mut scene, None, None);
        }
        assert_eq!(pivot, Vec3::new(8.0, 0.0, 0.0));
        assert_eq!(scene.positions[&ObjectId(1)], Vec3::new(3.0, 0.0, 0.0));
    }

    #[test]
    fn test_small_move_skips_replication_but_applies_locally() {
        let mut camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();
        let mut sink = RecordingSink::default();
        begin(&mut state, &camera, &mut scene);

        camera.ray = Some((Vec3::new(8.0, 0.0, 10.0), Vec3::NEG_Z));
        let pivot = state.update(
            Vec3::new(5.0, 0.0, 0.0),
            &camera,
            &mut scene,
            None,
            Some(&mut sink),
        );
        assert_eq!(sink.calls.len(), 1);

        // 0.05 further along X: below the threshold
        camera.ray = Some((Vec3::new(8.05, 0.0, 10.0), Vec3::NEG_Z));
        let pivot = state.update(pivot, &camera, &mut scene, None, Some(&mut sink));

        assert_eq!(sink.calls.len(), 1);
        assert!((pivot.x - 8.05).abs() < 1e-5);
        assert!((scene.positions[&ObjectId(1)].x - 3.05).abs() < 1e-5);
    }

    #[test]
    fn test_parallel_ray_keeps_previous_placement() {
        let mut camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();
        begin(&mut state, &camera, &mut scene);

        // Ray parallel to the drag plane
        camera.ray = Some((Vec3::new(5.0, 0.0, 10.0), Vec3::X));
        let pivot = state.update(Vec3::new(5.0, 0.0, 0.0), &camera, &mut scene, None, None);

        assert_eq!(pivot, Vec3::new(5.0, 0.0, 0.0));
        assert_eq!(scene.positions[&ObjectId(1)], Vec3::ZERO);
    }

    #[test]
    fn test_vanished_object_is_skipped() {
        let mut camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();
        begin(&mut state, &camera, &mut scene);

        scene.positions.remove(&ObjectId(1));
        camera.ray = Some((Vec3::new(8.0, 0.0, 10.0), Vec3::NEG_Z));
        state.update(Vec3::new(5.0, 0.0, 0.0), &camera, &mut scene, None, None);

        assert!(!scene.positions.contains_key(&ObjectId(1)));
        assert_eq!(scene.positions[&ObjectId(2)], Vec3::new(13.0, 0.0, 0.0));
    }

    #[test]
    fn test_navigation_suppressed_for_session_duration() {
        let camera = camera();
        let mut scene = scene();
        let mut state = MoveToolState::default();

        begin(&mut state, &camera, &mut scene);
        assert!(scene.navigation_suppressed);

        state.end_drag(&mut scene);
        assert!(!scene.navigation_suppressed);
        assert!(!state.dragging);
        assert!(state.start_offset(ObjectId(1)).is_none());
    }
}
