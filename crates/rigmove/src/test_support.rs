//! In-memory host implementations shared by the unit tests.

use std::collections::HashMap;

use glam::Vec3;

use crate::handle::HandleId;
use crate::host::{ObjectId, ReplicationSink, SceneOps, ViewportCamera};

#[derive(Default)]
pub(crate) struct MockScene {
    pub positions: HashMap<ObjectId, Vec3>,
    pub highlighted: HashMap<ObjectId, bool>,
    pub live_handles: Vec<HandleId>,
    pub handle_positions: HashMap<HandleId, Vec3>,
    pub spawned: u64,
    pub destroyed: u64,
    pub navigation_suppressed: bool,
    next_handle: u64,
}

impl MockScene {
    pub fn with_objects(objects: &[(u64, Vec3)]) -> Self {
        let mut scene = Self::default();
        for &(id, position) in objects {
            scene.positions.insert(ObjectId(id), position);
        }
        scene
    }
}

impl SceneOps for MockScene {
    fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.positions.get(&id).copied()
    }

    fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        match self.positions.get_mut(&id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    fn set_highlight(&mut self, id: ObjectId, enabled: bool) {
        self.highlighted.insert(id, enabled);
    }

    fn spawn_handle(&mut self, at: Vec3) -> HandleId {
        self.next_handle += 1;
        self.spawned += 1;
        let id = HandleId(self.next_handle);
        self.live_handles.push(id);
        self.handle_positions.insert(id, at);
        id
    }

    fn destroy_handle(&mut self, handle: HandleId) {
        self.destroyed += 1;
        self.live_handles.retain(|h| *h != handle);
    }

    fn move_handle(&mut self, handle: HandleId, to: Vec3) {
        if self.live_handles.contains(&handle) {
            self.handle_positions.insert(handle, to);
        }
    }

    fn suppress_navigation(&mut self, suppressed: bool) {
        self.navigation_suppressed = suppressed;
    }
}

/// Camera firing a fixed, per-test settable cursor ray.
pub(crate) struct MockCamera {
    pub ray: Option<(Vec3, Vec3)>,
    pub forward: Vec3,
}

impl ViewportCamera for MockCamera {
    fn deproject_cursor(&self) -> Option<(Vec3, Vec3)> {
        self.ray
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub calls: Vec<(Vec3, Vec<ObjectId>)>,
}

impl ReplicationSink for RecordingSink {
    fn move_group(&mut self, new_pivot: Vec3, objects: &[ObjectId]) {
        self.calls.push((new_pivot, objects.to_vec()));
    }
}
