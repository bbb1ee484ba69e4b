//! Authoritative receiver side of the boundary.
//!
//! Incoming `MoveGroup` calls are applied against the canonical scene in
//! arrival order (last writer wins). The sender only names the new pivot
//! and the group members; offsets are recomputed here from authoritative
//! positions, so a stale or malicious client can relocate a group but
//! never deform it.

use glam::Vec3;
use tracing::{debug, warn};

use rigmove::host::{ObjectId, SceneOps};
use rigmove::math_utils::centroid;

use crate::protocol::{decode, GizmoMessage};
use crate::transport::Transport;

/// Authoritative endpoint for rigid group moves.
pub struct AuthoritativeMover<T: Transport> {
    transport: T,
    /// Sorted member set of the group currently being moved.
    group: Vec<ObjectId>,
    /// Pivot of the last applied move for that group.
    group_pivot: Vec3,
    has_group: bool,
}

impl<T: Transport> AuthoritativeMover<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            group: Vec::new(),
            group_pivot: Vec3::ZERO,
            has_group: false,
        }
    }

    /// Drain and apply every pending message. Called from the authority's
    /// update loop; returns the number of moves applied.
    pub fn poll(&mut self, scene: &mut dyn SceneOps) -> usize {
        let mut applied = 0;
        while let Some(bytes) = self.transport.try_recv() {
            match decode(&bytes) {
                Ok(GizmoMessage::MoveGroup { pivot, objects }) => {
                    self.apply_move_group(scene, pivot, &objects);
                    applied += 1;
                }
                Err(err) => warn!(%err, "discarding undecodable message"),
            }
        }
        applied
    }

    /// Pivot of the last applied group move, if any group has moved yet.
    pub fn group_pivot(&self) -> Option<Vec3> {
        self.has_group.then_some(self.group_pivot)
    }

    fn apply_move_group(&mut self, scene: &mut dyn SceneOps, new_pivot: Vec3, objects: &[ObjectId]) {
        let mut members = objects.to_vec();
        members.sort_unstable();
        members.dedup();

        // A different member set means the client started a new drag
        // session. Re-derive the reference pivot from canonical positions
        // so the offsets computed below match the client's drag-start
        // snapshot.
        if !self.has_group || members != self.group {
            let positions: Vec<Vec3> = members
                .iter()
                .filter_map(|&id| scene.position(id))
                .collect();
            self.group_pivot = centroid(&positions);
            self.group = members.clone();
            self.has_group = true;
            debug!(pivot = ?self.group_pivot, members = self.group.len(), "new move group");
        }

        for &id in &members {
            let Some(current) = scene.position(id) else {
                // Not known authoritatively; skip it, keep the rest
                debug!(?id, "skipping unknown object in move_group");
                continue;
            };
            let offset = current - self.group_pivot;
            scene.set_position(id, new_pivot + offset);
        }

        self.group_pivot = new_pivot;
    }
}
