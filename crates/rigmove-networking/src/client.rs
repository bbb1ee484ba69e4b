//! Non-authoritative sender side of the boundary.

use glam::Vec3;
use tracing::{debug, warn};

use rigmove::host::{ObjectId, ReplicationSink};

use crate::protocol::{encode, GizmoMessage};
use crate::transport::Transport;

/// [`ReplicationSink`] that encodes `MoveGroup` calls and pushes them down
/// the transport. The drag session has already applied the move locally
/// (client-side prediction), so failures are logged and absorbed rather
/// than surfaced into the gesture.
pub struct MoveGroupSender<T: Transport> {
    transport: T,
}

impl<T: Transport> MoveGroupSender<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }
}

impl<T: Transport> ReplicationSink for MoveGroupSender<T> {
    fn move_group(&mut self, new_pivot: Vec3, objects: &[ObjectId]) {
        let message = GizmoMessage::MoveGroup {
            pivot: new_pivot,
            objects: objects.to_vec(),
        };
        match encode(&message).and_then(|bytes| self.transport.send(bytes)) {
            Ok(()) => debug!(pivot = ?new_pivot, objects = objects.len(), "sent move_group"),
            Err(err) => warn!(%err, "dropping move_group call"),
        }
    }
}
