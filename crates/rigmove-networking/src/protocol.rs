//! Wire protocol: versioned, bincode-encoded gizmo messages.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use rigmove::host::ObjectId;

use crate::error::{NetworkError, NetworkResult};

/// Protocol version for compatibility checking.
pub const PROTOCOL_VERSION: u32 = 1;

/// All replication messages.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum GizmoMessage {
    /// Move a rigid group to a new pivot. Carries only the pivot and the
    /// object identities; the authority recomputes per-object offsets from
    /// its own state and never trusts sender-side positions.
    MoveGroup {
        pivot: Vec3,
        objects: Vec<ObjectId>,
    },
}

/// Versioned envelope wrapped around every message on the wire.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct Envelope {
    pub version: u32,
    pub message: GizmoMessage,
}

pub fn encode(message: &GizmoMessage) -> NetworkResult<Vec<u8>> {
    let envelope = Envelope {
        version: PROTOCOL_VERSION,
        message: message.clone(),
    };
    bincode::serialize(&envelope).map_err(|e| NetworkError::SerializationError(e.to_string()))
}

pub fn decode(bytes: &[u8]) -> NetworkResult<GizmoMessage> {
    let envelope: Envelope = bincode::deserialize(bytes)
        .map_err(|e| NetworkError::DeserializationError(e.to_string()))?;

    if envelope.version != PROTOCOL_VERSION {
        return Err(NetworkError::VersionMismatch {
            sender: envelope.version,
            receiver: PROTOCOL_VERSION,
        });
    }

    Ok(envelope.message)
}
