//! Error types for the replication boundary.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum NetworkError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Protocol version mismatch: sender={sender}, receiver={receiver}")]
    VersionMismatch { sender: u32, receiver: u32 },

    #[error("Transport channel closed")]
    ChannelClosed,
}

pub type NetworkResult<T> = Result<T, NetworkError>;
