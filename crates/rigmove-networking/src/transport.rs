//! Transport abstraction.
//!
//! The protocol assumes a reliable ordered byte channel and nothing else.
//! [`LocalLink`] is the in-process implementation used for single-machine
//! sessions and tests; a QUIC or WebSocket link implements [`Transport`]
//! the same way for multi-process deployments.

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::error::{NetworkError, NetworkResult};

/// A reliable ordered byte channel. Fire-and-forget: delivery and ordering
/// are the transport's job, so there is no retry or acknowledgement here.
pub trait Transport {
    fn send(&self, bytes: Vec<u8>) -> NetworkResult<()>;

    /// Non-blocking receive. `None` when no message is pending.
    fn try_recv(&self) -> Option<Vec<u8>>;
}

/// One endpoint of an in-process link.
pub struct LocalLink {
    tx: Sender<Vec<u8>>,
    rx: Receiver<Vec<u8>>,
}

/// Create a connected pair of in-process endpoints.
pub fn local_pair() -> (LocalLink, LocalLink) {
    let (a_tx, b_rx) = unbounded();
    let (b_tx, a_rx) = unbounded();
    (
        LocalLink { tx: a_tx, rx: a_rx },
        LocalLink { tx: b_tx, rx: b_rx },
    )
}

impl Transport for LocalLink {
    fn send(&self, bytes: Vec<u8>) -> NetworkResult<()> {
        self.tx.send(bytes).map_err(|_| NetworkError::ChannelClosed)
    }

    fn try_recv(&self) -> Option<Vec<u8>> {
        self.rx.try_recv().ok()
    }
}
