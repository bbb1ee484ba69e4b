//! # Rigmove Networking
//!
//! Client/authority boundary for rigid group moves. The non-authoritative
//! side applies drags locally for latency-free feedback and streams
//! `MoveGroup` calls down a reliable ordered transport; the authoritative
//! side replays them against the canonical scene, recomputing the group's
//! offsets from its own state rather than trusting the sender.
//!
//! - [`protocol`] - versioned bincode wire messages
//! - [`transport`] - the byte-channel abstraction and an in-process link
//! - [`client`] - `MoveGroupSender`, the replication sink for drag sessions
//! - [`server`] - `AuthoritativeMover`, the receive-and-apply loop

pub mod client;
pub mod protocol;
pub mod server;
pub mod transport;

mod error;

pub use client::MoveGroupSender;
pub use error::{NetworkError, NetworkResult};
pub use protocol::{GizmoMessage, PROTOCOL_VERSION};
pub use server::AuthoritativeMover;
pub use transport::{local_pair, LocalLink, Transport};
