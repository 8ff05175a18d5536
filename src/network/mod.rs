//! Network Module
//!
//! Stream plumbing for the handshake.
//!
//! ## Architecture
//! - One `Channel` per process, bound to a pre-opened duplex stream
//! - Reads and writes buffered independently
//! - Writes flushed per value, reads completed per field

mod channel;

pub use channel::Channel;
