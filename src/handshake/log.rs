//! Handshake diagnostics
//!
//! The coordinator reports what it sees to a `HandshakeLog` it is given,
//! rather than logging on its own. `TracingLog` forwards to `tracing`;
//! `NullLog` drops everything.

use crate::error::AcpError;

use super::HandshakeState;

/// A diagnostic event raised during the handshake
#[derive(Debug)]
pub enum HandshakeEvent<'a> {
    /// Handshake begun for this expected name
    Started { name: &'a str },

    /// Host asserted a name
    NameReceived {
        expected: &'a str,
        actual: &'a [u8],
        matched: bool,
    },

    /// Host proposed a protocol version
    ProtocolProposed { proposed: u16, min: u16, max: u16 },

    /// Handshake completed on this version
    Connected { version: u16 },

    /// Handshake failed while in `state`
    Failed {
        state: HandshakeState,
        error: &'a AcpError,
    },
}

/// Sink for handshake diagnostics
pub trait HandshakeLog {
    fn record(&self, event: &HandshakeEvent<'_>);
}

/// Forwards handshake events to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl HandshakeLog for TracingLog {
    fn record(&self, event: &HandshakeEvent<'_>) {
        match event {
            HandshakeEvent::Started { name } => {
                tracing::info!("ACP handshake started, name: {}", name);
            }
            HandshakeEvent::NameReceived {
                expected,
                actual,
                matched,
            } => {
                tracing::debug!(
                    "Name: {}; from host: {}; matched: {}",
                    expected,
                    String::from_utf8_lossy(actual),
                    matched
                );
            }
            HandshakeEvent::ProtocolProposed { proposed, min, max } => {
                tracing::debug!("Protocol from host: {} (supported {}..={})", proposed, min, max);
            }
            HandshakeEvent::Connected { version } => {
                tracing::info!("Connected on protocol {}", version);
            }
            HandshakeEvent::Failed { state, error } => {
                tracing::warn!("Handshake failed while {}: {}", state, error);
            }
        }
    }
}

/// Discards all handshake events
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl HandshakeLog for NullLog {
    fn record(&self, _event: &HandshakeEvent<'_>) {}
}

impl<L: HandshakeLog + ?Sized> HandshakeLog for &L {
    fn record(&self, event: &HandshakeEvent<'_>) {
        (**self).record(event)
    }
}
