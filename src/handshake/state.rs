//! Handshake states

use std::fmt;

/// Where a connection is in the handshake
///
/// ```text
/// Init → VerifyingName → NegotiatingProtocol → Connected
///              │                  │
///              └──────────────────┴──────────→ Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    Init,
    VerifyingName,
    NegotiatingProtocol,
    Connected,
    Failed,
}

impl HandshakeState {
    /// Connected and Failed are final
    pub fn is_terminal(self) -> bool {
        matches!(self, HandshakeState::Connected | HandshakeState::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HandshakeState::Init => "init",
            HandshakeState::VerifyingName => "verifying name",
            HandshakeState::NegotiatingProtocol => "negotiating protocol",
            HandshakeState::Connected => "connected",
            HandshakeState::Failed => "failed",
        }
    }
}

impl fmt::Display for HandshakeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
