//! Handshake Module
//!
//! Two-step connection protocol run by the agent against its host.
//!
//! ## Responsibilities
//! - Verify the process name the host asserts (exact byte comparison)
//! - Negotiate a protocol version inside the configured inclusive range
//! - Tell the host the supported range when its proposal is rejected
//! - Report diagnostics to an injected `HandshakeLog`
//!
//! ## Flow
//! ```text
//! Init ──▶ VerifyingName ──match──▶ NegotiatingProtocol ──in range──▶ Connected
//!               │                          │
//!           mismatch                  out of range
//!               ▼                          ▼
//!             Failed ◀─────────────────────┘
//! ```

mod coordinator;
mod log;
mod state;

pub use coordinator::Connection;
pub use log::{HandshakeEvent, HandshakeLog, NullLog, TracingLog};
pub use state::HandshakeState;
