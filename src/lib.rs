//! # acplink
//!
//! Agent-side ACP connection support:
//! - Little-endian value codec (bool, u16, i16, u32, length-prefixed strings)
//! - Buffered duplex channel, flushed per value, read to completion per field
//! - Two-step handshake: name verification, then protocol negotiation
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Host process (peer)                       │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ stdin / stdout
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Channel                                │
//! │           (BufReader / BufWriter, flush per put)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Codec    │◀─────────│  Handshake  │──▶ HandshakeLog
//!   │  (protocol) │          │ (Connection)│
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use acplink::{Channel, Config, Connection};
//!
//! let config = Config::builder().name("my_agent").protocol_range(1, 2).build();
//! let mut connection = Connection::new(Channel::stdio(), config);
//! let version = connection.connect()?;
//! # let _ = version;
//! # Ok::<(), acplink::AcpError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod protocol;
pub mod network;
pub mod handshake;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{AcpError, Result};
pub use config::Config;
pub use network::Channel;
pub use handshake::{Connection, HandshakeState};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of acplink
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
