//! Handshake Coordinator
//!
//! Runs the two-step ACP handshake over a `Channel`: verify the name the host
//! asserts, then agree on a protocol version.

use std::io::{Read, Write};

use crate::config::Config;
use crate::error::{AcpError, Result};
use crate::network::Channel;

use super::log::{HandshakeEvent, HandshakeLog, TracingLog};
use super::HandshakeState;

/// An ACP endpoint bound to a channel
///
/// A connection runs its handshake once. After `Failed` it cannot be retried;
/// the caller starts over on a fresh channel.
pub struct Connection<R: Read, W: Write, L: HandshakeLog = TracingLog> {
    /// Stream to the host (exclusively owned)
    channel: Channel<R, W>,

    /// Expected name and supported protocol range
    config: Config,

    /// Current handshake state
    state: HandshakeState,

    /// Version agreed with the host, once connected
    version: Option<u16>,

    /// Diagnostic sink
    log: L,
}

impl<R: Read, W: Write> Connection<R, W, TracingLog> {
    /// Create a connection that logs through `tracing`
    pub fn new(channel: Channel<R, W>, config: Config) -> Self {
        Self::with_log(channel, config, TracingLog)
    }
}

impl<R: Read, W: Write, L: HandshakeLog> Connection<R, W, L> {
    /// Create a connection reporting to the given log
    pub fn with_log(channel: Channel<R, W>, config: Config, log: L) -> Self {
        Self {
            channel,
            config,
            state: HandshakeState::Init,
            version: None,
            log,
        }
    }

    /// Run the handshake
    ///
    /// Verifies the host's name and, only if it matches, negotiates the
    /// protocol version. Returns the agreed version, or the first failure.
    pub fn connect(&mut self) -> Result<u16> {
        if self.state.is_terminal() {
            return Err(AcpError::InvalidState(format!(
                "connect called while {}",
                self.state
            )));
        }

        self.log.record(&HandshakeEvent::Started {
            name: &self.config.name,
        });

        let result = self
            .config
            .validate()
            .and_then(|()| self.verify_name())
            .and_then(|()| self.negotiate_protocol());

        match result {
            Ok(version) => {
                self.state = HandshakeState::Connected;
                self.version = Some(version);
                self.log.record(&HandshakeEvent::Connected { version });
                Ok(version)
            }
            Err(e) => {
                if self.state != HandshakeState::Failed {
                    self.fail(&e);
                }
                Err(e)
            }
        }
    }

    /// Record the failure against the step that raised it, then move to Failed
    fn fail(&mut self, error: &AcpError) {
        self.log.record(&HandshakeEvent::Failed {
            state: self.state,
            error,
        });
        self.state = HandshakeState::Failed;
    }

    /// Step 1: read the host's name and answer whether it matches
    fn verify_name(&mut self) -> Result<()> {
        self.state = HandshakeState::VerifyingName;

        let actual = self.channel.get_string()?;
        let matched = actual == self.config.name.as_bytes();

        self.log.record(&HandshakeEvent::NameReceived {
            expected: &self.config.name,
            actual: &actual,
            matched,
        });

        self.channel.put_bool(matched)?;

        if !matched {
            let err = AcpError::NameMismatch {
                expected: self.config.name.clone(),
                actual: String::from_utf8_lossy(&actual).into_owned(),
            };
            self.fail(&err);
            return Err(err);
        }

        self.state = HandshakeState::NegotiatingProtocol;
        Ok(())
    }

    /// Step 2: read the proposed version and accept it or send our range
    fn negotiate_protocol(&mut self) -> Result<u16> {
        let min = self.config.protocol_min;
        let max = self.config.protocol_max;

        let proposed = self.channel.get_u16()?;
        self.log
            .record(&HandshakeEvent::ProtocolProposed { proposed, min, max });

        if self.config.supports(proposed) {
            self.channel.put_bool(true)?;
            return Ok(proposed);
        }

        self.channel.put_bool(false)?;
        self.channel.put_u16(min)?;
        self.channel.put_u16(max)?;

        let err = AcpError::ProtocolOutOfRange { proposed, min, max };
        self.fail(&err);
        Err(err)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current handshake state
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Whether the handshake completed successfully
    pub fn is_connected(&self) -> bool {
        self.state == HandshakeState::Connected
    }

    /// Version agreed with the host, if connected
    pub fn version(&self) -> Option<u16> {
        self.version
    }

    /// Give the channel back, e.g. to carry application traffic once connected
    pub fn into_channel(self) -> Channel<R, W> {
        self.channel
    }
}
