//! Configuration for acplink
//!
//! Describes the endpoint this agent presents to the host: the process name
//! the host must assert, and the inclusive range of protocol versions the
//! agent is willing to speak.

use crate::error::{AcpError, Result};
use crate::protocol::MAX_STRING_LEN;

/// Main configuration for an ACP endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Identity
    // -------------------------------------------------------------------------
    /// Process name the host is expected to send (compared byte for byte)
    pub name: String,

    // -------------------------------------------------------------------------
    // Protocol Negotiation
    // -------------------------------------------------------------------------
    /// Lowest protocol version accepted (inclusive)
    pub protocol_min: u16,

    /// Highest protocol version accepted (inclusive)
    pub protocol_max: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "acp_agent".to_string(),
            protocol_min: 0,
            protocol_max: 0,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the expected name can be put on the wire
    ///
    /// An empty name and an inverted range are both usable: the first matches
    /// an empty assertion, the second rejects every proposal and still tells
    /// the host what the range is.
    pub fn validate(&self) -> Result<()> {
        if self.name.len() > MAX_STRING_LEN {
            return Err(AcpError::Config(format!(
                "name is {} bytes (max {})",
                self.name.len(),
                MAX_STRING_LEN
            )));
        }

        Ok(())
    }

    /// Whether `version` falls inside the supported range
    pub fn supports(&self, version: u16) -> bool {
        (self.protocol_min..=self.protocol_max).contains(&version)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the expected process name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    /// Set the lowest supported protocol version
    pub fn protocol_min(mut self, version: u16) -> Self {
        self.config.protocol_min = version;
        self
    }

    /// Set the highest supported protocol version
    pub fn protocol_max(mut self, version: u16) -> Self {
        self.config.protocol_max = version;
        self
    }

    /// Set both ends of the supported protocol range
    pub fn protocol_range(self, min: u16, max: u16) -> Self {
        self.protocol_min(min).protocol_max(max)
    }

    pub fn build(self) -> Config {
        self.config
    }
}
