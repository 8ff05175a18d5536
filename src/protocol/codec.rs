//! Protocol codec
//!
//! Encoding and decoding functions for the primitive ACP values. These work on
//! in-memory buffers only; `network::Channel` moves them over a stream.
//!
//! ## Wire Format
//!
//! All multi-byte integers are little-endian.
//!
//! ```text
//! Bool    ┌──────────┐            UInt16 / Int16  ┌──────────┐
//!         │ Byte (1) │                            │  LE (2)  │
//!         └──────────┘                            └──────────┘
//!
//! UInt32  ┌──────────┐            String  ┌──────────┬─────────────────┐
//!         │  LE (4)  │                    │ Len (2)  │  Len raw bytes  │
//!         └──────────┘                    └──────────┴─────────────────┘
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{AcpError, Result};

/// Byte sent for `true`. The mapping is inverted and peers depend on it.
pub const BOOL_TRUE: u8 = 0x00;

/// Byte sent for `false`
pub const BOOL_FALSE: u8 = 0x01;

/// Size of the string length prefix
pub const STRING_PREFIX_SIZE: usize = 2;

/// Longest string the 16-bit prefix can describe
pub const MAX_STRING_LEN: usize = u16::MAX as usize;

// =============================================================================
// Bool
// =============================================================================

/// Encode a bool to its wire byte
pub fn encode_bool(value: bool) -> u8 {
    if value {
        BOOL_TRUE
    } else {
        BOOL_FALSE
    }
}

/// Decode a wire byte to a bool
///
/// Only 0x00 and 0x01 are defined; anything else is rejected.
pub fn decode_bool(byte: u8) -> Result<bool> {
    match byte {
        BOOL_TRUE => Ok(true),
        BOOL_FALSE => Ok(false),
        _ => Err(AcpError::Protocol(format!(
            "Undefined bool byte: 0x{:02x}",
            byte
        ))),
    }
}

// =============================================================================
// Fixed-width integers
// =============================================================================

/// Encode an unsigned 16-bit value
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_le_bytes()
}

/// Decode an unsigned 16-bit value
pub fn decode_u16(bytes: [u8; 2]) -> u16 {
    u16::from_le_bytes(bytes)
}

/// Decode a signed 16-bit value
pub fn decode_i16(bytes: [u8; 2]) -> i16 {
    i16::from_le_bytes(bytes)
}

/// Decode an unsigned 32-bit value
pub fn decode_u32(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

// =============================================================================
// Length-prefixed strings
// =============================================================================

/// Encode a length-prefixed string
///
/// Format: byte_count (2) + raw bytes. The count is in bytes, not characters.
pub fn encode_string(value: &[u8]) -> Result<Bytes> {
    if value.len() > MAX_STRING_LEN {
        return Err(AcpError::StringTooLong {
            len: value.len(),
            max: MAX_STRING_LEN,
        });
    }

    let mut frame = BytesMut::with_capacity(STRING_PREFIX_SIZE + value.len());
    frame.put_u16_le(value.len() as u16);
    frame.put_slice(value);

    Ok(frame.freeze())
}
