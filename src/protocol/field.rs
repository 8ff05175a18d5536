//! Field kinds
//!
//! Names the wire-level value kinds so errors can say which field failed.

use std::fmt;

/// Wire value kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single byte, inverted mapping (0x00 = true)
    Bool,

    /// Unsigned 16-bit little-endian
    UInt16,

    /// Signed 16-bit little-endian
    Int16,

    /// Unsigned 32-bit little-endian
    UInt32,

    /// Whole length-prefixed string, prefix included (writes)
    String,

    /// Byte-count prefix of a length-prefixed string
    StringLength,

    /// Body of a length-prefixed string
    StringBody,

    /// Raw, unframed bytes
    Bytes,
}

impl FieldKind {
    /// Encoded width for fixed-width kinds
    pub fn width(self) -> Option<usize> {
        match self {
            FieldKind::Bool => Some(1),
            FieldKind::UInt16 | FieldKind::Int16 | FieldKind::StringLength => Some(2),
            FieldKind::UInt32 => Some(4),
            FieldKind::String | FieldKind::StringBody | FieldKind::Bytes => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Bool => "bool",
            FieldKind::UInt16 => "uint16",
            FieldKind::Int16 => "int16",
            FieldKind::UInt32 => "uint32",
            FieldKind::String => "string",
            FieldKind::StringLength => "string length",
            FieldKind::StringBody => "string body",
            FieldKind::Bytes => "bytes",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
